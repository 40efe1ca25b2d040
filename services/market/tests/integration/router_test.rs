//! HTTP surface checks that never reach Postgres or Redis: the router is
//! wired to a disconnected database and a Redis pool nobody listens on, so
//! only requests rejected before any store access can succeed.

use axum::http::StatusCode;
use axum_test::TestServer;
use deadpool_redis::Runtime;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use siidona_market::router::build_router;
use siidona_market::state::AppState;
use siidona_session::cookie::CookieSettings;
use siidona_testing::session::MockSession;

fn server() -> TestServer {
    let redis = deadpool_redis::Config::from_url("redis://127.0.0.1:1")
        .create_pool(Some(Runtime::Tokio1))
        .unwrap();
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        redis,
        cookie: CookieSettings::default(),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn kind(body: &Value) -> &str {
    body["kind"].as_str().unwrap_or_default()
}

// ── Authorization gate ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_admin_routes_without_session() {
    let server = server();

    for response in [
        server.get("/admin/ads").await,
        server.post("/admin/ads/1/approve").await,
        server.post("/admin/ads/1/reject").await,
        server.delete("/admin/ads/1").await,
        server.get("/admin/users").await,
        server.delete("/admin/users/1").await,
        server
            .post("/admin/users/1/wallet")
            .json(&json!({ "amount": "10.00" }))
            .await,
        server
            .post("/admin/categories")
            .json(&json!({ "name": "Boats" }))
            .await,
        server.delete("/admin/categories/1").await,
    ] {
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(kind(&response.json::<Value>()), "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn should_treat_malformed_cookie_as_no_session() {
    let server = server();
    let (name, value) = MockSession::malformed().header();

    let response = server
        .post("/admin/ads/1/approve")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .post("/ads")
        .add_header(name, value)
        .json(&json!({ "title": "Bike" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_require_session_for_current_user() {
    let response = server().get("/auth/session").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_accept_numeric_wallet_amount_and_still_require_session() {
    let response = server()
        .post("/admin/users/1/wallet")
        .json(&json!({ "amount": 25.50 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(kind(&response.json::<Value>()), "UNAUTHORIZED");
}

// ── Malformed input ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_bad_path_id_as_json_error() {
    let response = server().post("/admin/ads/abc/approve").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(kind(&response.json::<Value>()), "INVALID_REQUEST");

    let response = server().get("/ads/abc").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(kind(&response.json::<Value>()), "INVALID_REQUEST");
}

#[tokio::test]
async fn should_report_undecodable_body_as_json_error() {
    let response = server()
        .post("/auth/register")
        .json(&json!({ "name": ["Bob"] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(kind(&response.json::<Value>()), "INVALID_REQUEST");
}

#[tokio::test]
async fn should_report_bad_status_filter_as_json_error() {
    let response = server().get("/admin/ads?status=archived").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(kind(&response.json::<Value>()), "INVALID_REQUEST");
}

// ── Accounts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_validate_registration_before_storage() {
    let response = server()
        .post("/auth/register")
        .json(&json!({ "name": "Bob", "email": "bob@example.com", "password": "123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(kind(&response.json::<Value>()), "PASSWORD_TOO_SHORT");
}

#[tokio::test]
async fn should_report_missing_login_field() {
    let response = server()
        .post("/auth/session")
        .json(&json!({ "password": "secret1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(kind(&response.json::<Value>()), "MISSING_FIELD");
}

#[tokio::test]
async fn should_clear_cookie_on_logout_without_session() {
    let response = server().delete("/auth/session").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with("siidona_session="));
    assert!(set_cookie.contains("Max-Age=0"));
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_liveness_with_request_id() {
    let response = server().get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.maybe_header("x-request-id").is_some());
}

#[tokio::test]
async fn should_report_unready_when_stores_are_down() {
    let response = server().get("/readyz").await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<Value>();
    assert_eq!(body["ready"], json!(false));
}
