use axum::{
    Router,
    routing::{delete, get, post},
};

use siidona_core::health::healthz;
use siidona_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    account::{current_session, login, logout, register},
    admin::{
        add_funds, approve_ad, create_category, delete_ad, delete_category, delete_user,
        list_all_ads, list_users, reject_ad,
    },
    ads::{create_ad, get_ad, list_ads},
    categories::list_categories,
    health::readyz,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/auth/register", post(register))
        .route("/auth/session", post(login))
        .route("/auth/session", get(current_session))
        .route("/auth/session", delete(logout))
        // Public catalogue
        .route("/categories", get(list_categories))
        .route("/ads", get(list_ads))
        .route("/ads", post(create_ad))
        .route("/ads/{id}", get(get_ad))
        // Moderation
        .route("/admin/ads", get(list_all_ads))
        .route("/admin/ads/{id}/approve", post(approve_ad))
        .route("/admin/ads/{id}/reject", post(reject_ad))
        .route("/admin/ads/{id}", delete(delete_ad))
        // Users and wallets
        .route("/admin/users", get(list_users))
        .route("/admin/users/{id}", delete(delete_user))
        .route("/admin/users/{id}/wallet", post(add_funds))
        // Categories
        .route("/admin/categories", post(create_category))
        .route("/admin/categories/{id}", delete(delete_category))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
}
