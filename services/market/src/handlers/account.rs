use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::{CookieJar, WithRejection};
use serde::Deserialize;

use siidona_session::cookie::{clear_session_cookie, set_session_cookie};
use siidona_session::extract::SessionCookie;

use crate::error::MarketServiceError;
use crate::handlers::response::UserResponse;
use crate::state::AppState;
use crate::usecase::account::{
    CurrentUserUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};

// ── POST /auth/register ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(body), _): WithRejection<Json<RegisterRequest>, MarketServiceError>,
) -> Result<impl IntoResponse, MarketServiceError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        sessions: state.session_store(),
        passwords: state.passwords(),
    };
    let out = usecase
        .execute(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    let jar = set_session_cookie(jar, &out.token, &state.cookie);
    Ok((StatusCode::CREATED, jar, Json(UserResponse::from(out.user))))
}

// ── POST /auth/session ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(body), _): WithRejection<Json<LoginRequest>, MarketServiceError>,
) -> Result<impl IntoResponse, MarketServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        sessions: state.session_store(),
        passwords: state.passwords(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    let jar = set_session_cookie(jar, &out.token, &state.cookie);
    Ok((StatusCode::CREATED, jar, Json(UserResponse::from(out.user))))
}

// ── GET /auth/session ────────────────────────────────────────────────────────

pub async fn current_session(
    session: SessionCookie,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, MarketServiceError> {
    let usecase = CurrentUserUseCase { gate: state.gate() };
    let user = usecase.execute(session.token()).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── DELETE /auth/session ─────────────────────────────────────────────────────

pub async fn logout(
    session: SessionCookie,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, MarketServiceError> {
    let usecase = LogoutUseCase {
        sessions: state.session_store(),
    };
    usecase.execute(session.token()).await?;
    let jar = clear_session_cookie(jar, &state.cookie);
    Ok((StatusCode::NO_CONTENT, jar))
}
