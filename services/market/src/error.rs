use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use siidona_domain::access::Denial;

/// Market service error variants.
#[derive(Debug, thiserror::Error)]
pub enum MarketServiceError {
    #[error("not signed in")]
    Unauthorized,
    #[error("administrator role required")]
    Forbidden,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("user not found")]
    UserNotFound,
    #[error("ad not found")]
    AdNotFound,
    #[error("category not found")]
    CategoryNotFound,
    #[error("email already registered")]
    EmailAlreadyExists,
    #[error("category already exists")]
    CategoryAlreadyExists,
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
    #[error("invalid amount")]
    InvalidAmount,
    /// Body, path or query string that does not decode.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl MarketServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::AdNotFound => "AD_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::CategoryAlreadyExists => "CATEGORY_ALREADY_EXISTS",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<Denial> for MarketServiceError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Unauthorized => Self::Unauthorized,
            Denial::Forbidden => Self::Forbidden,
        }
    }
}

impl From<JsonRejection> for MarketServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for MarketServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for MarketServiceError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for MarketServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::AdNotFound | Self::CategoryNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::EmailAlreadyExists | Self::CategoryAlreadyExists => StatusCode::CONFLICT,
            Self::MissingField(_)
            | Self::PasswordTooShort
            | Self::InvalidAmount
            | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client outcomes and already visible in the trace layer.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
