//! Mock session cookies for router tests.
//!
//! Router tests attach a `Cookie` header carrying a session token that the
//! in-memory token store was seeded with, or a deliberately broken value.

use axum::http::{HeaderName, HeaderValue, header};
use siidona_session::cookie::SESSION_COOKIE;
use siidona_session::token::SessionToken;

/// Cookie value a test request presents as its session.
pub struct MockSession {
    value: String,
}

impl MockSession {
    /// A well-formed token. Pair with a store entry to make it resolve.
    pub fn new(token: &SessionToken) -> Self {
        Self {
            value: token.as_str().to_owned(),
        }
    }

    /// A freshly minted token that no store knows about.
    pub fn unknown() -> Self {
        Self::new(&SessionToken::generate())
    }

    /// A cookie value that is not shaped like a token at all.
    pub fn malformed() -> Self {
        Self {
            value: "1".to_owned(),
        }
    }

    /// `Cookie` header as a browser would send it.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("{SESSION_COOKIE}={}", self.value))
            .expect("session cookie is valid header text");
        (header::COOKIE, value)
    }
}
