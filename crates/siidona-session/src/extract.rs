//! Session cookie extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::CookieJar;
use http::request::Parts;

use crate::cookie::SESSION_COOKIE;
use crate::token::SessionToken;

/// The session token carried by the request, if any.
///
/// Never rejects: a missing or malformed cookie yields `token: None`, and the
/// decision whether that is acceptable belongs to the authorization gate.
#[derive(Debug, Clone, Default)]
pub struct SessionCookie {
    pub token: Option<SessionToken>,
}

impl SessionCookie {
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }
}

impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    // Read the header synchronously and return a 'static future so the
    // returned future does not capture `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = CookieJar::from_headers(&parts.headers)
            .get(SESSION_COOKIE)
            .and_then(|c| SessionToken::parse(c.value()));

        async move { Ok(Self { token }) }
    }
}
