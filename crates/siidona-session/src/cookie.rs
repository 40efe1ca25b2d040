//! Cookie builders for the session token.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::token::SessionToken;

/// Cookie name for the session token.
pub const SESSION_COOKIE: &str = "siidona_session";

/// Session lifetime in seconds (7 days). Used for both the cookie Max-Age and
/// the token store TTL.
pub const SESSION_TTL_SECS: u64 = 604_800;

/// Deployment-dependent cookie attributes.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    /// `Domain` attribute; host-only cookie when `None`.
    pub domain: Option<String>,
    /// `Secure` attribute. Disable only for plain-HTTP local development.
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            domain: None,
            secure: true,
        }
    }
}

fn session_cookie(value: String, max_age: Duration, settings: &CookieSettings) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .max_age(max_age)
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .build();
    if let Some(domain) = &settings.domain {
        cookie.set_domain(domain.clone());
    }
    cookie
}

/// Set the session cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use siidona_session::cookie::{CookieSettings, SESSION_COOKIE, set_session_cookie};
/// use siidona_session::token::SessionToken;
///
/// let token = SessionToken::generate();
/// let jar = set_session_cookie(CookieJar::new(), &token, &CookieSettings::default());
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), token.as_str());
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_cookie(
    jar: CookieJar,
    token: &SessionToken,
    settings: &CookieSettings,
) -> CookieJar {
    let max_age = Duration::seconds(SESSION_TTL_SECS as i64);
    jar.add(session_cookie(token.as_str().to_owned(), max_age, settings))
}

/// Clear the session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use siidona_session::cookie::{CookieSettings, SESSION_COOKIE, clear_session_cookie};
///
/// let settings = CookieSettings { domain: Some("example.com".to_owned()), secure: false };
/// let jar = clear_session_cookie(CookieJar::new(), &settings);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.domain(), Some("example.com"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar, settings: &CookieSettings) -> CookieJar {
    jar.add(session_cookie(String::new(), Duration::ZERO, settings))
}
