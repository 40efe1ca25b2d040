//! Opaque session tokens.

use std::fmt;

use rand::RngExt;

/// Session token length in characters.
pub const SESSION_TOKEN_LEN: usize = 48;

/// Charset for generating session tokens (mixed-case alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Random bearer token stored in the session cookie and keyed in the token store.
///
/// `Debug` is redacted so tokens never end up in logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Mint a fresh token from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        Self(
            (0..SESSION_TOKEN_LEN)
                .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
                .collect(),
        )
    }

    /// Accept a raw cookie value only if it has the shape of a minted token.
    ///
    /// Anything else is treated as no token at all, so the store is never
    /// queried with attacker-chosen keys.
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed =
            raw.len() == SESSION_TOKEN_LEN && raw.bytes().all(|b| b.is_ascii_alphanumeric());
        well_formed.then(|| Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}
