use siidona_domain::access::Capability;
use siidona_session::token::SessionToken;

use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::types::User;
use crate::error::MarketServiceError;
use crate::usecase::session::SessionResolver;

/// Resolves the session on every call and checks it against a capability.
///
/// Every privileged usecase goes through `authorize` with the caller's token
/// before touching the store.
pub struct AuthorizationGate<S: SessionStore, U: UserRepository> {
    pub resolver: SessionResolver<S, U>,
}

impl<S: SessionStore, U: UserRepository> AuthorizationGate<S, U> {
    pub fn new(sessions: S, users: U) -> Self {
        Self {
            resolver: SessionResolver { sessions, users },
        }
    }

    /// Returns the acting user, `Unauthorized` when no session resolves, or
    /// `Forbidden` when the role does not meet `capability`.
    pub async fn authorize(
        &self,
        token: Option<&SessionToken>,
        capability: Capability,
    ) -> Result<User, MarketServiceError> {
        let user = self.resolver.resolve(token).await?;
        capability.admit(user.as_ref().map(|u| u.role))?;
        user.ok_or(MarketServiceError::Unauthorized)
    }
}
