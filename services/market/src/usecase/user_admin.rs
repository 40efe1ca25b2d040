use siidona_domain::access::Capability;
use siidona_domain::id::UserId;
use siidona_domain::pagination::PageRequest;
use siidona_session::token::SessionToken;

use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::types::User;
use crate::error::MarketServiceError;
use crate::usecase::gate::AuthorizationGate;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<S: SessionStore, U: UserRepository, R: UserRepository> {
    pub gate: AuthorizationGate<S, U>,
    pub users: R,
}

impl<S: SessionStore, U: UserRepository, R: UserRepository> ListUsersUseCase<S, U, R> {
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
        page: PageRequest,
    ) -> Result<Vec<User>, MarketServiceError> {
        self.gate
            .authorize(token, Capability::Administrator)
            .await?;
        self.users.list(page).await
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

/// Removes the account together with every ad it owns. Sessions of the
/// deleted account stop resolving on their next use.
pub struct DeleteUserUseCase<S: SessionStore, U: UserRepository, R: UserRepository> {
    pub gate: AuthorizationGate<S, U>,
    pub users: R,
}

impl<S: SessionStore, U: UserRepository, R: UserRepository> DeleteUserUseCase<S, U, R> {
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
        user_id: UserId,
    ) -> Result<(), MarketServiceError> {
        let admin = self
            .gate
            .authorize(token, Capability::Administrator)
            .await?;
        if !self.users.delete(user_id).await? {
            return Err(MarketServiceError::UserNotFound);
        }
        tracing::info!(%user_id, admin_id = %admin.id, "user deleted");
        Ok(())
    }
}
