use siidona_session::token::SessionToken;

use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::types::User;
use crate::error::MarketServiceError;

/// Maps a session token to the user it belongs to.
///
/// Absent, unknown and dangling tokens (user since deleted) all resolve to
/// `None`. Only store failures are errors.
pub struct SessionResolver<S: SessionStore, U: UserRepository> {
    pub sessions: S,
    pub users: U,
}

impl<S: SessionStore, U: UserRepository> SessionResolver<S, U> {
    pub async fn resolve(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Option<User>, MarketServiceError> {
        let Some(token) = token else {
            return Ok(None);
        };
        let Some(user_id) = self.sessions.find(token).await? else {
            return Ok(None);
        };
        self.users.find_by_id(user_id).await
    }
}
