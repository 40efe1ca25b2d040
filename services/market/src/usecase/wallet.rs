use siidona_domain::access::Capability;
use siidona_domain::id::UserId;
use siidona_domain::money::MinorUnits;
use siidona_session::token::SessionToken;

use crate::domain::repository::{SessionStore, UserRepository};
use crate::error::MarketServiceError;
use crate::usecase::gate::AuthorizationGate;

/// Credit a user's wallet. `amount` is a major-unit decimal string such as
/// `"25.50"`; the store applies the increment in one statement.
pub struct AddFundsUseCase<S: SessionStore, U: UserRepository, W: UserRepository> {
    pub gate: AuthorizationGate<S, U>,
    pub users: W,
}

impl<S: SessionStore, U: UserRepository, W: UserRepository> AddFundsUseCase<S, U, W> {
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
        user_id: UserId,
        amount: &str,
    ) -> Result<MinorUnits, MarketServiceError> {
        let admin = self
            .gate
            .authorize(token, Capability::Administrator)
            .await?;
        let delta =
            MinorUnits::parse_deposit(amount).map_err(|_| MarketServiceError::InvalidAmount)?;
        let balance = self
            .users
            .add_balance(user_id, delta)
            .await?
            .ok_or(MarketServiceError::UserNotFound)?;
        tracing::info!(
            %user_id,
            delta = delta.get(),
            balance = balance.get(),
            admin_id = %admin.id,
            "wallet credited"
        );
        Ok(balance)
    }
}
