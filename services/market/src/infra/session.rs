use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use siidona_domain::id::UserId;
use siidona_session::cookie::SESSION_TTL_SECS;
use siidona_session::token::SessionToken;

use crate::domain::repository::SessionStore;
use crate::error::MarketServiceError;

#[derive(Clone)]
pub struct RedisSessionStore {
    pub pool: Pool,
}

fn session_key(token: &SessionToken) -> String {
    format!("session:{}", token.as_str())
}

impl SessionStore for RedisSessionStore {
    async fn create(
        &self,
        token: &SessionToken,
        user_id: UserId,
    ) -> Result<(), MarketServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| MarketServiceError::Internal(e.into()))?;
        let (): () = conn
            .set_ex(session_key(token), user_id.0, SESSION_TTL_SECS)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| MarketServiceError::Internal(e.into()))?;
        Ok(())
    }

    async fn find(&self, token: &SessionToken) -> Result<Option<UserId>, MarketServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| MarketServiceError::Internal(e.into()))?;
        let value: Option<i32> = conn
            .get(session_key(token))
            .await
            .map_err(|e| MarketServiceError::Internal(e.into()))?;
        Ok(value.map(UserId))
    }

    async fn remove(&self, token: &SessionToken) -> Result<(), MarketServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| MarketServiceError::Internal(e.into()))?;
        let _: i64 = conn
            .del(session_key(token))
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| MarketServiceError::Internal(e.into()))?;
        Ok(())
    }
}
