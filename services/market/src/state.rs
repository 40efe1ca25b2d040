use deadpool_redis::Pool as RedisPool;
use sea_orm::DatabaseConnection;

use siidona_session::cookie::CookieSettings;

use crate::infra::db::{DbAdRepository, DbCategoryRepository, DbUserRepository};
use crate::infra::password::Argon2Passwords;
use crate::infra::session::RedisSessionStore;
use crate::usecase::gate::AuthorizationGate;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: RedisPool,
    pub cookie: CookieSettings,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn ad_repo(&self) -> DbAdRepository {
        DbAdRepository {
            db: self.db.clone(),
        }
    }

    pub fn session_store(&self) -> RedisSessionStore {
        RedisSessionStore {
            pool: self.redis.clone(),
        }
    }

    pub fn passwords(&self) -> Argon2Passwords {
        Argon2Passwords
    }

    pub fn gate(&self) -> AuthorizationGate<RedisSessionStore, DbUserRepository> {
        AuthorizationGate::new(self.session_store(), self.user_repo())
    }
}
