use axum::extract::State;
use deadpool_redis::redis;
use sea_orm::DatabaseConnection;

use siidona_core::health::{Probe, Readiness};

use crate::state::AppState;

async fn ping_database(db: &DatabaseConnection) -> anyhow::Result<()> {
    db.ping().await?;
    Ok(())
}

async fn ping_redis(pool: &deadpool_redis::Pool) -> anyhow::Result<()> {
    let mut conn = pool.get().await?;
    let _: String = redis::cmd("PING").query_async(&mut conn).await?;
    Ok(())
}

// ── GET /readyz ──────────────────────────────────────────────────────────────

pub async fn readyz(State(state): State<AppState>) -> Readiness {
    Readiness::new(vec![
        Probe::from_result("database", ping_database(&state.db).await),
        Probe::from_result("redis", ping_redis(&state.redis).await),
    ])
}
