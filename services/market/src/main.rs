use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use siidona_core::tracing::init_tracing;
use siidona_market::config::MarketConfig;
use siidona_market::router::build_router;
use siidona_market::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = MarketConfig::from_env()?;
    init_tracing(config.log_format);

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let redis_cfg = deadpool_redis::Config::from_url(&config.redis_url);
    let redis = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .context("failed to create Redis pool")?;

    let state = AppState {
        db,
        redis,
        cookie: config.cookie,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.market_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("market service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
