//! Ensure the administrator account and the default categories exist.
//!
//! Reads `DATABASE_URL`, `ADMIN_EMAIL`, `ADMIN_PASSWORD` and `ADMIN_NAME`.
//! Safe to run repeatedly.

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use siidona_core::tracing::{LogFormat, init_tracing};
use siidona_market::config::SeedConfig;
use siidona_market::infra::db::{DbCategoryRepository, DbUserRepository};
use siidona_market::infra::password::Argon2Passwords;
use siidona_market::usecase::seed::{SeedInput, SeedUseCase};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::Pretty);
    let config = SeedConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let usecase = SeedUseCase {
        users: DbUserRepository { db: db.clone() },
        categories: DbCategoryRepository { db },
        passwords: Argon2Passwords,
    };
    let report = usecase
        .execute(SeedInput {
            admin_name: config.admin_name,
            admin_email: config.admin_email,
            admin_password: config.admin_password,
        })
        .await
        .context("seeding failed")?;

    info!(
        admin_created = report.admin_created,
        categories_created = report.categories_created,
        "seed complete"
    );
    Ok(())
}
