use sea_orm_migration::prelude::*;
use siidona_market_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
