//! Database connection setup

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;

/// Connect to PostgreSQL and apply migrations.
///
/// Returns `None` when no `DATABASE_URL` is configured (in-memory mode).
pub async fn init_pool(config: &Config) -> Result<Option<PgPool>> {
    let url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set - base prices are kept in memory only");
            return Ok(None);
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await?;
    tracing::info!("Connected to PostgreSQL");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Some(pool))
}
