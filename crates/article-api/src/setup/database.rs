//! Database pool setup and migration.

use std::time::Duration;

use anyhow::Result;
use article_core::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connect to PostgreSQL and apply migrations. Failure here is fatal at
/// startup.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds))
        .connect(&config.database_url)
        .await?;

    article_db::run_migrations(&pool).await?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Database connected and migrated"
    );

    Ok(pool)
}
