pub mod article;
pub mod memory;

use article_core::AppError;
use sqlx::PgPool;

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))
}
