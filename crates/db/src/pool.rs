//! Postgres connection pool and embedded migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared Postgres pool handed around the application.
pub type DbPool = PgPool;

/// Open a connection pool against `database_url` with the given ceiling.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    info!("Connecting to database (max_connections={})", max_connections);
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Apply pending migrations from the workspace-level `migrations/` directory.
///
/// The SQL files are embedded at compile time, so the binary carries its own
/// schema history.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    info!("Applying database migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
