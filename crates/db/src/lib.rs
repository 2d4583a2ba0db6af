//! Persistence layer for notes: entity/input models, the [`NoteGateway`]
//! abstraction and its PostgreSQL and in-memory implementations, plus pool
//! creation and the one-time schema bootstrap.

use sqlx::postgres::PgPoolOptions;

pub mod gateway;
pub mod models;
pub mod repositories;

pub use gateway::NoteGateway;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Prepare the database for serving. Safe to call on every start.
///
/// Ensures the `uuid-ossp` extension used for id generation exists, then
/// brings the `notes` table up to date.
pub async fn bootstrap(pool: &DbPool) -> Result<(), BootstrapError> {
    sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
        .execute(pool)
        .await
        .map_err(BootstrapError::Extension)?;
    tracing::debug!("uuid-ossp extension present");

    tracing::info!("Running migrations");
    run_migrations(pool).await?;
    Ok(())
}

/// Failure while bootstrapping the schema. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("failed to create uuid-ossp extension: {0}")]
    Extension(#[source] sqlx::Error),

    #[error("failed to apply migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}
