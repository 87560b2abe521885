//! Database access layer: pool construction, row models, repositories,
//! and the partial-update builder.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod update;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// The pool is capped at one connection; statements from concurrent
/// requests interleave on it in arrival order, and multi-statement
/// sequences are not atomic.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await
}

/// Cheap store reachability probe.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
