use crate::models::MatchRecord;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL-backed match storage
///
/// One row per (user, target) pair; the serial id keeps the order in which
/// matches were made.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL match store");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Insert a match unless the pair already exists
    ///
    /// Returns `false` when the pair was already stored.
    pub async fn create_match(&self, user_id: &str, target_id: &str) -> Result<bool, PostgresError> {
        let query = r#"
            INSERT INTO matches (user_id, target_id, matched_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id, target_id) DO NOTHING
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(target_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a match; returns whether a row was removed
    pub async fn remove_match(&self, user_id: &str, target_id: &str) -> Result<bool, PostgresError> {
        let query = r#"
            DELETE FROM matches
            WHERE user_id = $1 AND target_id = $2
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(target_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All matches made by a user, oldest first
    pub async fn list_matches(&self, user_id: &str) -> Result<Vec<MatchRecord>, PostgresError> {
        let query = r#"
            SELECT user_id, target_id, matched_at
            FROM matches
            WHERE user_id = $1
            ORDER BY id
        "#;

        let rows = sqlx::query(query).bind(user_id).fetch_all(&self.pool).await?;

        let records = rows
            .iter()
            .map(|row| MatchRecord {
                user_id: row.get("user_id"),
                target_id: row.get("target_id"),
                matched_at: row.get("matched_at"),
            })
            .collect();

        Ok(records)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
