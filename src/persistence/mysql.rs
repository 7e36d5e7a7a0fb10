//! MySQL implementation of the feedback store.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, MySqlConnection};

use super::FeedbackStore;
use super::models::FeedbackEntry;
use crate::config::DatabaseConfig;
use crate::domain::NewFeedback;
use crate::error::AppError;

/// DDL for the `feedback` table. Existing deployments share this exact
/// column layout.
pub const CREATE_FEEDBACK_TABLE: &str = "CREATE TABLE IF NOT EXISTS feedback (
    id         INT AUTO_INCREMENT PRIMARY KEY,
    name       VARCHAR(100)  NOT NULL,
    email      VARCHAR(150)  NOT NULL,
    message    TEXT          NOT NULL,
    created_at TIMESTAMP     DEFAULT CURRENT_TIMESTAMP
)";

/// MySQL-backed feedback store.
///
/// Every operation opens its own connection, makes exactly one attempt,
/// and closes the connection afterwards whether the statement succeeded or
/// not. A failed connect surfaces the driver's own message (for example
/// `Connection refused`) instead of a generic timeout.
#[derive(Debug, Clone)]
pub struct MySqlFeedbackStore {
    options: MySqlConnectOptions,
    endpoint: String,
    connect_timeout: Duration,
}

impl MySqlFeedbackStore {
    /// Builds a store that connects on first use.
    ///
    /// No network I/O happens here, so an unreachable database does not
    /// prevent startup. Each later connect attempt gives up after
    /// `connect_timeout_secs`.
    #[must_use]
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        Self {
            options,
            endpoint: format!("{}:{}", config.host, config.port),
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
        }
    }

    /// Opens one connection, bounded by the connect timeout.
    async fn connect(&self) -> Result<MySqlConnection, AppError> {
        match tokio::time::timeout(
            self.connect_timeout,
            MySqlConnection::connect_with(&self.options),
        )
        .await
        {
            Ok(result) => Ok(result?),
            Err(_) => Err(AppError::Persistence(format!(
                "timed out after {}s connecting to {}",
                self.connect_timeout.as_secs(),
                self.endpoint,
            ))),
        }
    }
}

/// Sends `COM_QUIT`; a failure here does not affect the operation's result.
async fn close(conn: MySqlConnection) {
    if let Err(err) = conn.close().await {
        tracing::debug!(error = %err, "closing database connection failed");
    }
}

#[async_trait]
impl FeedbackStore for MySqlFeedbackStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(CREATE_FEEDBACK_TABLE).execute(&mut conn).await;
        close(conn).await;
        result?;
        Ok(())
    }

    async fn create(&self, feedback: &NewFeedback) -> Result<i64, AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("INSERT INTO feedback (name, email, message) VALUES (?, ?, ?)")
            .bind(feedback.name())
            .bind(feedback.email())
            .bind(feedback.message())
            .execute(&mut conn)
            .await;
        close(conn).await;

        i64::try_from(result?.last_insert_id())
            .map_err(|e| AppError::Persistence(format!("insert id out of range: {e}")))
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<FeedbackEntry>, AppError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query_as::<_, (i64, String, String, String, Option<DateTime<Utc>>)>(
            "SELECT id, name, email, message, created_at FROM feedback \
             ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&mut conn)
        .await;
        close(conn).await;

        Ok(rows?
            .into_iter()
            .map(|(id, name, email, message, created_at)| FeedbackEntry {
                id,
                name,
                email,
                message,
                created_at,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.connect().await?;
        let result = conn.ping().await;
        close(conn).await;
        Ok(result?)
    }
}
