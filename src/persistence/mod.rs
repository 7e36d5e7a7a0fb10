//! Persistence layer: the append-only feedback log.
//!
//! [`FeedbackStore`] is the contract the service layer depends on. The
//! production implementation is [`MySqlFeedbackStore`], which opens one
//! `sqlx` connection per operation; [`MemoryFeedbackStore`] keeps entries in
//! process and follows the same ordering rules.

pub mod memory;
pub mod models;
pub mod mysql;

use std::fmt;

use async_trait::async_trait;

pub use memory::MemoryFeedbackStore;
pub use models::FeedbackEntry;
pub use mysql::MySqlFeedbackStore;

use crate::domain::NewFeedback;
use crate::error::AppError;

/// Durable, append-only storage for feedback entries.
///
/// Every method fails with [`AppError::Persistence`] when the backing
/// store is unreachable. Implementations never retry.
#[async_trait]
pub trait FeedbackStore: Send + Sync + fmt::Debug {
    /// Creates the backing table if it does not exist yet. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the statement cannot run.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Appends one entry and returns its server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on connection or constraint
    /// failure.
    async fn create(&self, feedback: &NewFeedback) -> Result<i64, AppError>;

    /// Returns up to `limit` entries, newest first (`created_at`
    /// descending, then `id` descending).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on connection failure.
    async fn list_recent(&self, limit: u32) -> Result<Vec<FeedbackEntry>, AppError>;

    /// Acquires and immediately releases one connection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if no connection can be obtained.
    async fn ping(&self) -> Result<(), AppError>;
}
