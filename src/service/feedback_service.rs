//! Feedback service: validation, the recent-entries cap, and database
//! status reporting on top of a [`FeedbackStore`].

use std::sync::Arc;

use crate::domain::FeedbackSubmission;
use crate::error::AppError;
use crate::persistence::{FeedbackEntry, FeedbackStore};

/// Maximum number of entries returned by [`FeedbackService::recent`].
pub const RECENT_FEEDBACK_LIMIT: u32 = 50;

/// Value reported by [`FeedbackService::database_status`] when the
/// database answers.
pub const DB_STATUS_OK: &str = "ok";

/// Orchestration layer between HTTP handlers and the feedback store.
///
/// Stateless apart from the shared store handle. Failures are never
/// retried; they are returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct FeedbackService {
    store: Arc<dyn FeedbackStore>,
}

impl FeedbackService {
    /// Creates a new `FeedbackService`.
    #[must_use]
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    /// Ensures the feedback table exists.
    ///
    /// Failure is logged and swallowed: the server keeps running and every
    /// later store operation reports its own persistence error.
    pub async fn initialize(&self) {
        match self.store.ensure_schema().await {
            Ok(()) => tracing::info!("feedback table ready"),
            Err(err) => {
                tracing::warn!(error = %err, "feedback table bootstrap failed; continuing degraded");
            }
        }
    }

    /// Validates and stores a submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is blank (nothing is
    /// stored) or [`AppError::Persistence`] if the insert fails.
    pub async fn submit(&self, submission: &FeedbackSubmission) -> Result<i64, AppError> {
        let feedback = submission.validate()?;
        let id = self.store.create(&feedback).await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to store feedback");
        })?;
        tracing::info!(id, "feedback stored");
        Ok(id)
    }

    /// Returns the most recent entries, newest first, capped at
    /// [`RECENT_FEEDBACK_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store cannot be queried.
    pub async fn recent(&self) -> Result<Vec<FeedbackEntry>, AppError> {
        self.store
            .list_recent(RECENT_FEEDBACK_LIMIT)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to list feedback"))
    }

    /// Pings the store: `"ok"` on success, `"error: <detail>"` otherwise.
    pub async fn database_status(&self) -> String {
        match self.store.ping().await {
            Ok(()) => DB_STATUS_OK.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "database health check failed");
                format!("error: {err}")
            }
        }
    }
}
