//! In-process feedback store.
//!
//! Keeps entries in a `Vec` behind a [`tokio::sync::RwLock`]. Ids start at 1
//! and timestamps never decrease, so insertion order and list order agree
//! with the MySQL implementation.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::FeedbackStore;
use super::models::FeedbackEntry;
use crate::domain::NewFeedback;
use crate::error::AppError;

/// Append-only in-memory [`FeedbackStore`].
#[derive(Debug, Default)]
pub struct MemoryFeedbackStore {
    entries: RwLock<Vec<FeedbackEntry>>,
}

impl MemoryFeedbackStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create(&self, feedback: &NewFeedback) -> Result<i64, AppError> {
        let mut entries = self.entries.write().await;
        let id = entries.last().map_or(1, |last| last.id.saturating_add(1));

        // Clamp against the previous entry so wall-clock jumps cannot
        // reorder the log.
        let now = Utc::now();
        let created_at = entries
            .last()
            .and_then(|last| last.created_at)
            .map_or(now, |prev| prev.max(now));

        entries.push(FeedbackEntry {
            id,
            name: feedback.name().to_string(),
            email: feedback.email().to_string(),
            message: feedback.message().to_string(),
            created_at: Some(created_at),
        });
        Ok(id)
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<FeedbackEntry>, AppError> {
        let entries = self.entries.read().await;
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
