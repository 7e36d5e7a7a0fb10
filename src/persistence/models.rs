//! Database models for the `feedback` table.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored row from the `feedback` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    /// Auto-increment row ID.
    pub id: i64,
    /// Author name.
    pub name: String,
    /// Author email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Server-side insertion timestamp. The column is nullable in the
    /// schema even though every insert relies on its default.
    pub created_at: Option<DateTime<Utc>>,
}

impl FeedbackEntry {
    /// Display format used for `created_at` in API responses.
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Formats `created_at` for display, e.g. `2024-05-01 13:45:00`.
    #[must_use]
    pub fn created_at_display(&self) -> Option<String> {
        self.created_at
            .map(|ts| ts.format(Self::TIMESTAMP_FORMAT).to_string())
    }
}
