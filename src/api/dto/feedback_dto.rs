//! Feedback DTOs for submission acknowledgements and listings.

use serde::Serialize;
use utoipa::ToSchema;

use crate::persistence::FeedbackEntry;

/// Success body for `POST /feedback`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitFeedbackResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable acknowledgement.
    pub message: String,
}

/// One stored feedback entry with a display timestamp.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedbackDto {
    /// Server-assigned id.
    pub id: i64,
    /// Author name.
    pub name: String,
    /// Author email.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Insertion time as `YYYY-MM-DD HH:MM:SS` (UTC).
    pub created_at: Option<String>,
}

impl From<FeedbackEntry> for FeedbackDto {
    fn from(entry: FeedbackEntry) -> Self {
        let created_at = entry.created_at_display();
        Self {
            id: entry.id,
            name: entry.name,
            email: entry.email,
            message: entry.message,
            created_at,
        }
    }
}

/// Success body for `GET /feedbacks`.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackListResponse {
    /// Entries, newest first.
    pub feedbacks: Vec<FeedbackDto>,
    /// Number of entries returned.
    pub total: usize,
}

impl From<Vec<FeedbackEntry>> for FeedbackListResponse {
    fn from(entries: Vec<FeedbackEntry>) -> Self {
        let feedbacks: Vec<FeedbackDto> = entries.into_iter().map(FeedbackDto::from).collect();
        let total = feedbacks.len();
        Self { feedbacks, total }
    }
}

/// Failure body for `GET /feedbacks`: the error text plus an empty list so
/// clients can render the same shape either way.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackListErrorResponse {
    /// Underlying error message.
    pub error: String,
    /// Always empty.
    pub feedbacks: Vec<FeedbackDto>,
}
