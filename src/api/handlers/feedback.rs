//! Feedback handlers: form submission and recent-entries listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{FeedbackListErrorResponse, FeedbackListResponse, SubmitFeedbackResponse};
use crate::api::extract::FeedbackForm;
use crate::app_state::AppState;
use crate::domain::FeedbackSubmission;
use crate::error::{AppError, ErrorResponse};

/// Acknowledgement text returned after a successful submission.
pub const FEEDBACK_SAVED_MESSAGE: &str = "Feedback saved successfully.";

/// `POST /feedback` — Store one feedback entry.
///
/// # Errors
///
/// Returns [`AppError::Validation`] (400) if any field is blank after
/// trimming or the body is not a readable form, or [`AppError::Persistence`] (500) if the insert fails.
#[utoipa::path(
    post,
    path = "/feedback",
    tag = "Feedback",
    summary = "Submit feedback",
    description = "Accepts `name`, `email` and `message` as `application/x-www-form-urlencoded` or `multipart/form-data`. All three are required and trimmed before storage.",
    request_body(content = FeedbackSubmission, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Feedback stored", body = SubmitFeedbackResponse),
        (status = 400, description = "A required field is blank", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    FeedbackForm(submission): FeedbackForm,
) -> Result<Json<SubmitFeedbackResponse>, AppError> {
    state.feedback_service.submit(&submission).await?;
    Ok(Json(SubmitFeedbackResponse {
        success: true,
        message: FEEDBACK_SAVED_MESSAGE.to_string(),
    }))
}

/// `GET /feedbacks` — List the most recent feedback entries.
///
/// On database failure the body still carries an (empty) `feedbacks`
/// array next to the error text.
#[utoipa::path(
    get,
    path = "/feedbacks",
    tag = "Feedback",
    summary = "List recent feedback",
    description = "Returns up to 50 entries, newest first. `created_at` is formatted as `YYYY-MM-DD HH:MM:SS`.",
    responses(
        (status = 200, description = "Recent feedback", body = FeedbackListResponse),
        (status = 500, description = "Database failure", body = FeedbackListErrorResponse),
    )
)]
pub async fn list_feedbacks(State(state): State<AppState>) -> Response {
    match state.feedback_service.recent().await {
        Ok(entries) => (StatusCode::OK, Json(FeedbackListResponse::from(entries))).into_response(),
        Err(err) => (
            err.status_code(),
            Json(FeedbackListErrorResponse {
                error: err.to_string(),
                feedbacks: Vec::new(),
            }),
        )
            .into_response(),
    }
}

/// Feedback routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/feedback", post(submit_feedback))
        .route("/feedbacks", get(list_feedbacks))
}
