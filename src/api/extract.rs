//! Request extractors.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::Form;

use crate::domain::FeedbackSubmission;
use crate::domain::feedback::REQUIRED_FIELDS_MESSAGE;
use crate::error::AppError;

/// Feedback form body in either HTML form encoding.
///
/// `application/x-www-form-urlencoded` and `multipart/form-data` are both
/// read into a [`FeedbackSubmission`]. Any other content type, or none,
/// yields an empty submission, which then fails validation. A body that
/// cannot be parsed is rejected with [`AppError::Validation`] so the
/// client always gets the JSON error shape.
#[derive(Debug)]
pub struct FeedbackForm(pub FeedbackSubmission);

impl<S> FromRequest<S> for FeedbackForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|essence| essence.trim().to_ascii_lowercase())
            .unwrap_or_default();

        let submission = match mime.as_str() {
            "application/x-www-form-urlencoded" => {
                let Form(submission) = Form::<FeedbackSubmission>::from_request(req, state)
                    .await
                    .map_err(unreadable)?;
                submission
            }
            "multipart/form-data" => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(unreadable)?;
                read_multipart(multipart).await?
            }
            _ => FeedbackSubmission::default(),
        };

        Ok(Self(submission))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<FeedbackSubmission, AppError> {
    let mut submission = FeedbackSubmission::default();
    while let Some(field) = multipart.next_field().await.map_err(unreadable)? {
        let slot = match field.name() {
            Some("name") => &mut submission.name,
            Some("email") => &mut submission.email,
            Some("message") => &mut submission.message,
            _ => continue,
        };
        *slot = field.text().await.map_err(unreadable)?;
    }
    Ok(submission)
}

fn unreadable<E: std::fmt::Display>(err: E) -> AppError {
    tracing::debug!(error = %err, "unreadable feedback form body");
    AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
}
