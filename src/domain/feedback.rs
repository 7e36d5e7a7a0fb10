//! Feedback submissions and their required-field validation.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

/// Message returned when any feedback field is blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";

/// Raw feedback form payload as posted by a client.
///
/// Absent fields deserialize as empty strings so that a missing field and a
/// blank field are rejected the same way.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FeedbackSubmission {
    /// Author name.
    #[serde(default)]
    pub name: String,
    /// Author email address.
    #[serde(default)]
    pub email: String,
    /// Free-form message body.
    #[serde(default)]
    pub message: String,
}

impl FeedbackSubmission {
    /// Convenience constructor.
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Trims every field and checks that none is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with [`REQUIRED_FIELDS_MESSAGE`]
    /// if any field is empty after trimming.
    pub fn validate(&self) -> Result<NewFeedback, AppError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(NewFeedback {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// A validated feedback entry ready to be persisted.
///
/// Only obtainable through [`FeedbackSubmission::validate`], so every value
/// of this type has non-empty, trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    name: String,
    email: String,
    message: String,
}

impl NewFeedback {
    /// Author name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Author email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_submission_is_trimmed() {
        let submission = FeedbackSubmission::new("  Ada ", "ada@example.com\n", "\tGreat!");
        let Ok(feedback) = submission.validate() else {
            panic!("submission should be valid");
        };
        assert_eq!(feedback.name(), "Ada");
        assert_eq!(feedback.email(), "ada@example.com");
        assert_eq!(feedback.message(), "Great!");
    }

    #[test]
    fn empty_field_is_rejected() {
        let result = FeedbackSubmission::new("", "ada@example.com", "Great!").validate();
        assert_eq!(
            result,
            Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))
        );
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        for (name, email, message) in [
            ("   ", "a@b.c", "hi"),
            ("Ada", " \t ", "hi"),
            ("Ada", "a@b.c", "\n\n"),
        ] {
            let result = FeedbackSubmission::new(name, email, message).validate();
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn missing_form_fields_default_to_empty() {
        let parsed: Result<FeedbackSubmission, _> =
            serde_json::from_str(r#"{"name":"Ada","message":"hi"}"#);
        let Ok(submission) = parsed else {
            panic!("partial payload should deserialize");
        };
        assert!(submission.email.is_empty());
        assert!(submission.validate().is_err());
    }
}
