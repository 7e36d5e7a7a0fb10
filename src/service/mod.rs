//! Service layer: business logic orchestration.
//!
//! [`FeedbackService`] validates submissions, applies the recent-entries
//! cap, and turns store pings into the health status string.

pub mod feedback_service;

pub use feedback_service::FeedbackService;
