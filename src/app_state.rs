//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::Catalog;
use crate::service::FeedbackService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Feedback operations.
    pub feedback_service: Arc<FeedbackService>,
    /// Read-only musician catalog.
    pub catalog: Catalog,
}

impl AppState {
    /// Bundles a feedback service with the built-in catalog.
    #[must_use]
    pub fn new(feedback_service: Arc<FeedbackService>) -> Self {
        Self {
            feedback_service,
            catalog: Catalog::builtin(),
        }
    }
}
