//! HTTP endpoint handlers organized by resource.

pub mod feedback;
pub mod musicians;
pub mod page;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes every route of the service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(page::routes())
        .merge(system::routes())
        .merge(musicians::routes())
        .merge(feedback::routes())
}
