//! OpenAPI document covering every endpoint.

use utoipa::OpenApi;

use super::handlers::{feedback, musicians, page, system};

/// Generated OpenAPI description of the service.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Musician Directory",
        description = "Static musician catalog with a feedback form backed by MySQL."
    ),
    paths(
        page::index,
        system::health_handler,
        musicians::list_musicians,
        musicians::list_genres,
        feedback::submit_feedback,
        feedback::list_feedbacks,
    ),
    tags(
        (name = "Pages", description = "Server-rendered HTML"),
        (name = "System", description = "Health and diagnostics"),
        (name = "Catalog", description = "Read-only musician catalog"),
        (name = "Feedback", description = "Feedback submission and listing"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/",
            "/health",
            "/api/musicians",
            "/api/genres",
            "/feedback",
            "/feedbacks",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
