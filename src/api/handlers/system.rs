//! System endpoints: health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Application name reported by `/health`.
pub const APP_NAME: &str = "Musician Directory";

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    db: String,
    app: String,
    version: String,
}

/// `GET /health` — Service health plus a database liveness check.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns process status and the result of acquiring one database connection. `db` is `ok` or `error: <detail>`.",
    responses(
        (status = 200, description = "Process is up", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let db = state.feedback_service.database_status().await;
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            db,
            app: APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, get, memory_state, offline_state, send};

    #[tokio::test]
    async fn reports_ok_when_database_answers() {
        let (state, _) = memory_state();
        let response = send(routes(), state, get("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["db"], "ok");
        assert_eq!(body["app"], APP_NAME);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn reports_error_detail_when_database_is_down() {
        let response = send(routes(), offline_state(), get("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        let db = body["db"].as_str().unwrap_or_default();
        assert!(db.starts_with("error: "));
        assert!(db.contains("Can't connect"));
    }
}
