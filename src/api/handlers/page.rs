//! The single HTML page, with the catalog embedded as client-side data.

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;

use crate::app_state::AppState;
use crate::domain::Catalog;

const INDEX_TEMPLATE: &str = include_str!("../../../templates/index.html");
const MUSICIANS_PLACEHOLDER: &str = "{{ musicians_json }}";
const COUNT_PLACEHOLDER: &str = "{{ musician_count }}";

/// `GET /` — Render the directory page.
#[utoipa::path(
    get,
    path = "/",
    tag = "Pages",
    summary = "Directory page",
    description = "HTML page with the musician catalog embedded as JSON and the feedback widget.",
    responses(
        (status = 200, description = "HTML document", content_type = "text/html", body = String),
    )
)]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.catalog))
}

/// Fills the page template with the catalog.
#[must_use]
pub fn render_index(catalog: &Catalog) -> String {
    let json = match serde_json::to_string(catalog.profiles()) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize catalog");
            "[]".to_string()
        }
    };
    INDEX_TEMPLATE
        .replace(MUSICIANS_PLACEHOLDER, &script_safe_json(&json))
        .replace(COUNT_PLACEHOLDER, &catalog.len().to_string())
}

/// Escapes characters that could close a `<script>` element or break out
/// of an HTML attribute. The result is still valid JSON.
#[must_use]
pub fn script_safe_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\'' => out.push_str("\\u0027"),
            other => out.push(other),
        }
    }
    out
}

/// Page routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use super::*;
    use crate::test_support::{body_text, get, memory_state, send};

    #[test]
    fn script_safe_json_escapes_markup() {
        let escaped = script_safe_json(r#"["</script><b>&'"]"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('&'));
        assert!(!escaped.contains('\''));

        let decoded: Vec<String> = serde_json::from_str(&escaped).unwrap_or_default();
        assert_eq!(decoded, vec!["</script><b>&'".to_string()]);
    }

    #[test]
    fn rendered_page_has_no_placeholders() {
        let html = render_index(&Catalog::builtin());
        assert!(!html.contains(MUSICIANS_PLACEHOLDER));
        assert!(!html.contains(COUNT_PLACEHOLDER));
        assert!(html.contains("Ludwig van Beethoven"));
        assert!(html.contains(">12<"));
    }

    #[tokio::test]
    async fn index_serves_html() {
        let (state, _) = memory_state();
        let response = send(routes(), state, get("/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Farrokh Bulsara"));
    }
}
