//! Catalog handlers: musician listing with optional filters, genre list.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{GenreListResponse, MusicianDto, MusicianListResponse, MusicianQueryParams};
use crate::app_state::AppState;

/// `GET /api/musicians` — List catalog profiles.
///
/// Without query parameters the whole catalog is returned in its fixed
/// order.
#[utoipa::path(
    get,
    path = "/api/musicians",
    tag = "Catalog",
    summary = "List musicians",
    description = "Returns the static musician catalog, optionally narrowed by exact genre and a case-insensitive search over name, genre and biography.",
    params(MusicianQueryParams),
    responses(
        (status = 200, description = "Catalog profiles", body = MusicianListResponse),
    )
)]
pub async fn list_musicians(
    State(state): State<AppState>,
    Query(params): Query<MusicianQueryParams>,
) -> Json<MusicianListResponse> {
    let filter = params.to_filter();
    let musicians: Vec<MusicianDto> = state
        .catalog
        .search(&filter)
        .into_iter()
        .map(MusicianDto::from)
        .collect();
    let total = musicians.len();
    Json(MusicianListResponse { musicians, total })
}

/// `GET /api/genres` — List distinct catalog genres.
#[utoipa::path(
    get,
    path = "/api/genres",
    tag = "Catalog",
    summary = "List genres",
    description = "Returns each genre present in the catalog once, in order of first appearance.",
    responses(
        (status = 200, description = "Genre list", body = GenreListResponse),
    )
)]
pub async fn list_genres(State(state): State<AppState>) -> Json<GenreListResponse> {
    let genres: Vec<String> = state
        .catalog
        .genres()
        .into_iter()
        .map(str::to_string)
        .collect();
    let total = genres.len();
    Json(GenreListResponse { genres, total })
}

/// Catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/musicians", get(list_musicians))
        .route("/api/genres", get(list_genres))
}
