//! Shared fixtures for handler and service unit tests.

#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use crate::app_state::AppState;
use crate::domain::NewFeedback;
use crate::error::AppError;
use crate::persistence::{FeedbackEntry, FeedbackStore, MemoryFeedbackStore};
use crate::service::FeedbackService;

/// Store that fails every call, as if the database were down.
#[derive(Debug)]
pub(crate) struct OfflineStore;

#[async_trait]
impl FeedbackStore for OfflineStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Err(AppError::Persistence("Can't connect to MySQL server".to_string()))
    }

    async fn create(&self, _feedback: &NewFeedback) -> Result<i64, AppError> {
        Err(AppError::Persistence("Can't connect to MySQL server".to_string()))
    }

    async fn list_recent(&self, _limit: u32) -> Result<Vec<FeedbackEntry>, AppError> {
        Err(AppError::Persistence("Can't connect to MySQL server".to_string()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Persistence("Can't connect to MySQL server".to_string()))
    }
}

pub(crate) fn memory_state() -> (AppState, Arc<MemoryFeedbackStore>) {
    let store = Arc::new(MemoryFeedbackStore::new());
    let service = FeedbackService::new(Arc::clone(&store) as Arc<dyn FeedbackStore>);
    (AppState::new(Arc::new(service)), store)
}

pub(crate) fn offline_state() -> AppState {
    AppState::new(Arc::new(FeedbackService::new(Arc::new(OfflineStore))))
}

pub(crate) fn get(uri: &str) -> Request<Body> {
    let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
        panic!("valid request");
    };
    request
}

pub(crate) fn post_form(uri: &str, form: &str) -> Request<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()));
    let Ok(request) = request else {
        panic!("valid request");
    };
    request
}

pub(crate) async fn send(
    router: Router<AppState>,
    state: AppState,
    request: Request<Body>,
) -> Response<Body> {
    let Ok(response) = router.with_state(state).oneshot(request).await else {
        panic!("router is infallible");
    };
    response
}

pub(crate) async fn body_json(response: Response<Body>) -> serde_json::Value {
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("body should be readable");
    };
    let Ok(value) = serde_json::from_slice(&bytes) else {
        panic!("body should be JSON");
    };
    value
}

pub(crate) async fn body_text(response: Response<Body>) -> String {
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("body should be readable");
    };
    String::from_utf8_lossy(&bytes).into_owned()
}
