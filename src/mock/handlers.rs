//! Axum handlers simulating the content API.

use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::config::MockConfig;
use crate::mock::data;

#[derive(Debug, Clone)]
struct MockState {
    page_delay: Duration,
    menu_delay: Duration,
}

/// Build the mock content API router. The caller nests it under the
/// configured API prefix (or serves it standalone in tests).
pub fn router(config: &MockConfig) -> Router {
    let state = MockState {
        page_delay: Duration::from_millis(config.page_delay_ms),
        menu_delay: Duration::from_millis(config.menu_delay_ms),
    };
    Router::new()
        .route("/", get(front_page))
        .route("/api/menu_items/{name}", get(menu))
        .route("/{*path}", get(page))
        .with_state(state)
}

async fn front_page(State(state): State<MockState>) -> Response {
    serve_page("", state.page_delay).await
}

async fn page(State(state): State<MockState>, Path(path): Path<String>) -> Response {
    serve_page(&path, state.page_delay).await
}

async fn serve_page(path: &str, delay: Duration) -> Response {
    tokio::time::sleep(delay).await;

    match data::page_fixture(path) {
        Some(envelope) => (
            StatusCode::OK,
            [
                ("x-drupal-cache", "MOCK"),
                ("cache-control", "public, max-age=60"),
            ],
            Json(envelope),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, Json(data::not_found_fixture())).into_response(),
    }
}

async fn menu(State(state): State<MockState>, Path(name): Path<String>) -> Response {
    tokio::time::sleep(state.menu_delay).await;

    (
        StatusCode::OK,
        [
            ("x-drupal-cache", "MOCK"),
            ("cache-control", "public, max-age=300"),
        ],
        Json(data::menu_fixture(&name)),
    )
        .into_response()
}
