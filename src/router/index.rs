//! Landing page, catalog listing and health check

use crate::cart::SharedState;
use crate::catalog::WeaponRecord;
use axum::{extract::State, response::Html, routing::get, Json, Router};
use serde::Serialize;

/// Creates routes that do not depend on a session
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/api/weapons", get(list_weapons))
        .route("/health", get(health))
}

/// Endpoint: GET /
async fn index(State(state): State<SharedState>) -> Html<String> {
    Html(state.load_index_html().await)
}

/// Endpoint: GET /api/weapons
/// Returns the full catalog in display order.
async fn list_weapons(State(state): State<SharedState>) -> Json<Vec<WeaponRecord>> {
    Json(state.catalog.list().to_vec())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub weapons: usize,
    pub sessions: usize,
}

/// Endpoint: GET /health
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        weapons: state.catalog.len(),
        sessions: state.carts.active_session_count(),
    })
}
