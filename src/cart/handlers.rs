//! REST API handlers for shopping cart operations
//!
//! Every handler resolves the caller's session from the `cart_session`
//! cookie and re-sends the cookie so its expiry follows the session's
//! last activity.

use super::{helpers::*, models::*, state::SharedState};
use crate::error::ApiError;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/cart", get(get_cart).post(add_to_cart))
        .route("/api/cart/clear", post(clear_cart))
        .route("/api/cart/remove/:id", post(remove_from_cart))
}

/// Resolves the caller's session, logging when a new one is started
fn session(headers: &HeaderMap) -> String {
    let (session_id, is_new_session) = resolve_session_id(headers);
    if is_new_session {
        tracing::debug!(session = %session_id, "session started");
    }
    session_id
}

/// Wraps a handler outcome with the session cookie
fn respond(state: &SharedState, session_id: &str, result: Result<Response, ApiError>) -> Response {
    let response = result.unwrap_or_else(IntoResponse::into_response);
    attach_session_cookie(response, session_id, state.carts.ttl())
}

/// Endpoint: GET /api/cart
/// Returns the session's cart with full weapon details.
async fn get_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let session_id = session(&headers);
    let items = state.carts.get(&session_id, &state.catalog);

    respond(&state, &session_id, Ok(Json(items).into_response()))
}

/// Endpoint: POST /api/cart
/// Adds one weapon by id; 404 when the id is not in the catalog.
async fn add_to_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<AddToCartInput>, JsonRejection>,
) -> Response {
    let session_id = session(&headers);

    let result = match body {
        Ok(Json(payload)) => state
            .carts
            .add(&session_id, payload.id, &state.catalog)
            .map(|weapon| (StatusCode::CREATED, Json(weapon)).into_response())
            .map_err(ApiError::from),
        Err(rejection) => Err(rejection.into()),
    };

    respond(&state, &session_id, result)
}

/// Endpoint: POST /api/cart/clear
/// Empties the session's cart.
async fn clear_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let session_id = session(&headers);
    state.carts.clear(&session_id);

    respond(
        &state,
        &session_id,
        Ok(Json(CartUpdate::cleared()).into_response()),
    )
}

/// Endpoint: POST /api/cart/remove/:id
/// Removes the first matching entry; 404 when the id is not in the cart.
async fn remove_from_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let session_id = session(&headers);

    let result = match id {
        Ok(Path(id)) => state
            .carts
            .remove(&session_id, id, &state.catalog)
            .map(|items| Json(CartUpdate::removed(items)).into_response())
            .map_err(ApiError::from),
        Err(rejection) => Err(rejection.into()),
    };

    respond(&state, &session_id, result)
}
