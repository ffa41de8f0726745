//! Error types shared by the cart domain and the HTTP layer

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Failures of cart mutations. Every variant is a "not found" condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// The requested weapon id does not exist in the catalog
    #[error("weapon {0} not found")]
    WeaponNotFound(i64),

    /// The weapon id is not currently in the session's cart
    #[error("weapon {0} is not in the cart")]
    NotInCart(i64),
}

/// Errors surfaced by HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The request could not be decoded; carries the extractor's own status
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },
}

/// JSON body returned for every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Cart(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_errors_map_to_not_found() {
        assert_eq!(
            ApiError::from(CartError::WeaponNotFound(9999)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CartError::NotInCart(3)).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn invalid_request_keeps_its_status() {
        let err = ApiError::InvalidRequest {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `id`".into(),
        };
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "missing field `id`");
    }

    #[test]
    fn messages_name_the_weapon() {
        assert_eq!(CartError::WeaponNotFound(42).to_string(), "weapon 42 not found");
        assert_eq!(
            CartError::NotInCart(7).to_string(),
            "weapon 7 is not in the cart"
        );
    }
}
