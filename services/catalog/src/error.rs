use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// A single offending request field, reported alongside its siblings so the
/// client sees every problem in one round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Catalog service error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid query parameters")]
    InvalidQuery(Vec<FieldError>),
    #[error("Invalid listing payload")]
    InvalidPayload(Vec<FieldError>),
    #[error("missing caller identity")]
    Unauthorized,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidQuery(_) | Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only, with the full error chain; the response stays opaque.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, "internal error");
        }
        let mut body = serde_json::json!({ "error": self.to_string() });
        if let Self::InvalidQuery(details) | Self::InvalidPayload(details) = &self {
            body["details"] = serde_json::json!(details);
        }
        (status, axum::Json(body)).into_response()
    }
}
