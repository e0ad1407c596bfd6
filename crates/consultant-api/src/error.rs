//! Error types for the HTTP API.
//!
//! [`ApiError`] can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! store itself never fails, so every variant comes from turning bytes
//! into a collection or a collection into bytes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::representation::RepresentationError;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be parsed into a location collection.
    #[error("invalid request body: {0}")]
    Decode(#[source] RepresentationError),

    /// The response body could not be produced.
    #[error("failed to encode response: {0}")]
    Encode(#[source] RepresentationError),
}

impl ApiError {
    /// HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
