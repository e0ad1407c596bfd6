//! REST API endpoint handlers.
//!
//! All handlers go through the shared [`AppState`]. Reads take an
//! immutable snapshot from the store; the write path decodes the body
//! first so a malformed request never reaches the store.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/locations/{id}` | Whole collection as JSON |
//! | `POST` | `/consultantlocations/` | Replace collection, echo it back |
//! | `GET` | `/api-docs` | Route documentation |

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use consultant_types::LocationCollection;
use tracing::{info, warn};

use crate::docs::ROUTES;
use crate::error::ApiError;
use crate::representation::Representation;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /locations/{id}
// ---------------------------------------------------------------------------

/// Return the full current collection as JSON.
///
/// The path id is accepted and logged but never used to filter; every
/// request receives every record.
pub async fn get_locations(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    info!(%id, "Fetching consultant locations");
    let snapshot = state.store.get();
    respond(Representation::Json, &snapshot)
}

// ---------------------------------------------------------------------------
// POST /consultantlocations/
// ---------------------------------------------------------------------------

/// Replace the collection with the request body and echo it back.
///
/// The body is decoded according to the request `Content-Type` and the
/// response uses the same representation: JSON for a `json` subtype,
/// XML for anything else.
pub async fn replace_locations(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let representation = Representation::from_content_type(content_type);

    let collection = representation.decode(&body).map_err(|e| {
        warn!(%representation, error = %e, "Rejected consultant locations body");
        ApiError::Decode(e)
    })?;

    let stored = state.store.replace(collection);
    info!(
        %representation,
        records = stored.len(),
        "Consultant locations replaced"
    );

    respond(representation, &stored)
}

// ---------------------------------------------------------------------------
// GET /api-docs
// ---------------------------------------------------------------------------

/// Describe every registered route with paths resolved against the base.
pub async fn api_docs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let routes: Vec<serde_json::Value> = ROUTES
        .iter()
        .map(|route| {
            serde_json::json!({
                "method": route.method,
                "path": state.full_path(route.path),
                "summary": route.summary,
                "consumes": route.consumes,
                "produces": route.produces,
                "responses": route.responses,
            })
        })
        .collect();

    Json(serde_json::json!({
        "base_path": state.base_path.as_deref().unwrap_or("/"),
        "count": routes.len(),
        "routes": routes,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Encode `collection` and attach the matching `Content-Type`.
fn respond(
    representation: Representation,
    collection: &LocationCollection,
) -> Result<Response, ApiError> {
    let body = representation.encode(collection).map_err(ApiError::Encode)?;
    Ok(([(CONTENT_TYPE, representation.content_type())], body).into_response())
}
