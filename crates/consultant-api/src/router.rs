//! Axum router construction for the locations API.
//!
//! The route table is explicit: every path comes from [`crate::docs`] and
//! is registered both with and without a trailing slash. The whole table
//! is nested beneath the base path held in [`AppState`].

use std::sync::Arc;

use axum::Router;
use axum::routing::{MethodRouter, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::docs;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes, relative to the base path:
/// - `GET /locations/{id}` -- whole collection as JSON
/// - `POST /consultantlocations/` -- replace and echo the collection
/// - `GET /api-docs` -- route documentation
///
/// CORS is configured to allow any origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new();
    let routes = route_with_slash(
        routes,
        docs::GET_LOCATIONS.path,
        get(handlers::get_locations),
    );
    let routes = route_with_slash(
        routes,
        docs::REPLACE_LOCATIONS.path,
        post(handlers::replace_locations),
    );
    let routes = routes.route(docs::API_DOCS.path, get(handlers::api_docs));

    let app = match state.base_path.as_deref() {
        Some(base) => Router::new().nest(base, routes),
        None => routes,
    };

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Register `handler` at `path` and at `path/`.
fn route_with_slash(
    router: Router<Arc<AppState>>,
    path: &str,
    handler: MethodRouter<Arc<AppState>>,
) -> Router<Arc<AppState>> {
    router
        .route(path, handler.clone())
        .route(&format!("{path}/"), handler)
}
