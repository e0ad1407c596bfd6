//! Route table and its documentation.
//!
//! Each [`RouteDoc`] names a method and a path relative to the base path.
//! [`build_router`](crate::router::build_router) registers handlers against
//! these same paths, and `GET {base}/api-docs` serves [`ROUTES`] as JSON.
//!
//! Some declared responses are never produced: the GET route lists 500 and
//! 204 because clients were told to expect them, but the handler performs
//! no lookup. Those entries are marked `declared_only`.

use serde::Serialize;

/// One response a route documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeclaredResponse {
    /// HTTP status code.
    pub status: u16,
    /// What the status means for this route.
    pub description: &'static str,
    /// Documented for clients but never returned by the handler.
    pub declared_only: bool,
}

/// Documentation for a single route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteDoc {
    /// HTTP method.
    pub method: &'static str,
    /// Path relative to the base path, in Axum `{param}` syntax.
    pub path: &'static str,
    /// One-line summary.
    pub summary: &'static str,
    /// Media types accepted in the request body.
    pub consumes: &'static [&'static str],
    /// Media types the response may carry.
    pub produces: &'static [&'static str],
    /// Documented responses.
    pub responses: &'static [DeclaredResponse],
}

/// `GET /locations/{id}`.
pub const GET_LOCATIONS: RouteDoc = RouteDoc {
    method: "GET",
    path: "/locations/{id}",
    summary: "Return every consultant location (the id is not used to filter)",
    consumes: &[],
    produces: &["application/json"],
    responses: &[
        DeclaredResponse {
            status: 200,
            description: "The current consultant locations",
            declared_only: false,
        },
        DeclaredResponse {
            status: 500,
            description: "Invalid ID supplied",
            declared_only: true,
        },
        DeclaredResponse {
            status: 204,
            description: "location not found",
            declared_only: true,
        },
    ],
};

/// `POST /consultantlocations`.
pub const REPLACE_LOCATIONS: RouteDoc = RouteDoc {
    method: "POST",
    path: "/consultantlocations",
    summary: "Replace all consultant locations and echo the stored collection",
    consumes: &["application/json", "application/xml"],
    produces: &["application/json", "application/xml"],
    responses: &[
        DeclaredResponse {
            status: 200,
            description: "The stored consultant locations, in the request's format",
            declared_only: false,
        },
        DeclaredResponse {
            status: 400,
            description: "Request body could not be parsed",
            declared_only: false,
        },
        DeclaredResponse {
            status: 500,
            description: "Invalid ID supplied",
            declared_only: true,
        },
    ],
};

/// `GET /api-docs`.
pub const API_DOCS: RouteDoc = RouteDoc {
    method: "GET",
    path: "/api-docs",
    summary: "Describe the available routes",
    consumes: &[],
    produces: &["application/json"],
    responses: &[DeclaredResponse {
        status: 200,
        description: "Route documentation",
        declared_only: false,
    }],
};

/// Every route the server registers, in registration order.
pub const ROUTES: [RouteDoc; 3] = [GET_LOCATIONS, REPLACE_LOCATIONS, API_DOCS];
