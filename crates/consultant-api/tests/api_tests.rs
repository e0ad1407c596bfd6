//! Integration tests for the locations API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use consultant_api::router::build_router;
use consultant_api::state::AppState;
use consultant_core::LocationStore;
use consultant_types::{LocationCollection, LocationRecord};
use serde_json::Value;
use tower::ServiceExt;

const BASE: &str = "/consultantlocations";

fn make_test_state() -> Arc<AppState> {
    Arc::new(AppState::with_base_path(
        Arc::new(LocationStore::new()),
        Some(String::from(BASE)),
    ))
}

fn router_for(state: &Arc<AppState>) -> Router {
    build_router(Arc::clone(state))
}

async fn body_to_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_to_json(response: Response) -> Value {
    serde_json::from_str(&body_to_string(response).await).unwrap()
}

fn content_type(response: &Response) -> String {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::post(uri);
    if let Some(value) = content_type {
        builder = builder.header(header::CONTENT_TYPE, value);
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_fresh_store_get_returns_seed_records() {
    let state = make_test_state();

    let response = router_for(&state)
        .oneshot(get("/consultantlocations/locations/123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
    let json = body_to_json(response).await;
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "Matt Roberts", "location": "SW1A 2NH"},
            {"name": "Paulo Menon", "location": "EC2M 7LS"},
        ])
    );
}

#[tokio::test]
async fn test_get_ignores_id() {
    let state = make_test_state();

    let first = body_to_string(
        router_for(&state)
            .oneshot(get("/consultantlocations/locations/1"))
            .await
            .unwrap(),
    )
    .await;
    let second = body_to_string(
        router_for(&state)
            .oneshot(get("/consultantlocations/locations/does-not-exist/"))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_ignores_accept_header() {
    let state = make_test_state();

    let request = Request::get("/consultantlocations/locations/1")
        .header(header::ACCEPT, "application/xml")
        .body(Body::empty())
        .unwrap();
    let response = router_for(&state).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
}

#[tokio::test]
async fn test_post_json_echoes_json_and_replaces() {
    let state = make_test_state();
    let payload = r#"[{"name":"Alice","location":"AB1 2CD"}]"#;

    let response = router_for(&state)
        .oneshot(post(
            "/consultantlocations/consultantlocations/",
            Some("application/json"),
            payload,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
    assert_eq!(body_to_string(response).await, payload);

    let response = router_for(&state)
        .oneshot(get("/consultantlocations/locations/1"))
        .await
        .unwrap();
    assert_eq!(body_to_string(response).await, payload);
}

#[tokio::test]
async fn test_post_json_with_charset_stays_json() {
    let state = make_test_state();

    let response = router_for(&state)
        .oneshot(post(
            "/consultantlocations/consultantlocations",
            Some("application/json; charset=utf-8"),
            r#"[{"name":"Alice","location":"AB1 2CD"}]"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
}

#[tokio::test]
async fn test_post_xml_echoes_xml() {
    let state = make_test_state();
    let payload = "<consultantLocations>\
        <locations><name>Bob</name><location>XY1 1ZZ</location></locations>\
        </consultantLocations>";

    let response = router_for(&state)
        .oneshot(post(
            "/consultantlocations/consultantlocations/",
            Some("application/xml"),
            payload,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/xml");
    let body = body_to_string(response).await;
    assert!(body.starts_with("<?xml"));
    assert!(body.contains("<locations><name>Bob</name><location>XY1 1ZZ</location></locations>"));

    assert_eq!(
        *state.store.get(),
        LocationCollection::new(vec![LocationRecord::new("Bob", "XY1 1ZZ")])
    );
}

#[tokio::test]
async fn test_post_without_content_type_takes_xml_branch() {
    let state = make_test_state();
    let payload = "<consultantLocations>\
        <locations><name>Cat</name><location>N1 9GU</location></locations>\
        </consultantLocations>";

    let response = router_for(&state)
        .oneshot(post("/consultantlocations/consultantlocations/", None, payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/xml");
    assert_eq!(state.store.len(), 1);
}

#[tokio::test]
async fn test_post_other_subtype_takes_xml_branch() {
    let state = make_test_state();
    let payload = "<consultantLocations>\
        <locations><name>Dee</name><location>M1 1AE</location></locations>\
        </consultantLocations>";

    let response = router_for(&state)
        .oneshot(post(
            "/consultantlocations/consultantlocations/",
            Some("text/plain"),
            payload,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/xml");
}

#[tokio::test]
async fn test_post_empty_collection_then_get_returns_empty() {
    let state = make_test_state();

    let response = router_for(&state)
        .oneshot(post(
            "/consultantlocations/consultantlocations/",
            Some("application/json"),
            "[]",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_string(response).await, "[]");

    let response = router_for(&state)
        .oneshot(get("/consultantlocations/locations/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_post_malformed_json_is_bad_request_and_keeps_state() {
    let state = make_test_state();

    let response = router_for(&state)
        .oneshot(post(
            "/consultantlocations/consultantlocations/",
            Some("application/json"),
            r#"[{"name":"Alice""#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response).await;
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("JSON"));

    assert_eq!(state.store.len(), 2);
}

#[tokio::test]
async fn test_post_malformed_xml_is_bad_request() {
    let state = make_test_state();

    let response = router_for(&state)
        .oneshot(post(
            "/consultantlocations/consultantlocations/",
            Some("application/xml"),
            "<consultantLocations><locations>",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.store.len(), 2);
}

#[tokio::test]
async fn test_post_foreign_xml_document_is_bad_request_and_keeps_state() {
    let state = make_test_state();

    let response = router_for(&state)
        .oneshot(post(
            "/consultantlocations/consultantlocations/",
            Some("application/xml"),
            "<customers><customer><name>X</name></customer></customers>",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("<customers>"));
    assert_eq!(*state.store.get(), consultant_core::seed_collection());
}

#[tokio::test]
async fn test_post_xml_with_unknown_record_element_is_bad_request() {
    let state = make_test_state();

    let response = router_for(&state)
        .oneshot(post(
            "/consultantlocations/consultantlocations/",
            Some("application/xml"),
            "<consultantLocations><customer><name>X</name></customer></consultantLocations>",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.store.len(), 2);
}

#[tokio::test]
async fn test_post_xml_keeps_padded_values() {
    let state = make_test_state();
    let payload = "<consultantLocations><locations>\
        <name>  Alice </name><location> AB1 2CD</location>\
        </locations></consultantLocations>";

    let response = router_for(&state)
        .oneshot(post(
            "/consultantlocations/consultantlocations/",
            Some("application/xml"),
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        body_to_string(response)
            .await
            .contains("<name>  Alice </name><location> AB1 2CD</location>")
    );

    let response = router_for(&state)
        .oneshot(get("/consultantlocations/locations/1"))
        .await
        .unwrap();
    assert_eq!(
        body_to_json(response).await,
        serde_json::json!([{"name": "  Alice ", "location": " AB1 2CD"}])
    );
}

#[tokio::test]
async fn test_last_write_wins_across_posts() {
    let state = make_test_state();

    for payload in [
        r#"[{"name":"A","location":"1"},{"name":"B","location":"2"}]"#,
        r#"[{"name":"C","location":"3"}]"#,
    ] {
        let response = router_for(&state)
            .oneshot(post(
                "/consultantlocations/consultantlocations/",
                Some("application/json"),
                payload,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router_for(&state)
        .oneshot(get("/consultantlocations/locations/x"))
        .await
        .unwrap();
    assert_eq!(
        body_to_json(response).await,
        serde_json::json!([{"name": "C", "location": "3"}])
    );
}

#[tokio::test]
async fn test_routes_outside_base_path_are_not_found() {
    let state = make_test_state();

    let response = router_for(&state)
        .oneshot(get("/locations/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_mount_serves_unprefixed_paths() {
    let state = Arc::new(AppState::new(Arc::new(LocationStore::new())));

    let response = router_for(&state)
        .oneshot(get("/locations/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response).await;
    assert_eq!(json.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_get_method_not_allowed_on_replace_route() {
    let state = make_test_state();

    let response = router_for(&state)
        .oneshot(get("/consultantlocations/consultantlocations/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_api_docs_lists_routes() {
    let state = make_test_state();

    let response = router_for(&state)
        .oneshot(get("/consultantlocations/api-docs"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response).await;
    assert_eq!(json["base_path"], BASE);
    assert_eq!(json["count"], 3);
    assert_eq!(json["routes"][0]["method"], "GET");
    assert_eq!(
        json["routes"][0]["path"],
        "/consultantlocations/locations/{id}"
    );
    assert_eq!(json["routes"][0]["responses"][1]["status"], 500);
    assert_eq!(json["routes"][0]["responses"][1]["declared_only"], true);
    assert_eq!(json["routes"][1]["method"], "POST");
}
