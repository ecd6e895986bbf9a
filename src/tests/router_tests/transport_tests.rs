use crate::router::{dispatch, handle};
use crate::tests::utils::{read_body, request, send, test_state};
use http::Method;
use serde_json::json;

#[test]
fn root_serves_landing_page() {
    let state = test_state();
    let resp = handle(request(Method::GET, "/", None), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Zeecurity Backend Running"));
}

#[test]
fn unknown_api_route_is_json_404() {
    let state = test_state();
    let (status, body) = send(&state, Method::GET, "/api/parking", None);
    assert_eq!(status, 404);
    assert_eq!(body, json!({"error": "API route not found"}));

    // wrong verb on a known path
    let (status, _) = send(&state, Method::PATCH, "/api/complaints", None);
    assert_eq!(status, 404);
}

#[test]
fn malformed_json_is_400() {
    let state = test_state();
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/api/complaints")
        .body(astra::Body::from("{not json"))
        .unwrap();
    let resp = dispatch(req, &state);
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[test]
fn oversized_body_is_413() {
    let mut state = test_state();
    state.max_body_bytes = 16;
    let (status, _) = send(
        &state,
        Method::POST,
        "/api/complaints",
        Some(json!({"name": "Aman", "flatNumber": "A-101", "details": "Lift not working"})),
    );
    assert_eq!(status, 413);
}

#[test]
fn unbounded_body_limit_accepts_normal_requests() {
    let mut state = test_state();
    state.max_body_bytes = usize::MAX;
    let (status, body) = send(
        &state,
        Method::POST,
        "/api/complaints",
        Some(json!({"name": "Aman", "flatNumber": "A-101", "details": "Lift not working"})),
    );
    assert_eq!(status, 201);
    assert_eq!(body["name"], "Aman");
    assert_eq!(body["text"], "Lift not working");
}

#[test]
fn dispatch_adds_cors_headers_and_answers_preflight() {
    let state = test_state();

    let resp = dispatch(request(Method::OPTIONS, "/api/complaints", None), &state);
    assert_eq!(resp.status(), 204);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );

    let resp = dispatch(request(Method::GET, "/api/complaints", None), &state);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert!(resp.headers().contains_key("access-control-allow-methods"));
}
