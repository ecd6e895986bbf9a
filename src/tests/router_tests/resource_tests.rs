use crate::tests::utils::{send, test_state};
use http::Method;
use serde_json::json;

#[test]
fn visitor_check_in_and_checkout() {
    let state = test_state();

    let (status, visitor) = send(
        &state,
        Method::POST,
        "/api/visitors",
        Some(json!({"name": " Ravi ", "phone": "98765", "flatNumber": "B-2", "purpose": "Guest"})),
    );
    assert_eq!(status, 201);
    assert_eq!(visitor["name"], "Ravi");
    assert!(visitor["outTime"].is_null());
    let id = visitor["_id"].as_str().unwrap().to_string();

    let (status, body) = send(&state, Method::PUT, &format!("/api/visitors/{id}/checkout"), None);
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert!(body["visitor"]["outTime"].is_string());

    let (_, list) = send(&state, Method::GET, "/api/visitors", None);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = send(&state, Method::DELETE, &format!("/api/visitors/{id}"), None);
    assert_eq!(status, 200);
    let (status, _) = send(&state, Method::PUT, &format!("/api/visitors/{id}/checkout"), None);
    assert_eq!(status, 404);
}

#[test]
fn visitor_needs_a_name() {
    let state = test_state();
    let body = json!({"flatNumber": "B-2"});
    let (status, _) = send(&state, Method::POST, "/api/visitors", Some(body));
    assert_eq!(status, 400);
}

#[test]
fn notices_post_list_delete() {
    let state = test_state();

    let (status, notice) = send(
        &state,
        Method::POST,
        "/api/notices",
        Some(json!({"title": "Water cut", "message": "10am to 2pm on Sunday"})),
    );
    assert_eq!(status, 201);
    let id = notice["_id"].as_str().unwrap().to_string();

    let (_, list) = send(&state, Method::GET, "/api/notices", None);
    assert_eq!(list[0]["title"], "Water cut");

    let (status, _) = send(&state, Method::POST, "/api/notices", Some(json!({"title": "No body"})));
    assert_eq!(status, 400);

    let (status, _) = send(&state, Method::DELETE, &format!("/api/notices/{id}"), None);
    assert_eq!(status, 200);
    let (status, body) = send(&state, Method::DELETE, &format!("/api/notices/{id}"), None);
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Notice not found");
}

#[test]
fn maintenance_payments_are_wrapped() {
    let state = test_state();

    let (status, body) = send(
        &state,
        Method::POST,
        "/api/maintenance",
        Some(json!({"name": "Riya", "flatNumber": "C-12", "month": "March", "amount": 1500})),
    );
    assert_eq!(status, 201);
    assert_eq!(body["success"], true);
    assert_eq!(body["payment"]["paymentMode"], "Online");
    assert_eq!(body["payment"]["status"], "Paid");
    assert_eq!(body["payment"]["amount"], 1500.0);
    let id = body["payment"]["_id"].as_str().unwrap().to_string();

    let (status, body) = send(&state, Method::GET, "/api/maintenance", None);
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["payments"].as_array().unwrap().len(), 1);

    let (status, _) = send(&state, Method::DELETE, &format!("/api/maintenance/{id}"), None);
    assert_eq!(status, 200);
    let (status, _) = send(&state, Method::DELETE, &format!("/api/maintenance/{id}"), None);
    assert_eq!(status, 404);
}

#[test]
fn sos_alert_status_flow() {
    let state = test_state();

    let (status, alert) = send(
        &state,
        Method::POST,
        "/api/sos",
        Some(json!({
            "name": "Neha",
            "flatNumber": "B-4",
            "type": "Medical",
            "details": "Elderly resident collapsed",
            "priority": "High"
        })),
    );
    assert_eq!(status, 201);
    assert_eq!(alert["type"], "Medical");
    assert_eq!(alert["status"], "Pending");
    assert_eq!(alert["priority"], "High");
    let id = alert["_id"].as_str().unwrap().to_string();

    let uri = format!("/api/sos/{id}/status");
    let (status, _) = send(&state, Method::PUT, &uri, Some(json!({})));
    assert_eq!(status, 400);

    let (status, body) = send(&state, Method::PUT, &uri, Some(json!({"status": "Acknowledged"})));
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["sos"]["status"], "Acknowledged");

    let (status, _) = send(&state, Method::DELETE, &format!("/api/sos/{id}"), None);
    assert_eq!(status, 200);
    let (_, list) = send(&state, Method::GET, "/api/sos", None);
    assert_eq!(list, json!([]));
}

#[test]
fn residents_upsert_by_flat() {
    let state = test_state();

    let (status, first) = send(
        &state,
        Method::POST,
        "/api/residents",
        Some(json!({"name": "Kiran", "flatNumber": " A-101 "})),
    );
    assert_eq!(status, 200);
    assert_eq!(first["flatNumber"], "A-101");

    let (_, second) = send(
        &state,
        Method::POST,
        "/api/residents",
        Some(json!({"name": "Kiran Rao", "flatNumber": "A-101"})),
    );
    assert_eq!(second["_id"], first["_id"]);
    assert_eq!(second["name"], "Kiran Rao");

    let (_, list) = send(&state, Method::GET, "/api/residents", None);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let body = json!({"name": "No flat"});
    let (status, _) = send(&state, Method::POST, "/api/residents", Some(body));
    assert_eq!(status, 400);
}
