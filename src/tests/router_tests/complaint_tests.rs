use crate::tests::utils::{send, test_state};
use http::Method;
use serde_json::json;

#[test]
fn complaint_lifecycle_end_to_end() {
    let state = test_state();

    // 1. Resident files a complaint
    let (status, created) = send(
        &state,
        Method::POST,
        "/api/complaints",
        Some(json!({"name": "Aman", "flatNumber": "A-101", "details": "Lift not working"})),
    );
    assert_eq!(status, 201);
    assert_eq!(created["status"], "Pending");
    assert_eq!(created["text"], "Lift not working");
    let id = created["_id"].as_str().unwrap().to_string();

    // 2. Guard advances it
    let (status, updated) = send(
        &state,
        Method::PUT,
        &format!("/api/complaints/{id}/status"),
        Some(json!({"status": "In Progress"})),
    );
    assert_eq!(status, 200);
    assert_eq!(updated["status"], "In Progress");

    // 3. Listing reflects the new status
    let (status, list) = send(&state, Method::GET, "/api/complaints", None);
    assert_eq!(status, 200);
    let entry = list
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["_id"] == id.as_str())
        .expect("complaint missing from list");
    assert_eq!(entry["status"], "In Progress");

    let (status, single) = send(&state, Method::GET, &format!("/api/complaints/{id}"), None);
    assert_eq!(status, 200);
    assert_eq!(single["status"], "In Progress");

    // 4. Delete, then it is gone
    let (status, body) = send(&state, Method::DELETE, &format!("/api/complaints/{id}"), None);
    assert_eq!(status, 200);
    assert_eq!(body, json!({"success": true}));

    let (status, body) = send(&state, Method::GET, &format!("/api/complaints/{id}"), None);
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Complaint not found");

    let (status, body) = send(
        &state,
        Method::PUT,
        &format!("/api/complaints/{id}/status"),
        Some(json!({"status": "Resolved"})),
    );
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Complaint not found");

    let (status, _) = send(&state, Method::DELETE, &format!("/api/complaints/{id}"), None);
    assert_eq!(status, 404);
}

#[test]
fn bare_paths_without_api_prefix_work() {
    let state = test_state();
    let (status, created) = send(
        &state,
        Method::POST,
        "/complaints",
        Some(json!({"name": "Aman", "flatNumber": "A-101", "complaintText": "Leak in bathroom"})),
    );
    assert_eq!(status, 201);
    assert_eq!(created["text"], "Leak in bathroom");
    assert_eq!(created["complaintText"], "Leak in bathroom");
    assert!(created.get("details").is_none());

    let (status, list) = send(&state, Method::GET, "/complaints", None);
    assert_eq!(status, 200);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[test]
fn create_without_any_text_is_rejected_and_not_stored() {
    let state = test_state();
    let (status, body) = send(
        &state,
        Method::POST,
        "/api/complaints",
        Some(json!({"name": "Aman", "flatNumber": "A-101", "details": "", "complaintText": ""})),
    );
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("details"));

    let (_, list) = send(&state, Method::GET, "/api/complaints", None);
    assert_eq!(list, json!([]));
}

#[test]
fn create_without_flat_number_is_rejected() {
    let state = test_state();
    let (status, body) = send(
        &state,
        Method::POST,
        "/api/complaints",
        Some(json!({"name": "Aman", "details": "Lift"})),
    );
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Missing required field: flatNumber");
}

#[test]
fn status_update_requires_a_valid_status() {
    let state = test_state();
    let (_, created) = send(
        &state,
        Method::POST,
        "/api/complaints",
        Some(json!({"name": "Aman", "flatNumber": "A-101", "details": "Lift"})),
    );
    let uri = format!("/api/complaints/{}/status", created["_id"].as_str().unwrap());

    let (status, body) = send(&state, Method::PUT, &uri, None);
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Status is required");

    let (status, _) = send(&state, Method::PUT, &uri, Some(json!({"status": "Cancelled"})));
    assert_eq!(status, 400);

    let (status, _) = send(
        &state,
        Method::PUT,
        "/api/complaints/000000000000000000000000/status",
        Some(json!({"status": "Resolved"})),
    );
    assert_eq!(status, 404);
}

#[test]
fn full_update_changes_only_given_fields() {
    let state = test_state();
    let (_, created) = send(
        &state,
        Method::POST,
        "/api/complaints",
        Some(json!({"name": "Aman", "flatNumber": "A-101", "details": "Lift"})),
    );
    let uri = format!("/api/complaints/{}", created["_id"].as_str().unwrap());

    let (status, updated) = send(
        &state,
        Method::PUT,
        &uri,
        Some(json!({"details": "  Lift stuck on 3rd floor ", "status": "Resolved"})),
    );
    assert_eq!(status, 200);
    assert_eq!(updated["details"], "Lift stuck on 3rd floor");
    assert_eq!(updated["text"], "Lift stuck on 3rd floor");
    assert_eq!(updated["status"], "Resolved");
    assert_eq!(updated["name"], "Aman");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (status, _) = send(
        &state,
        Method::PUT,
        "/api/complaints/does-not-exist",
        Some(json!({"name": "x"})),
    );
    assert_eq!(status, 404);
}

#[test]
fn list_filters_by_status_query() {
    let state = test_state();
    for (name, details) in [("a", "one"), ("b", "two")] {
        send(
            &state,
            Method::POST,
            "/api/complaints",
            Some(json!({"name": name, "flatNumber": "A-1", "details": details})),
        );
    }
    let (_, list) = send(&state, Method::GET, "/api/complaints", None);
    let first_id = list[0]["_id"].as_str().unwrap().to_string();
    send(
        &state,
        Method::PUT,
        &format!("/api/complaints/{first_id}/status"),
        Some(json!({"status": "In Progress"})),
    );

    let (status, filtered) = send(&state, Method::GET, "/api/complaints?status=In+Progress", None);
    assert_eq!(status, 200);
    assert_eq!(filtered.as_array().unwrap().len(), 1);
    assert_eq!(filtered[0]["_id"], first_id.as_str());

    let (status, _) = send(&state, Method::GET, "/api/complaints?status=Closed", None);
    assert_eq!(status, 400);
}
