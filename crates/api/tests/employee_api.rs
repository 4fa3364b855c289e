//! HTTP-level integration tests for the `/api/employee` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn employee_json(first: &str, last: &str) -> serde_json::Value {
    json!({
        "firstName": first,
        "lastName": last,
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "phone": "555-0100",
        "jobTitle": "Developer",
        "salary": 50000,
        "hireDate": "2023-01-15T00:00:00Z",
        "isActive": true,
    })
}

// ---------------------------------------------------------------------------
// Create / Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_201_with_location(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(&app, "/api/employee", employee_json("Ada", "Lovelace")).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get("location")
        .expect("Missing Location header")
        .to_str()
        .unwrap()
        .to_string();

    let json = body_json(response).await;
    let id = json["id"].as_str().expect("id should be set");
    assert_eq!(location, format!("/api/employee/{id}"));
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["lastName"], "Lovelace");
    assert_eq!(json["email"], "ada.lovelace@example.com");
    assert_eq!(json["salary"], 50000);
    assert_eq!(json["isActive"], true);
    // Server-set timestamps are not part of the wire contract.
    assert!(json.get("createdAt").is_none());
    assert!(json.get("updatedAt").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn phone_is_optional(pool: PgPool) {
    let app = build_test_app(pool);
    let mut body = employee_json("Grace", "Hopper");
    body.as_object_mut().unwrap().remove("phone");

    let response = post_json(&app, "/api/employee", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["phone"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_id_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let mut body = employee_json("Ada", "Lovelace");
    body["id"] = json!(Uuid::new_v4().to_string());

    let response = post_json(&app, "/api/employee", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn post_then_get_round_trips(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(&app, "/api/employee", employee_json("Ada", "Lovelace")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;

    let id = created["id"].as_str().unwrap();
    let response = get(&app, &format!("/api/employee/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_all_employees(pool: PgPool) {
    let app = build_test_app(pool);

    for (first, last) in [("Ada", "Lovelace"), ("Grace", "Hopper")] {
        let response = post_json(&app, "/api/employee", employee_json(first, last)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(&app, "/api/employee").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_unknown_id_returns_404_without_body(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(&app, &format!("/api/employee/{}", Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_replaces_all_fields(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/employee", employee_json("Ada", "Lovelace")).await;
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();

    let mut body = employee_json("Ada", "King");
    body["id"] = json!(id);
    body["jobTitle"] = json!("Lead Developer");
    body["salary"] = json!(65000);
    body["isActive"] = json!(false);

    let response = put_json(&app, "/api/employee", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["lastName"], "King");
    assert_eq!(updated["jobTitle"], "Lead Developer");
    assert_eq!(updated["salary"], 65000);
    assert_eq!(updated["isActive"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_without_id_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(&app, "/api/employee", employee_json("Ada", "Lovelace")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["Message"].as_str().unwrap().contains("Id is required"));
    assert!(json["Timestamp"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_unknown_id_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let mut body = employee_json("Ada", "Lovelace");
    body["id"] = json!(Uuid::new_v4().to_string());

    let response = put_json(&app, "/api/employee", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_the_row(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/employee", employee_json("Ada", "Lovelace")).await;
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = delete(&app, &format!("/api/employee?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/employee/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unknown_id_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(&app, &format!("/api/employee?id={}", Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
