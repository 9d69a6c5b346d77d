//! End-to-end CRUD tests for the greetings resource, run against a
//! migrated in-memory database through the full service.

use actix_web::{test, web};
use backend::test_support::{create_test_app, test_state};
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

const ENDPOINT: &str = "/greetings/";

async fn post_greeting<S>(app: &S, sender: &str, recipient: &str, message: &str) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::post()
        .uri(ENDPOINT)
        .set_json(json!({"sender": sender, "recipient": recipient, "message": message}))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_create_then_get_round_trip() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    let created = post_greeting(&app, "John", "Jane", "Hello").await;
    assert_eq!(created["sender"], "John");
    assert_eq!(created["recipient"], "Jane");
    assert_eq!(created["message"], "Hello");

    let id = created["id"].as_str().expect("id should be present");
    Uuid::parse_str(id).expect("id should be a UUID");
    let created_at = created["created_at"]
        .as_str()
        .expect("created_at should be present");
    OffsetDateTime::parse(created_at, &Rfc3339).expect("created_at should be RFC 3339");

    let req = test::TestRequest::get()
        .uri(&format!("{ENDPOINT}{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_list_returns_inserted_rows() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    post_greeting(&app, "Alice", "Bob", "Hi").await;
    post_greeting(&app, "John", "Jane", "Yo").await;

    let req = test::TestRequest::get().uri(ENDPOINT).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    let rows = body.as_array().expect("list should be an array");
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert!(row["id"].is_string());
        assert!(row["created_at"].is_string());
    }
    assert_eq!(rows[0]["sender"], "Alice");
    assert_eq!(rows[0]["recipient"], "Bob");
    assert_eq!(rows[0]["message"], "Hi");
    assert_eq!(rows[1]["sender"], "John");
    assert_eq!(rows[1]["recipient"], "Jane");
    assert_eq!(rows[1]["message"], "Yo");
}

#[actix_web::test]
async fn test_get_unknown_id_returns_404() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    let req = test::TestRequest::get()
        .uri(&format!("{ENDPOINT}{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_malformed_id_returns_400() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    let req = test::TestRequest::get()
        .uri(&format!("{ENDPOINT}not-a-uuid"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_patch_updates_only_supplied_fields() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    let created = post_greeting(&app, "Erin", "Fred", "Bonjour").await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("{ENDPOINT}{id}"))
        .set_json(json!({"message": "Howdy"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["sender"], "Erin");
    assert_eq!(updated["recipient"], "Fred");
    assert_eq!(updated["message"], "Howdy");
    assert_eq!(updated["created_at"], created["created_at"]);

    // Persisted, not just echoed
    let req = test::TestRequest::get()
        .uri(&format!("{ENDPOINT}{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["message"], "Howdy");
}

#[actix_web::test]
async fn test_patch_empty_payload_is_noop() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    let created = post_greeting(&app, "Alice", "Bob", "Hi").await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("{ENDPOINT}{id}"))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated, created);
}

#[actix_web::test]
async fn test_patch_unknown_id_returns_404_even_with_bad_payload() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    // Lookup happens before payload validation
    let req = test::TestRequest::patch()
        .uri(&format!("{ENDPOINT}{}", Uuid::new_v4()))
        .set_json(json!({"sender": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_patch_validation_failure_leaves_row_unchanged() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    let created = post_greeting(&app, "Alice", "Bob", "Hi").await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("{ENDPOINT}{id}"))
        .set_json(json!({"message": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 422);

    let req = test::TestRequest::get()
        .uri(&format!("{ENDPOINT}{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["message"], "Hi");
}

#[actix_web::test]
async fn test_delete_removes_row_then_404s() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    let created = post_greeting(&app, "Gabby", "Harold", "Yo").await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("{ENDPOINT}{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": true}));

    let req = test::TestRequest::get()
        .uri(&format!("{ENDPOINT}{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    // Second delete of the same id is a 404, not an idempotent success
    let req = test::TestRequest::delete()
        .uri(&format!("{ENDPOINT}{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_create_validation_failures_write_nothing() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    let bad_payloads = [
        json!({"sender": "", "recipient": "Bob", "message": "Hi"}),
        json!({"sender": "a".repeat(51), "recipient": "Bob", "message": "Hi"}),
        json!({"sender": "Alice", "recipient": "b".repeat(51), "message": "Hi"}),
        json!({"sender": "Alice", "recipient": "Bob", "message": "c".repeat(281)}),
        json!({"sender": "Alice", "recipient": "Bob", "message": ""}),
    ];

    for payload in bad_payloads {
        let req = test::TestRequest::post()
            .uri(ENDPOINT)
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 422, "payload: {payload}");
    }

    let req = test::TestRequest::get().uri(ENDPOINT).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_create_with_missing_field_is_422() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    let req = test::TestRequest::post()
        .uri(ENDPOINT)
        .set_json(json!({"sender": "Alice"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 422);
}

#[actix_web::test]
async fn test_boundary_lengths_are_accepted() {
    let app = create_test_app(web::Data::new(test_state().await)).await;

    let created = post_greeting(
        &app,
        &"a".repeat(50),
        &"b".repeat(50),
        &"c".repeat(280),
    )
    .await;
    assert_eq!(created["message"].as_str().unwrap().len(), 280);
}
