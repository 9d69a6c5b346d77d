//! Assertion helpers for the stable error contract.
//!
//! Every error that reaches the boundary serializes as
//! `{"detail": <message or structured list>}` and carries an
//! `x-trace-id` header. These helpers validate that contract without
//! depending on backend types.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Local mirror of the backend's error body.
#[derive(Debug, Deserialize)]
struct ErrorBodyLike {
    detail: Value,
}

/// Assert that response parts conform to the error contract:
/// expected status, parseable `{"detail": ...}` body, `x-trace-id`
/// header present, and (optionally) a substring of the rendered detail.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike =
        serde_json::from_slice(body_bytes).expect("error body should be valid JSON");

    headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present");

    if let Some(needle) = expected_detail_contains {
        let rendered = body.detail.to_string();
        assert!(
            rendered.contains(needle),
            "detail {rendered} should contain {needle}"
        );
    }
}

/// Assert that the detail is a field-violation list mentioning exactly
/// the given fields, in any order.
pub fn assert_violation_fields(body_bytes: &[u8], expected_fields: &[&str]) {
    let body: ErrorBodyLike =
        serde_json::from_slice(body_bytes).expect("error body should be valid JSON");

    let entries = body
        .detail
        .as_array()
        .expect("validation detail should be a list");

    let mut fields: Vec<&str> = entries
        .iter()
        .map(|entry| {
            entry
                .get("field")
                .and_then(Value::as_str)
                .expect("violation entry should name a field")
        })
        .collect();
    fields.sort_unstable();

    let mut expected: Vec<&str> = expected_fields.to_vec();
    expected.sort_unstable();

    assert_eq!(fields, expected);
}
