use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// JSON extractor with standardized error handling.
///
/// Unreadable or syntactically broken bodies become a 400; bodies that
/// parse but carry wrong or missing fields become a 422, matching the
/// validation contract of the API.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(_req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    debug!(trace_id = %trace_ctx::trace_id(), error = %e, "failed to read request body");
                    AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Failed to read request body".to_string(),
                    )
                })?;
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(
                    trace_id = %trace_ctx::trace_id(),
                    body_size = body.len(),
                    "JSON parsing failed: {e}"
                );
                classify_json_error(&e)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Map a serde_json error onto the API error taxonomy with a sanitized
/// message.
fn classify_json_error(error: &JsonError) -> AppError {
    match error.classify() {
        serde_json::error::Category::Data => AppError::validation_message(
            "wrong or missing fields in request body".to_string(),
        ),
        serde_json::error::Category::Syntax => {
            let line = error.line();
            AppError::bad_request(ErrorCode::BadRequest, format!("Invalid JSON at line {line}"))
        }
        serde_json::error::Category::Eof => AppError::bad_request(
            ErrorCode::BadRequest,
            "Invalid JSON: unexpected end of input".to_string(),
        ),
        serde_json::error::Category::Io => AppError::bad_request(
            ErrorCode::BadRequest,
            "Invalid JSON: I/O error while reading body".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::FromRequest;
    use serde::Deserialize;

    use super::ValidatedJson;

    #[derive(Debug, Deserialize)]
    struct TestPayload {
        name: String,
        count: u32,
    }

    #[actix_web::test]
    async fn test_valid_body_parses() {
        let (req, mut payload) = TestRequest::post()
            .set_payload(r#"{"name": "x", "count": 3}"#)
            .to_http_parts();

        let parsed = ValidatedJson::<TestPayload>::from_request(&req, &mut payload)
            .await
            .unwrap();
        assert_eq!(parsed.name, "x");
        assert_eq!(parsed.count, 3);
    }

    #[actix_web::test]
    async fn test_truncated_body_is_bad_request() {
        let (req, mut payload) = TestRequest::post()
            .set_payload(r#"{"name": "#)
            .to_http_parts();

        let err = ValidatedJson::<TestPayload>::from_request(&req, &mut payload)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_missing_field_is_validation_error() {
        let (req, mut payload) = TestRequest::post()
            .set_payload(r#"{"name": "x"}"#)
            .to_http_parts();

        let err = ValidatedJson::<TestPayload>::from_request(&req, &mut payload)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
