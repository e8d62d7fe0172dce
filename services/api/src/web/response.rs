//! services/api/src/web/response.rs
//!
//! The uniform JSON envelope every API response goes through.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Serializes `payload` and writes it with `status` and a JSON content type.
///
/// A payload that fails to serialize yields a bare 500 with no body.
pub fn respond_with_json<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            error!("Error marshalling JSON: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn respond_with_error(status: StatusCode, message: impl Into<String>) -> Response {
    respond_with_json(
        status,
        &ErrorResponse {
            error: message.into(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    #[tokio::test]
    async fn json_payload_is_written_with_status_and_content_type() {
        let response = respond_with_json(StatusCode::CREATED, &serde_json::json!({"valid": true}));
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"valid":true}"#);
    }

    #[tokio::test]
    async fn error_is_wrapped_in_envelope() {
        let response = respond_with_error(StatusCode::BAD_REQUEST, "Chirp is too long");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Chirp is too long"}"#);
    }

    #[tokio::test]
    async fn serialization_failure_degrades_to_bare_500() {
        let response = respond_with_json(StatusCode::OK, &Unserializable);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }
}
