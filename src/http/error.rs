//! Request-boundary errors and their HTTP mapping.
//!
//! Every handler failure ends up here. Known chirp rejections become 400s
//! with a fixed message, a failed admin check becomes a 401, and anything
//! else is logged and reported as a generic 500 without detail.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chirps::ChirpError;

const UNCLASSIFIED_MESSAGE: &str = "Something went wrong on our end";

/// JSON error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Chirp(#[from] ChirpError),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("{0}")]
    Unclassified(String),
}

impl ApiError {
    /// Wrap any unexpected failure.
    pub fn unclassified(err: impl std::fmt::Display) -> Self {
        ApiError::Unclassified(err.to_string())
    }

    /// Status code and client-facing message for this error.
    pub fn classify(&self) -> (StatusCode, String) {
        match self {
            ApiError::Chirp(ChirpError::MalformedJson) => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON in request body".to_string(),
            ),
            ApiError::Chirp(ChirpError::MissingOrInvalidField) => (
                StatusCode::BAD_REQUEST,
                "Invalid chirp: body must be a string".to_string(),
            ),
            ApiError::Chirp(ChirpError::TooLong { max_length, .. }) => (
                StatusCode::BAD_REQUEST,
                format!("Chirp is too long. Max length is {}", max_length),
            ),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message.clone()),
            ApiError::Unclassified(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UNCLASSIFIED_MESSAGE.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();
        match &self {
            ApiError::Unclassified(detail) => {
                tracing::error!(error = %detail, "Unhandled error");
            }
            ApiError::Chirp(err) => {
                tracing::debug!(error = %err, status = %status, "Chirp rejected");
            }
            ApiError::Unauthorized(message) => {
                tracing::debug!(reason = %message, "Request unauthorized");
            }
        }
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// `CatchPanicLayer` handler: a panicking handler gets the generic 500.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Unclassified(format!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_classification_table() {
        let cases = [
            (
                ApiError::from(ChirpError::MalformedJson),
                400,
                "Invalid JSON in request body",
            ),
            (
                ApiError::from(ChirpError::MissingOrInvalidField),
                400,
                "Invalid chirp: body must be a string",
            ),
            (
                ApiError::from(ChirpError::TooLong {
                    length: 141,
                    max_length: 140,
                }),
                400,
                "Chirp is too long. Max length is 140",
            ),
            (
                ApiError::Unauthorized("Missing or invalid admin token".into()),
                401,
                "Missing or invalid admin token",
            ),
            (
                ApiError::unclassified("disk on fire"),
                500,
                "Something went wrong on our end",
            ),
        ];

        for (err, status, message) in cases {
            let (got_status, got_message) = err.classify();
            assert_eq!(got_status.as_u16(), status);
            assert_eq!(got_message, message);
        }
    }

    #[tokio::test]
    async fn test_response_is_json_envelope() {
        let response = ApiError::from(ChirpError::MissingOrInvalidField).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(
            body_of(response).await.error,
            "Invalid chirp: body must be a string"
        );
    }

    #[tokio::test]
    async fn test_unclassified_hides_detail() {
        let response = ApiError::unclassified("secret connection string").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.error, UNCLASSIFIED_MESSAGE);
    }

    #[tokio::test]
    async fn test_panic_payload_becomes_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.error, UNCLASSIFIED_MESSAGE);
    }
}
