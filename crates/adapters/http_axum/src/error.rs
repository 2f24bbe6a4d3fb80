//! HTTP error response mapping.
//!
//! | error kind   | status |
//! |--------------|--------|
//! | `Validation` | 400    |
//! | `NotFound`   | 404    |
//! | `Conflict`   | 409    |
//! | `Storage`    | 500    |
//!
//! Malformed requests that never reach the service (bad path id, unknown
//! query value, unreadable JSON body) are reported as 400 with the same body.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devices_domain::error::{DevicesError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

/// Maps [`DevicesError`] and request rejections to an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// An error returned by the application layer.
    Domain(DevicesError),
    /// The request could not be decoded.
    Rejected(String),
}

impl From<DevicesError> for ApiError {
    fn from(err: DevicesError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected(rejection.body_text())
    }
}

fn status_for(err: &DevicesError) -> (StatusCode, &'static str) {
    match err {
        DevicesError::Validation(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        DevicesError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        DevicesError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
        DevicesError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Domain(err) => {
                let (status, code) = status_for(&err);
                let message = match err {
                    DevicesError::Validation(err) => {
                        tracing::warn!(error = %err, "validation failed");
                        err.to_string()
                    }
                    DevicesError::NotFound(err) => {
                        tracing::warn!(error = %err, "not found");
                        err.to_string()
                    }
                    DevicesError::Conflict(err) => {
                        tracing::warn!(error = %err, "conflict");
                        err.to_string()
                    }
                    DevicesError::Storage(err) => {
                        tracing::error!(error = %err, "storage error");
                        "internal server error".to_string()
                    }
                };
                (status, code, message)
            }
            Self::Rejected(message) => {
                tracing::warn!(%message, "request rejected");
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
            }
        };

        (status, Json(ErrorBody { code, message })).into_response()
    }
}
