//! JSON response envelope shared by every endpoint.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::WordweaveError;
use crate::validate::ValidationError;

/// Error code for anything that is not a validation failure.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Message returned with [`INTERNAL_ERROR`]; details stay in the logs.
pub const INTERNAL_MESSAGE: &str = "An internal error occurred. Please try again later.";

pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// `{success, data?, cached?, error?, timestamp}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T, cached: bool) -> Self {
        Self {
            success: true,
            data: Some(data),
            cached: Some(cached),
            error: None,
            timestamp: timestamp(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Failure response: a status code plus an error envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: String,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR, INTERNAL_MESSAGE)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err.code.as_str(), err.message)
    }
}

impl From<WordweaveError> for ApiError {
    fn from(err: WordweaveError) -> Self {
        error!(error = %err, "request failed");
        Self::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body: Envelope<()> = Envelope {
            success: false,
            data: None,
            cached: None,
            error: Some(ErrorBody {
                code: self.code,
                message: self.message,
            }),
            timestamp: timestamp(),
        };
        (self.status, Json(body)).into_response()
    }
}
