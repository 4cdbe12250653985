//! HTTP-facing error type and JSON error envelope.
//!
//! Every error response has the shape
//!
//! ```json
//! {
//!   "success": false,
//!   "error": {
//!     "code": "bad_gateway",
//!     "message": "could not obtain enough jokes from the external sources",
//!     "statusCode": 502,
//!     "details": { "successes": { "first": 0, "second": 5 } }
//!   }
//! }
//! ```

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::entities::UnknownProviderError;
use crate::domain::errors::{AggregationError, JokeError};

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: ErrorInfo,
}

/// Error payload embedded in the envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    BadGateway { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn bad_gateway(message: impl Into<String>, details: Value) -> Self {
        Self::BadGateway {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(self) -> ErrorInfo {
        let status_code = self.status().as_u16();
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::BadGateway { message, details } => ("bad_gateway", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            status_code,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AggregationError> for AppError {
    fn from(e: AggregationError) -> Self {
        let message = e.to_string();
        match e {
            AggregationError::InsufficientJokes { first, second } => AppError::bad_gateway(
                message,
                json!({ "successes": { "first": first, "second": second } }),
            ),
        }
    }
}

impl From<JokeError> for AppError {
    fn from(e: JokeError) -> Self {
        match e {
            JokeError::Upstream(upstream) => AppError::bad_gateway(
                upstream.to_string(),
                json!({ "source": upstream.provider().as_str() }),
            ),
            JokeError::SourceNotConfigured(provider) => AppError::internal(
                "Joke source is not configured",
                json!({ "source": provider.as_str() }),
            ),
            JokeError::NoSources => AppError::internal("No joke sources configured", Value::Null),
        }
    }
}

impl From<UnknownProviderError> for AppError {
    fn from(e: UnknownProviderError) -> Self {
        AppError::bad_request(e.to_string(), json!({ "source": e.0 }))
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::bad_request("Invalid query string", json!({ "reason": e.body_text() }))
    }
}
