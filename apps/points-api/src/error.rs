//! # API Error Type
//!
//! Unified error type for HTTP handlers and debug file mode.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Receipt Points                         │
//! │                                                                         │
//! │  POST /receipts/process                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON? ─────── JsonRejection ─────────────────┐             │  │
//! │  │         │                                         │             │  │
//! │  │         ▼                                         ▼             │  │
//! │  │  Bad field? ─── RegistryError::Rejected ──── ApiError ─────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  HTTP/1.1 400 Bad Request                                               │
//! │  { "code": "MALFORMED_FIELD", "message": "Malformed total ..." }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use points_core::{CoreError, ValidationError};
use points_registry::RegistryError;
use serde::Serialize;

/// Error body returned by every failing endpoint.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Receipt not found: 7fb1377b-..."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Payload structure is unusable (400)
    ValidationError,

    /// A money, date or time field did not parse (400)
    MalformedField,

    /// Unknown receipt id (404)
    NotFound,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status sent alongside this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError | ErrorCode::MalformedField => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            malformed @ CoreError::MalformedField { .. } => {
                ApiError::new(ErrorCode::MalformedField, malformed.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Rejected(e) => e.into(),
        }
    }
}

/// Bodies that are not JSON, or are missing a receipt field.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

/// Receipt files that are not valid receipt JSON.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Invalid receipt JSON: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.code == ErrorCode::Internal {
            tracing::error!(message = %self.message, "Request failed");
        } else {
            tracing::warn!(code = ?self.code, message = %self.message, "Request rejected");
        }
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_field_maps_to_400() {
        let err: ApiError = CoreError::malformed("total", "abc", "not a decimal number").into();
        assert_eq!(err.code, ErrorCode::MalformedField);
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
        assert!(err.message.contains("total"));
    }

    #[test]
    fn test_validation_through_registry() {
        let err: ApiError = RegistryError::Rejected(CoreError::Validation(
            ValidationError::Required {
                field: "retailer".to_string(),
            },
        ))
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "retailer is required");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Receipt", "abc");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Receipt not found: abc");
        assert_eq!(err.code.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_status() {
        assert_eq!(
            ApiError::internal("boom").code.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
