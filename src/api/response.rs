//! Response types for the leave desk API.
//!
//! This module defines the error response structures and the mapping from
//! pipeline errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PipelineError> for ApiErrorResponse {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::InvalidDate { value } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DATE",
                    "Invalid date format. Use YYYY-MM-DD.",
                    format!("date_of_joining '{}' is not a YYYY-MM-DD date", value),
                ),
            ),
            PipelineError::InvalidField { field, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_FIELD",
                    format!("Invalid field '{}': {}", field, message),
                    "The leave request contains invalid information",
                ))
            }
            PipelineError::Store(err) => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "STORE_UNAVAILABLE",
                    "The leave request could not be stored",
                    err.to_string(),
                ),
            },
            err @ (PipelineError::ConfigNotFound { .. }
            | PipelineError::ConfigParseError { .. }
            | PipelineError::InvalidConfig { .. }) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    err.to_string(),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_date_maps_to_bad_request() {
        let response: ApiErrorResponse = PipelineError::InvalidDate {
            value: "01/02/2024".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_DATE");
        assert_eq!(response.error.message, "Invalid date format. Use YYYY-MM-DD.");
        assert!(response.error.details.unwrap().contains("01/02/2024"));
    }

    #[test]
    fn test_invalid_field_maps_to_bad_request() {
        let response: ApiErrorResponse = PipelineError::InvalidField {
            field: "email".to_string(),
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_FIELD");
    }

    #[test]
    fn test_store_error_maps_to_service_unavailable() {
        let response: ApiErrorResponse =
            PipelineError::Store(StoreError::Unavailable("timeout".to_string())).into();
        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.error.code, "STORE_UNAVAILABLE");
        assert_eq!(
            response.error.details.as_deref(),
            Some("store unavailable: timeout")
        );
    }
}
