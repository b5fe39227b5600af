use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Top-level message for every upstream failure. Part of the public contract.
pub const ANALYSIS_FAILED: &str = "Failed to analyze resume";

/// Top-level message for bodies the JSON extractor refused.
pub const INVALID_BODY: &str = "Invalid request body";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Payload failed a shape or length check. The message is returned verbatim.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] LlmError),

    #[error("Bad request body: {message}")]
    BadBody { status: StatusCode, message: String },
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    message: None,
                },
            ),
            AppError::Upstream(e) => {
                tracing::error!("Error analyzing resume: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: ANALYSIS_FAILED.to_string(),
                        message: Some(e.to_string()),
                    },
                )
            }
            AppError::BadBody { status, message } => {
                tracing::warn!("Rejected request body ({status}): {message}");
                (
                    status,
                    ErrorResponse {
                        error: INVALID_BODY.to_string(),
                        message: Some(message),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let response = AppError::InvalidInput("atsScore is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_maps_to_500() {
        let response =
            AppError::Upstream(LlmError::Other("network timeout".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_omits_absent_message() {
        let body = serde_json::to_value(ErrorResponse {
            error: "x".to_string(),
            message: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"error": "x"}));
    }
}
