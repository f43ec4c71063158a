// --- File: crates/convoke_zoom/src/error.rs ---
use axum::{http::StatusCode, Json};
use convoke_common::{external_service_error, ConvokeError, HttpStatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Zoom-specific error types.
#[derive(Error, Debug)]
pub enum ZoomError {
    /// Token exchange with the Zoom OAuth endpoint failed
    #[error("Zoom token exchange failed: {0}")]
    AuthError(String),

    /// Caller-supplied webinar request failed a required-field or cross-field rule
    #[error("Invalid webinar request: {0}")]
    ValidationError(String),

    /// Error returned by the Zoom API
    #[error("Zoom API returned an error: {message} (Status: {status_code})")]
    ApiError {
        status_code: u16,
        code: Option<i64>,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Error occurred during a Zoom API request
    #[error("Zoom API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error parsing a Zoom API response
    #[error("Failed to parse Zoom API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Zoom configuration
    #[error("Zoom configuration missing or incomplete")]
    ConfigError,

    /// Internal processing error
    #[error("Internal processing error: {0}")]
    InternalError(String),
}

/// The single serialization shape for every error body this crate returns.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
    #[cfg_attr(feature = "openapi", schema(example = "Zoom API Error: rate limited"))]
    pub error: String,
    /// Zoom's machine-readable error code, when the upstream supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = 300))]
    pub code: Option<i64>,
    /// Raw upstream error body, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            code: None,
            details: None,
        }
    }
}

/// Generic message returned whenever the token exchange fails. Upstream
/// credential-exchange diagnostics stay in the logs and are never forwarded
/// to callers.
const TOKEN_FAILURE_MESSAGE: &str = "Failed to get Zoom access token";

impl ZoomError {
    /// Maps the error for the webinar creation endpoint: validation failures
    /// keep their message on a 400, upstream rejections carry the upstream
    /// status plus Zoom's code and error body, everything else collapses to a
    /// generic 500.
    pub fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ZoomError::AuthError(detail) => {
                error!("[Zoom] Token exchange failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(TOKEN_FAILURE_MESSAGE)),
                )
            }
            ZoomError::ValidationError(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
            }
            ZoomError::ApiError {
                status_code,
                code,
                message,
                details,
            } => {
                let status = StatusCode::from_u16(status_code)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (
                    status,
                    Json(ErrorResponse {
                        error: format!("Zoom API Error: {}", message),
                        code,
                        details,
                    }),
                )
            }
            other => {
                error!("[Zoom] Webinar creation failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to create Zoom webinar")),
                )
            }
        }
    }

    /// Maps the error for the passthrough endpoints, which keep a fixed 500
    /// `{error}` shape with the given message: only token failures are
    /// distinguished, with their own fixed message.
    pub fn into_passthrough_error(self, message: &str) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ZoomError::AuthError(detail) => {
                error!("[Zoom] Token exchange failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(TOKEN_FAILURE_MESSAGE)),
                )
            }
            other => {
                error!("[Zoom] {}: {}", message, other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(message)),
                )
            }
        }
    }
}

/// Convert ZoomError to ConvokeError
impl From<ZoomError> for ConvokeError {
    fn from(err: ZoomError) -> Self {
        match err {
            ZoomError::AuthError(msg) => {
                ConvokeError::AuthError(format!("Zoom token exchange failed: {}", msg))
            }
            ZoomError::ValidationError(msg) => ConvokeError::ValidationError(msg),
            ZoomError::ApiError {
                status_code,
                message,
                ..
            } => external_service_error(
                "Zoom API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            ZoomError::RequestError(e) => {
                ConvokeError::HttpError(format!("Zoom request error: {}", e))
            }
            ZoomError::ParseError(e) => {
                ConvokeError::ParseError(format!("Zoom response parse error: {}", e))
            }
            ZoomError::ConfigError => {
                ConvokeError::ConfigError("Zoom configuration missing or incomplete".to_string())
            }
            ZoomError::InternalError(msg) => {
                ConvokeError::InternalError(format!("Zoom internal error: {}", msg))
            }
        }
    }
}

/// Implement HttpStatusCode for ZoomError to provide a consistent way to
/// convert ZoomError to HTTP status codes.
impl HttpStatusCode for ZoomError {
    fn status_code(&self) -> u16 {
        match self {
            ZoomError::AuthError(_) => 500,
            ZoomError::ValidationError(_) => 400,
            ZoomError::ApiError { status_code, .. } => *status_code,
            ZoomError::RequestError(_) => 500,
            ZoomError::ParseError(_) => 500,
            ZoomError::ConfigError => 500,
            ZoomError::InternalError(_) => 500,
        }
    }
}
