// --- File: crates/convoke_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Convoke errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for ConvokeError.
#[derive(Error, Debug)]
pub enum ConvokeError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ConvokeError {
    fn status_code(&self) -> u16 {
        match self {
            ConvokeError::HttpError(_) => 500,
            ConvokeError::ParseError(_) => 400,
            ConvokeError::ConfigError(_) => 500,
            ConvokeError::AuthError(_) => 401,
            ConvokeError::ValidationError(_) => 400,
            ConvokeError::ExternalServiceError { .. } => 502,
            ConvokeError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
///
/// This trait can be implemented by error types to provide a consistent way
/// to add context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, ConvokeError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, ConvokeError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, ConvokeError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| ConvokeError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, ConvokeError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| ConvokeError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for ConvokeError {
    fn from(err: reqwest::Error) -> Self {
        ConvokeError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for ConvokeError {
    fn from(err: serde_json::Error) -> Self {
        ConvokeError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ConvokeError {
    fn from(err: std::io::Error) -> Self {
        ConvokeError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> ConvokeError {
    ConvokeError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> ConvokeError {
    ConvokeError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> ConvokeError {
    ConvokeError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> ConvokeError {
    ConvokeError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("bad input").status_code(), 400);
        assert_eq!(config_error("missing section").status_code(), 500);
        assert_eq!(external_service_error("Zoom", "boom").status_code(), 502);
        assert_eq!(internal_error("oops").status_code(), 500);
        assert_eq!(ConvokeError::AuthError("denied".to_string()).status_code(), 401);
    }

    #[test]
    fn test_display_includes_service_name() {
        let err = external_service_error("Zoom", "upstream rejected the payload");
        assert_eq!(
            err.to_string(),
            "External service error: Zoom - upstream rejected the payload"
        );
    }

    #[test]
    fn test_context_wraps_source_error() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));

        let err = result.context("reading state file").unwrap_err();
        assert!(matches!(err, ConvokeError::InternalError(_)));
        assert_eq!(
            err.to_string(),
            "Internal error: reading state file: disk on fire"
        );
    }

    #[test]
    fn test_with_context_is_lazy() {
        let ok: Result<u8, std::io::Error> = Ok(7);
        let value = ok
            .with_context(|| -> String { panic!("must not be evaluated on the Ok path") })
            .unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ConvokeError = parse_err.into();
        assert!(matches!(err, ConvokeError::ParseError(_)));
        assert_eq!(err.status_code(), 400);
    }
}
