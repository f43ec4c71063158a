// --- File: crates/convoke_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, validation_error, Context, ConvokeError,
    HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{client::HTTP_CLIENT, IntoHttpResponse};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
