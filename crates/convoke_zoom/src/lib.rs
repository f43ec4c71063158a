// --- File: crates/convoke_zoom/src/lib.rs ---

// Declare modules within this crate
pub mod auth;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod routes;

// Re-export for main backend
pub use error::{ErrorResponse, ZoomError};
pub use handlers::ZoomState;
pub use logic::{build_webinar_payload, CreateWebinarRequest, WebinarPayload};
pub use routes::routes;
