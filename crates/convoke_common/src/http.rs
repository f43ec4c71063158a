// --- File: crates/convoke_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{ConvokeError, HttpStatusCode};

// Include the client module
pub mod client;

/// Extension trait for ConvokeError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for ConvokeError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error_message = self.to_string();

        // Create a JSON response with the error message
        let body = Json(json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }));

        // Combine the status code and body into a response
        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for ConvokeError to make it easier to use in Axum handlers.
impl IntoResponse for ConvokeError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
