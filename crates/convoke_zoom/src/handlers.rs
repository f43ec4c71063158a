// --- File: crates/convoke_zoom/src/handlers.rs ---
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use convoke_config::AppConfig;
use std::sync::Arc;

use crate::error::ErrorResponse;
use crate::error::ZoomError;
use crate::logic::{
    add_webinar_registrant, create_meeting, create_webinar, list_webinar_registrants,
    AddRegistrantRequest, CreateMeetingResponse, CreateWebinarRequest, CreateWebinarResponse,
    RegistrantsQuery,
};

// --- State for Zoom Handlers ---
// Only needs AppConfig as reqwest::Client is static in convoke_common
#[derive(Clone)]
pub struct ZoomState {
    pub config: Arc<AppConfig>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn service_disabled() -> HandlerError {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse::new("Zoom service is disabled.")),
    )
}

/// Axum handler to create a Zoom webinar.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/create-webinar", // Path relative to /api
    request_body = CreateWebinarRequest,
    responses(
        (status = 200, description = "Webinar created", body = CreateWebinarResponse),
        (status = 400, description = "Invalid webinar request", body = ErrorResponse),
        (status = 500, description = "Token exchange or Zoom API failure", body = ErrorResponse)
    ),
    tag = "Zoom"
))]
pub async fn create_webinar_handler(
    State(state): State<Arc<ZoomState>>,
    Json(payload): Json<CreateWebinarRequest>,
) -> Result<Json<CreateWebinarResponse>, HandlerError> {
    if !state.config.use_zoom {
        return Err(service_disabled());
    }

    let zoom_config = match state.config.zoom.as_ref() {
        Some(cfg) => cfg,
        None => return Err(ZoomError::ConfigError.into_error_response()),
    };

    match create_webinar(zoom_config, payload).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => Err(err.into_error_response()),
    }
}

/// Axum handler to create a canned Zoom meeting. No request body.
#[axum::debug_handler]
pub async fn create_meeting_handler(
    State(state): State<Arc<ZoomState>>,
) -> Result<Json<CreateMeetingResponse>, HandlerError> {
    if !state.config.use_zoom {
        return Err(service_disabled());
    }

    let error_message = "Failed to create Zoom meeting";

    let zoom_config = match state.config.zoom.as_ref() {
        Some(cfg) => cfg,
        None => return Err(ZoomError::ConfigError.into_passthrough_error(error_message)),
    };

    match create_meeting(zoom_config).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => Err(err.into_passthrough_error(error_message)),
    }
}

/// Axum handler to register a person for a webinar. Zoom's response body is
/// forwarded verbatim.
#[axum::debug_handler]
pub async fn add_webinar_registrant_handler(
    State(state): State<Arc<ZoomState>>,
    Path(webinar_id): Path<String>,
    Json(payload): Json<AddRegistrantRequest>,
) -> Result<Json<serde_json::Value>, HandlerError> {
    if !state.config.use_zoom {
        return Err(service_disabled());
    }

    let error_message = format!("Error creating registrant for webinar: {}", webinar_id);

    let zoom_config = match state.config.zoom.as_ref() {
        Some(cfg) => cfg,
        None => return Err(ZoomError::ConfigError.into_passthrough_error(&error_message)),
    };

    match add_webinar_registrant(zoom_config, &webinar_id, payload).await {
        Ok(body) => Ok(Json(body)),
        Err(err) => Err(err.into_passthrough_error(&error_message)),
    }
}

/// Axum handler to list a webinar's registrants. Zoom's response body is
/// forwarded verbatim.
#[axum::debug_handler]
pub async fn list_webinar_registrants_handler(
    State(state): State<Arc<ZoomState>>,
    Path(webinar_id): Path<String>,
    Query(query): Query<RegistrantsQuery>,
) -> Result<Json<serde_json::Value>, HandlerError> {
    if !state.config.use_zoom {
        return Err(service_disabled());
    }

    let error_message = format!("Error fetching registrants for webinar: {}", webinar_id);

    let zoom_config = match state.config.zoom.as_ref() {
        Some(cfg) => cfg,
        None => return Err(ZoomError::ConfigError.into_passthrough_error(&error_message)),
    };

    match list_webinar_registrants(zoom_config, &webinar_id, query).await {
        Ok(body) => Ok(Json(body)),
        Err(err) => Err(err.into_passthrough_error(&error_message)),
    }
}
