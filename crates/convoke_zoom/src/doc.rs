// --- File: crates/convoke_zoom/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::logic::{
    AddRegistrantRequest, CreateMeetingResponse, CreateWebinarRequest, CreateWebinarResponse,
    RecurrenceInput, RegistrantsQuery, WebinarSettingsInput,
};

#[utoipa::path(
    post,
    path = "/create-meeting", // Path relative to /api
    responses(
        (status = 200, description = "Meeting created", body = CreateMeetingResponse,
         example = json!({
             "meetingId": 12345678901_u64,
             "joinUrl": "https://zoom.us/j/12345678901",
             "startUrl": "https://zoom.us/s/12345678901"
         })
        ),
        (status = 500, description = "Token exchange or Zoom API failure",
         example = json!({"error": "Failed to create Zoom meeting"})
        )
    ),
    tag = "Zoom"
)]
fn doc_create_meeting_handler() {}

#[utoipa::path(
    post,
    path = "/create-webinar", // Path relative to /api
    request_body(content = CreateWebinarRequest, example = json!({
        "topic": "Quarterly Product Demo",
        "start_time": "2026-01-01T10:00:00Z",
        "type": 9,
        "duration": 60,
        "timezone": "Asia/Kolkata",
        "co_hosts": "cohost@example.com",
        "recurrence": {
            "type": 1,
            "repeat_interval": 1,
            "end_times": 5
        }
    })),
    responses(
        (status = 200, description = "Webinar created", body = CreateWebinarResponse),
        (status = 400, description = "Invalid webinar request", body = ErrorResponse,
         example = json!({"error": "topic required"})
        ),
        (status = 500, description = "Token exchange or Zoom API failure", body = ErrorResponse)
    ),
    tag = "Zoom"
)]
fn doc_create_webinar_handler() {}

#[utoipa::path(
    post,
    path = "/{webinar_id}/registrants", // Path relative to /api
    params(
        ("webinar_id" = String, Path, description = "Zoom webinar ID", example = "98765432109")
    ),
    request_body(content = AddRegistrantRequest, example = json!({
        "email": "attendee@example.com",
        "first_name": "Asha",
        "last_name": "Rao"
    })),
    responses(
        (status = 200, description = "Registrant created; Zoom's response returned verbatim"),
        (status = 500, description = "Token exchange or Zoom API failure", body = ErrorResponse)
    ),
    tag = "Zoom"
)]
fn doc_add_webinar_registrant_handler() {}

#[utoipa::path(
    get,
    path = "/{webinar_id}/registrants", // Path relative to /api
    params(
        ("webinar_id" = String, Path, description = "Zoom webinar ID", example = "98765432109"),
        RegistrantsQuery
    ),
    responses(
        (status = 200, description = "Registrant list; Zoom's response returned verbatim"),
        (status = 500, description = "Token exchange or Zoom API failure", body = ErrorResponse)
    ),
    tag = "Zoom"
)]
fn doc_list_webinar_registrants_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_create_meeting_handler,
        doc_create_webinar_handler,
        doc_add_webinar_registrant_handler,
        doc_list_webinar_registrants_handler
    ),
    components(
        schemas(
            CreateWebinarRequest,
            RecurrenceInput,
            WebinarSettingsInput,
            CreateWebinarResponse,
            CreateMeetingResponse,
            AddRegistrantRequest,
            RegistrantsQuery,
            ErrorResponse
        )
    ),
    tags(
        (name = "Zoom", description = "Zoom meeting and webinar relay API")
    ),
    servers(
        (url = "/api", description = "Zoom relay API server")
    )
)]
pub struct ZoomApiDoc;
