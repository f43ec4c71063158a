// --- File: crates/convoke_zoom/src/logic.rs ---
use chrono::{SecondsFormat, Utc};
use convoke_config::ZoomConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

// Import the ZoomError from the error module
use crate::error::ZoomError;

// Import the auth and HTTP client plumbing
use crate::auth::fetch_access_token;
use convoke_common::HTTP_CLIENT;

// Conditionally import ToSchema if openapi feature is enabled
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Data Structures ---

/// Request from our frontend to create a Zoom webinar.
#[derive(Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateWebinarRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Quarterly Product Demo"))]
    pub topic: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "2026-01-01T10:00:00Z"))]
    pub start_time: Option<String>,
    /// Zoom webinar type: 5 = scheduled, 9 = recurring with fixed times
    #[serde(rename = "type")]
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub webinar_type: Option<i64>,
    #[cfg_attr(feature = "openapi", schema(example = 60))]
    pub duration: Option<i64>,
    #[cfg_attr(feature = "openapi", schema(example = "Asia/Kolkata"))]
    pub timezone: Option<String>,
    /// Semicolon-separated host emails, mapped to Zoom's `alternative_hosts`
    #[cfg_attr(feature = "openapi", schema(example = "cohost@example.com"))]
    pub co_hosts: Option<String>,
    pub recurrence: Option<RecurrenceInput>,
    pub settings: Option<WebinarSettingsInput>,
}

/// Caller-supplied recurrence rule. Only consulted when the webinar type is 9.
#[derive(Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RecurrenceInput {
    /// 1 = daily, 2 = weekly, 3 = monthly
    #[serde(rename = "type")]
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub recurrence_type: Option<i64>,
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub repeat_interval: Option<i64>,
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub end_times: Option<i64>,
    #[cfg_attr(feature = "openapi", schema(example = "2026-06-01T10:00:00Z"))]
    pub end_date_time: Option<String>,
    /// Comma-separated Zoom weekday numbers, e.g. "2,4" for Monday and Wednesday
    #[cfg_attr(feature = "openapi", schema(example = "2,4"))]
    pub weekly_days: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = 15))]
    pub monthly_day: Option<i64>,
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub monthly_week: Option<i64>,
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub monthly_week_day: Option<i64>,
}

/// Caller overrides for individual webinar settings. Every field falls back
/// to a fixed default when omitted. Registration policy fields are not
/// overridable and are absent here.
#[derive(Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct WebinarSettingsInput {
    pub host_video: Option<bool>,
    pub panelists_video: Option<bool>,
    pub practice_session: Option<bool>,
    pub registrants_email_notification: Option<bool>,
    pub meeting_authentication: Option<bool>,
    pub q_and_a: Option<bool>,
    pub enable_chat: Option<bool>,
    pub allow_multiple_devices: Option<bool>,
    #[cfg_attr(feature = "openapi", schema(example = "none"))]
    pub auto_recording: Option<String>,
    pub on_demand: Option<bool>,
}

/// Fully-resolved webinar payload sent to the Zoom API. Every field Zoom
/// requires is present, with either the caller's value or its documented
/// default; `recurrence` is present exactly when the webinar type is 9.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WebinarPayload {
    pub topic: String,
    #[serde(rename = "type")]
    pub webinar_type: i64,
    pub start_time: String,
    pub duration: i64,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<WebinarRecurrence>,
    pub settings: WebinarSettings,
}

/// Minimal recurrence object: `type`, `repeat_interval`, the one chosen end
/// condition, and exactly the type-specific fields. Nothing extraneous.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WebinarRecurrence {
    #[serde(rename = "type")]
    pub recurrence_type: i64,
    pub repeat_interval: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_times: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_week: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_week_day: Option<i64>,
}

/// Resolved webinar settings block.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WebinarSettings {
    pub host_video: bool,
    pub panelists_video: bool,
    pub practice_session: bool,
    pub registrants_email_notification: bool,
    pub approval_type: i64,
    pub registration_type: i64,
    pub meeting_authentication: bool,
    /// Only emitted when the caller supplied `co_hosts`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_hosts: Option<String>,
    pub q_and_a: bool,
    pub enable_chat: bool,
    pub allow_multiple_devices: bool,
    pub auto_recording: String,
    pub on_demand: bool,
}

impl Default for WebinarSettings {
    fn default() -> Self {
        WebinarSettings {
            host_video: true,
            panelists_video: true,
            practice_session: true,
            registrants_email_notification: true,
            approval_type: 0,     // Auto-approve registrants
            registration_type: 1, // Register once for all sessions
            meeting_authentication: true,
            alternative_hosts: None,
            q_and_a: true,
            enable_chat: true,
            allow_multiple_devices: false,
            auto_recording: "none".to_string(),
            on_demand: false,
        }
    }
}

impl WebinarSettings {
    /// Merges caller overrides onto the defaults table. `approval_type` and
    /// `registration_type` stay at their fixed values: registration is always
    /// required, whatever the caller sends.
    fn resolve(input: Option<WebinarSettingsInput>, co_hosts: Option<String>) -> Self {
        let defaults = WebinarSettings::default();
        let input = input.unwrap_or_default();
        WebinarSettings {
            host_video: input.host_video.unwrap_or(defaults.host_video),
            panelists_video: input.panelists_video.unwrap_or(defaults.panelists_video),
            practice_session: input.practice_session.unwrap_or(defaults.practice_session),
            registrants_email_notification: input
                .registrants_email_notification
                .unwrap_or(defaults.registrants_email_notification),
            approval_type: defaults.approval_type,
            registration_type: defaults.registration_type,
            meeting_authentication: input
                .meeting_authentication
                .unwrap_or(defaults.meeting_authentication),
            alternative_hosts: co_hosts,
            q_and_a: input.q_and_a.unwrap_or(defaults.q_and_a),
            enable_chat: input.enable_chat.unwrap_or(defaults.enable_chat),
            allow_multiple_devices: input
                .allow_multiple_devices
                .unwrap_or(defaults.allow_multiple_devices),
            auto_recording: input.auto_recording.unwrap_or(defaults.auto_recording),
            on_demand: input.on_demand.unwrap_or(defaults.on_demand),
        }
    }
}

/// Response for `POST /create-webinar`.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateWebinarResponse {
    pub success: bool,
    #[serde(rename = "webinarId")]
    #[cfg_attr(feature = "openapi", schema(example = 98765432109_u64))]
    pub webinar_id: u64,
    #[serde(rename = "joinUrl")]
    #[cfg_attr(feature = "openapi", schema(example = "https://zoom.us/j/98765432109"))]
    pub join_url: String,
    #[serde(rename = "startUrl")]
    pub start_url: String,
    /// Full webinar object as returned by Zoom
    pub data: serde_json::Value,
}

/// Response for `POST /create-meeting`.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateMeetingResponse {
    #[serde(rename = "meetingId")]
    #[cfg_attr(feature = "openapi", schema(example = 12345678901_u64))]
    pub meeting_id: u64,
    #[serde(rename = "joinUrl")]
    #[cfg_attr(feature = "openapi", schema(example = "https://zoom.us/j/12345678901"))]
    pub join_url: String,
    #[serde(rename = "startUrl")]
    pub start_url: String,
}

/// Registrant descriptor, accepted from the caller and forwarded to Zoom
/// unchanged.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AddRegistrantRequest {
    #[cfg_attr(feature = "openapi", schema(example = "attendee@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "Asha"))]
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "Rao"))]
    pub last_name: Option<String>,
}

/// Query parameters for listing webinar registrants.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, ToSchema))]
pub struct RegistrantsQuery {
    /// Registrant status filter: "pending", "approved" or "denied"
    #[cfg_attr(feature = "openapi", param(example = "approved", required = false))]
    pub status: Option<String>,
    #[cfg_attr(feature = "openapi", param(required = false))]
    pub next_page_token: Option<String>,
}

/// Subset of the Zoom meeting/webinar resource needed for response reshaping.
#[derive(Deserialize, Debug)]
struct ZoomEventResource {
    id: u64,
    join_url: String,
    start_url: String,
}

// --- Webinar Payload Builder ---

/// Builds the fully-populated webinar payload from a loosely-structured
/// caller request: validates required fields in a fixed order (first failure
/// wins), applies the defaults table, and assembles the recurrence rule when
/// the webinar type is 9. Performs no I/O.
pub fn build_webinar_payload(request: CreateWebinarRequest) -> Result<WebinarPayload, ZoomError> {
    let topic = match request.topic {
        Some(topic) if !topic.is_empty() => topic,
        _ => return Err(ZoomError::ValidationError("topic required".to_string())),
    };

    let start_time = request
        .start_time
        .ok_or_else(|| ZoomError::ValidationError("start_time required".to_string()))?;

    let webinar_type = request.webinar_type.unwrap_or(5);

    // Recurrence is attached exactly when the type is 9. For every other
    // type a caller-supplied recurrence object is dropped.
    let recurrence = if webinar_type == 9 {
        Some(build_recurrence(request.recurrence)?)
    } else {
        None
    };

    Ok(WebinarPayload {
        topic,
        webinar_type,
        start_time,
        duration: request.duration.unwrap_or(60),
        timezone: request
            .timezone
            .unwrap_or_else(|| "Asia/Kolkata".to_string()),
        recurrence,
        settings: WebinarSettings::resolve(request.settings, request.co_hosts),
    })
}

/// Validates and assembles the recurrence rule for a recurring webinar.
fn build_recurrence(input: Option<RecurrenceInput>) -> Result<WebinarRecurrence, ZoomError> {
    let input =
        input.ok_or_else(|| ZoomError::ValidationError("recurrence required".to_string()))?;

    let recurrence_type = input
        .recurrence_type
        .ok_or_else(|| ZoomError::ValidationError("recurrence required".to_string()))?;

    let repeat_interval = input
        .repeat_interval
        .ok_or_else(|| ZoomError::ValidationError("repeat_interval required".to_string()))?;

    // Exactly one end condition, either a session count or an end date
    let (end_times, end_date_time) = match (input.end_times, input.end_date_time) {
        (Some(times), None) => (Some(times), None),
        (None, Some(date)) => (None, Some(date)),
        _ => {
            return Err(ZoomError::ValidationError(
                "end condition required".to_string(),
            ))
        }
    };

    let mut recurrence = WebinarRecurrence {
        recurrence_type,
        repeat_interval,
        end_times,
        end_date_time,
        weekly_days: None,
        monthly_day: None,
        monthly_week: None,
        monthly_week_day: None,
    };

    match recurrence_type {
        // Daily: no further fields
        1 => {}
        // Weekly: which weekdays the webinar repeats on
        2 => {
            recurrence.weekly_days = Some(input.weekly_days.ok_or_else(|| {
                ZoomError::ValidationError("weekly_days required".to_string())
            })?);
        }
        // Monthly: a fixed day of month, or a week/weekday pair
        3 => {
            if let Some(day) = input.monthly_day {
                recurrence.monthly_day = Some(day);
            } else {
                match (input.monthly_week, input.monthly_week_day) {
                    (Some(week), Some(week_day)) => {
                        recurrence.monthly_week = Some(week);
                        recurrence.monthly_week_day = Some(week_day);
                    }
                    _ => {
                        return Err(ZoomError::ValidationError(
                            "monthly_day or monthly_week and monthly_week_day required".to_string(),
                        ))
                    }
                }
            }
        }
        _ => {
            return Err(ZoomError::ValidationError(
                "invalid recurrence type".to_string(),
            ))
        }
    }

    Ok(recurrence)
}

// --- Zoom API Operations ---

/// Creates a Zoom webinar: validates and builds the payload first, then
/// fetches a token and submits to Zoom. Validation failures never reach the
/// network.
pub async fn create_webinar(
    zoom_config: &ZoomConfig,
    request: CreateWebinarRequest,
) -> Result<CreateWebinarResponse, ZoomError> {
    let payload = build_webinar_payload(request)?;

    let access_token = fetch_access_token(zoom_config).await?;

    let api_url = format!("{}/users/me/webinars", zoom_config.api_base_url);
    info!("[Zoom Logic] Creating webinar '{}'", payload.topic);

    let response = HTTP_CLIENT
        .post(&api_url)
        .bearer_auth(&access_token)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Zoom Logic] Zoom API response status: {}", status);
    if !status.is_success() {
        info!("[Zoom Logic] Zoom API response body (raw): {}", body_text);
        return Err(zoom_api_error(status.as_u16(), &body_text));
    }

    let data: serde_json::Value = serde_json::from_str(&body_text)?;
    let webinar: ZoomEventResource = serde_json::from_value(data.clone())?;

    Ok(CreateWebinarResponse {
        success: true,
        webinar_id: webinar.id,
        join_url: webinar.join_url,
        start_url: webinar.start_url,
        data,
    })
}

/// Fixed meeting payload submitted by `POST /create-meeting`. The inbound
/// request carries no body; the relay schedules a canned meeting starting
/// now.
#[derive(Serialize, Debug)]
struct MeetingPayload {
    topic: String,
    #[serde(rename = "type")]
    meeting_type: i64,
    start_time: String,
    duration: i64,
    timezone: String,
    password: String,
    settings: MeetingSettings,
}

#[derive(Serialize, Debug)]
struct MeetingSettings {
    host_video: bool,
    participant_video: bool,
    join_before_host: bool,
    mute_upon_entry: bool,
}

impl MeetingPayload {
    fn starting_now() -> Self {
        MeetingPayload {
            topic: "Test Meeting".to_string(),
            meeting_type: 2, // Scheduled meeting
            start_time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            duration: 60,
            timezone: "Asia/Kolkata".to_string(),
            password: "123456".to_string(),
            settings: MeetingSettings {
                host_video: true,
                participant_video: true,
                join_before_host: false,
                mute_upon_entry: true,
            },
        }
    }
}

/// Creates a canned Zoom meeting and reshapes the response to the
/// `{meetingId, joinUrl, startUrl}` triple.
pub async fn create_meeting(zoom_config: &ZoomConfig) -> Result<CreateMeetingResponse, ZoomError> {
    let access_token = fetch_access_token(zoom_config).await?;

    let payload = MeetingPayload::starting_now();
    let api_url = format!("{}/users/me/meetings", zoom_config.api_base_url);
    info!("[Zoom Logic] Creating meeting '{}'", payload.topic);

    let response = HTTP_CLIENT
        .post(&api_url)
        .bearer_auth(&access_token)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if !status.is_success() {
        info!("[Zoom Logic] Zoom API response body (raw): {}", body_text);
        return Err(zoom_api_error(status.as_u16(), &body_text));
    }

    let meeting: ZoomEventResource = serde_json::from_str(&body_text)?;

    Ok(CreateMeetingResponse {
        meeting_id: meeting.id,
        join_url: meeting.join_url,
        start_url: meeting.start_url,
    })
}

/// Registers a person for a webinar. Zoom's response body is returned to the
/// caller verbatim.
pub async fn add_webinar_registrant(
    zoom_config: &ZoomConfig,
    webinar_id: &str,
    registrant: AddRegistrantRequest,
) -> Result<serde_json::Value, ZoomError> {
    let access_token = fetch_access_token(zoom_config).await?;

    let api_url = format!(
        "{}/webinars/{}/registrants",
        zoom_config.api_base_url, webinar_id
    );
    info!("[Zoom Logic] Adding registrant to webinar {}", webinar_id);

    let response = HTTP_CLIENT
        .post(&api_url)
        .bearer_auth(&access_token)
        .json(&registrant)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if !status.is_success() {
        info!("[Zoom Logic] Zoom API response body (raw): {}", body_text);
        return Err(zoom_api_error(status.as_u16(), &body_text));
    }

    Ok(serde_json::from_str(&body_text)?)
}

/// Lists a webinar's registrants. Both query parameters are always forwarded,
/// as empty strings when the caller omitted them, and Zoom's response body is
/// returned verbatim.
pub async fn list_webinar_registrants(
    zoom_config: &ZoomConfig,
    webinar_id: &str,
    query: RegistrantsQuery,
) -> Result<serde_json::Value, ZoomError> {
    let access_token = fetch_access_token(zoom_config).await?;

    let query_string = serde_urlencoded::to_string([
        ("status", query.status.unwrap_or_default()),
        ("next_page_token", query.next_page_token.unwrap_or_default()),
    ])
    .map_err(|e| {
        ZoomError::InternalError(format!("Failed to encode registrants query: {}", e))
    })?;

    let api_url = format!(
        "{}/webinars/{}/registrants?{}",
        zoom_config.api_base_url, webinar_id, query_string
    );
    info!("[Zoom Logic] Fetching registrants for webinar {}", webinar_id);

    let response = HTTP_CLIENT
        .get(&api_url)
        .bearer_auth(&access_token)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if !status.is_success() {
        info!("[Zoom Logic] Zoom API response body (raw): {}", body_text);
        return Err(zoom_api_error(status.as_u16(), &body_text));
    }

    Ok(serde_json::from_str(&body_text)?)
}

/// Extracts the machine-readable `code` and `message` Zoom puts in error
/// bodies, keeping the raw body as details. Falls back to the raw text when
/// the body is not JSON.
fn zoom_api_error(status_code: u16, body_text: &str) -> ZoomError {
    match serde_json::from_str::<serde_json::Value>(body_text) {
        Ok(json_body) => {
            let message = json_body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(body_text)
                .to_string();
            let code = json_body.get("code").and_then(|c| c.as_i64());
            ZoomError::ApiError {
                status_code,
                code,
                message,
                details: Some(json_body),
            }
        }
        Err(_) => ZoomError::ApiError {
            status_code,
            code: None,
            message: body_text.to_string(),
            details: None,
        },
    }
}
