// --- File: crates/convoke_zoom/src/auth.rs ---
use base64::{engine::general_purpose::STANDARD as base64_engine, Engine as _};
use convoke_common::HTTP_CLIENT;
use convoke_config::ZoomConfig;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::ZoomError;

/// Response from the Zoom OAuth token endpoint.
#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges the Server-to-Server OAuth credentials for a short-lived access
/// token. A fresh token is fetched for every operation; nothing is cached and
/// expiry is never tracked.
///
/// Every failure on this path (transport, non-2xx, unparseable body) comes
/// back as `ZoomError::AuthError` carrying the detail for logging. Callers
/// surface it as a generic 500 without the upstream diagnostics.
pub async fn fetch_access_token(config: &ZoomConfig) -> Result<String, ZoomError> {
    let credentials =
        base64_engine.encode(format!("{}:{}", config.client_id, config.client_secret));

    let form_body = [
        ("grant_type", "account_credentials"),
        ("account_id", config.account_id.as_str()),
    ];

    info!("[Zoom Auth] Requesting access token");
    let response = HTTP_CLIENT
        .post(&config.token_url)
        .header("Authorization", format!("Basic {}", credentials))
        .form(&form_body)
        .send()
        .await
        .map_err(|e| ZoomError::AuthError(format!("Token request failed: {}", e)))?;

    let status = response.status();
    let body_text = response
        .text()
        .await
        .map_err(|e| ZoomError::AuthError(format!("Failed to read token response: {}", e)))?;

    if !status.is_success() {
        error!("[Zoom Auth] Token endpoint returned {}: {}", status, body_text);
        return Err(ZoomError::AuthError(format!(
            "Token endpoint returned {}: {}",
            status, body_text
        )));
    }

    let token: TokenResponse = serde_json::from_str(&body_text)
        .map_err(|e| ZoomError::AuthError(format!("Failed to parse token response: {}", e)))?;

    Ok(token.access_token)
}
