// --- File: crates/convoke_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16, // Overridable via PORT or CONVOKE__SERVER__PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

// --- Zoom Config ---
// Holds the Server-to-Server OAuth app credentials and the Zoom endpoints.
// Secrets loaded directly from env vars: ZOOM_ACCOUNT_ID, ZOOM_CLIENT_ID,
// ZOOM_CLIENT_SECRET (see `load_config`).
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ZoomConfig {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    /// OAuth token endpoint. Left at the real host outside of tests.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// REST API base, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        ZoomConfig {
            account_id: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            token_url: default_token_url(),
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_token_url() -> String {
    "https://zoom.us/oauth/token".to_string()
}

fn default_api_base_url() -> String {
    "https://api.zoom.us/v2".to_string()
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // The relay's single feature ships enabled; config can switch it off.
    #[serde(default = "default_use_zoom")]
    pub use_zoom: bool,

    #[serde(default)]
    pub zoom: Option<ZoomConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server: ServerConfig::default(),
            use_zoom: default_use_zoom(),
            zoom: None,
        }
    }
}

fn default_use_zoom() -> bool {
    true
}
