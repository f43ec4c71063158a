use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};

pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, later entries winning:
/// 1. `config/default.*` at the workspace root (optional)
/// 2. `config/<RUN_ENV>.*` (optional, `RUN_ENV` defaults to "debug")
/// 3. Environment variables with the `CONVOKE` prefix and `__` separator,
///    e.g. `CONVOKE__SERVER__PORT=8080`
/// 4. Provider-native overrides: `ZOOM_ACCOUNT_ID`, `ZOOM_CLIENT_ID`,
///    `ZOOM_CLIENT_SECRET`, `PORT`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "CONVOKE".to_string());

    let workspace_root = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .ok()
        .and_then(|dir| dir.ancestors().nth(2).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let default_path = workspace_root.join("config/default");
    let env_path = workspace_root.join(format!("config/{}", run_env));

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(apply_env_overrides(raw_config, |key| env::var(key).ok()))
}

/// Applies the provider-native environment variables on top of whatever the
/// file/env layers produced. These are the names a Zoom Server-to-Server
/// OAuth app hands out, so deployments can export them as-is.
///
/// Takes the lookup as a function so tests can drive it without mutating the
/// process environment.
pub fn apply_env_overrides<F>(mut config: AppConfig, get: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = get("PORT").and_then(|v| v.parse().ok()) {
        config.server.port = port;
    }

    let account_id = get("ZOOM_ACCOUNT_ID");
    let client_id = get("ZOOM_CLIENT_ID");
    let client_secret = get("ZOOM_CLIENT_SECRET");

    if account_id.is_some() || client_id.is_some() || client_secret.is_some() {
        let zoom = config.zoom.get_or_insert_with(ZoomConfig::default);
        if let Some(value) = account_id {
            zoom.account_id = value;
        }
        if let Some(value) = client_id {
            zoom.client_id = value;
        }
        if let Some(value) = client_secret {
            zoom.client_secret = value;
        }
    }

    config
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures the dotenv file is loaded into the environment exactly once.
///
/// The file defaults to ".env"; `DOTENV_OVERRIDE` or a leading ".env*"
/// command line argument select a different one.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
