use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_BIND_ADDRESS, DEFAULT_DATA_FILE, DEFAULT_TIMEOUT_SECS,
};
use crate::errors::{ShopchatError, ShopchatResult};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the support backend; the widget posts to `<base>/chatbot`.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Skip the backend and answer from the local rule table only.
    pub offline: bool,
    pub log_level: String,
    pub data_file: String,
    pub bind_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            offline: false,
            log_level: "info".to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// Loads the config from the default location, writing a default file on first run.
pub fn initialize_config() -> ShopchatResult<Config> {
    let config_path = get_config_path()?;
    load_or_create(&config_path)
}

pub fn load_or_create(config_path: &Path) -> ShopchatResult<Config> {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path)
            .map_err(|e| ShopchatError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ShopchatError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;
        return Ok(config);
    }

    let config = Config::default();
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ShopchatError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(&config)
        .map_err(|e| ShopchatError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(config_path, config_str)
        .map_err(|e| ShopchatError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(config)
}

pub fn config_dir() -> ShopchatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ShopchatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("shopchat"))
}

fn get_config_path() -> ShopchatResult<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn validate_config(config: &Config) -> ShopchatResult<()> {
    let base = config.api_base_url.trim();
    if base.is_empty() {
        return Err(ShopchatError::config_error("api_base_url is required"));
    }

    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ShopchatError::config_error(
            "api_base_url must start with http:// or https://",
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(ShopchatError::config_error(
            "request_timeout_secs must be greater than 0",
        ));
    }

    if !matches!(
        config.log_level.to_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    ) {
        return Err(ShopchatError::config_error(format!(
            "Unknown log level: {}",
            config.log_level
        )));
    }

    Ok(())
}
