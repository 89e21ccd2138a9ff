mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::WachatError;
use defaults::*;

/// Top-level wachat configuration.
///
/// This is the operator's config for the tool itself. Merchant-facing
/// options (phone number, template, ...) live in the settings store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wachat: WachatConfig,
    #[serde(default)]
    pub link: LinkConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WachatConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for WachatConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Link building options shared by every render site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Reject phone numbers that keep non-digit characters after stripping.
    #[serde(default)]
    pub strict_phone: bool,
    /// Fixed greeting used by the floating button.
    #[serde(default = "default_floating_message")]
    pub floating_message: String,
    /// Message used by the settings preview link.
    #[serde(default = "default_test_message")]
    pub test_message: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            strict_phone: false,
            floating_message: default_floating_message(),
            test_message: default_test_message(),
        }
    }
}

impl Config {
    /// Path of the flat settings file inside `data_dir`.
    pub fn settings_path(&self) -> PathBuf {
        Path::new(&shellexpand(&self.wachat.data_dir)).join("settings.toml")
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, WachatError> {
    let expanded = shellexpand(path);
    let path = Path::new(&expanded);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| WachatError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| WachatError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
