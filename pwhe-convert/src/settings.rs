use std::fs;
use std::path::Path;

use pwhe_core::BridgeSettings;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Converter settings loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bridge: BridgeSettings,
}

/// Errors returned when loading settings files.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load settings from a TOML file. Keys left out keep their defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_settings(&raw, path.display().to_string())
}

/// Settings shipped with the binary.
pub fn default_settings() -> Settings {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/settings/defaults.toml"
    ));
    match parse_settings(embedded, "embedded settings".to_string()) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("{err}; using built-in defaults");
            Settings::default()
        }
    }
}

fn parse_settings(raw: &str, path: String) -> Result<Settings, SettingsError> {
    toml::from_str(raw).map_err(|source| SettingsError::Parse { path, source })
}
