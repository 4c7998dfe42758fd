//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::TourConfig;
use std::path::Path;

/// Name of the configuration file at the project root.
pub const CONFIG_FILE: &str = "tour.toml";

/// Loads and validates a `tour.toml` configuration from a project directory.
///
/// Reads `<project_dir>/tour.toml`, parses it, and validates required fields.
pub fn load_config(project_dir: &Path) -> Result<TourConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `tour.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<TourConfig, ConfigError> {
    let config: TourConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are usable.
fn validate_config(config: &TourConfig) -> Result<(), ConfigError> {
    if config.tour.name.trim().is_empty() {
        return Err(ConfigError::MissingField("tour.name".to_string()));
    }
    if config.tour.content.trim().is_empty() {
        return Err(ConfigError::MissingField("tour.content".to_string()));
    }
    let ext = &config.tour.extension;
    if ext.is_empty() {
        return Err(ConfigError::MissingField("tour.extension".to_string()));
    }
    if ext.contains(['.', '/', '\\']) {
        return Err(ConfigError::ValidationError(format!(
            "tour.extension '{ext}' must be a bare extension such as \"article\""
        )));
    }
    Ok(())
}
