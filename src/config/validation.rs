//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::models::Coordinates;
use crate::utils::errors::{BhandaraError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_location_config(&settings.location)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bhandara service configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(BhandaraError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(BhandaraError::Config(
            format!("API base URL must be http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(BhandaraError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate the configured fixed position, if any
fn validate_location_config(config: &super::LocationConfig) -> Result<()> {
    match (config.latitude, config.longitude) {
        (None, None) => Ok(()),
        (Some(latitude), Some(longitude)) => {
            Coordinates::new(latitude, longitude)
                .map(|_| ())
                .map_err(|e| BhandaraError::Config(format!("Invalid fixed location: {}", e)))
        }
        _ => Err(BhandaraError::Config(
            "Fixed location needs both latitude and longitude".to_string()
        )),
    }
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BhandaraError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BhandaraError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
