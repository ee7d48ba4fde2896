//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Bhandara Finder client.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};
use crate::config::LoggingConfig;
use crate::models::Coordinates;
use crate::utils::errors::{BhandaraError, Result};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging based on configuration
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// flushes the log file on drop and must be held for the life of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers: Vec<BoxedLayer> = Vec::new();
    layers.push(if config.json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    });

    let guard = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "bhandara.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            layers.push(fmt::layer().with_ansi(false).with_writer(non_blocking).boxed());
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| BhandaraError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log form actions with structured data
pub fn log_form_action(action: &str, details: Option<&str>) {
    debug!(
        action = action,
        details = details,
        "Form action performed"
    );
}

/// Log rejected form input
pub fn log_form_rejection(action: &str, reason: &str) {
    info!(
        action = action,
        reason = reason,
        "Form input rejected"
    );
}

/// Log the outcome of a geolocation attempt
pub fn log_location_outcome(purpose: &str, permission_granted: bool, fix: Option<Coordinates>) {
    match (permission_granted, fix) {
        (false, _) => warn!(purpose = purpose, "Location permission denied"),
        (true, None) => warn!(purpose = purpose, "Location fix unavailable"),
        (true, Some(coords)) => debug!(
            purpose = purpose,
            latitude = coords.latitude,
            longitude = coords.longitude,
            "Location fix acquired"
        ),
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
