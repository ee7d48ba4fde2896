//! Geolocation providers
//!
//! Providers never fail with an error: a refused permission is `false` and a
//! missing fix is `None`. Both calls may take as long as the platform needs.

use async_trait::async_trait;
use tracing::{debug, warn};
use crate::config::LocationConfig;
use crate::models::Coordinates;

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Ask for permission to read the device position
    async fn request_permission(&self) -> bool;

    /// Query the current position; `None` when no fix could be obtained
    async fn current_location(&self) -> Option<Coordinates>;
}

/// Reports a preconfigured position, standing in for a device without GPS
#[derive(Debug, Clone, Default)]
pub struct FixedLocationProvider {
    coordinates: Option<Coordinates>,
}

impl FixedLocationProvider {
    pub fn new(coordinates: Option<Coordinates>) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_permission(&self) -> bool {
        true
    }

    async fn current_location(&self) -> Option<Coordinates> {
        match self.coordinates {
            Some(coords) => {
                debug!(latitude = coords.latitude, longitude = coords.longitude, "Using fixed location");
                Some(coords)
            }
            None => {
                warn!("No fixed location configured");
                None
            }
        }
    }
}

/// Denies every permission request
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLocationProvider;

#[async_trait]
impl LocationProvider for DisabledLocationProvider {
    async fn request_permission(&self) -> bool {
        debug!("Geolocation disabled, denying permission");
        false
    }

    async fn current_location(&self) -> Option<Coordinates> {
        None
    }
}

/// Build the provider described by the configuration
pub fn provider_from_config(config: &LocationConfig) -> Box<dyn LocationProvider> {
    if !config.enabled {
        return Box::new(DisabledLocationProvider);
    }

    let coordinates = match (config.latitude, config.longitude) {
        (Some(latitude), Some(longitude)) => match Coordinates::new(latitude, longitude) {
            Ok(coords) => Some(coords),
            Err(e) => {
                warn!(error = %e, "Ignoring invalid configured location");
                None
            }
        },
        _ => None,
    };

    Box::new(FixedLocationProvider::new(coordinates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_provider() {
        let coords = Coordinates::new(19.076, 72.8777).unwrap();
        let provider = FixedLocationProvider::new(Some(coords));
        assert!(provider.request_permission().await);
        assert_eq!(provider.current_location().await, Some(coords));

        let empty = FixedLocationProvider::default();
        assert!(empty.request_permission().await);
        assert_eq!(empty.current_location().await, None);
    }

    #[tokio::test]
    async fn test_disabled_config_denies() {
        let config = LocationConfig {
            enabled: false,
            latitude: Some(19.076),
            longitude: Some(72.8777),
        };
        let provider = provider_from_config(&config);
        assert!(!provider.request_permission().await);
    }

    #[test]
    fn test_config_with_invalid_location_has_no_fix() {
        let config = LocationConfig {
            enabled: true,
            latitude: Some(123.0),
            longitude: Some(72.8777),
        };
        let provider = provider_from_config(&config);
        assert_eq!(tokio_test::block_on(provider.current_location()), None);
    }
}
