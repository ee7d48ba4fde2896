//! Services module
//!
//! This module contains the collaborators the state machines talk to: the
//! remote bhandara service, the geolocation provider and the clock.

pub mod api;
pub mod clock;
pub mod location;

// Re-export commonly used services
pub use api::{BhandaraApi, BhandaraService};
pub use clock::{Clock, FixedClock, SystemClock};
pub use location::{DisabledLocationProvider, FixedLocationProvider, LocationProvider, provider_from_config};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and sharing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub bhandara_service: Arc<dyn BhandaraService>,
    pub location_provider: Arc<dyn LocationProvider>,
    pub clock: Arc<dyn Clock>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory from settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let bhandara_service = Arc::new(BhandaraApi::new(&settings.api)?);
        let location_provider: Arc<dyn LocationProvider> = Arc::from(provider_from_config(&settings.location));

        Ok(Self {
            bhandara_service,
            location_provider,
            clock: Arc::new(SystemClock),
        })
    }

    /// Assemble a factory from explicit parts
    pub fn from_parts(
        bhandara_service: Arc<dyn BhandaraService>,
        location_provider: Arc<dyn LocationProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            bhandara_service,
            location_provider,
            clock,
        }
    }

    /// Replace the location provider, e.g. with a position given on the command line
    pub fn with_location_provider(mut self, location_provider: Arc<dyn LocationProvider>) -> Self {
        self.location_provider = location_provider;
        self
    }
}
