//! Bhandara Finder
//!
//! Client library for discovering community food-distribution events
//! ("bhandaras") near the user's location and publishing new ones.
//! This library provides the remote service client, geolocation and clock
//! abstractions, and UI-free state machines for the nearby feed and the
//! event authoring form.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BhandaraError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{EventForm, NearbyFeed};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
