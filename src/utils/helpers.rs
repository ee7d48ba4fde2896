//! Helper functions and utilities
//!
//! Formatting and link building used when presenting bhandaras.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use crate::models::Coordinates;

/// Format a date for display, e.g. `19 Oct 2026`
pub fn format_event_date<Tz>(value: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.format("%-d %b %Y").to_string()
}

/// Format a time of day for display, e.g. `04:30 pm`
pub fn format_event_time<Tz>(value: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.format("%I:%M %P").to_string()
}

/// Join food items for a one-line summary
pub fn format_food_items(items: &[String]) -> String {
    if items.is_empty() {
        "Not specified".to_string()
    } else {
        items.join(", ")
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Platforms with a native maps URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPlatform {
    Ios,
    Android,
}

impl MapPlatform {
    /// Scheme understood by the host system; `geo:` everywhere but Apple
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            MapPlatform::Ios
        } else {
            MapPlatform::Android
        }
    }
}

/// Google Maps directions to a position; works on every platform
pub fn directions_url(coords: Coordinates) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        coords.latitude, coords.longitude
    )
}

/// Native maps app link for a position
pub fn native_maps_url(coords: Coordinates, platform: MapPlatform) -> String {
    match platform {
        MapPlatform::Ios => format!("maps:0,0?q={},{}", coords.latitude, coords.longitude),
        MapPlatform::Android => format!("geo:0,0?q={},{}", coords.latitude, coords.longitude),
    }
}
