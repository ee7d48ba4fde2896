//! Error handling for Bhandara Finder
//!
//! This module defines the main error types used throughout the crate.
//! Every domain error carries the message shown to the user as its
//! `Display` output, so front ends can surface errors without re-wording them.

use thiserror::Error;

/// Main error type for Bhandara Finder
#[derive(Error, Debug)]
pub enum BhandaraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Bhandara API error: {0}")]
    Api(#[from] ApiError),

    #[error("Coordinate error: {0}")]
    Coordinate(#[from] CoordinateError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Nearby feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Bhandara service specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Failed to fetch nearby bhandaras (HTTP {status})")]
    FetchFailed { status: u16 },

    #[error("Failed to create bhandara (HTTP {status})")]
    CreateFailed { status: u16 },

    #[error("Bhandara service timeout")]
    Timeout,

    #[error("Bhandara service unavailable")]
    Unavailable,

    #[error("Bhandara request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid bhandara response: {0}")]
    InvalidResponse(String),
}

/// Failures of the coordinate resolver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Location permission is required to get your current location.")]
    PermissionDenied,

    #[error("Unable to get your current location.")]
    LocationUnavailable,

    #[error("Please enter valid latitude and longitude values.")]
    NotANumber,

    #[error("Latitude must be between -90 and 90 degrees.")]
    LatitudeOutOfRange(f64),

    #[error("Longitude must be between -180 and 180 degrees.")]
    LongitudeOutOfRange(f64),
}

/// Date and time selections rejected at the moment they are made
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Please select a date from today onwards.")]
    DateInPast,

    #[error("Please select a time from now onwards.")]
    StartInPast,

    #[error("End time must be after start time.")]
    EndNotAfterStart,
}

/// Submission checklist failures, in checklist order
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a title for the bhandara.")]
    MissingTitle,

    #[error("Please enter the location.")]
    MissingLocation,

    #[error("Please enter the organizer name.")]
    MissingOrganizer,

    #[error("Please capture your location or enter coordinates manually.")]
    MissingCoordinates,
}

/// Failures of the nearby listing flow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    #[error("Location permission is required to find nearby bhandaras. Please enable location services in your device settings.")]
    PermissionDenied,

    #[error("Unable to get your current location. Please check your location settings and try again.")]
    LocationUnavailable,

    #[error("Failed to fetch nearby bhandaras. Please check your internet connection and try again.")]
    FetchFailed(ApiError),
}

/// Result type alias for Bhandara Finder operations
pub type Result<T> = std::result::Result<T, BhandaraError>;

/// Result type alias for bhandara service calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl CoordinateError {
    /// Short heading for the alert that reports this error
    pub fn title(&self) -> &'static str {
        match self {
            CoordinateError::PermissionDenied => "Permission Required",
            CoordinateError::LocationUnavailable => "Error",
            CoordinateError::NotANumber => "Invalid Coordinates",
            CoordinateError::LatitudeOutOfRange(_) => "Invalid Latitude",
            CoordinateError::LongitudeOutOfRange(_) => "Invalid Longitude",
        }
    }
}

impl ScheduleError {
    pub fn title(&self) -> &'static str {
        match self {
            ScheduleError::DateInPast => "Invalid Date",
            ScheduleError::StartInPast | ScheduleError::EndNotAfterStart => "Invalid Time",
        }
    }
}

impl ValidationError {
    /// Name of the draft field that failed the check
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingTitle => "title",
            ValidationError::MissingLocation => "location",
            ValidationError::MissingOrganizer => "organizer",
            ValidationError::MissingCoordinates => "coordinates",
        }
    }
}

impl BhandaraError {
    /// Alert heading for form errors that carry one
    pub fn title(&self) -> Option<&'static str> {
        match self {
            BhandaraError::Coordinate(e) => Some(e.title()),
            BhandaraError::Schedule(e) => Some(e.title()),
            _ => None,
        }
    }

    /// Message shown to the user, prefixed with the alert heading if any
    pub fn user_message(&self) -> String {
        match self.title() {
            Some(title) => format!("{}: {}", title, self),
            None => self.to_string(),
        }
    }

    /// Check if the error is recoverable by user action
    pub fn is_recoverable(&self) -> bool {
        match self {
            BhandaraError::Config(_) => false,
            BhandaraError::ConfigLoad(_) => false,
            BhandaraError::Api(_) => true,
            BhandaraError::Coordinate(_) => true,
            BhandaraError::Schedule(_) => true,
            BhandaraError::Validation(_) => true,
            BhandaraError::Feed(_) => true,
            BhandaraError::Http(_) => true,
            BhandaraError::Serialization(_) => false,
            BhandaraError::Io(_) => true,
            BhandaraError::UrlParse(_) => false,
            BhandaraError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BhandaraError::Config(_) => ErrorSeverity::Critical,
            BhandaraError::ConfigLoad(_) => ErrorSeverity::Critical,
            BhandaraError::Coordinate(CoordinateError::PermissionDenied) => ErrorSeverity::Warning,
            BhandaraError::Coordinate(_) => ErrorSeverity::Info,
            BhandaraError::Schedule(_) => ErrorSeverity::Info,
            BhandaraError::Validation(_) => ErrorSeverity::Info,
            BhandaraError::Feed(FeedError::PermissionDenied) => ErrorSeverity::Warning,
            BhandaraError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            ValidationError::MissingTitle.to_string(),
            "Please enter a title for the bhandara."
        );
        assert_eq!(
            CoordinateError::LatitudeOutOfRange(91.0).to_string(),
            "Latitude must be between -90 and 90 degrees."
        );
        assert_eq!(ScheduleError::EndNotAfterStart.title(), "Invalid Time");
    }

    #[test]
    fn test_user_message_carries_heading() {
        let latitude: BhandaraError = CoordinateError::LatitudeOutOfRange(91.0).into();
        assert_eq!(latitude.title(), Some("Invalid Latitude"));
        assert_eq!(
            latitude.user_message(),
            "Invalid Latitude: Latitude must be between -90 and 90 degrees."
        );

        let permission: BhandaraError = CoordinateError::PermissionDenied.into();
        assert!(permission.user_message().starts_with("Permission Required: "));

        let date: BhandaraError = ScheduleError::DateInPast.into();
        assert!(date.user_message().starts_with("Invalid Date: "));

        let missing: BhandaraError = ValidationError::MissingTitle.into();
        assert_eq!(missing.title(), None);
        assert_eq!(missing.user_message(), "Please enter a title for the bhandara.");
    }

    #[test]
    fn test_form_errors_are_recoverable() {
        let errors: Vec<BhandaraError> = vec![
            CoordinateError::NotANumber.into(),
            ScheduleError::DateInPast.into(),
            ValidationError::MissingCoordinates.into(),
            ApiError::CreateFailed { status: 500 }.into(),
        ];

        for error in errors {
            assert!(error.is_recoverable(), "{error} should be recoverable");
        }
        assert!(!BhandaraError::Config("bad".to_string()).is_recoverable());
    }

    #[test]
    fn test_severity() {
        let denied: BhandaraError = CoordinateError::PermissionDenied.into();
        assert_eq!(denied.severity(), ErrorSeverity::Warning);
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }
}
