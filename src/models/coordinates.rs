//! Geographic coordinates and where they came from

use serde::{Deserialize, Serialize};
use crate::utils::errors::CoordinateError;

pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A validated latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build a pair, checking finiteness and both ranges in that order
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotANumber);
        }
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }

        Ok(Self { latitude, longitude })
    }

    /// Parse manually typed text. Both fields are required; surrounding
    /// whitespace is ignored and anything else that is not a finite
    /// decimal number is rejected.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, CoordinateError> {
        let latitude = parse_degrees(latitude)?;
        let longitude = parse_degrees(longitude)?;
        Self::new(latitude, longitude)
    }

    /// `lat, lon` with six decimals, as shown next to a captured position
    pub fn display(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

fn parse_degrees(text: &str) -> Result<f64, CoordinateError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(CoordinateError::NotANumber)
}

/// Which acquisition path last wrote the draft's coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CoordinateSource {
    #[default]
    Unset,
    Auto(Coordinates),
    Manual(Coordinates),
}

impl CoordinateSource {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            CoordinateSource::Unset => None,
            CoordinateSource::Auto(coords) | CoordinateSource::Manual(coords) => Some(*coords),
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, CoordinateSource::Manual(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_accepts_boundaries_and_whitespace() {
        let coords = Coordinates::parse(" -90 ", "180").unwrap();
        assert_eq!(coords, Coordinates { latitude: -90.0, longitude: 180.0 });
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_matches!(Coordinates::parse("abc", "0"), Err(CoordinateError::NotANumber));
        assert_matches!(Coordinates::parse("0", ""), Err(CoordinateError::NotANumber));
        assert_matches!(Coordinates::parse("NaN", "0"), Err(CoordinateError::NotANumber));
        assert_matches!(Coordinates::parse("0", "inf"), Err(CoordinateError::NotANumber));
        assert_matches!(Coordinates::parse("12abc", "0"), Err(CoordinateError::NotANumber));
    }

    #[test]
    fn test_range_checks_latitude_first() {
        assert_matches!(
            Coordinates::parse("91", "181"),
            Err(CoordinateError::LatitudeOutOfRange(lat)) if lat == 91.0
        );
        assert_matches!(
            Coordinates::parse("0", "-180.5"),
            Err(CoordinateError::LongitudeOutOfRange(_))
        );
    }

    #[test]
    fn test_source_accessors() {
        let coords = Coordinates::new(28.6139, 77.209).unwrap();
        assert_eq!(CoordinateSource::Unset.coordinates(), None);
        assert_eq!(CoordinateSource::Auto(coords).coordinates(), Some(coords));
        assert!(CoordinateSource::Manual(coords).is_manual());
        assert!(!CoordinateSource::Auto(coords).is_manual());
        assert_eq!(coords.display(), "28.613900, 77.209000");
    }
}
