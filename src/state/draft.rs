//! The event draft being authored
//!
//! Holds the field values of a not-yet-submitted bhandara and the
//! submission checklist. Date and time rules that apply at selection time
//! live in [`super::form::EventForm`], which owns the clock.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use crate::models::{CoordinateSource, Coordinates, CreateBhandaraRequest};
use crate::utils::errors::ValidationError;

/// Default length of an event; applied to the end time when a start is chosen
pub const DEFAULT_EVENT_LENGTH_MINUTES: i64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub location: String,
    pub organizer: String,
    pub date: NaiveDate,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub food_items: Vec<String>,
    pub coordinates: CoordinateSource,
}

impl EventDraft {
    /// An empty draft dated today, starting and ending now
    pub fn empty(now: DateTime<FixedOffset>) -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            organizer: String::new(),
            date: now.date_naive(),
            start_time: now,
            end_time: now,
            food_items: Vec::new(),
            coordinates: CoordinateSource::Unset,
        }
    }

    /// Run the submission checklist, stopping at the first failure
    pub fn validate(&self) -> Result<Coordinates, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::MissingLocation);
        }
        if self.organizer.trim().is_empty() {
            return Err(ValidationError::MissingOrganizer);
        }

        self.coordinates.coordinates().ok_or(ValidationError::MissingCoordinates)
    }

    /// Validate and build the creation payload
    pub fn to_request(&self) -> Result<CreateBhandaraRequest, ValidationError> {
        let coords = self.validate()?;
        let midnight = anchor(self.date, NaiveTime::MIN, *self.start_time.offset());

        Ok(CreateBhandaraRequest {
            title: self.title.clone(),
            location: self.location.clone(),
            date: midnight.with_timezone(&Utc),
            start_time: self.start_time.with_timezone(&Utc),
            end_time: self.end_time.with_timezone(&Utc),
            organizer: self.organizer.clone(),
            food_items: self.food_items.clone(),
            latitude: coords.latitude,
            longitude: coords.longitude,
        })
    }

    /// Append a food item; blank text is ignored. Returns whether an item was added.
    pub fn push_food_item(&mut self, text: &str) -> bool {
        let item = text.trim();
        if item.is_empty() {
            return false;
        }
        self.food_items.push(item.to_string());
        true
    }

    /// Remove the food item at `index`; out of range is a no-op
    pub fn remove_food_item(&mut self, index: usize) -> Option<String> {
        if index < self.food_items.len() {
            Some(self.food_items.remove(index))
        } else {
            None
        }
    }
}

/// Place a wall-clock time on a calendar day in the given offset
pub fn anchor(date: NaiveDate, time: NaiveTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let local = date.and_time(time);
    match offset.from_local_datetime(&local) {
        LocalResult::Single(value) => value,
        // Fixed offsets are never ambiguous; this is only hit at the ends of chrono's range
        _ => DateTime::from_naive_utc_and_offset(local, offset),
    }
}
