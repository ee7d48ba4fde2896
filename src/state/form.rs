//! Authoring form state
//!
//! `EventForm` is the whole state of the "add bhandara" screen: the draft,
//! the text buffers behind the manual coordinate and food inputs, and the
//! visibility and loading flags. Every user action is a method taking
//! `&mut self`, so handlers can be tested without any UI.

use std::sync::Arc;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use tracing::{debug, info};
use crate::models::{Bhandara, CoordinateSource, Coordinates, CreateBhandaraRequest};
use crate::services::{BhandaraService, Clock, LocationProvider};
use crate::utils::errors::{BhandaraError, CoordinateError, Result, ScheduleError, ValidationError};
use crate::utils::logging::{log_form_action, log_form_rejection, log_location_outcome};
use super::draft::{anchor, EventDraft, DEFAULT_EVENT_LENGTH_MINUTES};

#[derive(Debug)]
pub struct EventForm {
    clock: Arc<dyn Clock>,
    draft: EventDraft,
    manual_latitude: String,
    manual_longitude: String,
    food_input: String,
    manual_entry_visible: bool,
    locating: bool,
    submitting: bool,
}

impl EventForm {
    /// A fresh form with an empty draft dated today
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let draft = EventDraft::empty(clock.now());
        Self {
            clock,
            draft,
            manual_latitude: String::new(),
            manual_longitude: String::new(),
            food_input: String::new(),
            manual_entry_visible: false,
            locating: false,
            submitting: false,
        }
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn coordinates(&self) -> CoordinateSource {
        self.draft.coordinates
    }

    /// Text currently held in the manual latitude/longitude inputs
    pub fn manual_input(&self) -> (&str, &str) {
        (&self.manual_latitude, &self.manual_longitude)
    }

    pub fn food_input(&self) -> &str {
        &self.food_input
    }

    pub fn is_manual_entry_visible(&self) -> bool {
        self.manual_entry_visible
    }

    pub fn is_locating(&self) -> bool {
        self.locating
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.draft.location = location.into();
    }

    pub fn set_organizer(&mut self, organizer: impl Into<String>) {
        self.draft.organizer = organizer.into();
    }

    // Coordinates

    /// Capture the device position, replacing any manual value
    pub async fn capture_automatic(&mut self, provider: &dyn LocationProvider) -> std::result::Result<Coordinates, CoordinateError> {
        self.locating = true;
        let outcome = Self::acquire_fix(provider).await;
        self.locating = false;

        match outcome {
            Ok(coords) => {
                self.draft.coordinates = CoordinateSource::Auto(coords);
                self.manual_latitude.clear();
                self.manual_longitude.clear();
                self.manual_entry_visible = false;
                info!(latitude = coords.latitude, longitude = coords.longitude, "Location captured");
                Ok(coords)
            }
            Err(e) => {
                log_form_rejection("capture_location", &e.to_string());
                Err(e)
            }
        }
    }

    async fn acquire_fix(provider: &dyn LocationProvider) -> std::result::Result<Coordinates, CoordinateError> {
        if !provider.request_permission().await {
            log_location_outcome("capture", false, None);
            return Err(CoordinateError::PermissionDenied);
        }

        let fix = provider.current_location().await;
        log_location_outcome("capture", true, fix);
        fix.ok_or(CoordinateError::LocationUnavailable)
    }

    /// Set coordinates from typed text. The text is kept in the input
    /// buffers whether or not it parses; coordinates change only on success.
    pub fn set_manual(&mut self, latitude: &str, longitude: &str) -> std::result::Result<Coordinates, CoordinateError> {
        self.manual_latitude = latitude.to_string();
        self.manual_longitude = longitude.to_string();

        match Coordinates::parse(latitude, longitude) {
            Ok(coords) => {
                self.draft.coordinates = CoordinateSource::Manual(coords);
                log_form_action("set_manual_coordinates", Some(&coords.display()));
                Ok(coords)
            }
            Err(e) => {
                log_form_rejection("set_manual_coordinates", &e.to_string());
                Err(e)
            }
        }
    }

    /// Drop any coordinates and empty the manual inputs
    pub fn clear_coordinates(&mut self) {
        self.draft.coordinates = CoordinateSource::Unset;
        self.manual_latitude.clear();
        self.manual_longitude.clear();
        self.manual_entry_visible = false;
        log_form_action("clear_coordinates", None);
    }

    pub fn toggle_manual_entry(&mut self) -> bool {
        self.manual_entry_visible = !self.manual_entry_visible;
        self.manual_entry_visible
    }

    // Schedule

    /// Place a wall-clock time on the draft's date in the local offset
    pub fn at_time(&self, time: NaiveTime) -> DateTime<FixedOffset> {
        anchor(self.draft.date, time, *self.clock.now().offset())
    }

    pub fn select_date(&mut self, candidate: NaiveDate) -> std::result::Result<(), ScheduleError> {
        if candidate < self.clock.today() {
            log_form_rejection("select_date", &candidate.to_string());
            return Err(ScheduleError::DateInPast);
        }

        self.draft.date = candidate;
        debug!(date = %candidate, "Date selected");
        Ok(())
    }

    /// Accept a start time and reset the end time to one hour later
    pub fn select_start_time(&mut self, candidate: DateTime<FixedOffset>) -> std::result::Result<(), ScheduleError> {
        let now = self.clock.now();
        let is_today = self.draft.date == now.date_naive();

        if is_today && candidate < now {
            log_form_rejection("select_start_time", &candidate.to_rfc3339());
            return Err(ScheduleError::StartInPast);
        }

        self.draft.start_time = candidate;
        self.draft.end_time = candidate + Duration::minutes(DEFAULT_EVENT_LENGTH_MINUTES);
        debug!(start = %candidate, end = %self.draft.end_time, "Start time selected");
        Ok(())
    }

    pub fn select_end_time(&mut self, candidate: DateTime<FixedOffset>) -> std::result::Result<(), ScheduleError> {
        if candidate <= self.draft.start_time {
            log_form_rejection("select_end_time", &candidate.to_rfc3339());
            return Err(ScheduleError::EndNotAfterStart);
        }

        self.draft.end_time = candidate;
        debug!(end = %candidate, "End time selected");
        Ok(())
    }

    // Food items

    pub fn set_food_input(&mut self, text: impl Into<String>) {
        self.food_input = text.into();
    }

    /// Append the food input buffer as an item and clear it
    pub fn commit_food_input(&mut self) -> bool {
        let text = std::mem::take(&mut self.food_input);
        let added = self.append_food_item(&text);
        if !added {
            self.food_input = text;
        }
        added
    }

    /// Append an item; blank text leaves the list and the input untouched
    pub fn append_food_item(&mut self, text: &str) -> bool {
        let added = self.draft.push_food_item(text);
        if added {
            self.food_input.clear();
            log_form_action("append_food_item", Some(text.trim()));
        }
        added
    }

    pub fn remove_food_item(&mut self, index: usize) -> Option<String> {
        let removed = self.draft.remove_food_item(index);
        if removed.is_none() {
            debug!(index = index, len = self.draft.food_items.len(), "Ignoring out of range food item removal");
        }
        removed
    }

    // Submission

    pub fn validate(&self) -> std::result::Result<CreateBhandaraRequest, ValidationError> {
        self.draft.to_request()
    }

    /// Validate and send the draft. The form resets only when the service
    /// accepts the bhandara; any failure leaves the draft as it was.
    pub async fn submit(&mut self, service: &dyn BhandaraService) -> Result<Bhandara> {
        let request = self.validate().map_err(|e| {
            log_form_rejection("submit", e.field());
            BhandaraError::Validation(e)
        })?;

        self.submitting = true;
        let outcome = service.create_bhandara(&request).await;
        self.submitting = false;

        let created = outcome?;
        self.reset();
        Ok(created)
    }

    /// Back to an empty draft dated today
    pub fn reset(&mut self) {
        self.draft = EventDraft::empty(self.clock.now());
        self.manual_latitude.clear();
        self.manual_longitude.clear();
        self.food_input.clear();
        self.manual_entry_visible = false;
        log_form_action("reset", None);
    }
}
