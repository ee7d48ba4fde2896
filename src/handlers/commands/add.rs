//! Add command handler

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};
use crate::config::FeaturesConfig;
use crate::services::ServiceFactory;
use crate::state::EventForm;
use crate::utils::errors::{BhandaraError, Result};
use super::nearby::render_card;

/// Values for a new bhandara as given on the command line
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub title: String,
    pub location: String,
    pub organizer: String,
    pub date: Option<NaiveDate>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub food_items: Vec<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub auto_location: bool,
}

/// Handle `add` - fill the form, apply its rules and submit
///
/// Coordinate sources switched off in `features` are rejected before the
/// form is touched by them.
pub async fn handle_add(services: &ServiceFactory, options: AddOptions, features: &FeaturesConfig) -> Result<String> {
    let mut form = EventForm::new(services.clock.clone());
    form.set_title(options.title);
    form.set_location(options.location);
    form.set_organizer(options.organizer);

    if let Some(date) = options.date {
        form.select_date(date)?;
    }
    if let Some(start) = options.start {
        let start = form.at_time(start);
        form.select_start_time(start)?;
    }
    if let Some(end) = options.end {
        let end = form.at_time(end);
        form.select_end_time(end)?;
    }

    for item in &options.food_items {
        form.append_food_item(item);
    }

    match (options.latitude, options.longitude) {
        (None, None) => {}
        (latitude, longitude) => {
            if !features.manual_coordinates {
                return Err(BhandaraError::InvalidInput(
                    "Manual coordinates are disabled".to_string()
                ));
            }
            form.set_manual(
                latitude.as_deref().unwrap_or_default(),
                longitude.as_deref().unwrap_or_default(),
            )?;
        }
    }

    if options.auto_location {
        if !features.auto_location {
            return Err(BhandaraError::InvalidInput(
                "Automatic location is disabled".to_string()
            ));
        }
        form.capture_automatic(services.location_provider.as_ref()).await?;
    }

    debug!(draft = ?form.draft(), "Submitting bhandara");
    let created = form.submit(services.bhandara_service.as_ref()).await?;
    info!(bhandara_id = %created.id, "Bhandara published");

    Ok(format!(
        "Your bhandara has been created successfully. Community members nearby will be able to see it.\n\n{}",
        render_card(&created)
    ))
}
