//! Nearby command handler

use chrono::Local;
use tracing::info;
use crate::models::Bhandara;
use crate::services::ServiceFactory;
use crate::state::{FeedView, NearbyFeed};
use crate::utils::errors::Result;
use crate::utils::helpers::{
    directions_url, format_event_date, format_event_time, format_food_items, native_maps_url, truncate_text,
    MapPlatform,
};

const MAX_TITLE_LENGTH: usize = 60;

/// Render one bhandara as a text card
pub fn render_card(bhandara: &Bhandara) -> String {
    let start = bhandara.start_time.with_timezone(&Local);
    let end = bhandara.end_time.with_timezone(&Local);
    let date = bhandara.date.with_timezone(&Local);

    let mut card = format!(
        "{}\n  Location:   {}\n  Date:       {}\n  Time:       {} - {}\n  Organizer:  {}\n  Food:       {}\n",
        truncate_text(&bhandara.title, MAX_TITLE_LENGTH),
        bhandara.location,
        format_event_date(&date),
        format_event_time(&start),
        format_event_time(&end),
        bhandara.organizer,
        format_food_items(&bhandara.food_items),
    );

    if bhandara.attendees > 0 {
        card.push_str(&format!("  Attending:  {}\n", bhandara.attendees));
    }
    let coords = bhandara.coordinates();
    card.push_str(&format!("  Maps:       {}\n", native_maps_url(coords, MapPlatform::current())));
    card.push_str(&format!("  Directions: {}\n", directions_url(coords)));

    card
}

/// Handle `nearby` - list bhandaras around the current position
///
/// Feed failures are part of the rendered view rather than an error return.
pub async fn handle_nearby(services: &ServiceFactory) -> Result<String> {
    let mut feed = NearbyFeed::new();
    // A failed load is already recorded on the feed and logged there
    let _ = feed
        .load(services.location_provider.as_ref(), services.bhandara_service.as_ref())
        .await;

    let output = match feed.view() {
        FeedView::Events(bhandaras) => {
            info!(count = bhandaras.len(), "Listing nearby bhandaras");
            let cards: Vec<String> = bhandaras.iter().map(render_card).collect();
            format!("Nearby Bhandaras ({})\n\n{}", bhandaras.len(), cards.join("\n"))
        }
        FeedView::Empty => "No bhandaras nearby.\n\
            There are no community bhandaras within 5km of your current location. \
            Check back later or consider organizing one yourself!\n"
            .to_string(),
        FeedView::Error(error) => format!("{}\n", error),
        FeedView::Loading => String::new(),
    };

    Ok(output)
}
