//! Event form submission against a mock service

mod helpers;

use assert_matches::assert_matches;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use bhandara_finder::models::CoordinateSource;
use bhandara_finder::state::EventForm;
use bhandara_finder::utils::errors::{ApiError, BhandaraError, ValidationError};
use helpers::*;

fn filled_form() -> EventForm {
    let mut form = EventForm::new(test_clock());
    form.set_title("Community Langar");
    form.set_location("Gurudwara Sahib");
    form.set_organizer("Seva Samiti");
    form.select_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()).unwrap();
    let start = form.at_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    form.select_start_time(start).unwrap();
    form.append_food_item("Rice");
    form.append_food_item("Dal");
    form.append_food_item("Rice");
    form
}

#[tokio::test]
async fn test_successful_submission_resets_form() {
    let mock = BhandaraMockServer::new().await;
    mock.mock_create_echo().await;
    let provider = ScriptedLocationProvider::granted(Some(delhi()));

    let mut form = filled_form();
    form.capture_automatic(&provider).await.unwrap();
    let created = form.submit(&mock.api()).await.unwrap();

    assert_eq!(created.title, "Community Langar");
    assert_eq!(created.food_items, vec!["Rice", "Dal", "Rice"]);
    assert_eq!(created.coordinates(), delhi());
    assert_eq!(
        created.start_time,
        (test_now() + Duration::days(1) + Duration::hours(2)).with_timezone(&Utc)
    );
    assert_eq!(created.end_time, created.start_time + Duration::hours(1));

    let draft = form.draft();
    assert!(draft.title.is_empty());
    assert!(draft.food_items.is_empty());
    assert_eq!(draft.coordinates, CoordinateSource::Unset);
    assert_eq!(draft.date, test_now().date_naive());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_failed_submission_keeps_draft_for_retry() {
    let mock = BhandaraMockServer::new().await;
    mock.mock_create_failure(500, "Internal Server Error").await;

    let mut form = filled_form();
    form.set_manual("28.6139", "77.2090").unwrap();
    let before = form.draft().clone();

    let result = form.submit(&mock.api()).await;

    assert_matches!(result, Err(BhandaraError::Api(ApiError::CreateFailed { status: 500 })));
    assert_eq!(form.draft(), &before);
    assert_eq!(form.manual_input(), ("28.6139", "77.2090"));
}

#[tokio::test]
async fn test_invalid_draft_is_never_sent() {
    let mock = BhandaraMockServer::new().await;
    mock.expect_no_requests().await;

    let mut form = filled_form();
    let result = form.submit(&mock.api()).await;

    assert_matches!(
        result,
        Err(BhandaraError::Validation(ValidationError::MissingCoordinates))
    );
    assert_eq!(form.draft().title, "Community Langar");
}

#[tokio::test]
async fn test_retry_after_failure_succeeds() {
    let failing = BhandaraMockServer::new().await;
    failing.mock_create_failure(503, "").await;
    let working = BhandaraMockServer::new().await;
    working.mock_create_echo().await;

    let mut form = filled_form();
    form.set_manual("19.0760", "72.8777").unwrap();

    assert!(form.submit(&failing.api()).await.is_err());
    let created = form.submit(&working.api()).await.unwrap();
    assert_eq!(created.latitude, 19.076);
    assert!(form.draft().title.is_empty());
}
