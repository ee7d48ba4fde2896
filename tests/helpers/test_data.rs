//! Test data helpers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use serde_json::{json, Value};
use bhandara_finder::models::Coordinates;
use bhandara_finder::services::{FixedClock, LocationProvider};

pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 1800).expect("valid offset")
}

/// 19 Oct 2026, 10:00 IST
pub fn test_now() -> DateTime<FixedOffset> {
    ist().with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
}

pub fn test_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(test_now()))
}

pub fn delhi() -> Coordinates {
    Coordinates::new(28.6139, 77.209).unwrap()
}

pub fn sample_bhandara_json(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "location": "Gurudwara Bangla Sahib",
        "date": "2026-10-19T18:30:00.000Z",
        "startTime": "2026-10-20T06:30:00.000Z",
        "endTime": "2026-10-20T08:30:00.000Z",
        "organizer": "Seva Samiti",
        "foodItems": ["Dal", "Rice", "Kheer"],
        "latitude": 28.6262,
        "longitude": 77.2091,
        "attendees": 42,
        "createdAt": "2026-10-18T09:00:00.000Z",
        "updatedAt": "2026-10-18T09:00:00.000Z"
    })
}

/// Location provider with a scripted answer that counts its calls
#[derive(Debug)]
pub struct ScriptedLocationProvider {
    pub grant: bool,
    pub fix: Option<Coordinates>,
    pub permission_requests: AtomicUsize,
    pub location_requests: AtomicUsize,
}

impl ScriptedLocationProvider {
    pub fn granted(fix: Option<Coordinates>) -> Self {
        Self {
            grant: true,
            fix,
            permission_requests: AtomicUsize::new(0),
            location_requests: AtomicUsize::new(0),
        }
    }

    pub fn denied() -> Self {
        Self {
            grant: false,
            fix: None,
            permission_requests: AtomicUsize::new(0),
            location_requests: AtomicUsize::new(0),
        }
    }

    pub fn location_requests(&self) -> usize {
        self.location_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationProvider for ScriptedLocationProvider {
    async fn request_permission(&self) -> bool {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        self.grant
    }

    async fn current_location(&self) -> Option<Coordinates> {
        self.location_requests.fetch_add(1, Ordering::SeqCst);
        self.fix
    }
}
