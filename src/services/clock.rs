//! Wall-clock access
//!
//! The form's date and time checks compare against "now" and "today" in the
//! user's local offset. Reading time through this trait keeps those checks
//! deterministic under test.

use std::fmt::Debug;
use std::sync::Mutex;
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate};

pub trait Clock: Send + Sync + Debug {
    /// Current local wall-clock time
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current local calendar day
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the operating system clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut guard) = self.now.lock() {
            *guard += by;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.now.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
