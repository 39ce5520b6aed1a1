//! Date source for member creation.

use chrono::{NaiveDate, Utc};

/// Supplies the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date in UTC.
    fn today(&self) -> NaiveDate;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date. Used by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
