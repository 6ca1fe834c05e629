//! Time source abstraction
//!
//! Budget figures such as "days left in month" depend on the calendar date,
//! so anything date-sensitive takes a [`Clock`] instead of reading the system
//! time directly.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Provides the current instant and calendar date
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Today's date in the calendar the user lives in
    fn today(&self) -> NaiveDate;
}

/// Real clock; dates follow the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed instant, for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FixedClock {
    /// Pin both the instant and the date (the date is taken as UTC)
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            today: now.date_naive(),
        }
    }

    /// Pin to midday UTC on the given date
    pub fn on(today: NaiveDate) -> Self {
        let now = today
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or_default();
        Self { now, today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
