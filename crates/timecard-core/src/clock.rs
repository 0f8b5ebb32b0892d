//! Injectable time source.
//!
//! Several operations are defined relative to "now" (future-time rejection,
//! open-entry resolution) or "today" (day filtering defaults). Wiring the
//! clock in as a capability instead of reading `Utc::now()` inline keeps
//! those behaviors deterministic under test.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of the current instant and of local-day resolution.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The calendar day the given instant falls on, in the caller's timezone.
    fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate;

    /// The calendar day of the current instant.
    fn today(&self) -> NaiveDate {
        self.date_of(self.now())
    }
}

/// Wall-clock time with local-timezone day resolution. The default clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&Local).date_naive()
    }
}

/// A clock frozen at a fixed instant, resolving days against UTC.
///
/// Intended for tests and for embedders that need reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports `now`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Creates a clock frozen at the given epoch milliseconds.
    ///
    /// Returns `None` if the timestamp is out of range.
    #[must_use]
    pub fn at_epoch_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.date_naive()
    }
}
