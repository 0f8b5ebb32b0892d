//! A single clock-in/clock-out interval.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::TimecardError;

/// One logged work interval: a start time and an optional end time.
///
/// An absent end means the interval is still open (the subject is clocked
/// in). Entries are immutable values; the [`crate::Timecard`] replaces an
/// entry rather than mutating it when a clock-out or undo changes its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
}

impl TimeEntry {
    /// Creates an entry, validating that `start <= end` when an end is given.
    ///
    /// A zero-length entry (`start == end`) is valid.
    pub fn new(
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, TimecardError> {
        if let Some(end) = end {
            if start > end {
                return Err(TimecardError::StartAfterEnd { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Creates an open (still ongoing) entry.
    #[must_use]
    pub const fn open(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }

    /// Creates a closed entry.
    pub fn closed(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimecardError> {
        Self::new(start, Some(end))
    }

    /// The instant this entry began.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// The instant this entry ended, if it has ended.
    #[must_use]
    pub const fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Whether this entry has no end time yet.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// A copy of this entry with its end cleared.
    #[must_use]
    pub(crate) const fn reopened(self) -> Self {
        Self::open(self.start)
    }

    /// Closes an entry without re-validating. Caller must guarantee
    /// `start <= end`.
    #[must_use]
    pub(crate) const fn closed_unchecked(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }
}

fn parse_epoch_millis(field: &str, record: &str) -> Result<DateTime<Utc>, TimecardError> {
    let millis: i64 = field.parse().map_err(|_| TimecardError::MalformedRecord {
        record: record.to_string(),
    })?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| TimecardError::MalformedRecord {
        record: record.to_string(),
    })
}

impl FromStr for TimeEntry {
    type Err = TimecardError;

    /// Parses `"<startEpochMillis>"` or `"<startEpochMillis>,<endEpochMillis>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start_field, end_field) = match s.split_once(',') {
            Some((start, end)) => (start, Some(end)),
            None => (s, None),
        };

        let start = parse_epoch_millis(start_field, s)?;
        let end = end_field
            .map(|field| parse_epoch_millis(field, s))
            .transpose()?;

        Self::new(start, end)
    }
}

impl fmt::Display for TimeEntry {
    /// Formats as epoch milliseconds, the inverse of [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start.timestamp_millis())?;
        if let Some(end) = self.end {
            write!(f, ",{}", end.timestamp_millis())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn new_rejects_start_after_end() {
        let result = TimeEntry::new(instant(60_000), Some(instant(0)));
        assert_eq!(
            result,
            Err(TimecardError::StartAfterEnd {
                start: instant(60_000),
                end: instant(0),
            })
        );
    }

    #[test]
    fn new_allows_zero_length() {
        let entry = TimeEntry::new(instant(60_000), Some(instant(60_000))).unwrap();
        assert_eq!(entry.start(), entry.end().unwrap());
    }

    #[test]
    fn parse_open_entry() {
        let entry: TimeEntry = "450000".parse().unwrap();
        assert_eq!(entry.start(), instant(450_000));
        assert!(entry.is_open());
    }

    #[test]
    fn parse_closed_entry() {
        let entry: TimeEntry = "120000,300000".parse().unwrap();
        assert_eq!(entry.start(), instant(120_000));
        assert_eq!(entry.end(), Some(instant(300_000)));
    }

    #[test]
    fn parse_rejects_malformed_fields() {
        assert!("abc".parse::<TimeEntry>().is_err());
        assert!("100,".parse::<TimeEntry>().is_err());
        assert!(",100".parse::<TimeEntry>().is_err());
        assert!("100,200,300".parse::<TimeEntry>().is_err());
        assert!("".parse::<TimeEntry>().is_err());
    }

    #[test]
    fn parse_rejects_inverted_interval() {
        let result = "300000,120000".parse::<TimeEntry>();
        assert!(matches!(result, Err(TimecardError::StartAfterEnd { .. })));
    }

    #[test]
    fn display_roundtrip() {
        for record in ["0", "0,60000", "120000,300000", "-1000,0"] {
            let entry: TimeEntry = record.parse().unwrap();
            assert_eq!(entry.to_string(), record);
        }
    }

    #[test]
    fn serializes_to_json_for_reports() {
        let entry: TimeEntry = "0,60000".parse().unwrap();
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["start"], "1970-01-01T00:00:00Z");
        assert_eq!(json["end"], "1970-01-01T00:01:00Z");

        let open = TimeEntry::open(instant(0));
        assert!(serde_json::to_value(open).unwrap()["end"].is_null());
    }

    #[test]
    fn equality_is_structural() {
        let a: TimeEntry = "0,60000".parse().unwrap();
        let b = TimeEntry::closed(instant(0), instant(60_000)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, TimeEntry::open(instant(0)));
    }
}
