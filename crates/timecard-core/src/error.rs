//! Fatal validation and parse errors.
//!
//! Recoverable policy conditions (wrong clock state, future times, clean
//! with nothing to do) are *not* errors; they are outcome values in
//! [`crate::outcome`]. Everything here means the data itself is unusable.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Validation and parse errors for timecard data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimecardError {
    /// An entry's start time was after its end time.
    #[error("entry start {start} is after its end {end}")]
    StartAfterEnd {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// An open entry appeared somewhere other than the last position.
    #[error("only the last entry may be open")]
    OpenEntryNotLast,

    /// An entry started before the previous entry ended.
    #[error("entries must be chronological: {start} begins before the previous entry ended at {previous_end}")]
    OutOfOrder {
        start: DateTime<Utc>,
        previous_end: DateTime<Utc>,
    },

    /// A serialized record had malformed or out-of-range epoch fields.
    #[error("malformed entry record {record:?}")]
    MalformedRecord { record: String },
}
