//! Core domain logic for the timecard tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - `TimeEntry`: one clock-in/clock-out interval
//! - `Timecard`: the ordered entry sequence with its invariants,
//!   state transitions, day filtering, and minute calculations
//! - `TimecardModel`: an observable wrapper for UI frontends
//!
//! Serialized form is one entry record per line, epoch milliseconds:
//! `"<start>"` for an open entry, `"<start>,<end>"` for a closed one.

mod clock;
mod entry;
mod error;
mod model;
mod outcome;
mod timecard;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::TimeEntry;
pub use error::TimecardError;
pub use model::{EntriesObserver, TimecardModel};
pub use outcome::{CleanOutcome, ClockOutcome, UndoOutcome};
pub use timecard::{EXPECTED_END_PADDING_MINUTES, Timecard};
