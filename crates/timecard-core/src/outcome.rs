//! Outcome values for mutating operations.
//!
//! These are expected, recoverable conditions the caller branches on, kept
//! distinct from the fatal errors in [`crate::error`].

use std::fmt;

/// Outcome of a clock-in or clock-out attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockOutcome {
    /// The entry list changed.
    Success,
    /// The card was already in the requested clock state.
    NoOp,
    /// The given time does not come after the relevant boundary
    /// (previous clock-out for clock-in, current clock-in for clock-out).
    TimeTooEarly,
    /// The given time is after the current time.
    TimeInFuture,
}

/// Outcome of an undo attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The last clock event was rolled back.
    Success,
    /// There was nothing to undo.
    NoOp,
}

/// Outcome of a clean attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// Old entries were removed.
    Success,
    /// No entries fell before the cutoff.
    NoOp,
    /// The cutoff date is after today.
    DateInFuture,
}

impl fmt::Display for ClockOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::NoOp => "no-op",
            Self::TimeTooEarly => "time too early",
            Self::TimeInFuture => "time in future",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for UndoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::NoOp => "no-op",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for CleanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::NoOp => "no-op",
            Self::DateInFuture => "date in future",
        };
        write!(f, "{s}")
    }
}
