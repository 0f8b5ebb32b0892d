//! Clock-in, clock-out, and undo commands.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};

use timecard_core::{ClockOutcome, Timecard, UndoOutcome};

use super::util::format_local;

/// Attempts a clock-in. Returns whether the timecard changed.
pub fn clock_in<W: Write>(
    writer: &mut W,
    timecard: &mut Timecard,
    at: Option<DateTime<Utc>>,
) -> Result<bool> {
    let time = at.unwrap_or_else(Utc::now);
    let outcome = timecard.clock_in_at(time);
    match outcome {
        ClockOutcome::Success => writeln!(writer, "Clocked in at {}.", format_local(time))?,
        ClockOutcome::NoOp => writeln!(writer, "Already clocked in.")?,
        ClockOutcome::TimeInFuture => writeln!(writer, "Cannot clock in at a future time.")?,
        ClockOutcome::TimeTooEarly => writeln!(
            writer,
            "Clock-in time must come after the previous clock-out."
        )?,
    }
    Ok(outcome == ClockOutcome::Success)
}

/// Attempts a clock-out. Returns whether the timecard changed.
pub fn clock_out<W: Write>(
    writer: &mut W,
    timecard: &mut Timecard,
    at: Option<DateTime<Utc>>,
) -> Result<bool> {
    let time = at.unwrap_or_else(Utc::now);
    let outcome = timecard.clock_out_at(time);
    match outcome {
        ClockOutcome::Success => writeln!(writer, "Clocked out at {}.", format_local(time))?,
        ClockOutcome::NoOp => writeln!(writer, "Not clocked in.")?,
        ClockOutcome::TimeInFuture => writeln!(writer, "Cannot clock out at a future time.")?,
        ClockOutcome::TimeTooEarly => {
            writeln!(writer, "Clock-out time must come after the clock-in.")?;
        }
    }
    Ok(outcome == ClockOutcome::Success)
}

/// Rolls back the last clock event. Returns whether the timecard changed.
pub fn undo<W: Write>(writer: &mut W, timecard: &mut Timecard) -> Result<bool> {
    let outcome = timecard.undo();
    match outcome {
        UndoOutcome::Success => writeln!(writer, "Rolled back the last clock event.")?,
        UndoOutcome::NoOp => writeln!(writer, "Nothing to undo.")?,
    }
    Ok(outcome == UndoOutcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn output_of(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn clock_in_then_out_changes_card() {
        let mut card = Timecard::new();
        let start = Utc::now() - Duration::hours(2);
        let end = Utc::now() - Duration::hours(1);

        let mut out = Vec::new();
        assert!(clock_in(&mut out, &mut card, Some(start)).unwrap());
        assert!(output_of(out).starts_with("Clocked in at"));

        let mut out = Vec::new();
        assert!(clock_out(&mut out, &mut card, Some(end)).unwrap());
        assert!(card.is_clocked_out());
    }

    #[test]
    fn rejected_clock_in_reports_and_leaves_card() {
        let mut card = Timecard::new();
        let future = Utc::now() + Duration::hours(1);

        let mut out = Vec::new();
        assert!(!clock_in(&mut out, &mut card, Some(future)).unwrap());
        assert_eq!(output_of(out), "Cannot clock in at a future time.\n");
        assert!(card.entries().is_empty());
    }

    #[test]
    fn double_clock_in_is_noop() {
        let mut card = Timecard::new();
        let start = Utc::now() - Duration::hours(1);
        clock_in(&mut Vec::new(), &mut card, Some(start)).unwrap();

        let mut out = Vec::new();
        assert!(!clock_in(&mut out, &mut card, None).unwrap());
        assert_eq!(output_of(out), "Already clocked in.\n");
    }

    #[test]
    fn undo_reports_when_empty() {
        let mut card = Timecard::new();
        let mut out = Vec::new();
        assert!(!undo(&mut out, &mut card).unwrap());
        assert_eq!(output_of(out), "Nothing to undo.\n");
    }
}
