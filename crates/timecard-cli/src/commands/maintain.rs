//! Clean and clear commands for pruning the timecard.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use timecard_core::{CleanOutcome, Timecard};

/// Removes entries older than the cutoff. Returns whether the card changed.
pub fn clean<W: Write>(
    writer: &mut W,
    timecard: &mut Timecard,
    date: Option<NaiveDate>,
) -> Result<bool> {
    let outcome = match date {
        Some(date) => timecard.clean_before(date),
        None => timecard.clean(),
    };
    match outcome {
        CleanOutcome::Success => writeln!(writer, "Removed old entries.")?,
        CleanOutcome::NoOp => writeln!(writer, "Nothing to clean.")?,
        CleanOutcome::DateInFuture => writeln!(writer, "Cutoff date is in the future.")?,
    }
    Ok(outcome == CleanOutcome::Success)
}

/// Removes every entry.
pub fn clear<W: Write>(writer: &mut W, timecard: &mut Timecard) -> Result<()> {
    timecard.clear();
    writeln!(writer, "Removed all entries.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    #[test]
    fn clean_removes_past_entries() {
        let mut card = Timecard::parse("0,60000\n120000,300000").unwrap();

        let mut out = Vec::new();
        assert!(clean(&mut out, &mut card, None).unwrap());
        assert!(card.entries().is_empty());

        let mut out = Vec::new();
        assert!(!clean(&mut out, &mut card, None).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "Nothing to clean.\n");
    }

    #[test]
    fn clean_rejects_future_cutoff() {
        let mut card = Timecard::parse("0,60000").unwrap();
        let tomorrow = Local::now().date_naive() + Duration::days(1);

        let mut out = Vec::new();
        assert!(!clean(&mut out, &mut card, Some(tomorrow)).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Cutoff date is in the future.\n"
        );
        assert_eq!(card.entries().len(), 1);
    }

    #[test]
    fn clear_empties_the_card() {
        let mut card = Timecard::parse("0,60000\n120000").unwrap();
        let mut out = Vec::new();
        clear(&mut out, &mut card).unwrap();
        assert!(card.entries().is_empty());
    }
}
