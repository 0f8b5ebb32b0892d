//! Status command: current clock state and today's totals.

use std::io::Write;

use anyhow::Result;

use timecard_core::Timecard;

use crate::Config;

use super::util::format_local;

pub fn run<W: Write>(writer: &mut W, timecard: &Timecard, config: &Config) -> Result<()> {
    writeln!(writer, "Timecard: {}", config.timecard_path.display())?;

    if timecard.is_clocked_in() {
        // The clocked-in check guarantees a last entry.
        if let Some(entry) = timecard.entries().last() {
            writeln!(writer, "Clocked in since {}", format_local(entry.start()))?;
        }
    } else {
        writeln!(writer, "Clocked out")?;
    }

    writeln!(writer, "Worked today: {} min", timecard.minutes_worked_today())?;
    writeln!(
        writer,
        "On break today: {} min",
        timecard.minutes_on_break_today()
    )?;

    if let Some(end) = timecard.expected_end_time_today(config.work_day_minutes) {
        writeln!(
            writer,
            "Expected end ({} min day): {}",
            config.work_day_minutes,
            format_local(end)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            timecard_path: PathBuf::from("/tmp/timecard.log"),
            work_day_minutes: 480,
        }
    }

    #[test]
    fn reports_clocked_out_for_empty_card() {
        let card = Timecard::new();
        let mut out = Vec::new();
        run(&mut out, &card, &test_config()).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Clocked out"));
        assert!(output.contains("Worked today: 0 min"));
    }

    #[test]
    fn reports_clocked_in_with_minutes() {
        let mut card = Timecard::new();
        card.clock_in_at(Utc::now() - Duration::minutes(90));

        let mut out = Vec::new();
        run(&mut out, &card, &test_config()).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Clocked in since"));
        assert!(output.contains("Worked today:"));
        assert!(output.contains("Expected end (480 min day)"));
    }
}
