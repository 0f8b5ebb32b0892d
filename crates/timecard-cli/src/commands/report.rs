//! Report command: entries and minute totals for one day.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

use timecard_core::{TimeEntry, Timecard};

use crate::Config;

use super::util::format_local;

/// Computed report for a single day.
#[derive(Debug, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub entries: Vec<TimeEntry>,
    pub minutes_worked: i64,
    pub minutes_on_break: i64,
    pub expected_end_time: Option<DateTime<Utc>>,
}

impl DayReport {
    /// Builds the report for `date` from the given timecard.
    #[must_use]
    pub fn build(timecard: &Timecard, config: &Config, date: NaiveDate) -> Self {
        Self {
            date,
            entries: timecard.entries_for_day(date),
            minutes_worked: timecard.minutes_worked(date, true),
            minutes_on_break: timecard.minutes_on_break(date, true),
            expected_end_time: timecard.expected_end_time(config.work_day_minutes, date),
        }
    }
}

pub fn run<W: Write>(
    writer: &mut W,
    timecard: &Timecard,
    config: &Config,
    date: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let report = DayReport::build(timecard, config, date);

    if json {
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "Report for {date}")?;
    if report.entries.is_empty() {
        writeln!(writer, "No entries.")?;
    } else {
        for entry in &report.entries {
            match entry.end() {
                Some(end) => writeln!(
                    writer,
                    "- {} to {}",
                    format_local(entry.start()),
                    format_local(end)
                )?,
                None => writeln!(writer, "- {} (open)", format_local(entry.start()))?,
            }
        }
    }
    writeln!(writer, "Worked: {} min", report.minutes_worked)?;
    writeln!(writer, "On break: {} min", report.minutes_on_break)?;
    if let Some(end) = report.expected_end_time {
        writeln!(writer, "Expected end: {}", format_local(end))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            timecard_path: PathBuf::from("/tmp/timecard.log"),
            work_day_minutes: 480,
        }
    }

    // The local calendar day the epoch falls on, matching how the card
    // resolves entry days.
    fn epoch_day() -> NaiveDate {
        DateTime::from_timestamp_millis(0)
            .unwrap()
            .with_timezone(&Local)
            .date_naive()
    }

    #[test]
    fn report_totals_for_past_day() {
        let card = Timecard::parse("0,60000\n120000,300000").unwrap();
        let report = DayReport::build(&card, &test_config(), epoch_day());

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.minutes_worked, 4);
        assert_eq!(report.minutes_on_break, 1);
    }

    #[test]
    fn json_output_is_machine_readable() {
        let card = Timecard::parse("0,60000").unwrap();
        let mut out = Vec::new();
        run(&mut out, &card, &test_config(), Some(epoch_day()), true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["minutes_worked"], 1);
        assert_eq!(value["entries"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn human_output_lists_entries() {
        let card = Timecard::parse("0,60000").unwrap();
        let mut out = Vec::new();
        run(&mut out, &card, &test_config(), Some(epoch_day()), false).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Worked: 1 min"));
        assert!(output.contains(" to "));
    }

    #[test]
    fn empty_day_reports_no_entries() {
        let card = Timecard::new();
        let date = epoch_day();
        let mut out = Vec::new();
        run(&mut out, &card, &test_config(), Some(date), false).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("No entries."));
        assert!(output.contains("Worked: 0 min"));
    }
}
