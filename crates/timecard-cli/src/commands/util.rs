//! Shared helpers for command implementations.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Parses a user-supplied local time.
///
/// Accepts `"HH:MM"` (resolved against today) or `"YYYY-MM-DD HH:MM"`.
pub fn parse_local_time(input: &str) -> Result<DateTime<Utc>> {
    let naive = if let Ok(time) = NaiveTime::parse_from_str(input, "%H:%M") {
        Local::now().date_naive().and_time(time)
    } else {
        NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
            .with_context(|| format!("expected \"HH:MM\" or \"YYYY-MM-DD HH:MM\", got {input:?}"))?
    };

    match Local.from_local_datetime(&naive) {
        // Ambiguous (DST fall-back): use the earlier time
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => bail!("{input} does not exist in the local timezone"),
    }
}

/// Formats an instant for display, in the local timezone.
pub fn format_local(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
