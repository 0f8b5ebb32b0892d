//! The timecard entity: an ordered sequence of entries with invariant
//! validation, clock state transitions, and derived-minute calculations.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::clock::{Clock, SystemClock};
use crate::entry::TimeEntry;
use crate::error::TimecardError;
use crate::outcome::{CleanOutcome, ClockOutcome, UndoOutcome};

/// Extra minutes added to the projected end-of-day time.
///
/// Carried over from the original calculation, which padded the projection
/// by one minute so the displayed end time never undershoots.
pub const EXPECTED_END_PADDING_MINUTES: i64 = 1;

/// A chronologically ordered sequence of [`TimeEntry`] values for one
/// tracked subject.
///
/// Invariants, enforced at construction, load, and after every mutation:
///
/// 1. At most the last entry may be open; every earlier entry is closed.
/// 2. Each entry starts no earlier than the previous entry ended.
///
/// The clock is injected so that "now"-relative policies (future-time
/// rejection, open-entry resolution) are deterministic under test.
#[derive(Debug, Clone)]
pub struct Timecard<C: Clock = SystemClock> {
    entries: Vec<TimeEntry>,
    clock: C,
}

impl Timecard<SystemClock> {
    /// Creates an empty timecard on the system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a timecard from pre-built entries, validating them.
    pub fn from_entries(entries: Vec<TimeEntry>) -> Result<Self, TimecardError> {
        Self::from_entries_with_clock(entries, SystemClock)
    }

    /// Loads a timecard from its serialized form (the `Display` output).
    pub fn parse(data: &str) -> Result<Self, TimecardError> {
        Self::parse_with_clock(data, SystemClock)
    }
}

impl Default for Timecard<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Timecard<C> {
    /// Creates an empty timecard on the given clock.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Creates a timecard from pre-built entries, validating them.
    pub fn from_entries_with_clock(
        entries: Vec<TimeEntry>,
        clock: C,
    ) -> Result<Self, TimecardError> {
        validate(&entries)?;
        Ok(Self { entries, clock })
    }

    /// Loads a timecard from newline-separated entry records.
    ///
    /// An empty string yields an empty timecard. Any malformed record or
    /// invariant violation fails the whole load; no partial state results.
    pub fn parse_with_clock(data: &str, clock: C) -> Result<Self, TimecardError> {
        let entries = data
            .lines()
            .filter(|record| !record.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<TimeEntry>, _>>()?;
        Self::from_entries_with_clock(entries, clock)
    }

    /// All logged entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// The injected time source.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Whether the last entry is open.
    #[must_use]
    pub fn is_clocked_in(&self) -> bool {
        self.entries.last().is_some_and(TimeEntry::is_open)
    }

    /// Whether the card has no open entry.
    #[must_use]
    pub fn is_clocked_out(&self) -> bool {
        !self.is_clocked_in()
    }

    fn time_is_future(&self, time: DateTime<Utc>) -> bool {
        self.clock.now() < time
    }

    /// Logs a clock-in at the current time.
    pub fn clock_in(&mut self) -> ClockOutcome {
        self.clock_in_at(self.clock.now())
    }

    /// Logs a clock-in at the given time.
    ///
    /// Returns [`ClockOutcome::NoOp`] if already clocked in,
    /// [`ClockOutcome::TimeInFuture`] if `time` is after now, and
    /// [`ClockOutcome::TimeTooEarly`] if `time` is not after the previous
    /// entry's end.
    pub fn clock_in_at(&mut self, time: DateTime<Utc>) -> ClockOutcome {
        if self.is_clocked_in() {
            return ClockOutcome::NoOp;
        }
        if self.time_is_future(time) {
            return ClockOutcome::TimeInFuture;
        }

        // The last entry, if any, is closed: the clocked-out check passed.
        if let Some(last) = self.entries.last() {
            if last.end().is_some_and(|end| end >= time) {
                return ClockOutcome::TimeTooEarly;
            }
        }

        self.entries.push(TimeEntry::open(time));
        ClockOutcome::Success
    }

    /// Logs a clock-out at the current time.
    pub fn clock_out(&mut self) -> ClockOutcome {
        self.clock_out_at(self.clock.now())
    }

    /// Logs a clock-out at the given time.
    ///
    /// Returns [`ClockOutcome::NoOp`] if already clocked out,
    /// [`ClockOutcome::TimeInFuture`] if `time` is after now, and
    /// [`ClockOutcome::TimeTooEarly`] if `time` is not after the open
    /// entry's start.
    pub fn clock_out_at(&mut self, time: DateTime<Utc>) -> ClockOutcome {
        if self.is_clocked_out() {
            return ClockOutcome::NoOp;
        }
        if self.time_is_future(time) {
            return ClockOutcome::TimeInFuture;
        }

        let Some(last) = self.entries.pop() else {
            // Unreachable: a clocked-in card has at least one entry.
            return ClockOutcome::NoOp;
        };
        if last.start() >= time {
            self.entries.push(last);
            return ClockOutcome::TimeTooEarly;
        }

        self.entries
            .push(TimeEntry::closed_unchecked(last.start(), time));
        ClockOutcome::Success
    }

    /// Rolls back the last clock event.
    ///
    /// If clocked in, the open entry is removed entirely; if clocked out,
    /// the last entry is reopened.
    pub fn undo(&mut self) -> UndoOutcome {
        let was_clocked_in = self.is_clocked_in();
        let Some(last) = self.entries.pop() else {
            return UndoOutcome::NoOp;
        };

        if !was_clocked_in {
            self.entries.push(last.reopened());
        }
        UndoOutcome::Success
    }

    /// Removes entries that fall entirely before today.
    pub fn clean(&mut self) -> CleanOutcome {
        self.clean_before(self.clock.today())
    }

    /// Removes entries that fall entirely before `oldest_kept`.
    ///
    /// An entry survives if the day-range filter from `oldest_kept` to today
    /// matches it. Returns [`CleanOutcome::DateInFuture`] if `oldest_kept`
    /// is after today and [`CleanOutcome::NoOp`] if nothing was removed.
    pub fn clean_before(&mut self, oldest_kept: NaiveDate) -> CleanOutcome {
        let today = self.clock.today();
        if oldest_kept > today {
            return CleanOutcome::DateInFuture;
        }

        let before = self.entries.len();
        let clock = &self.clock;
        self.entries
            .retain(|entry| touches_range(clock, entry, oldest_kept, today));
        let removed = before - self.entries.len();
        if removed == 0 {
            return CleanOutcome::NoOp;
        }

        tracing::debug!(removed, "cleaned old entries");
        CleanOutcome::Success
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries whose span touches the given day.
    #[must_use]
    pub fn entries_for_day(&self, date: NaiveDate) -> Vec<TimeEntry> {
        self.entries_in_range(date, date)
    }

    /// Entries whose span touches today.
    #[must_use]
    pub fn entries_for_today(&self) -> Vec<TimeEntry> {
        self.entries_for_day(self.clock.today())
    }

    /// Entries whose span touches any day from `from_date` through today.
    #[must_use]
    pub fn entries_since(&self, from_date: NaiveDate) -> Vec<TimeEntry> {
        self.entries_in_range(from_date, self.clock.today())
    }

    /// Entries whose start day or end day falls within `[from_date, to_date]`.
    ///
    /// An entry is matched by touching either boundary day of its own span,
    /// so a day strictly inside a multi-day entry does not match it.
    #[must_use]
    pub fn entries_in_range(&self, from_date: NaiveDate, to_date: NaiveDate) -> Vec<TimeEntry> {
        self.entries
            .iter()
            .filter(|entry| touches_range(&self.clock, entry, from_date, to_date))
            .copied()
            .collect()
    }

    /// Resolves the effective end of an open span.
    ///
    /// A missing `candidate` resolves to now when `reference` falls on today
    /// and `include_now` is set; otherwise the span contributes nothing.
    fn effective_end(
        &self,
        candidate: Option<DateTime<Utc>>,
        reference: DateTime<Utc>,
        include_now: bool,
    ) -> Option<DateTime<Utc>> {
        if let Some(candidate) = candidate {
            return Some(candidate);
        }

        let now = self.clock.now();
        if self.clock.date_of(now) == self.clock.date_of(reference) {
            include_now.then_some(now)
        } else {
            // The open span started on an earlier day; this is history.
            None
        }
    }

    /// Whole minutes worked on the given day.
    ///
    /// With `include_now`, an entry still open today counts up to now.
    #[must_use]
    pub fn minutes_worked(&self, date: NaiveDate, include_now: bool) -> i64 {
        let mut total = 0;
        for entry in self.entries_for_day(date) {
            let Some(end) = self.effective_end(entry.end(), entry.start(), include_now) else {
                continue;
            };
            total += (end - entry.start()).num_minutes();
        }
        total
    }

    /// Whole minutes worked today, counting an open entry up to now.
    #[must_use]
    pub fn minutes_worked_today(&self) -> i64 {
        self.minutes_worked(self.clock.today(), true)
    }

    /// Whole minutes spent between entries on the given day.
    ///
    /// With `include_now`, time since the day's last clock-out counts as an
    /// ongoing break. An open final entry contributes no break time.
    #[must_use]
    pub fn minutes_on_break(&self, date: NaiveDate, include_now: bool) -> i64 {
        let mut total = 0;
        let entries = self.entries_for_day(date);
        for (i, entry) in entries.iter().enumerate() {
            let Some(end) = entry.end() else {
                continue;
            };
            let next_start = entries.get(i + 1).map(TimeEntry::start);
            let Some(gap_end) = self.effective_end(next_start, end, include_now) else {
                continue;
            };
            total += (gap_end - end).num_minutes();
        }
        total
    }

    /// Whole minutes on break today, counting an ongoing break up to now.
    #[must_use]
    pub fn minutes_on_break_today(&self) -> i64 {
        self.minutes_on_break(self.clock.today(), true)
    }

    /// Projects when `minutes_to_work` of work will be reached on `date`.
    ///
    /// The projection is the day's first start (or now, for a day with no
    /// entries yet) plus the target, the day's break minutes, and
    /// [`EXPECTED_END_PADDING_MINUTES`]. Returns `None` for a past or
    /// future day with no data.
    #[must_use]
    pub fn expected_end_time(
        &self,
        minutes_to_work: i64,
        date: NaiveDate,
    ) -> Option<DateTime<Utc>> {
        let minutes_on_break = self.minutes_on_break(date, true);

        let entries = self.entries_for_day(date);
        if entries.is_empty() && date != self.clock.today() {
            return None;
        }

        let start = entries
            .first()
            .map_or_else(|| self.clock.now(), TimeEntry::start);
        Some(
            start
                + Duration::minutes(
                    minutes_to_work + minutes_on_break + EXPECTED_END_PADDING_MINUTES,
                ),
        )
    }

    /// Projects today's end time for the given work target.
    #[must_use]
    pub fn expected_end_time_today(&self, minutes_to_work: i64) -> Option<DateTime<Utc>> {
        self.expected_end_time(minutes_to_work, self.clock.today())
    }
}

/// Checks the chronological invariants over a prospective entry sequence.
fn validate(entries: &[TimeEntry]) -> Result<(), TimecardError> {
    let mut previous_end = DateTime::UNIX_EPOCH;
    let last_index = entries.len().wrapping_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        if entry.is_open() && i != last_index {
            return Err(TimecardError::OpenEntryNotLast);
        }

        if entry.start() < previous_end {
            return Err(TimecardError::OutOfOrder {
                start: entry.start(),
                previous_end,
            });
        }

        // start <= end within one entry is guaranteed by TimeEntry.
        if let Some(end) = entry.end() {
            previous_end = end;
        }
    }
    Ok(())
}

/// Whether an entry's start day or end day falls within `[from, to]`.
fn touches_range<C: Clock>(clock: &C, entry: &TimeEntry, from: NaiveDate, to: NaiveDate) -> bool {
    let in_range = |date: NaiveDate| from <= date && date <= to;

    let start_matches = in_range(clock.date_of(entry.start()));
    match entry.end() {
        Some(end) => start_matches || in_range(clock.date_of(end)),
        None => start_matches,
    }
}

impl<C: Clock> fmt::Display for Timecard<C> {
    /// Serializes as newline-separated entry records; empty card, empty
    /// string. [`Timecard::parse`] reproduces the entries exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
