//! UI-facing wrapper around a [`Timecard`].
//!
//! Owns one card, forwards every operation to it, and republishes a
//! read-only snapshot of the entry list to subscribers after each mutating
//! call. A frontend binds its entry view to the snapshot and re-renders on
//! notification instead of reaching into the card itself.

use chrono::{DateTime, NaiveDate, Utc};

use crate::clock::{Clock, SystemClock};
use crate::entry::TimeEntry;
use crate::error::TimecardError;
use crate::outcome::{CleanOutcome, ClockOutcome, UndoOutcome};
use crate::timecard::Timecard;

/// Callback invoked with the current entry snapshot after every mutation.
pub type EntriesObserver = Box<dyn FnMut(&[TimeEntry])>;

/// Observable wrapper owning a [`Timecard`].
pub struct TimecardModel<C: Clock = SystemClock> {
    timecard: Timecard<C>,
    snapshot: Vec<TimeEntry>,
    observers: Vec<EntriesObserver>,
}

impl TimecardModel<SystemClock> {
    /// Creates a model over an empty timecard on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimecardModel<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimecardModel<C> {
    /// Creates a model over an empty timecard on the given clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            timecard: Timecard::with_clock(clock),
            snapshot: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Creates a model over an existing timecard.
    #[must_use]
    pub fn from_timecard(timecard: Timecard<C>) -> Self {
        let snapshot = timecard.entries().to_vec();
        Self {
            timecard,
            snapshot,
            observers: Vec::new(),
        }
    }

    /// Registers an observer and immediately sends it the current snapshot.
    pub fn subscribe(&mut self, mut observer: EntriesObserver) {
        observer(&self.snapshot);
        self.observers.push(observer);
    }

    fn publish(&mut self) {
        self.snapshot = self.timecard.entries().to_vec();
        for observer in &mut self.observers {
            observer(&self.snapshot);
        }
    }

    /// The entry snapshot as of the last mutation.
    #[must_use]
    pub fn entries(&self) -> &[TimeEntry] {
        &self.snapshot
    }

    /// Whether the underlying card is clocked in.
    #[must_use]
    pub fn is_clocked_in(&self) -> bool {
        self.timecard.is_clocked_in()
    }

    /// Whether the underlying card is clocked out.
    #[must_use]
    pub fn is_clocked_out(&self) -> bool {
        self.timecard.is_clocked_out()
    }

    /// Replaces the card with one loaded from serialized data.
    ///
    /// On failure the previous card and snapshot are left untouched.
    pub fn load(&mut self, data: &str) -> Result<(), TimecardError>
    where
        C: Clone,
    {
        let clock = self.timecard.clock().clone();
        self.timecard = Timecard::parse_with_clock(data, clock)?;
        self.publish();
        Ok(())
    }

    /// Serializes the underlying card (see [`Timecard::parse`]).
    #[must_use]
    pub fn serialize(&self) -> String {
        self.timecard.to_string()
    }

    pub fn clock_in(&mut self) -> ClockOutcome {
        let outcome = self.timecard.clock_in();
        self.publish();
        outcome
    }

    pub fn clock_in_at(&mut self, time: DateTime<Utc>) -> ClockOutcome {
        let outcome = self.timecard.clock_in_at(time);
        self.publish();
        outcome
    }

    pub fn clock_out(&mut self) -> ClockOutcome {
        let outcome = self.timecard.clock_out();
        self.publish();
        outcome
    }

    pub fn clock_out_at(&mut self, time: DateTime<Utc>) -> ClockOutcome {
        let outcome = self.timecard.clock_out_at(time);
        self.publish();
        outcome
    }

    pub fn undo(&mut self) -> UndoOutcome {
        let outcome = self.timecard.undo();
        self.publish();
        outcome
    }

    pub fn clean(&mut self) -> CleanOutcome {
        let outcome = self.timecard.clean();
        self.publish();
        outcome
    }

    pub fn clean_before(&mut self, oldest_kept: NaiveDate) -> CleanOutcome {
        let outcome = self.timecard.clean_before(oldest_kept);
        self.publish();
        outcome
    }

    pub fn clear(&mut self) {
        self.timecard.clear();
        self.publish();
    }

    /// Forwards to [`Timecard::entries_for_day`].
    #[must_use]
    pub fn entries_for_day(&self, date: NaiveDate) -> Vec<TimeEntry> {
        self.timecard.entries_for_day(date)
    }

    /// Forwards to [`Timecard::entries_in_range`].
    #[must_use]
    pub fn entries_in_range(&self, from_date: NaiveDate, to_date: NaiveDate) -> Vec<TimeEntry> {
        self.timecard.entries_in_range(from_date, to_date)
    }

    /// Forwards to [`Timecard::minutes_worked`].
    #[must_use]
    pub fn minutes_worked(&self, date: NaiveDate, include_now: bool) -> i64 {
        self.timecard.minutes_worked(date, include_now)
    }

    /// Forwards to [`Timecard::minutes_on_break`].
    #[must_use]
    pub fn minutes_on_break(&self, date: NaiveDate, include_now: bool) -> i64 {
        self.timecard.minutes_on_break(date, include_now)
    }

    /// Forwards to [`Timecard::expected_end_time`].
    #[must_use]
    pub fn expected_end_time(
        &self,
        minutes_to_work: i64,
        date: NaiveDate,
    ) -> Option<DateTime<Utc>> {
        self.timecard.expected_end_time(minutes_to_work, date)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::clock::FixedClock;

    fn model() -> TimecardModel<FixedClock> {
        TimecardModel::with_clock(FixedClock::at_epoch_millis(5 * 86_400_000).unwrap())
    }

    fn instant(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn subscribe_receives_current_snapshot() {
        let mut model = model();
        model.clock_in_at(instant(1000));

        let seen = Rc::new(RefCell::new(0usize));
        let seen_by_observer = Rc::clone(&seen);
        model.subscribe(Box::new(move |entries| {
            *seen_by_observer.borrow_mut() = entries.len();
        }));

        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn mutations_republish_the_snapshot() {
        let mut model = model();
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&published);
        model.subscribe(Box::new(move |entries| {
            sink.borrow_mut().push(entries.len());
        }));

        model.clock_in_at(instant(1000));
        model.clock_out_at(instant(61_000));
        model.undo();
        model.clear();

        // Initial subscription plus one notification per mutating call.
        assert_eq!(*published.borrow(), vec![0, 1, 1, 1, 0]);
    }

    #[test]
    fn outcomes_pass_through_unchanged() {
        let mut model = model();
        assert_eq!(model.clock_out(), ClockOutcome::NoOp);
        assert_eq!(model.undo(), UndoOutcome::NoOp);
        assert_eq!(model.clock_in_at(instant(1000)), ClockOutcome::Success);
        assert_eq!(model.clock_in(), ClockOutcome::NoOp);
    }

    #[test]
    fn load_replaces_entries_and_publishes() {
        let mut model = model();
        model.load("0,60000\n120000").unwrap();
        assert_eq!(model.entries().len(), 2);
        assert!(model.is_clocked_in());
        assert_eq!(model.serialize(), "0,60000\n120000");
    }

    #[test]
    fn failed_load_keeps_previous_entries() {
        let mut model = model();
        model.clock_in_at(instant(1000));
        assert!(model.load("not a record").is_err());
        assert_eq!(model.entries().len(), 1);
    }

    #[test]
    fn queries_forward_to_the_card() {
        let mut model = model();
        model.load("0,60000\n120000,300000").unwrap();
        let day0 = instant(0).date_naive();
        assert_eq!(model.minutes_worked(day0, true), 4);
        assert_eq!(model.minutes_on_break(day0, true), 1);
        assert_eq!(model.entries_for_day(day0).len(), 2);
    }

    #[test]
    fn undo_after_clock_in_restores_snapshot() {
        let mut model = model();
        model.load("0,60000\n120000,300000").unwrap();
        let before = model.entries().to_vec();

        model.clock_in_at(instant(450_000));
        model.undo();
        assert_eq!(model.entries(), before.as_slice());
    }
}
