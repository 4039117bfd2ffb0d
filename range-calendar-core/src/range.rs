//! Date ranges and the selection reducer.
//!
//! A selection moves through three phases. Tapping a day on an empty or
//! complete range starts a new selection; the next tap closes it, swapping
//! endpoints when the second day comes first.
use std::sync::Arc;

use chrono::NaiveDate;

/// A start/end date pair.
///
/// When both ends are present `start_date <= end_date` holds. Ranges produced
/// by [`select_day`] always satisfy this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    /// The first selected day.
    pub start_date: Option<NaiveDate>,
    /// The last selected day, inclusive.
    pub end_date: Option<NaiveDate>,
}

/// Where a [`DateRange`] sits in the selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangePhase {
    /// Nothing selected.
    Empty,
    /// A start day is selected, waiting for the end day.
    StartOnly,
    /// Both ends are selected.
    Complete,
}

impl DateRange {
    /// The empty range.
    pub const EMPTY: Self = Self {
        start_date: None,
        end_date: None,
    };

    /// Creates a complete range, ordering the two days.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start_date: Some(a.min(b)),
            end_date: Some(a.max(b)),
        }
    }

    /// Creates a range with only a start day.
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: None,
        }
    }

    /// Returns the range with its two ends in order.
    ///
    /// Ranges built field by field may have `end_date` before `start_date`;
    /// those are swapped. Anything else comes back unchanged.
    pub fn normalized(self) -> Self {
        match (self.start_date, self.end_date) {
            (Some(a), Some(b)) => Self::new(a, b),
            _ => self,
        }
    }

    /// Returns the current selection phase.
    ///
    /// An end day without a start day is treated as empty.
    pub fn phase(&self) -> RangePhase {
        match (self.start_date, self.end_date) {
            (None, _) => RangePhase::Empty,
            (Some(_), None) => RangePhase::StartOnly,
            (Some(_), Some(_)) => RangePhase::Complete,
        }
    }

    /// Returns true when both ends are selected.
    pub fn is_complete(&self) -> bool {
        self.phase() == RangePhase::Complete
    }

    /// Returns true when `day` is the start day.
    pub fn is_start(&self, day: NaiveDate) -> bool {
        self.start_date == Some(day)
    }

    /// Returns true when `day` is the end day.
    pub fn is_end(&self, day: NaiveDate) -> bool {
        self.end_date == Some(day)
    }

    /// Returns true when `day` lies within the range, endpoints included.
    ///
    /// A start-only range contains just its start day.
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= day && day <= end,
            (Some(start), None) => start == day,
            _ => false,
        }
    }

    /// Returns true when `day` is strictly between the two endpoints.
    pub fn is_strictly_inside(&self, day: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start < day && day < end,
            _ => false,
        }
    }

    /// Returns true for a complete range whose ends are the same day.
    pub fn is_single_day(&self) -> bool {
        matches!((self.start_date, self.end_date), (Some(s), Some(e)) if s == e)
    }

    /// Number of nights between start and end, `None` unless complete.
    pub fn nights(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }
}

/// Applies a day tap to `range` and returns the new range.
///
/// | phase | tap | result |
/// |---|---|---|
/// | empty or complete | `d` | `start = d`, no end |
/// | start only | `d == start` | single-day range |
/// | start only | `d < start` | `start = d`, `end = old start` |
/// | start only | `d > start` | `end = d` |
pub fn select_day(range: DateRange, day: NaiveDate) -> DateRange {
    match (range.phase(), range.start_date) {
        (RangePhase::StartOnly, Some(start)) if day < start => DateRange {
            start_date: Some(day),
            end_date: Some(start),
        },
        (RangePhase::StartOnly, Some(start)) => DateRange {
            start_date: Some(start),
            end_date: Some(day),
        },
        _ => DateRange::starting(day),
    }
}

/// Decides which days can be tapped.
pub trait SelectableDates: Send + Sync {
    /// Returns true when `date` may be picked.
    fn is_selectable(&self, date: NaiveDate) -> bool {
        let _ = date;
        true
    }
}

/// Allows every date.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDates;

impl SelectableDates for AllDates {}

/// Allows dates on or after the wrapped day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotBefore(pub NaiveDate);

impl SelectableDates for NotBefore {
    fn is_selectable(&self, date: NaiveDate) -> bool {
        date >= self.0
    }
}

impl<F> SelectableDates for F
where
    F: Fn(NaiveDate) -> bool + Send + Sync,
{
    fn is_selectable(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// Shared handle to a selectable-dates policy.
pub type SharedSelectableDates = Arc<dyn SelectableDates>;

/// Why a tap left the range untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The day belongs to an adjacent month shown as filler.
    OutsideMonth,
    /// The press turned into a scroll before release.
    ScrollGesture,
    /// The selectable-dates policy rejected the day.
    NotSelectable,
}

/// Result of feeding a tap through [`RangeSelection::tap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The range changed to the contained value.
    Selected(DateRange),
    /// The tap was dropped.
    Ignored(IgnoreReason),
}

impl TapOutcome {
    /// Returns the new range if the tap was accepted.
    pub fn selected(self) -> Option<DateRange> {
        match self {
            TapOutcome::Selected(range) => Some(range),
            TapOutcome::Ignored(_) => None,
        }
    }
}

/// A working range plus the guards applied before [`select_day`].
#[derive(Clone)]
pub struct RangeSelection {
    range: DateRange,
    selectable: SharedSelectableDates,
}

impl std::fmt::Debug for RangeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSelection")
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

impl Default for RangeSelection {
    fn default() -> Self {
        Self::new(DateRange::EMPTY, Arc::new(AllDates))
    }
}

impl RangeSelection {
    /// Creates a selection starting from `range`.
    pub fn new(range: DateRange, selectable: SharedSelectableDates) -> Self {
        Self {
            range: range.normalized(),
            selectable,
        }
    }

    /// Returns the current range.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Replaces the current range without going through the reducer.
    ///
    /// Inverted ranges are reordered.
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range.normalized();
    }

    /// Returns true when the policy allows `date`.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.selectable.is_selectable(date)
    }

    /// Returns the selectable-dates policy.
    pub fn selectable(&self) -> &SharedSelectableDates {
        &self.selectable
    }

    /// Applies a tap on `day`.
    ///
    /// `in_displayed_month` is false for leading/trailing filler cells and
    /// `was_scroll` is true when the gesture was classified as a scroll.
    pub fn tap(&mut self, day: NaiveDate, in_displayed_month: bool, was_scroll: bool) -> TapOutcome {
        if !in_displayed_month {
            return TapOutcome::Ignored(IgnoreReason::OutsideMonth);
        }
        if was_scroll {
            return TapOutcome::Ignored(IgnoreReason::ScrollGesture);
        }
        if !self.is_selectable(day) {
            return TapOutcome::Ignored(IgnoreReason::NotSelectable);
        }
        self.range = select_day(self.range, day);
        tracing::debug!(
            start = ?self.range.start_date,
            end = ?self.range.end_date,
            "range selection changed"
        );
        TapOutcome::Selected(self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn inverted_ranges_are_reordered_on_entry() {
        let inverted = DateRange {
            start_date: Some(jan(20)),
            end_date: Some(jan(5)),
        };
        assert_eq!(inverted.normalized(), DateRange::new(jan(5), jan(20)));
        assert_eq!(DateRange::starting(jan(3)).normalized(), DateRange::starting(jan(3)));

        let mut selection = RangeSelection::new(inverted, Arc::new(AllDates));
        assert_eq!(selection.range(), DateRange::new(jan(5), jan(20)));
        assert!(selection.range().is_strictly_inside(jan(10)));

        selection.set_range(DateRange::EMPTY);
        selection.set_range(inverted);
        assert_eq!(selection.range().start_date, Some(jan(5)));
        assert_eq!(selection.range().end_date, Some(jan(20)));
    }

    #[test]
    fn empty_tap_starts_selection() {
        let next = select_day(DateRange::EMPTY, jan(10));
        assert_eq!(next, DateRange::starting(jan(10)));
        assert_eq!(next.phase(), RangePhase::StartOnly);
    }

    #[test]
    fn later_tap_sets_end() {
        let next = select_day(DateRange::starting(jan(10)), jan(14));
        assert_eq!(next, DateRange::new(jan(10), jan(14)));
    }

    #[test]
    fn earlier_tap_swaps() {
        let next = select_day(DateRange::starting(jan(10)), jan(5));
        assert_eq!(next.start_date, Some(jan(5)));
        assert_eq!(next.end_date, Some(jan(10)));
    }

    #[test]
    fn same_day_makes_single_day_range() {
        let next = select_day(DateRange::starting(jan(10)), jan(10));
        assert!(next.is_complete());
        assert!(next.is_single_day());
        assert_eq!(next.nights(), Some(0));
    }

    #[test]
    fn complete_tap_restarts() {
        let next = select_day(DateRange::new(jan(5), jan(10)), jan(7));
        assert_eq!(next, DateRange::starting(jan(7)));
    }

    #[test]
    fn end_without_start_is_empty() {
        let odd = DateRange {
            start_date: None,
            end_date: Some(jan(3)),
        };
        assert_eq!(odd.phase(), RangePhase::Empty);
        assert_eq!(select_day(odd, jan(4)), DateRange::starting(jan(4)));
    }

    #[test]
    fn membership_helpers() {
        let range = DateRange::new(jan(5), jan(8));
        assert!(range.contains(jan(5)));
        assert!(range.contains(jan(8)));
        assert!(!range.contains(jan(9)));
        assert!(range.is_strictly_inside(jan(6)));
        assert!(!range.is_strictly_inside(jan(5)));
        assert!(!range.is_strictly_inside(jan(8)));
        assert_eq!(range.nights(), Some(3));

        let start_only = DateRange::starting(jan(5));
        assert!(start_only.contains(jan(5)));
        assert!(!start_only.is_strictly_inside(jan(6)));
        assert_eq!(start_only.nights(), None);
    }

    #[test]
    fn guards_drop_taps() {
        let mut selection = RangeSelection::new(DateRange::EMPTY, Arc::new(NotBefore(jan(3))));
        assert_eq!(
            selection.tap(jan(10), false, false),
            TapOutcome::Ignored(IgnoreReason::OutsideMonth)
        );
        assert_eq!(
            selection.tap(jan(10), true, true),
            TapOutcome::Ignored(IgnoreReason::ScrollGesture)
        );
        assert_eq!(
            selection.tap(jan(2), true, false),
            TapOutcome::Ignored(IgnoreReason::NotSelectable)
        );
        assert_eq!(selection.range(), DateRange::EMPTY);

        let outcome = selection.tap(jan(10), true, false);
        assert_eq!(outcome.selected(), Some(DateRange::starting(jan(10))));
    }

    #[test]
    fn closure_policy() {
        let weekdays_only = |d: NaiveDate| {
            use chrono::Datelike;
            d.weekday().num_days_from_monday() < 5
        };
        // 2026-01-03 is a Saturday.
        assert!(!weekdays_only.is_selectable(jan(3)));
        assert!(weekdays_only.is_selectable(jan(5)));
        assert!(AllDates.is_selectable(jan(3)));
    }
}
