//! The fixed window of months shown by the calendar.
use crate::{CalendarError, CalendarMonth};

/// Parameters of a month window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    /// The base month.
    pub base: CalendarMonth,
    /// Months generated before `base`.
    pub months_before: i32,
    /// Months generated after `base`.
    pub months_after: i32,
}

impl WindowSpec {
    /// Creates a spec with the given counts.
    pub fn new(base: CalendarMonth, months_before: i32, months_after: i32) -> Self {
        Self {
            base,
            months_before,
            months_after,
        }
    }

    /// Checks that both counts are non-negative.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.months_before < 0 {
            return Err(CalendarError::NegativeMonthCount {
                field: "months_before",
                value: self.months_before,
            });
        }
        if self.months_after < 0 {
            return Err(CalendarError::NegativeMonthCount {
                field: "months_after",
                value: self.months_after,
            });
        }
        Ok(())
    }
}

/// An ordered, immutable run of consecutive months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    months: Vec<CalendarMonth>,
    base_index: usize,
}

impl MonthWindow {
    /// Generates the months `base - before ..= base + after`.
    ///
    /// Negative counts are logged and shrink the window. The result always
    /// holds at least one month: if the counts leave nothing, the window is
    /// just the base month.
    pub fn generate(spec: WindowSpec) -> Self {
        if let Err(err) = spec.validate() {
            tracing::warn!(%err, "month window degraded");
        }
        // Widened so that `i32::MIN` before-counts negate without overflow.
        let first = -i64::from(spec.months_before);
        let months: Vec<CalendarMonth> = (first..=i64::from(spec.months_after))
            .filter_map(|offset| i32::try_from(offset).ok())
            .map(|offset| spec.base.add_months(offset))
            .collect();
        if months.is_empty() {
            tracing::warn!(
                before = spec.months_before,
                after = spec.months_after,
                "month window is empty, falling back to the base month"
            );
            return Self {
                months: vec![spec.base],
                base_index: 0,
            };
        }
        let base_index = months.iter().position(|m| *m == spec.base).unwrap_or(0);
        Self { months, base_index }
    }

    /// Number of months in the window.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Always false; a window holds at least one month.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Returns the month at `index`.
    pub fn get(&self, index: usize) -> Option<CalendarMonth> {
        self.months.get(index).copied()
    }

    /// Index of the base month, or 0 when the base was cut off.
    pub fn base_index(&self) -> usize {
        self.base_index
    }

    /// Returns the index of `month`, if it is in the window.
    pub fn index_of(&self, month: CalendarMonth) -> Option<usize> {
        self.months.iter().position(|m| *m == month)
    }

    /// Iterates the months in order.
    pub fn iter(&self) -> impl Iterator<Item = CalendarMonth> + '_ {
        self.months.iter().copied()
    }

    /// Returns the months as a slice.
    pub fn as_slice(&self) -> &[CalendarMonth] {
        &self.months
    }

    /// Index before `index`, `None` on the first month.
    pub fn previous_index(&self, index: usize) -> Option<usize> {
        index.checked_sub(1).filter(|i| *i < self.months.len())
    }

    /// Index after `index`, `None` on the last month.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.months.len()).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(y: i32, m: u32) -> CalendarMonth {
        CalendarMonth::new(y, m).unwrap()
    }

    #[test]
    fn default_counts_give_seven_months() {
        let window = MonthWindow::generate(WindowSpec::new(month(2026, 3), 0, 6));
        assert_eq!(window.len(), 7);
        assert_eq!(window.get(0), Some(month(2026, 3)));
        assert_eq!(window.get(6), Some(month(2026, 9)));
        assert_eq!(window.base_index(), 0);
    }

    #[test]
    fn extreme_negative_counts_fall_back_to_base() {
        let window = MonthWindow::generate(WindowSpec::new(month(2026, 3), i32::MIN, -i32::MAX));
        assert_eq!(window.as_slice(), &[month(2026, 3)]);
        assert_eq!(window.base_index(), 0);

        let window = MonthWindow::generate(WindowSpec::new(month(2026, 3), i32::MIN, i32::MIN));
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn months_before_precede_base() {
        let window = MonthWindow::generate(WindowSpec::new(month(2026, 1), 2, 1));
        let months: Vec<_> = window.iter().collect();
        assert_eq!(
            months,
            vec![month(2025, 11), month(2025, 12), month(2026, 1), month(2026, 2)]
        );
        assert_eq!(window.base_index(), 2);
        assert_eq!(window.index_of(month(2025, 12)), Some(1));
        assert_eq!(window.index_of(month(2026, 3)), None);
    }

    #[test]
    fn validate_reports_negative_counts() {
        let spec = WindowSpec::new(month(2026, 3), -1, 2);
        assert_eq!(
            spec.validate(),
            Err(CalendarError::NegativeMonthCount {
                field: "months_before",
                value: -1
            })
        );
        assert!(WindowSpec::new(month(2026, 3), 0, 0).validate().is_ok());
    }

    #[test]
    fn negative_counts_never_empty() {
        let window = MonthWindow::generate(WindowSpec::new(month(2026, 3), 0, -4));
        assert_eq!(window.len(), 1);
        assert_eq!(window.get(0), Some(month(2026, 3)));

        // Negative before trims from the front but keeps the range non-empty.
        let window = MonthWindow::generate(WindowSpec::new(month(2026, 3), -1, 2));
        assert_eq!(window.as_slice(), &[month(2026, 4), month(2026, 5)]);
        assert_eq!(window.base_index(), 0);
    }

    #[test]
    fn neighbour_indices() {
        let window = MonthWindow::generate(WindowSpec::new(month(2026, 3), 0, 2));
        assert_eq!(window.previous_index(0), None);
        assert_eq!(window.previous_index(2), Some(1));
        assert_eq!(window.next_index(1), Some(2));
        assert_eq!(window.next_index(2), None);
    }
}
