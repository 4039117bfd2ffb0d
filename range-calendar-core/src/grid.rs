//! Week grids for a single month panel.
use chrono::{NaiveDate, Weekday};

use crate::{
    CalendarMonth, DateRange, SelectableDates,
    month::{days_since_week_start, end_of_week, start_of_week},
};

/// One cell of a month grid, with all styling flags precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The day shown.
    pub date: NaiveDate,
    /// The day is today.
    pub is_today: bool,
    /// The day belongs to the panel's month rather than a neighbour.
    pub is_current_month: bool,
    /// The day is the range start.
    pub is_range_start: bool,
    /// The day is the range end.
    pub is_range_end: bool,
    /// The day is strictly between start and end.
    pub is_in_range: bool,
    /// The selectable-dates policy accepts the day.
    pub is_selectable: bool,
}

impl DayCell {
    /// Start or end of the range.
    pub fn is_endpoint(&self) -> bool {
        self.is_range_start || self.is_range_end
    }

    /// Whether a tap on this cell can change the selection.
    pub fn is_interactive(&self) -> bool {
        self.is_current_month && self.is_selectable
    }
}

/// All cells of one month, padded to whole weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: CalendarMonth,
    first_day_of_week: Weekday,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Builds the grid for `month`.
    ///
    /// The grid runs from the first day of the week containing the 1st to the
    /// last day of the week containing the last day, so it holds 4 to 6 rows.
    pub fn build(
        month: CalendarMonth,
        first_day_of_week: Weekday,
        today: NaiveDate,
        range: &DateRange,
        selectable: &dyn SelectableDates,
    ) -> Self {
        let start = start_of_week(month.first_day(), first_day_of_week);
        let end = end_of_week(month.last_day(), first_day_of_week);
        let cells = start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| DayCell {
                date,
                is_today: date == today,
                is_current_month: month.contains(date),
                is_range_start: range.is_start(date),
                is_range_end: range.is_end(date),
                is_in_range: range.is_strictly_inside(date),
                is_selectable: selectable.is_selectable(date),
            })
            .collect();
        Self {
            month,
            first_day_of_week,
            cells,
        }
    }

    /// The month this grid belongs to.
    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    /// The weekday in the first column.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Number of week rows.
    pub fn rows(&self) -> usize {
        self.cells.len() / 7
    }

    /// Iterates the rows, seven cells each.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// Finds the cell for `date`.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }

    /// Number of leading cells taken from the previous month.
    pub fn leading_days(&self) -> usize {
        days_since_week_start(
            chrono::Datelike::weekday(&self.month.first_day()),
            self.first_day_of_week,
        ) as usize
    }
}

const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Two-letter weekday labels starting at `first_day_of_week`.
pub fn weekday_labels(first_day_of_week: Weekday) -> [&'static str; 7] {
    let offset = first_day_of_week.num_days_from_monday() as usize;
    std::array::from_fn(|i| WEEKDAY_LABELS[(offset + i) % 7])
}
