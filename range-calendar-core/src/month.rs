//! Calendar months and day arithmetic.
use std::{fmt, str::FromStr};

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};

use crate::CalendarError;

/// A calendar month, stored as the date of its first day.
///
/// Ordering follows the calendar, so `CalendarMonth` can be compared and
/// sorted directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// Creates a month from a year and a month number (1-12).
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(CalendarError::InvalidDate {
                year,
                month,
                day: 1,
            })
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Returns the month containing today's local date.
    pub fn current() -> Self {
        Self::of(today())
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Returns the month number (1-12).
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Returns the last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.first
            .with_day(self.days_in_month())
            .unwrap_or(self.first)
    }

    /// Returns the number of days in this month.
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            _ => 28,
        }
    }

    /// Adds or subtracts whole months, rolling the year as needed.
    ///
    /// Saturates at the edges of the representable date range.
    pub fn add_months(&self, delta: i32) -> Self {
        let shifted = if delta >= 0 {
            self.first.checked_add_months(Months::new(delta.unsigned_abs()))
        } else {
            self.first.checked_sub_months(Months::new(delta.unsigned_abs()))
        };
        Self {
            first: shifted.unwrap_or(self.first),
        }
    }

    /// Returns the signed number of months from `self` to `other`.
    pub fn months_until(&self, other: CalendarMonth) -> i32 {
        (other.year() - self.year()) * 12 + other.month() as i32 - self.month() as i32
    }

    /// Returns true when `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Iterates over every day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.first.iter_days().take(self.days_in_month() as usize)
    }

    /// Returns the header title, e.g. `March 2026`.
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl From<NaiveDate> for CalendarMonth {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for CalendarMonth {
    type Err = CalendarError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidMonthSpec(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

/// Returns today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the first day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
    let back = days_since_week_start(date.weekday(), first_day_of_week);
    date.checked_sub_days(Days::new(back as u64))
        .unwrap_or(date)
}

/// Returns the last day of the week containing `date`.
pub fn end_of_week(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
    let forward = 6 - days_since_week_start(date.weekday(), first_day_of_week);
    date.checked_add_days(Days::new(forward as u64))
        .unwrap_or(date)
}

/// Position of `day` within a week that starts on `first_day_of_week` (0-6).
pub fn days_since_week_start(day: Weekday, first_day_of_week: Weekday) -> u32 {
    (7 + day.num_days_from_monday() - first_day_of_week.num_days_from_monday()) % 7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_invalid_month() {
        assert_eq!(
            CalendarMonth::new(2025, 0),
            Err(CalendarError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            CalendarMonth::new(2025, 13),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn of_normalizes_to_first_day() {
        let month = CalendarMonth::of(date(2026, 3, 17));
        assert_eq!(month.first_day(), date(2026, 3, 1));
        assert_eq!(month.last_day(), date(2026, 3, 31));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(CalendarMonth::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(CalendarMonth::new(2000, 2).unwrap().days_in_month(), 29);
    }

    #[test]
    fn add_months_rolls_years() {
        let nov = CalendarMonth::new(2025, 11).unwrap();
        assert_eq!(nov.add_months(3), CalendarMonth::new(2026, 2).unwrap());
        assert_eq!(nov.add_months(-11), CalendarMonth::new(2024, 12).unwrap());
        assert_eq!(nov.add_months(0), nov);
    }

    #[test]
    fn months_until_is_signed() {
        let a = CalendarMonth::new(2025, 11).unwrap();
        let b = CalendarMonth::new(2026, 2).unwrap();
        assert_eq!(a.months_until(b), 3);
        assert_eq!(b.months_until(a), -3);
    }

    #[test]
    fn days_iterates_whole_month() {
        let month = CalendarMonth::new(2024, 2).unwrap();
        let days: Vec<_> = month.days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], date(2024, 2, 1));
        assert_eq!(days[28], date(2024, 2, 29));
    }

    #[test]
    fn title_uses_full_month_name() {
        assert_eq!(CalendarMonth::new(2026, 3).unwrap().title(), "March 2026");
        assert_eq!(CalendarMonth::new(2025, 12).unwrap().title(), "December 2025");
    }

    #[test]
    fn parses_and_displays() {
        let month: CalendarMonth = "2026-03".parse().unwrap();
        assert_eq!(month, CalendarMonth::new(2026, 3).unwrap());
        assert_eq!(month.to_string(), "2026-03");
        assert!("2026".parse::<CalendarMonth>().is_err());
        assert!("2026-xx".parse::<CalendarMonth>().is_err());
        assert_eq!(
            "2026-13".parse::<CalendarMonth>(),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn week_bounds_monday_first() {
        // 2026-03-01 is a Sunday.
        let sunday = date(2026, 3, 1);
        assert_eq!(start_of_week(sunday, Weekday::Mon), date(2026, 2, 23));
        assert_eq!(end_of_week(sunday, Weekday::Mon), sunday);
    }

    #[test]
    fn week_bounds_sunday_first() {
        let sunday = date(2026, 3, 1);
        assert_eq!(start_of_week(sunday, Weekday::Sun), sunday);
        assert_eq!(end_of_week(sunday, Weekday::Sun), date(2026, 3, 7));
    }
}
