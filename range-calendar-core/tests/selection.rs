use chrono::{Datelike, NaiveDate, Weekday};
use range_calendar_core::{
    AllDates, CalendarConfig, CalendarMonth, DateRange, MonthGrid, MonthWindow, RangeCalendarState,
    RangePhase, TapOutcome, WindowSpec, select_day,
};

fn jan(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
}

#[test]
fn selection_walkthrough() {
    let range = DateRange::EMPTY;
    assert_eq!(range.phase(), RangePhase::Empty);

    let range = select_day(range, jan(10));
    assert_eq!(range, DateRange::starting(jan(10)));

    let range = select_day(range, jan(5));
    assert_eq!(range.start_date, Some(jan(5)));
    assert_eq!(range.end_date, Some(jan(10)));

    // A complete range restarts on the next tap.
    let range = select_day(range, jan(5));
    assert_eq!(range, DateRange::starting(jan(5)));

    let range = select_day(range, jan(5));
    assert_eq!(range, DateRange::new(jan(5), jan(5)));
    assert!(range.is_single_day());
}

#[test]
fn start_never_after_end() {
    let days: Vec<NaiveDate> = [14, 3, 27, 9, 9, 1, 30, 12].into_iter().map(jan).collect();
    let mut range = DateRange::EMPTY;
    for day in days {
        range = select_day(range, day);
        if let (Some(start), Some(end)) = (range.start_date, range.end_date) {
            assert!(start <= end, "{start} > {end}");
        }
    }
}

#[test]
fn march_window_runs_to_september() {
    let base = CalendarMonth::new(2026, 3).unwrap();
    let window = MonthWindow::generate(WindowSpec::new(base, 0, 6));
    let titles: Vec<String> = window.iter().map(|m| m.title()).collect();
    assert_eq!(
        titles,
        [
            "March 2026",
            "April 2026",
            "May 2026",
            "June 2026",
            "July 2026",
            "August 2026",
            "September 2026"
        ]
    );
}

#[test]
fn grids_cover_every_month_day_once() {
    let base = CalendarMonth::new(2025, 12).unwrap();
    let window = MonthWindow::generate(WindowSpec::new(base, 0, 14));
    for first_day in [Weekday::Mon, Weekday::Sun, Weekday::Wed] {
        for month in window.iter() {
            let grid = MonthGrid::build(month, first_day, jan(1), &DateRange::EMPTY, &AllDates);
            let cells = grid.cells();
            assert_eq!(cells.len() % 7, 0);
            assert!((4..=6).contains(&grid.rows()));
            assert_eq!(cells[0].date.weekday(), first_day);

            let own: Vec<NaiveDate> = cells
                .iter()
                .filter(|c| c.is_current_month)
                .map(|c| c.date)
                .collect();
            let expected: Vec<NaiveDate> = month.days().collect();
            assert_eq!(own, expected, "{month}");
        }
    }
}

#[test]
fn state_reports_each_change() {
    let mut state = RangeCalendarState::new(CalendarConfig {
        base: CalendarMonth::new(2026, 1).unwrap(),
        ..CalendarConfig::default()
    });
    let january = CalendarMonth::new(2026, 1).unwrap();
    let mut emitted = Vec::new();
    for day in [10, 5, 20] {
        state.press(0.0);
        state.release();
        if let TapOutcome::Selected(range) = state.tap_day(jan(day), january) {
            emitted.push(range);
        }
    }
    assert_eq!(
        emitted,
        vec![
            DateRange::starting(jan(10)),
            DateRange::new(jan(5), jan(10)),
            DateRange::starting(jan(20)),
        ]
    );
}
