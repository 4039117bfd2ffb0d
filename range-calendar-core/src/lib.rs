//! Date-range selection logic for the range calendar component.
//!
//! Everything here is independent of the UI framework: the month window, the
//! week grids, the selection reducer, tap/scroll classification, header
//! tracking and the scroll animation. The `range-calendar` crate renders it.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use range_calendar_core::{DateRange, RangePhase, select_day};
//!
//! let jan = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
//! let range = select_day(DateRange::EMPTY, jan(10));
//! let range = select_day(range, jan(5));
//! assert_eq!(range, DateRange::new(jan(5), jan(10)));
//! assert_eq!(range.phase(), RangePhase::Complete);
//! ```
#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

mod error;

pub mod gesture;
pub mod grid;
pub mod month;
pub mod range;
pub mod scroll;
pub mod state;
pub mod visibility;
pub mod window;

pub use error::CalendarError;
pub use gesture::{TAP_MOVE_THRESHOLD, TapGesture};
pub use grid::{DayCell, MonthGrid, weekday_labels};
pub use month::{CalendarMonth, today};
pub use range::{
    AllDates, DateRange, IgnoreReason, NotBefore, RangePhase, RangeSelection, SelectableDates,
    SharedSelectableDates, TapOutcome, select_day,
};
pub use scroll::SmoothScroll;
pub use state::{CalendarConfig, FrameStep, RangeCalendarState};
pub use visibility::{MonthVisibility, PanelExtent, VISIBILITY_THRESHOLD};
pub use window::{MonthWindow, WindowSpec};
