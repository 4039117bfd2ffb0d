//! A scrolling date-range calendar for tessera-ui.
//!
//! # Usage
//!
//! The calendar needs a Material theme in scope, like every
//! `tessera-components` widget.
//!
//! ```no_run
//! # use tessera_ui::tessera;
//! # #[tessera]
//! # fn component() {
//! use range_calendar::{RangeCalendarArgs, range_calendar};
//! use tessera_components::theme::{MaterialTheme, material_theme};
//!
//! material_theme(MaterialTheme::default, || {
//!     range_calendar(&RangeCalendarArgs::default().on_change(|range| {
//!         println!("{:?} -> {:?}", range.start_date, range.end_date);
//!     }));
//! });
//! # }
//! ```
#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

pub mod range_calendar;

pub use range_calendar::{RangeCalendarArgs, SelectableDatesPolicy, range_calendar};
pub use range_calendar_core::{
    AllDates, CalendarError, CalendarMonth, DateRange, NotBefore, RangeCalendarState, RangePhase,
    SelectableDates, today,
};
