//! State shared by one calendar instance across frames.
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};

use crate::{
    AllDates, CalendarMonth, DateRange, MonthGrid, MonthWindow, SharedSelectableDates, TapOutcome,
    WindowSpec,
    gesture::{TAP_MOVE_THRESHOLD, TapGesture},
    range::RangeSelection,
    scroll::{DEFAULT_SMOOTHING, SmoothScroll},
    visibility::{MonthVisibility, VISIBILITY_THRESHOLD, nearest_panel, panel_top},
};

/// Construction parameters for [`RangeCalendarState`].
#[derive(Clone)]
pub struct CalendarConfig {
    /// Base month of the window.
    pub base: CalendarMonth,
    /// Months generated before `base`.
    pub months_before: i32,
    /// Months generated after `base`.
    pub months_after: i32,
    /// Weekday in the first grid column.
    pub first_day_of_week: Weekday,
    /// Travel in pixels after which a press becomes a scroll.
    pub tap_move_threshold: f32,
    /// Visible share a panel needs to drive the header.
    pub visibility_threshold: f32,
    /// Smoothing for programmatic scrolls, `0.0..1.0`.
    pub smoothing: f32,
    /// Range selected when the calendar appears.
    pub initial_range: DateRange,
    /// Which days can be picked.
    pub selectable: SharedSelectableDates,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            base: CalendarMonth::current(),
            months_before: 0,
            months_after: 6,
            first_day_of_week: Weekday::Mon,
            tap_move_threshold: TAP_MOVE_THRESHOLD,
            visibility_threshold: VISIBILITY_THRESHOLD,
            smoothing: DEFAULT_SMOOTHING,
            initial_range: DateRange::EMPTY,
            selectable: Arc::new(AllDates),
        }
    }
}

/// What a frame tick asks the scroll container to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    /// New content offset to apply, if it moved.
    pub scroll_to: Option<f32>,
    /// Whether more frames are needed.
    pub keep_running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Snap {
    Idle,
    /// Waiting for the scroller's own momentum to settle.
    Pending { last_offset: Option<f32> },
}

/// Everything a calendar remembers between frames.
///
/// Offsets are content offsets: 0 is the top of the first panel and they grow
/// as the list scrolls down.
pub struct RangeCalendarState {
    window: MonthWindow,
    first_day_of_week: Weekday,
    selection: RangeSelection,
    gesture: TapGesture,
    visibility: MonthVisibility,
    smoothing: f32,
    panel_height: f32,
    animation: Option<SmoothScroll>,
    snap: Snap,
    initial_offset_pending: bool,
}

impl Default for RangeCalendarState {
    fn default() -> Self {
        Self::new(CalendarConfig::default())
    }
}

impl RangeCalendarState {
    /// Builds the state and generates the month window.
    pub fn new(config: CalendarConfig) -> Self {
        let window = MonthWindow::generate(WindowSpec::new(
            config.base,
            config.months_before,
            config.months_after,
        ));
        let visibility = MonthVisibility::new(window.base_index(), config.visibility_threshold);
        Self {
            window,
            first_day_of_week: config.first_day_of_week,
            selection: RangeSelection::new(config.initial_range, config.selectable),
            gesture: TapGesture::new(config.tap_move_threshold),
            visibility,
            smoothing: config.smoothing,
            panel_height: 0.0,
            animation: None,
            snap: Snap::Idle,
            initial_offset_pending: true,
        }
    }

    /// The months shown, top to bottom.
    pub fn window(&self) -> &MonthWindow {
        &self.window
    }

    /// Weekday in the first grid column.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// The working range.
    pub fn range(&self) -> DateRange {
        self.selection.range()
    }

    /// Overwrites the working range, reordering an inverted one.
    pub fn set_range(&mut self, range: DateRange) {
        self.selection.set_range(range);
    }

    /// Index of the month shown in the header.
    pub fn current_index(&self) -> usize {
        self.visibility.current()
    }

    /// The month shown in the header.
    pub fn current_month(&self) -> CalendarMonth {
        self.window
            .get(self.current_index())
            .unwrap_or_else(|| self.window.get(0).unwrap_or_else(CalendarMonth::current))
    }

    /// Header text, e.g. `March 2026`.
    pub fn header_title(&self) -> String {
        self.current_month().title()
    }

    /// Whether the previous-month arrow does anything.
    pub fn can_go_previous(&self) -> bool {
        self.window.previous_index(self.nav_index()).is_some()
    }

    /// Whether the next-month arrow does anything.
    pub fn can_go_next(&self) -> bool {
        self.window.next_index(self.nav_index()).is_some()
    }

    /// Grid for the panel at `index`.
    pub fn grid(&self, index: usize, today: NaiveDate) -> Option<MonthGrid> {
        let month = self.window.get(index)?;
        Some(MonthGrid::build(
            month,
            self.first_day_of_week,
            today,
            &self.selection.range(),
            self.selection.selectable().as_ref(),
        ))
    }

    /// Height of one month panel; zero until the viewport is measured.
    pub fn panel_height(&self) -> f32 {
        self.panel_height
    }

    /// Records the measured panel height.
    pub fn set_panel_height(&mut self, height: f32) {
        self.panel_height = height.max(0.0);
    }

    /// Offset that puts the base month at the top, returned once.
    ///
    /// Yields `None` until panels are measured and when the base month is
    /// already the first panel.
    pub fn take_initial_offset(&mut self) -> Option<f32> {
        if !self.initial_offset_pending || self.panel_height <= 0.0 {
            return None;
        }
        self.initial_offset_pending = false;
        let index = self.window.base_index();
        (index > 0).then(|| panel_top(index, self.panel_height))
    }

    /// Handles a tap on `day` inside the panel for `panel_month`.
    pub fn tap_day(&mut self, day: NaiveDate, panel_month: CalendarMonth) -> TapOutcome {
        self.selection
            .tap(day, panel_month.contains(day), self.gesture.is_scroll())
    }

    /// A press started at `y`, in viewport coordinates.
    ///
    /// Cancels any running programmatic scroll.
    pub fn press(&mut self, y: f32) {
        self.gesture.press(y);
        self.animation = None;
        self.snap = Snap::Idle;
    }

    /// The pointer moved to `y` while pressed.
    pub fn pointer_moved(&mut self, y: f32) {
        self.gesture.move_to(y);
    }

    /// True while a press is held.
    pub fn is_pressed(&self) -> bool {
        self.gesture.is_active()
    }

    /// The press ended. Returns whether it was a scroll.
    ///
    /// A scroll arms a snap to the nearest panel once the list settles.
    pub fn release(&mut self) -> bool {
        let was_scroll = self.gesture.release();
        if was_scroll && self.panel_height > 0.0 {
            self.snap = Snap::Pending { last_offset: None };
        }
        was_scroll
    }

    /// Updates the header from the viewport.
    ///
    /// Returns the new current index when it changed.
    pub fn observe_viewport(&mut self, offset: f32, viewport_height: f32) -> Option<usize> {
        if self.panel_height <= 0.0 {
            return None;
        }
        self.visibility
            .observe_uniform(self.window.len(), self.panel_height, offset, viewport_height)
    }

    /// Starts a smooth scroll from `offset` to the panel at `index`.
    ///
    /// Returns the target offset, or `None` when the index is out of range or
    /// panels are not measured yet.
    pub fn scroll_to_index(&mut self, index: usize, offset: f32) -> Option<f32> {
        if index >= self.window.len() || self.panel_height <= 0.0 {
            return None;
        }
        let target = panel_top(index, self.panel_height);
        match self.animation.as_mut() {
            Some(animation) => animation.retarget(target),
            None => self.animation = Some(SmoothScroll::new(offset, target)),
        }
        self.snap = Snap::Idle;
        Some(target)
    }

    /// Scrolls to the month before the current one.
    pub fn scroll_to_previous(&mut self, offset: f32) -> Option<f32> {
        let index = self.window.previous_index(self.nav_index())?;
        self.scroll_to_index(index, offset)
    }

    /// Scrolls to the month after the current one.
    pub fn scroll_to_next(&mut self, offset: f32) -> Option<f32> {
        let index = self.window.next_index(self.nav_index())?;
        self.scroll_to_index(index, offset)
    }

    /// True while a programmatic scroll runs.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// True while frames are needed for an animation or a pending snap.
    pub fn needs_frames(&self) -> bool {
        self.animation.is_some() || matches!(self.snap, Snap::Pending { .. })
    }

    /// Advances animations to `frame_nanos`, given the scroller's `offset`.
    pub fn on_frame(&mut self, frame_nanos: u64, offset: f32) -> FrameStep {
        let mut scroll_to = None;

        if let Some(animation) = self.animation.as_mut() {
            scroll_to = animation.advance(frame_nanos, self.smoothing);
            if animation.is_finished() {
                self.animation = None;
            }
        } else if let Snap::Pending { last_offset } = self.snap {
            if last_offset == Some(offset) {
                self.snap = Snap::Idle;
                let index = nearest_panel(offset, self.panel_height, self.window.len());
                let target = panel_top(index, self.panel_height);
                if (target - offset).abs() >= 1.0 {
                    tracing::trace!(index, target, "snapping to month panel");
                    self.animation = Some(SmoothScroll::new(offset, target));
                }
            } else {
                self.snap = Snap::Pending {
                    last_offset: Some(offset),
                };
            }
        }

        FrameStep {
            scroll_to,
            keep_running: self.needs_frames(),
        }
    }

    /// Index arrows navigate from: the animation target when one runs.
    fn nav_index(&self) -> usize {
        match self.animation {
            Some(animation) if self.panel_height > 0.0 => {
                nearest_panel(animation.target(), self.panel_height, self.window.len())
            }
            _ => self.visibility.current(),
        }
    }
}
