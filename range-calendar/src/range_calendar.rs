//! Scrolling calendar for picking a start and end date.
//!
//! ## Usage
//!
//! Use for stays and other flows where users pick a span of days on a
//! phone-sized screen.
mod month_list;
mod panel;

use std::sync::Arc;

use chrono::Weekday;
use derive_setters::Setters;
use range_calendar_core::{
    AllDates, CalendarConfig, CalendarMonth, DateRange, RangeCalendarState, SelectableDates,
    SharedSelectableDates, TAP_MOVE_THRESHOLD, VISIBILITY_THRESHOLD, scroll::DEFAULT_SMOOTHING,
};
use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    divider::{DividerArgs, horizontal_divider},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    scrollable::ScrollableController,
    shape_def::Shape,
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::{MaterialAlpha, MaterialTheme},
};
use tessera_ui::{
    CallbackWith, DimensionValue, Dp, Modifier, State, remember, tessera, use_context,
};

use month_list::{MonthListArgs, month_list};

const HEADER_HORIZONTAL_PADDING: Dp = Dp(16.0);
const HEADER_VERTICAL_PADDING: Dp = Dp(12.0);
const NAV_BUTTON_SIZE: Dp = Dp(32.0);
const DEFAULT_MAX_WIDTH: Dp = Dp(600.0);

/// Shared selectable-dates policy that compares by identity.
#[derive(Clone)]
pub struct SelectableDatesPolicy(pub SharedSelectableDates);

impl SelectableDatesPolicy {
    /// Wraps a policy.
    pub fn new(policy: impl SelectableDates + 'static) -> Self {
        Self(Arc::new(policy))
    }
}

impl Default for SelectableDatesPolicy {
    fn default() -> Self {
        Self::new(AllDates)
    }
}

impl PartialEq for SelectableDatesPolicy {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// Arguments for [`range_calendar`].
///
/// Fields other than `modifier` and `on_change` only take effect when the
/// calendar creates its own state.
#[derive(PartialEq, Clone, Setters)]
pub struct RangeCalendarArgs {
    /// Modifier chain applied to the calendar. Fills the parent, up to 600 dp
    /// wide.
    pub modifier: Modifier,
    /// Base month of the window; any date inside it works.
    #[setters(into)]
    pub initial_month: CalendarMonth,
    /// Number of months rendered before the base month.
    pub months_before: i32,
    /// Number of months rendered after the base month.
    pub months_after: i32,
    /// Called with the new range every time the selection changes.
    #[setters(skip)]
    pub on_change: CallbackWith<DateRange>,
    /// Weekday shown in the first column.
    pub first_day_of_week: Weekday,
    /// Which days can be tapped.
    #[setters(skip)]
    pub selectable_dates: SelectableDatesPolicy,
    /// Vertical travel, in pixels, after which a press counts as a scroll.
    pub tap_move_threshold: f32,
    /// Visible share a month needs before the header switches to it.
    pub visibility_threshold: f32,
    /// Smoothing for arrow and snap scrolling (0.0 = instant).
    pub scroll_smoothing: f32,
    /// Range shown when the calendar first appears. Inverted ends are
    /// reordered.
    pub initial_range: DateRange,
    /// Optional external state.
    ///
    /// When this is `None`, `range_calendar` creates and owns an internal
    /// state.
    #[setters(skip)]
    pub state: Option<State<RangeCalendarState>>,
}

impl Default for RangeCalendarArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new().constrain(
                Some(DimensionValue::Fill {
                    min: None,
                    max: Some(DEFAULT_MAX_WIDTH.into()),
                }),
                Some(DimensionValue::FILLED),
            ),
            initial_month: CalendarMonth::current(),
            months_before: 0,
            months_after: 6,
            on_change: CallbackWith::new(|_| {}),
            first_day_of_week: Weekday::Mon,
            selectable_dates: SelectableDatesPolicy::default(),
            tap_move_threshold: TAP_MOVE_THRESHOLD,
            visibility_threshold: VISIBILITY_THRESHOLD,
            scroll_smoothing: DEFAULT_SMOOTHING,
            initial_range: DateRange::EMPTY,
            state: None,
        }
    }
}

impl RangeCalendarArgs {
    /// Sets the change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(DateRange) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<DateRange>>) -> Self {
        self.on_change = on_change.into();
        self
    }

    /// Restricts which days can be picked.
    pub fn selectable_dates(mut self, policy: impl SelectableDates + 'static) -> Self {
        self.selectable_dates = SelectableDatesPolicy::new(policy);
        self
    }

    /// Sets an external calendar state.
    pub fn state(mut self, state: State<RangeCalendarState>) -> Self {
        self.state = Some(state);
        self
    }

    /// The state configuration these arguments describe.
    pub fn calendar_config(&self) -> CalendarConfig {
        CalendarConfig {
            base: self.initial_month,
            months_before: self.months_before,
            months_after: self.months_after,
            first_day_of_week: self.first_day_of_week,
            tap_move_threshold: self.tap_move_threshold,
            visibility_threshold: self.visibility_threshold,
            smoothing: self.scroll_smoothing,
            initial_range: self.initial_range,
            selectable: self.selectable_dates.0.clone(),
        }
    }
}

#[derive(Clone, PartialEq)]
struct CalendarNodeArgs {
    modifier: Modifier,
    on_change: CallbackWith<DateRange>,
    state: State<RangeCalendarState>,
    controller: State<ScrollableController>,
}

/// # range_calendar
///
/// Render a header with month arrows above a vertical list of month grids,
/// one month per screen, and let the user tap a start and end day.
///
/// ## Usage
///
/// Use when the user picks a span of days, such as check-in and check-out.
///
/// ## Parameters
///
/// - `args` — props for this component; see [`RangeCalendarArgs`].
///
/// ## Examples
///
/// ```no_run
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use range_calendar::{NotBefore, RangeCalendarArgs, range_calendar};
/// # use tessera_components::theme::{MaterialTheme, material_theme};
/// # material_theme(MaterialTheme::default, || {
/// let today = range_calendar::today();
/// range_calendar(
///     &RangeCalendarArgs::default()
///         .months_after(11)
///         .selectable_dates(NotBefore(today))
///         .on_change(|range| println!("{range:?}")),
/// );
/// # });
/// # }
/// ```
#[tessera]
pub fn range_calendar(args: &RangeCalendarArgs) {
    let config = args.calendar_config();
    let state = args
        .state
        .unwrap_or_else(|| remember(move || RangeCalendarState::new(config)));
    let controller = remember(ScrollableController::new);
    range_calendar_node(&CalendarNodeArgs {
        modifier: args.modifier.clone(),
        on_change: args.on_change.clone(),
        state,
        controller,
    });
}

#[tessera]
fn range_calendar_node(args: &CalendarNodeArgs) {
    let args = args.clone();
    let state = args.state;
    let controller = args.controller;
    let on_change = args.on_change;

    column(ColumnArgs::default().modifier(args.modifier), move |scope| {
        scope.child(move || {
            calendar_header(state, controller);
        });
        scope.child(|| {
            horizontal_divider(DividerArgs::default());
        });
        let on_change = on_change.clone();
        scope.child_weighted(
            move || {
                month_list(&MonthListArgs {
                    state,
                    controller,
                    on_change: on_change.clone(),
                });
            },
            1.0,
        );
    });
}

fn calendar_header(state: State<RangeCalendarState>, controller: State<ScrollableController>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let title_color = theme.color_scheme.on_surface;
    let title_size = theme.typography.title_medium.font_size;
    let (title, can_prev, can_next) =
        state.with(|s| (s.header_title(), s.can_go_previous(), s.can_go_next()));

    row(
        RowArgs::default()
            .modifier(
                Modifier::new()
                    .fill_max_width()
                    .padding_symmetric(HEADER_HORIZONTAL_PADDING, HEADER_VERTICAL_PADDING),
            )
            .main_axis_alignment(MainAxisAlignment::SpaceBetween)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            scope.child(move || {
                nav_button("<", can_prev, move || {
                    let offset = month_list::content_offset(controller);
                    if let Some(target) = state.with_mut(|s| s.scroll_to_previous(offset)) {
                        tracing::debug!(target, "scrolling to previous month");
                    }
                });
            });

            let title = title.clone();
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(title.clone())
                        .size(title_size)
                        .color(title_color),
                );
            });

            scope.child(move || {
                nav_button(">", can_next, move || {
                    let offset = month_list::content_offset(controller);
                    if let Some(target) = state.with_mut(|s| s.scroll_to_next(offset)) {
                        tracing::debug!(target, "scrolling to next month");
                    }
                });
            });
        },
    );
}

fn nav_button(label: &'static str, enabled: bool, on_click: impl Fn() + Send + Sync + 'static) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let label_size = theme.typography.body_medium.font_size;
    let text_color = if enabled {
        scheme.on_surface
    } else {
        scheme
            .on_surface_variant
            .with_alpha(MaterialAlpha::DISABLED_CONTENT)
    };
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().size(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_low,
            })
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .enabled(enabled)
            .on_click(move || {
                if enabled {
                    on_click();
                }
            }),
        move || {
            text(
                &TextArgs::default()
                    .text(label)
                    .size(label_size)
                    .color(text_color),
            );
        },
    ));
}
