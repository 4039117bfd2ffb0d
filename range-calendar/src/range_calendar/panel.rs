//! One month: weekday labels above a grid of day cells.
use chrono::{Datelike, NaiveDate, Weekday};
use range_calendar_core::{CalendarMonth, DateRange, DayCell, RangeCalendarState, weekday_labels};
use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::{MaterialAlpha, MaterialTheme},
};
use tessera_ui::{CallbackWith, Color, Dp, Modifier, State, tessera, use_context};

const PANEL_HORIZONTAL_PADDING: Dp = Dp(12.0);
const PANEL_VERTICAL_PADDING: Dp = Dp(8.0);
const LABEL_ROW_HEIGHT: Dp = Dp(32.0);
const CELL_PADDING: Dp = Dp(2.0);
const ENDPOINT_RADIUS: Dp = Dp(20.0);
const TODAY_BAR_WIDTH: Dp = Dp(16.0);
const TODAY_BAR_HEIGHT: Dp = Dp(2.0);
const TODAY_BAR_GAP: Dp = Dp(2.0);

#[derive(Clone, PartialEq)]
pub(super) struct MonthPanelArgs {
    pub index: usize,
    pub height: Dp,
    pub today: NaiveDate,
    pub state: State<RangeCalendarState>,
    pub on_change: CallbackWith<DateRange>,
}

/// How a cell is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CellTone {
    /// Range start or end.
    Endpoint,
    /// Strictly between start and end.
    InRange,
    /// Tappable day with no selection.
    Normal,
    /// Filler day from a neighbouring month, or a day the policy rejects.
    Muted,
}

/// Neighbouring-month filler days never show the selection; they belong to
/// another panel.
pub(super) fn cell_tone(cell: &DayCell) -> CellTone {
    if !cell.is_current_month {
        CellTone::Muted
    } else if cell.is_endpoint() {
        CellTone::Endpoint
    } else if cell.is_in_range {
        CellTone::InRange
    } else if cell.is_selectable {
        CellTone::Normal
    } else {
        CellTone::Muted
    }
}

#[tessera]
pub(super) fn month_panel(args: &MonthPanelArgs) {
    let args = args.clone();
    let state = args.state;
    let Some(grid) = state.with(|s| s.grid(args.index, args.today)) else {
        tracing::warn!(index = args.index, "month panel outside the window");
        return;
    };
    let month = grid.month();
    let first_day_of_week = grid.first_day_of_week();
    let weeks: Vec<Vec<DayCell>> = grid.weeks().map(<[DayCell]>::to_vec).collect();
    let on_change = args.on_change;

    column(
        ColumnArgs::default().modifier(
            Modifier::new()
                .fill_max_width()
                .height(args.height)
                .padding_symmetric(PANEL_HORIZONTAL_PADDING, PANEL_VERTICAL_PADDING),
        ),
        move |scope| {
            scope.child(move || {
                weekday_label_row(first_day_of_week);
            });
            for week in weeks.clone() {
                let on_change = on_change.clone();
                scope.child_weighted(
                    move || {
                        week_row(week.clone(), month, state, on_change.clone());
                    },
                    1.0,
                );
            }
        },
    );
}

fn weekday_label_row(first_day_of_week: Weekday) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let color = theme.color_scheme.on_surface_variant;
    let size = theme.typography.label_small.font_size;

    row(
        RowArgs::default()
            .modifier(Modifier::new().fill_max_width().height(LABEL_ROW_HEIGHT))
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            for label in weekday_labels(first_day_of_week) {
                scope.child_weighted(
                    move || {
                        surface(&SurfaceArgs::with_child(
                            SurfaceArgs::default()
                                .modifier(Modifier::new().fill_max_size())
                                .style(SurfaceStyle::Filled {
                                    color: Color::TRANSPARENT,
                                })
                                .content_alignment(Alignment::Center),
                            move || {
                                text(&TextArgs::default().text(label).size(size).color(color));
                            },
                        ));
                    },
                    1.0,
                );
            }
        },
    );
}

fn week_row(
    week: Vec<DayCell>,
    month: CalendarMonth,
    state: State<RangeCalendarState>,
    on_change: CallbackWith<DateRange>,
) {
    row(
        RowArgs::default()
            .modifier(Modifier::new().fill_max_size())
            .main_axis_alignment(MainAxisAlignment::Start)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            for cell in week.clone() {
                let on_change = on_change.clone();
                scope.child_weighted(
                    move || {
                        day_cell(cell, month, state, on_change.clone());
                    },
                    1.0,
                );
            }
        },
    );
}

fn day_cell(
    cell: DayCell,
    month: CalendarMonth,
    state: State<RangeCalendarState>,
    on_change: CallbackWith<DateRange>,
) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let day_size = theme.typography.body_medium.font_size;
    let tone = cell_tone(&cell);

    let (fill, text_color, shape) = match tone {
        CellTone::Endpoint => (
            scheme.primary,
            scheme.on_primary,
            Shape::rounded_rectangle(ENDPOINT_RADIUS),
        ),
        CellTone::InRange => (
            scheme.secondary_container,
            scheme.on_secondary_container,
            Shape::RECTANGLE,
        ),
        CellTone::Normal => (Color::TRANSPARENT, scheme.on_surface, Shape::RECTANGLE),
        CellTone::Muted => (
            Color::TRANSPARENT,
            scheme
                .on_surface_variant
                .with_alpha(MaterialAlpha::DISABLED_CONTENT),
            Shape::RECTANGLE,
        ),
    };
    let bar_color = if tone == CellTone::Endpoint {
        scheme.on_primary
    } else {
        scheme.primary
    };
    let date = cell.date;
    let show_today = cell.is_today && cell.is_current_month;

    let mut surface_args = SurfaceArgs::default()
        .modifier(Modifier::new().fill_max_size().padding_all(CELL_PADDING))
        .style(SurfaceStyle::Filled { color: fill })
        .shape(shape)
        .content_alignment(Alignment::Center)
        .enabled(cell.is_interactive());
    if cell.is_interactive() {
        surface_args = surface_args.on_click(move || {
            let outcome = state.with_mut(|s| s.tap_day(date, month));
            if let Some(range) = outcome.selected() {
                on_change.call(range);
            }
        });
    }

    surface(&SurfaceArgs::with_child(surface_args, move || {
        column(
            ColumnArgs::default().cross_axis_alignment(CrossAxisAlignment::Center),
            move |scope| {
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text(date.day().to_string())
                            .size(day_size)
                            .color(text_color),
                    );
                });
                scope.child(|| {
                    spacer(&SpacerArgs::new(Modifier::new().height(TODAY_BAR_GAP)));
                });
                scope.child(move || {
                    today_bar(show_today, bar_color);
                });
            },
        );
    }));
}

/// Underline under today's number; an empty slot of the same size otherwise
/// so every number sits at the same height.
fn today_bar(visible: bool, color: Color) {
    let modifier = Modifier::new().size(TODAY_BAR_WIDTH, TODAY_BAR_HEIGHT);
    if visible {
        surface(&SurfaceArgs::with_child(
            SurfaceArgs::default()
                .modifier(modifier)
                .style(SurfaceStyle::Filled { color })
                .shape(Shape::capsule()),
            || {},
        ));
    } else {
        spacer(&SpacerArgs::new(modifier));
    }
}

#[cfg(test)]
mod tests {
    use range_calendar_core::{MonthGrid, NotBefore};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march_grid(range: DateRange) -> MonthGrid {
        MonthGrid::build(
            CalendarMonth::new(2026, 3).unwrap(),
            Weekday::Mon,
            date(2026, 3, 12),
            &range,
            &NotBefore(date(2026, 3, 5)),
        )
    }

    fn tone(grid: &MonthGrid, day: NaiveDate) -> CellTone {
        cell_tone(grid.cell(day).unwrap())
    }

    #[test]
    fn complete_range_tones() {
        let grid = march_grid(DateRange::new(date(2026, 3, 10), date(2026, 3, 14)));
        assert_eq!(tone(&grid, date(2026, 3, 10)), CellTone::Endpoint);
        assert_eq!(tone(&grid, date(2026, 3, 12)), CellTone::InRange);
        assert_eq!(tone(&grid, date(2026, 3, 14)), CellTone::Endpoint);
        assert_eq!(tone(&grid, date(2026, 3, 20)), CellTone::Normal);
    }

    #[test]
    fn rejected_and_filler_days_are_muted() {
        let grid = march_grid(DateRange::EMPTY);
        assert_eq!(tone(&grid, date(2026, 3, 4)), CellTone::Muted);
        assert_eq!(tone(&grid, date(2026, 3, 5)), CellTone::Normal);
        assert_eq!(tone(&grid, date(2026, 2, 28)), CellTone::Muted);
        assert_eq!(tone(&grid, date(2026, 4, 1)), CellTone::Muted);
    }

    #[test]
    fn filler_day_inside_range_stays_muted() {
        let grid = march_grid(DateRange::new(date(2026, 3, 28), date(2026, 4, 3)));
        assert_eq!(tone(&grid, date(2026, 3, 31)), CellTone::InRange);
        assert_eq!(tone(&grid, date(2026, 4, 2)), CellTone::Muted);
    }

    #[test]
    fn start_only_marks_one_endpoint() {
        let grid = march_grid(DateRange::starting(date(2026, 3, 18)));
        assert_eq!(tone(&grid, date(2026, 3, 18)), CellTone::Endpoint);
        assert_eq!(tone(&grid, date(2026, 3, 19)), CellTone::Normal);
    }
}
