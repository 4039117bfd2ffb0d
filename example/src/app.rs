use chrono::NaiveDate;
use range_calendar::{DateRange, NotBefore, RangeCalendarArgs, range_calendar, today};
use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::{MaterialTheme, material_theme},
};
use tessera_ui::{DimensionValue, Dp, Modifier, State, remember, tessera, use_context};

const PAGE_MAX_WIDTH: Dp = Dp(600.0);
const CALENDAR_MAX_HEIGHT: Dp = Dp(600.0);
const PAGE_PADDING: Dp = Dp(16.0);
const CARD_RADIUS: Dp = Dp(16.0);

fn capped(max: Dp) -> DimensionValue {
    DimensionValue::Fill {
        min: None,
        max: Some(max.into()),
    }
}

fn format_day(day: Option<NaiveDate>) -> String {
    match day {
        Some(day) => day.format("%-d %b %Y").to_string(),
        None => "—".to_string(),
    }
}

fn format_range(range: DateRange) -> String {
    format!(
        "{} — {}",
        format_day(range.start_date),
        format_day(range.end_date)
    )
}

fn format_nights(range: DateRange) -> String {
    match range.nights() {
        Some(1) => "1 night".to_string(),
        Some(nights) => format!("{nights} nights"),
        None => "Pick a check-out day".to_string(),
    }
}

#[tessera]
pub fn app() {
    material_theme(MaterialTheme::default, || {
        stay_page();
    });
}

#[tessera]
fn stay_page() {
    let selected = remember(|| DateRange::EMPTY);
    let surface_color = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme
        .surface;

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().fill_max_size())
            .style(SurfaceStyle::Filled {
                color: surface_color,
            })
            .content_alignment(Alignment::TopCenter),
        move || {
            column(
                ColumnArgs::default()
                    .modifier(
                        Modifier::new()
                            .constrain(Some(capped(PAGE_MAX_WIDTH)), Some(DimensionValue::FILLED))
                            .padding_all(PAGE_PADDING),
                    )
                    .cross_axis_alignment(CrossAxisAlignment::Center),
                move |scope| {
                    scope.child(page_heading);
                    scope.child(|| {
                        spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0))));
                    });
                    scope.child(move || {
                        selected_range_pill(selected);
                    });
                    scope.child(|| {
                        spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0))));
                    });
                    scope.child_weighted(
                        move || {
                            calendar_card(selected);
                        },
                        1.0,
                    );
                },
            );
        },
    ));
}

fn page_heading() {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let title_color = theme.color_scheme.on_surface;
    let subtitle_color = theme.color_scheme.on_surface_variant;
    let title_size = theme.typography.headline_small.font_size;
    let subtitle_size = theme.typography.body_medium.font_size;

    column(
        ColumnArgs::default().cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text("Choose your stay")
                        .size(title_size)
                        .color(title_color),
                );
            });
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text("Custom mobile date range picker")
                        .size(subtitle_size)
                        .color(subtitle_color),
                );
            });
        },
    );
}

fn selected_range_pill(selected: State<DateRange>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let container = theme.color_scheme.surface_container;
    let label_color = theme.color_scheme.on_surface_variant;
    let value_color = theme.color_scheme.on_surface;
    let label_size = theme.typography.title_small.font_size;
    let value_size = theme.typography.body_large.font_size;
    let range = selected.get();
    let value = format_range(range);
    let nights = format_nights(range);

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().fill_max_width())
            .style(SurfaceStyle::Filled { color: container })
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center),
        move || {
            let value = value.clone();
            let nights = nights.clone();
            column(
                ColumnArgs::default()
                    .modifier(Modifier::new().padding_symmetric(Dp(16.0), Dp(12.0)))
                    .main_axis_alignment(MainAxisAlignment::Center)
                    .cross_axis_alignment(CrossAxisAlignment::Center),
                move |scope| {
                    scope.child(move || {
                        text(
                            &TextArgs::default()
                                .text("Selected range")
                                .size(label_size)
                                .color(label_color),
                        );
                    });
                    let value = value.clone();
                    scope.child(move || {
                        text(
                            &TextArgs::default()
                                .text(value.clone())
                                .size(value_size)
                                .color(value_color),
                        );
                    });
                    let nights = nights.clone();
                    scope.child(move || {
                        text(
                            &TextArgs::default()
                                .text(nights.clone())
                                .size(label_size)
                                .color(label_color),
                        );
                    });
                },
            );
        },
    ));
}

fn calendar_card(selected: State<DateRange>) {
    let options = crate::options();
    let card_color = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme
        .surface_container_low;

    let mut args = RangeCalendarArgs::default()
        .modifier(Modifier::new().fill_max_size())
        .months_before(options.months_before)
        .months_after(options.months_after)
        .on_change(move |range| {
            tracing::debug!(?range, "stay range changed");
            selected.set(range);
        });
    if let Some(month) = options.initial_month {
        args = args.initial_month(month);
    }
    if options.disable_past {
        args = args.selectable_dates(NotBefore(today()));
    }

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().constrain(
                Some(DimensionValue::FILLED),
                Some(capped(CALENDAR_MAX_HEIGHT)),
            ))
            .style(SurfaceStyle::Filled { color: card_color })
            .shape(Shape::rounded_rectangle(CARD_RADIUS)),
        move || {
            range_calendar(&args);
        },
    ));
}
