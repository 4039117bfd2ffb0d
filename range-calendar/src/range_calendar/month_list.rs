//! Scrolling list of month panels and the gesture plumbing around it.
use range_calendar_core::{DateRange, RangeCalendarState, today};
use tessera_components::{
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    pos_misc::is_position_in_component,
    scrollable::{ScrollBarBehavior, ScrollableArgs, ScrollableController, scrollable},
};
use tessera_ui::{
    CallbackWith, CursorEventContent, Dp, Modifier, PressKeyEventType, Px, PxPosition, State,
    receive_frame_nanos, tessera,
};

use super::panel::{MonthPanelArgs, month_panel};

/// Panel height used before the viewport has been measured.
const FALLBACK_PANEL_HEIGHT: Dp = Dp(480.0);

#[derive(Clone, PartialEq)]
pub(super) struct MonthListArgs {
    pub state: State<RangeCalendarState>,
    pub controller: State<ScrollableController>,
    pub on_change: CallbackWith<DateRange>,
}

/// Content offset of the list: 0 at the top, growing as it scrolls down.
pub(super) fn content_offset(controller: State<ScrollableController>) -> f32 {
    -controller.with(|c| c.child_position().y.to_f32())
}

fn apply_content_offset(controller: State<ScrollableController>, offset: f32) {
    controller.with_mut(|c| {
        c.set_scroll_position(PxPosition::new(Px::ZERO, Px::saturating_from_f32(-offset)));
    });
}

fn panel_height(controller: State<ScrollableController>) -> Dp {
    let visible = controller.with(|c| c.visible_size().height);
    if visible > Px::ZERO {
        Dp::from(visible)
    } else {
        FALLBACK_PANEL_HEIGHT
    }
}

#[tessera]
pub(super) fn month_list(args: &MonthListArgs) {
    let args = args.clone();
    let state = args.state;
    let controller = args.controller;
    let on_change = args.on_change;

    if state.with(|s| s.needs_frames()) {
        receive_frame_nanos(move |frame_nanos| {
            let offset = content_offset(controller);
            let step = state.with_mut(|s| s.on_frame(frame_nanos, offset));
            if let Some(offset) = step.scroll_to {
                apply_content_offset(controller, offset);
            }
            if step.keep_running {
                tessera_ui::FrameNanosControl::Continue
            } else {
                tessera_ui::FrameNanosControl::Stop
            }
        });
    }

    let height = panel_height(controller);
    let month_count = state.with(|s| s.window().len());
    let today = today();

    scrollable(
        &ScrollableArgs::default()
            .modifier(Modifier::new().fill_max_size())
            .scrollbar_behavior(ScrollBarBehavior::Hidden)
            .controller(controller)
            .child(move || {
                let on_change = on_change.clone();
                column(
                    ColumnArgs::default().modifier(Modifier::new().fill_max_width()),
                    move |scope| {
                        for index in 0..month_count {
                            let on_change = on_change.clone();
                            scope.child(move || {
                                month_panel(&MonthPanelArgs {
                                    index,
                                    height,
                                    today,
                                    state,
                                    on_change: on_change.clone(),
                                });
                            });
                        }
                    },
                );
            }),
    );

    // Runs after the day cells, so a tap on release still sees the
    // classification from the frames before it.
    input_handler(move |input| {
        let size = input.computed_data;
        let cursor = input.cursor_position_rel;

        if let Some(pos) = cursor
            && state.with(|s| s.is_pressed())
        {
            state.with_mut(|s| s.pointer_moved(pos.y.to_f32()));
        }

        for event in input.cursor_events.iter() {
            match &event.content {
                CursorEventContent::Pressed(PressKeyEventType::Left) => {
                    if let Some(pos) = cursor
                        && is_position_in_component(size, pos)
                    {
                        state.with_mut(|s| s.press(pos.y.to_f32()));
                    }
                }
                CursorEventContent::Released(PressKeyEventType::Left) => {
                    if state.with(|s| s.is_pressed()) && state.with_mut(|s| s.release()) {
                        tracing::trace!("scroll gesture released");
                    }
                }
                _ => {}
            }
        }

        let visible = controller.with(|c| c.visible_size().height);
        if visible <= Px::ZERO {
            return;
        }
        let panel_px = Dp::from(visible).to_px().to_f32();
        state.with_mut(|s| s.set_panel_height(panel_px));
        if let Some(offset) = state.with_mut(|s| s.take_initial_offset()) {
            apply_content_offset(controller, offset);
        }
        let offset = content_offset(controller);
        state.with_mut(|s| s.observe_viewport(offset, visible.to_f32()));
    });
}
