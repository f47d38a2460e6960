//! egui front-end for [`RangeSliderState`]
//!
//! Translates egui drag responses into the state's pointer handlers and
//! paints the draw list produced by [`render`].

use super::render::{render, SegmentKind};
use super::state::RangeSliderState;
use super::TrackGeometry;
use crate::theme;
use eframe::egui;

/// Visual parameters. None of these affect the selected values.
#[derive(Debug, Clone, Copy)]
pub struct SliderStyle {
    pub height: f32,
    pub track_height: f32,
    pub thumb_radius: f32,
    pub active_color: egui::Color32,
    pub inactive_color: egui::Color32,
    pub thumb_color: egui::Color32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            height: theme::SLIDER_HEIGHT,
            track_height: theme::SLIDER_RAIL_HEIGHT,
            thumb_radius: theme::SLIDER_HANDLE_RADIUS,
            active_color: theme::SLIDER_ACTIVE,
            inactive_color: theme::SLIDER_INACTIVE,
            thumb_color: theme::SLIDER_HEAD,
        }
    }
}

/// Labelled range slider. The returned response is marked changed on any
/// frame where a drag moved the range.
pub struct RangeSlider<'a> {
    state: &'a mut RangeSliderState,
    style: SliderStyle,
}

impl<'a> RangeSlider<'a> {
    pub fn new(state: &'a mut RangeSliderState) -> Self {
        Self {
            state,
            style: SliderStyle::default(),
        }
    }
}

impl egui::Widget for RangeSlider<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let Self { state, style } = self;

        ui.add(
            egui::Label::new(
                egui::RichText::new(state.label())
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);

        let (rect, mut response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), style.height),
            egui::Sense::click_and_drag(),
        );
        state.set_geometry(TrackGeometry::new(rect.width(), style.thumb_radius));
        let local_x = |pos: egui::Pos2| pos.x - rect.left();

        if response.drag_started() {
            let press = ui
                .input(|i| i.pointer.press_origin())
                .or(response.interact_pointer_pos());
            if let Some(press) = press {
                if let Some(thumb) = state.hit_test(local_x(press)) {
                    state.on_pointer_down(thumb, local_x(press));
                    // Catch up on the movement egui swallowed before the drag threshold
                    if let Some(now) = response.interact_pointer_pos() {
                        if state.on_pointer_move(thumb, now.x - press.x).is_some() {
                            response.mark_changed();
                        }
                    }
                }
            }
        } else if response.dragged() {
            let dx = response.drag_delta().x;
            let active: Vec<_> = state.dragging_thumbs().collect();
            for thumb in active {
                if state.on_pointer_move(thumb, dx).is_some() {
                    response.mark_changed();
                }
            }
        }

        if response.drag_stopped() {
            let active: Vec<_> = state.dragging_thumbs().collect();
            for thumb in active {
                state.on_pointer_up(thumb);
            }
        } else if !response.dragged() && state.dragging_thumbs().next().is_some() {
            // Pointer capture went elsewhere without a release on this widget
            state.cancel_drags();
        }

        let over_thumb = response
            .hover_pos()
            .and_then(|pos| state.hit_test(local_x(pos)))
            .is_some();
        if over_thumb || response.dragged() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        if ui.is_rect_visible(rect) {
            paint(ui.painter(), rect, state, &style);
        }

        response
    }
}

fn paint(painter: &egui::Painter, rect: egui::Rect, state: &RangeSliderState, style: &SliderStyle) {
    let visual = render(state);
    let y = rect.center().y;
    let at = |x: f32| egui::pos2(rect.left() + x, y);

    for segment in visual.segments {
        if segment.to <= segment.from {
            continue;
        }
        let color = match segment.kind {
            SegmentKind::Active => style.active_color,
            SegmentKind::Inactive => style.inactive_color,
        };
        painter.line_segment(
            [at(segment.from), at(segment.to)],
            egui::Stroke::new(style.track_height, color),
        );
    }

    for thumb in visual.thumbs {
        let radius = if thumb.dragging {
            thumb.radius * 1.15
        } else {
            thumb.radius
        };
        painter.circle_filled(at(thumb.center_x), radius, style.thumb_color);
        if thumb.dragging {
            painter.circle_stroke(
                at(thumb.center_x),
                radius + 3.0,
                egui::Stroke::new(theme::STROKE_THICK, theme::ACCENT_MUTED),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::state::ThumbId;
    use crate::slider::{SliderConfig, SliderRange, ValueDomain};

    const SCREEN: egui::Rect = egui::Rect {
        min: egui::pos2(0.0, 0.0),
        max: egui::pos2(420.0, 300.0),
    };

    /// Headless egui frames driving one slider with synthetic pointer events
    struct Harness {
        ctx: egui::Context,
        state: RangeSliderState,
        track: egui::Rect,
        time: f64,
    }

    impl Harness {
        fn new(steps: u32, initial: SliderRange) -> Self {
            let config = SliderConfig::new(ValueDomain::new(1.0, 5.0).unwrap())
                .steps(steps)
                .label("People:", |v| format!("{}", v as i32));
            let mut harness = Self {
                ctx: egui::Context::default(),
                state: RangeSliderState::new(config, initial).unwrap(),
                track: egui::Rect::NOTHING,
                time: 0.0,
            };
            // Lay out once so the track rect is known for hit testing
            harness.frame(Vec::new());
            harness
        }

        fn frame(&mut self, events: Vec<egui::Event>) -> bool {
            self.time += 1.0 / 60.0;
            let input = egui::RawInput {
                screen_rect: Some(SCREEN),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            let state = &mut self.state;
            let mut track = self.track;
            let mut changed = false;
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let response = ui.add(RangeSlider::new(state));
                    track = response.rect;
                    changed |= response.changed();
                });
            });
            self.track = track;
            changed
        }

        fn screen_pos(&self, local_x: f32) -> egui::Pos2 {
            egui::pos2(self.track.left() + local_x, self.track.center().y)
        }

        fn press(&mut self, local_x: f32) {
            let pos = self.screen_pos(local_x);
            self.frame(vec![
                egui::Event::PointerMoved(pos),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    modifiers: egui::Modifiers::NONE,
                },
            ]);
        }

        fn move_to(&mut self, local_x: f32) -> bool {
            let pos = self.screen_pos(local_x);
            self.frame(vec![egui::Event::PointerMoved(pos)])
        }

        fn release(&mut self, local_x: f32) {
            let pos = self.screen_pos(local_x);
            self.frame(vec![egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::NONE,
            }]);
        }

        fn pixel_of(&self, value: f32) -> f32 {
            self.state.geometry().pixel_of(value, self.state.domain())
        }
    }

    #[test]
    fn dragging_end_thumb_snaps_to_step() {
        let mut harness = Harness::new(3, SliderRange::new(1.0, 5.0));
        assert!(harness.track.width() > 0.0);

        let from = harness.state.thumb_pixel(ThumbId::End);
        let to = harness.pixel_of(2.6);
        harness.press(from);
        assert!(harness.move_to(to));
        assert!(harness.state.is_dragging(ThumbId::End));
        harness.release(to);

        assert_eq!(harness.state.range(), SliderRange::new(1.0, 3.0));
        assert!(harness.state.dragging_thumbs().next().is_none());
    }

    #[test]
    fn pressing_the_bare_track_moves_nothing() {
        let mut harness = Harness::new(3, SliderRange::new(1.0, 5.0));
        let from = harness.pixel_of(3.0);
        assert_eq!(harness.state.hit_test(from), None);

        harness.press(from);
        assert!(!harness.move_to(harness.pixel_of(4.2)));
        harness.release(harness.pixel_of(4.2));

        assert_eq!(harness.state.range(), SliderRange::new(1.0, 5.0));
    }
}
