//! Reusable UI components
//!
//! Small custom-painted widgets shared by the screens.

use crate::theme;
use eframe::egui;

/// Star string for a 0-5 review rating
pub fn render_stars(stars: u8) -> String {
    let filled = stars.min(5) as usize;
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// Pill-shaped on/off switch. Flips `on` when clicked.
pub fn toggle_switch(ui: &mut egui::Ui, on: &mut bool) -> egui::Response {
    let size = egui::vec2(44.0, 24.0);
    let (rect, mut response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let t = ui.ctx().animate_bool_responsive(response.id, *on);
        let track = if *on {
            theme::TOGGLE_SELECTED
        } else {
            theme::BORDER_DEFAULT
        };
        let (fill, rect) = theme::button_visual(&response, track, rect);
        let radius = rect.height() / 2.0;
        let painter = ui.painter();
        painter.rect_filled(rect, radius, fill);
        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), t);
        painter.circle_filled(
            egui::pos2(knob_x, rect.center().y),
            radius - 3.0,
            theme::TEXT_PRIMARY,
        );
    }

    response
}

/// Square tile in the activity grid
pub fn activity_tile(ui: &mut egui::Ui, name: &str, selected: bool) -> egui::Response {
    let size = egui::vec2(theme::ACTIVITY_TILE, theme::ACTIVITY_TILE);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let base = if selected {
            theme::TOGGLE_SELECTED
        } else {
            theme::TOGGLE_UNSELECTED
        };
        let (fill, rect) = theme::button_visual(&response, base, rect);
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_DEFAULT, fill);
        if !selected {
            painter.rect_stroke(
                rect,
                theme::RADIUS_DEFAULT,
                egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
                egui::StrokeKind::Inside,
            );
        }

        let text_color = if selected {
            theme::BG_BASE
        } else {
            theme::TEXT_SECONDARY
        };
        let galley = painter.layout(
            name.to_owned(),
            egui::FontId::proportional(theme::FONT_CAPTION),
            text_color,
            rect.width() - 6.0,
        );
        let pos = rect.center() - galley.size() / 2.0;
        painter.galley(pos, galley, text_color);
    }

    response.on_hover_text(name)
}

/// Icon + caption button for the bottom navigation bar
pub fn nav_button(ui: &mut egui::Ui, icon: &str, label: &str, selected: bool) -> egui::Response {
    let size = egui::vec2(ui.available_width(), theme::NAVBAR_HEIGHT - 8.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let color = if selected {
            theme::ACCENT
        } else if response.hovered() {
            theme::TEXT_PRIMARY
        } else {
            theme::TEXT_MUTED
        };
        let painter = ui.painter();
        painter.text(
            rect.center() - egui::vec2(0.0, 8.0),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(theme::FONT_ICON),
            color,
        );
        painter.text(
            rect.center_bottom() - egui::vec2(0.0, 8.0),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(theme::FONT_SMALL),
            color,
        );
    }

    response
}

/// Round translucent button with a single phosphor icon, used over media
pub fn icon_button(ui: &mut egui::Ui, icon: &str, color: egui::Color32) -> egui::Response {
    let size = egui::vec2(theme::FONT_ICON_LARGE + 8.0, theme::FONT_ICON_LARGE + 8.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (fill, rect) = theme::button_visual(&response, theme::BG_OVERLAY, rect);
        let painter = ui.painter();
        painter.circle_filled(rect.center(), rect.width() / 2.0, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(theme::FONT_ICON),
            color,
        );
    }

    response
}

/// Non-interactive rounded label, e.g. an amenity
pub fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(theme::CHIP_BG)
        .corner_radius(theme::RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_SMALL)
                        .color(theme::CHIP_TEXT),
                )
                .selectable(false),
            );
        });
}

/// Square orange badge showing a 0-10 score
pub fn rating_badge(ui: &mut egui::Ui, score: Option<f32>) {
    let size = egui::vec2(theme::RATING_BADGE, theme::RATING_BADGE);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let text = score.map_or_else(|| "-".to_owned(), |s| format!("{s:.1}"));
    let painter = ui.painter();
    painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::ACCENT);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(theme::FONT_LABEL),
        theme::TEXT_PRIMARY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_left_to_right() {
        assert_eq!(render_stars(3), "★★★☆☆");
        assert_eq!(render_stars(0), "☆☆☆☆☆");
        assert_eq!(render_stars(9), "★★★★★");
    }
}
