//! Media carousel pieces shared by the feed and the venue details page

use crate::theme;
use crate::types::{MediaItem, MediaKind};
use crate::ui::components::icon_button;
use eframe::egui;
use egui_phosphor::regular as icons;

/// Moves a carousel index by `delta`, clamped to `len` items. `None` when
/// the index would not change.
pub fn step_index(current: usize, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let target = current.saturating_add_signed(delta).min(len - 1);
    (target != current).then_some(target)
}

/// Previous/next buttons around a `n/len` counter with page dots. Returns
/// the step that was clicked.
pub fn carousel_controls(ui: &mut egui::Ui, index: usize, len: usize) -> Option<isize> {
    let mut step = None;
    ui.horizontal_centered(|ui| {
        if icon_button(ui, icons::CARET_LEFT, theme::TEXT_PRIMARY).clicked() {
            step = Some(-1);
        }
        let dots = (0..len)
            .map(|i| if i == index { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ");
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{}/{}  {dots}", index + 1, len))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        if icon_button(ui, icons::CARET_RIGHT, theme::TEXT_PRIMARY).clicked() {
            step = Some(1);
        }
    });
    step
}

/// Placeholder frame for one media item: kind icon, caption and source.
pub fn paint_media(painter: &egui::Painter, rect: egui::Rect, item: &MediaItem) {
    painter.rect_filled(rect, 0.0, theme::BG_MEDIA);
    let icon = match item.kind {
        MediaKind::Video => icons::VIDEO_CAMERA,
        MediaKind::Image => icons::IMAGE,
    };
    painter.text(
        rect.center() - egui::vec2(0.0, 24.0),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(theme::FONT_ICON_LARGE * 2.0),
        theme::TEXT_DIM,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 36.0),
        egui::Align2::CENTER_CENTER,
        item.caption,
        egui::FontId::proportional(theme::FONT_LABEL),
        theme::TEXT_MUTED,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 58.0),
        egui::Align2::CENTER_CENTER,
        item.source,
        egui::FontId::monospace(theme::FONT_SMALL),
        theme::TEXT_DIM,
    );
}

/// Carousel of the details page plus the full-screen viewer opened from it.
/// The viewer pages independently and starts on the item that was clicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailsMedia {
    index: usize,
    viewer: Option<usize>,
}

impl DetailsMedia {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn step(&mut self, delta: isize, len: usize) -> bool {
        match step_index(self.index, delta, len) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Index shown in the full-screen viewer, if open
    pub fn viewer(&self) -> Option<usize> {
        self.viewer
    }

    pub fn open_viewer(&mut self, len: usize) -> bool {
        if self.index >= len {
            return false;
        }
        self.viewer = Some(self.index);
        true
    }

    pub fn step_viewer(&mut self, delta: isize, len: usize) -> bool {
        let Some(current) = self.viewer else {
            return false;
        };
        match step_index(current, delta, len) {
            Some(index) => {
                self.viewer = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn close_viewer(&mut self) -> Option<usize> {
        self.viewer.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_index_clamps_to_items() {
        assert_eq!(step_index(0, 1, 3), Some(1));
        assert_eq!(step_index(2, 1, 3), None);
        assert_eq!(step_index(0, -1, 3), None);
        assert_eq!(step_index(1, 10, 3), Some(2));
        assert_eq!(step_index(0, 1, 0), None);
    }

    #[test]
    fn viewer_opens_on_the_clicked_item() {
        let mut media = DetailsMedia::default();
        assert!(media.step(2, 3));
        assert!(media.open_viewer(3));
        assert_eq!(media.viewer(), Some(2));
    }

    #[test]
    fn viewer_pages_without_moving_the_carousel() {
        let mut media = DetailsMedia::default();
        media.step(1, 3);
        media.open_viewer(3);
        assert!(media.step_viewer(-1, 3));
        assert!(!media.step_viewer(-1, 3));
        assert_eq!(media.viewer(), Some(0));
        assert_eq!(media.close_viewer(), Some(0));
        assert_eq!(media.viewer(), None);
        assert_eq!(media.index(), 1);
    }

    #[test]
    fn viewer_needs_media() {
        let mut media = DetailsMedia::default();
        assert!(!media.open_viewer(0));
        assert!(!media.step_viewer(1, 3));
        assert_eq!(media.close_viewer(), None);
    }
}
