//! Venue details screen

use super::carousel::{carousel_controls, paint_media, DetailsMedia};
use super::App;
use crate::content::venue_by_id;
use crate::router::Route;
use crate::theme;
use crate::types::Venue;
use crate::ui::components::{chip, icon_button, rating_badge, render_stars};
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::{debug, warn};

impl App {
    pub(crate) fn render_venue_details(&mut self, ui: &mut egui::Ui, id: u32) -> Option<Route> {
        let mut next = None;

        ui.horizontal(|ui| {
            let back = ui.add(
                egui::Button::new(egui::RichText::new(icons::ARROW_LEFT).size(theme::FONT_ICON))
                    .frame(false),
            );
            if back.on_hover_text("Back").clicked() {
                next = Some(Route::MainScreen);
            }
        });

        let Some(venue) = venue_by_id(&self.venues, id) else {
            if !self.missing_venue_logged {
                warn!(venue = id, "Venue not found");
                self.missing_venue_logged = true;
            }
            ui.add_space(theme::SPACING_XL * 2.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(icons::WARNING_CIRCLE)
                        .size(theme::FONT_ICON_LARGE)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new("Venue not found")
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_PRIMARY),
                );
            });
            return next;
        };

        let media = &mut self.details_media;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| venue_body(ui, venue, media));
        media_viewer(ui.ctx(), venue, media);

        next
    }
}

fn venue_body(ui: &mut egui::Ui, venue: &Venue, media: &mut DetailsMedia) {
    // Hero carousel, click opens the full-screen viewer
    let len = venue.media.len();
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::DETAILS_MEDIA_HEIGHT),
        egui::Sense::click(),
    );
    if ui.is_rect_visible(rect) {
        match venue.media.get(media.index()) {
            Some(item) => paint_media(ui.painter(), rect, item),
            None => {
                ui.painter().rect_filled(rect, theme::RADIUS_CARD, theme::BG_MEDIA);
            }
        }
    }
    if response
        .on_hover_cursor(egui::CursorIcon::ZoomIn)
        .clicked()
        && media.open_viewer(len)
    {
        debug!(venue = venue.id, index = media.index(), "Media viewer opened");
    }
    if len > 1 {
        ui.allocate_ui(egui::vec2(ui.available_width(), 44.0), |ui| {
            if let Some(step) = carousel_controls(ui, media.index(), len) {
                media.step(step, len);
            }
        });
    }
    ui.add_space(theme::SPACING_XL);

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(venue.name)
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.label(
                egui::RichText::new(format!("{} {}", icons::MAP_PIN, venue.address))
                    .color(theme::TEXT_MUTED),
            );
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(venue.distance).color(theme::TEXT_SECONDARY));
                ui.label(
                    egui::RichText::new(venue.cost_indicator)
                        .strong()
                        .color(theme::TEXT_COST),
                );
            });
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            rating_badge(ui, venue.score());
        });
    });
    ui.add_space(theme::SPACING_LG);

    ui.label(
        egui::RichText::new(format!("{} {}", icons::USERS, venue.people_count))
            .color(theme::TEXT_SECONDARY),
    );
    ui.add_space(theme::SPACING_MD);
    ui.label(
        egui::RichText::new(venue.description)
            .size(theme::FONT_BODY)
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(theme::SPACING_MD);
    ui.label(
        egui::RichText::new(format!("{} {}", icons::PHONE, venue.phone)).color(theme::TEXT_SECONDARY),
    );

    ui.add_space(theme::SPACING_XL);
    section_title(ui, "Amenities");
    ui.horizontal_wrapped(|ui| {
        for amenity in &venue.amenities {
            chip(ui, amenity);
        }
    });

    ui.add_space(theme::SPACING_XL);
    section_title(ui, "Reviews");
    for review in &venue.reviews {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(review.username).strong().color(theme::TEXT_PRIMARY));
                ui.label(egui::RichText::new(render_stars(review.rating)).color(theme::ACCENT));
            });
            ui.label(egui::RichText::new(review.comment).color(theme::TEXT_SECONDARY));
        });
        ui.add_space(theme::SPACING_MD);
    }
}

/// Full-screen pager over the venue's media with a close button. Escape
/// also closes it.
fn media_viewer(ctx: &egui::Context, venue: &Venue, media: &mut DetailsMedia) {
    let Some(index) = media.viewer() else {
        return;
    };
    let len = venue.media.len();
    let screen = ctx.screen_rect();
    let mut close = ctx.input(|i| i.key_pressed(egui::Key::Escape));

    egui::Area::new(egui::Id::new("media_viewer"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // Swallows clicks meant for the page underneath
            let (rect, _) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
            ui.painter().rect_filled(rect, 0.0, egui::Color32::BLACK);
            if let Some(item) = venue.media.get(index) {
                paint_media(ui.painter(), rect.shrink(theme::SPACING_XL), item);
            }

            let close_rect = egui::Rect::from_min_size(
                egui::pos2(rect.right() - 60.0, rect.top() + theme::SPACING_XL),
                egui::vec2(48.0, 48.0),
            );
            ui.scope_builder(egui::UiBuilder::new().max_rect(close_rect), |ui| {
                if icon_button(ui, icons::X, theme::TEXT_PRIMARY)
                    .on_hover_text("Close")
                    .clicked()
                {
                    close = true;
                }
            });

            if len > 1 {
                let pager_rect = egui::Rect::from_min_max(
                    egui::pos2(rect.left(), rect.bottom() - 72.0),
                    egui::pos2(rect.right(), rect.bottom() - theme::SPACING_XL),
                );
                ui.scope_builder(egui::UiBuilder::new().max_rect(pager_rect), |ui| {
                    if let Some(step) = carousel_controls(ui, index, len) {
                        media.step_viewer(step, len);
                    }
                });
            }
        });

    if close {
        media.close_viewer();
        debug!(venue = venue.id, "Media viewer closed");
    }
}

fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .strong()
                .color(theme::TEXT_PRIMARY),
        )
        .selectable(false),
    );
    ui.add_space(theme::SPACING_SM);
}
