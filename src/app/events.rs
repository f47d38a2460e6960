//! Events screen with a search box

use super::App;
use crate::content::search_events;
use crate::theme;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub(crate) fn render_events(&mut self, ui: &mut egui::Ui) {
        ui.add(
            egui::Label::new(
                egui::RichText::new("Events")
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_LG);

        egui::Frame::new()
            .fill(theme::BG_ELEVATED)
            .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE))
            .corner_radius(theme::RADIUS_LARGE)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(icons::MAGNIFYING_GLASS)
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut self.event_query)
                            .hint_text("Search events")
                            .frame(false)
                            .desired_width(f32::INFINITY),
                    );
                });
            });
        ui.add_space(theme::SPACING_LG);

        let hits = search_events(&self.events, &self.event_query);
        if hits.is_empty() {
            ui.add_space(theme::SPACING_XL);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No events match your search").color(theme::TEXT_MUTED));
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for event in hits {
                    theme::card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(event.name)
                                        .size(theme::FONT_LABEL)
                                        .strong()
                                        .color(theme::TEXT_PRIMARY),
                                )
                                .selectable(false),
                            );
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(
                                    egui::RichText::new(format!("{} {:.1}", icons::STAR, event.rating))
                                        .color(theme::ACCENT),
                                );
                            });
                        });
                        ui.label(
                            egui::RichText::new(format!("{} {}", icons::MAP_PIN, event.distance))
                                .color(theme::TEXT_SECONDARY),
                        );
                        ui.label(
                            egui::RichText::new(format!("{} Capacity: {}", icons::USERS, event.capacity_range))
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        );
                    });
                    ui.add_space(theme::SPACING_MD);
                }
            });
    }
}
