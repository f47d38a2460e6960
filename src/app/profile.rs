use super::App;
use crate::theme;
use crate::types::ProfileTab;
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::debug;

const DISPLAY_NAME: &str = "John Doe";
const HANDLE: &str = "@john_doe123";

impl App {
    pub(crate) fn render_profile(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Profile")
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_XL);

            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(theme::AVATAR_SIZE, theme::AVATAR_SIZE),
                egui::Sense::hover(),
            );
            let painter = ui.painter();
            painter.circle_filled(rect.center(), theme::AVATAR_SIZE / 2.0, theme::BG_ELEVATED);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                icons::USER,
                egui::FontId::proportional(theme::FONT_ICON_LARGE * 1.5),
                theme::TEXT_MUTED,
            );
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new(DISPLAY_NAME)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(egui::RichText::new(HANDLE).color(theme::TEXT_MUTED));
        });
        ui.add_space(theme::SPACING_XL);

        ui.columns(ProfileTab::ALL.len(), |columns| {
            for (ui, tab) in columns.iter_mut().zip(ProfileTab::ALL) {
                ui.vertical_centered(|ui| {
                    let selected = self.profile_tab == tab;
                    let text = egui::RichText::new(tab.title()).size(theme::FONT_BODY).color(
                        if selected {
                            theme::ACCENT
                        } else {
                            theme::TEXT_SECONDARY
                        },
                    );
                    if ui.add(egui::Button::new(text).frame(false)).clicked() && !selected {
                        debug!(tab = tab.title(), "Profile tab selected");
                        self.profile_tab = tab;
                    }
                    if selected {
                        let rect = ui.min_rect();
                        ui.painter().hline(
                            rect.x_range(),
                            rect.bottom() + 2.0,
                            egui::Stroke::new(theme::STROKE_THICK, theme::ACCENT),
                        );
                    }
                });
            }
        });
        ui.separator();
        ui.add_space(theme::SPACING_XL);

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(self.profile_tab.placeholder())
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            );
        });
    }
}
