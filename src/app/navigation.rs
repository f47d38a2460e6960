//! Bottom navigation bar shown on every screen

use super::App;
use crate::router::Route;
use crate::theme;
use crate::ui::components::nav_button;
use eframe::egui;
use egui_phosphor::regular as icons;

const NAV_ITEMS: [(&str, &str, Route); 3] = [
    (icons::CALENDAR, "Events", Route::EventsScreen),
    (icons::COMPASS, "Discover", Route::MainScreen),
    (icons::USER, "Profile", Route::ProfileScreen),
];

impl App {
    pub(crate) fn render_navbar(&self, ctx: &egui::Context) -> Option<Route> {
        let mut next = None;
        egui::TopBottomPanel::bottom("navbar")
            .exact_height(theme::NAVBAR_HEIGHT)
            .show_separator_line(false)
            .frame(theme::navbar_frame())
            .show(ctx, |ui| {
                ui.columns(NAV_ITEMS.len(), |columns| {
                    for (ui, (icon, label, route)) in columns.iter_mut().zip(NAV_ITEMS) {
                        if nav_button(ui, icon, label, self.tab_of_route() == route).clicked() {
                            next = Some(route);
                        }
                    }
                });
            });
        next
    }

    /// Navbar entry highlighted for the current route. Feed sub-screens
    /// highlight Discover.
    fn tab_of_route(&self) -> Route {
        match self.route {
            Route::EventsScreen => Route::EventsScreen,
            Route::ProfileScreen => Route::ProfileScreen,
            Route::MainScreen | Route::FilterActivities | Route::VenueDetails(_) => Route::MainScreen,
        }
    }
}
