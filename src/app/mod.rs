//! App module - contains the main application state and logic

mod carousel;
mod details;
mod events;
mod feed;
mod filters;
mod navigation;
mod profile;

pub use carousel::DetailsMedia;
pub use feed::FeedState;
pub use filters::FilterScreen;

use crate::content::{sample_events, sample_venues};
use crate::filters::FilterState;
use crate::router::Route;
use crate::settings::Settings;
use crate::store::KeyValueStore;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use tracing::{error, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) route: Route,
    pub(crate) venues: Vec<Venue>,
    pub(crate) events: Vec<Event>,
    // Filters
    pub(crate) store: KeyValueStore,
    pub(crate) filters: FilterState,
    pub(crate) filter_screen: Option<FilterScreen>,
    // Screens
    pub(crate) feed: FeedState,
    pub(crate) details_media: DetailsMedia,
    pub(crate) event_query: String,
    pub(crate) profile_tab: ProfileTab,
    pub(crate) missing_venue_logged: bool,
    // Settings
    pub(crate) start_muted: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        store: KeyValueStore,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self::with_state(settings, store, data_dir)
    }

    /// Everything except the egui context setup
    pub(crate) fn with_state(settings: Settings, store: KeyValueStore, data_dir: PathBuf) -> Self {
        let venues = sample_venues();
        let filters = FilterState::load(&store);
        info!(
            venues = venues.len(),
            store = %store.path().display(),
            "Content loaded"
        );

        let mut app = Self {
            route: Route::MainScreen,
            feed: FeedState::new(venues.len(), settings.start_muted),
            venues,
            events: sample_events(),
            store,
            filters,
            filter_screen: None,
            details_media: DetailsMedia::default(),
            event_query: String::new(),
            profile_tab: ProfileTab::default(),
            missing_venue_logged: false,
            start_muted: settings.start_muted,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };
        app.navigate(settings.start_route());
        app
    }

    /// Switches screens. There is no back stack: the screen being left
    /// drops any transient state.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        info!(from = %self.route, to = %route, "Navigate");

        if let Some(mut screen) = self.filter_screen.take() {
            screen.cancel_drags();
        }
        if self.route == Route::MainScreen {
            self.feed.cancel_gesture();
        }
        self.missing_venue_logged = false;
        self.details_media = DetailsMedia::default();

        if route == Route::FilterActivities {
            self.filter_screen = Some(FilterScreen::new(&self.filters));
        }
        self.route = route;
    }

    /// Persists the applied ranges and returns to the feed.
    pub fn apply_filters(&mut self, applied: FilterState) {
        self.filters = applied;
        applied.save(&mut self.store);
        match self.store.flush() {
            Ok(()) => info!(
                people = ?applied.people,
                time = ?applied.time,
                cost = ?applied.cost,
                distance = ?applied.distance,
                "Filters applied"
            ),
            Err(e) => error!(error = %e, "Failed to save filters"),
        }
        self.navigate(Route::MainScreen);
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            last_route: self.route.to_string(),
            start_muted: self.start_muted,
        };
        settings.save(&self.data_dir);
    }

    /// Draws the current route's screen, returning the next destination if
    /// the user picked one.
    pub(crate) fn render_screen(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        match self.route {
            Route::MainScreen => self.render_feed(ui),
            Route::EventsScreen => {
                self.render_events(ui);
                None
            }
            Route::ProfileScreen => {
                self.render_profile(ui);
                None
            }
            Route::VenueDetails(id) => self.render_venue_details(ui, id),
            Route::FilterActivities => {
                let screen = self
                    .filter_screen
                    .get_or_insert_with(|| FilterScreen::new(&self.filters));
                let applied = screen.ui(ui)?;
                self.apply_filters(applied);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::SliderRange;

    fn test_app(dir: &tempfile::TempDir) -> App {
        let store = KeyValueStore::open(dir.path().join("filters.json")).unwrap();
        App::with_state(Settings::default(), store, dir.path().to_path_buf())
    }

    #[test]
    fn starts_on_the_feed() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);
        assert_eq!(app.route, Route::MainScreen);
        assert!(app.filter_screen.is_none());
    }

    #[test]
    fn filter_screen_lives_only_while_shown() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.navigate(Route::FilterActivities);
        assert!(app.filter_screen.is_some());
        app.navigate(Route::ProfileScreen);
        assert!(app.filter_screen.is_none());
    }

    #[test]
    fn details_media_resets_between_venues() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.navigate(Route::VenueDetails(3));
        app.details_media.step(1, 3);
        app.details_media.open_viewer(3);
        app.navigate(Route::VenueDetails(1));
        assert_eq!(app.details_media, DetailsMedia::default());
    }

    #[test]
    fn apply_persists_and_returns_to_feed() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.navigate(Route::FilterActivities);

        let mut applied = FilterState::default();
        applied.people = SliderRange::new(2.0, 3.0);
        applied.cost = SliderRange::new(0.0, 1.0);
        app.apply_filters(applied);

        assert_eq!(app.route, Route::MainScreen);
        assert!(app.filter_screen.is_none());
        assert!(!app.store.is_dirty());

        // A fresh launch sees the applied ranges
        let reopened = test_app(&dir);
        assert_eq!(reopened.filters, applied);
    }

    #[test]
    fn saved_route_is_restored() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::open(dir.path().join("filters.json")).unwrap();
        let settings = Settings {
            last_route: "eventsScreen".into(),
            ..Default::default()
        };
        let app = App::with_state(settings, store, dir.path().to_path_buf());
        assert_eq!(app.route, Route::EventsScreen);
    }
}
