//! User settings stored as settings.json in the app data directory

use crate::constants::SETTINGS_FILE;
use crate::router::Route;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    /// Destination name shown on launch
    pub last_route: String,

    // Feed
    pub start_muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            last_route: Route::MainScreen.to_string(),
            start_muted: false,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Launch route. Venue details and the filter screen are transient, so
    /// only top-level tabs are restored.
    pub fn start_route(&self) -> Route {
        match self.last_route.parse() {
            Ok(route @ (Route::MainScreen | Route::EventsScreen | Route::ProfileScreen)) => route,
            Ok(_) => Route::MainScreen,
            Err(e) => {
                warn!(error = %e, "Ignoring saved route");
                Route::MainScreen
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(420.0),
            window_h: Some(860.0),
            last_route: "profileScreen".into(),
            start_muted: true,
            ..Default::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), r#"{"start_muted": true}"#).unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.start_muted);
        assert_eq!(settings.last_route, "mainScreen");
    }

    #[test]
    fn transient_routes_restart_on_the_feed() {
        let mut settings = Settings::default();
        settings.last_route = "eventsScreen".into();
        assert_eq!(settings.start_route(), Route::EventsScreen);
        settings.last_route = "venueDetails/2".into();
        assert_eq!(settings.start_route(), Route::MainScreen);
        settings.last_route = "nowhere".into();
        assert_eq!(settings.start_route(), Route::MainScreen);
    }
}
