//! Application constants and configuration

pub const APP_NAME: &str = "Spotter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory under the platform data dir holding settings, filters and logs
pub const DATA_DIR_NAME: &str = "Spotter";
pub const SETTINGS_FILE: &str = "settings.json";
pub const FILTERS_FILE: &str = "filters.json";
pub const LOG_FILE_PREFIX: &str = "spotter.log";
pub const DEFAULT_LOG_FILTER: &str = "info,spotter=debug";

/// Holding media longer than this pauses playback until release
pub const LONG_PRESS_SECS: f64 = 1.0;

pub const ACTIVITY_GRID_COLUMNS: usize = 5;

/// Pointer travel on media before a press counts as a swipe instead of a tap
pub const SWIPE_SLOP: f32 = 10.0;
/// Minimum travel along the dominant axis for a swipe to change pages
pub const SWIPE_DISTANCE: f32 = 48.0;

/// Accumulated wheel/trackpad delta that flips one page
pub const WHEEL_PAGE_DELTA: f32 = 50.0;
/// Scroll input is ignored for this long after a flip
pub const WHEEL_COOLDOWN_SECS: f64 = 0.4;
