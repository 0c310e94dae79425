//! # Dashboard Configuration
//!
//! Settings for the browser bundle. There is no runtime environment in the
//! browser, so values are compiled in and shared through Leptos context.

use log::Level;
use tracker_domain::MapViewConfig;

const MAP_BACKGROUND_URL: &str = "https://images.unsplash.com/photo-1713098965471-d324f294a71d?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Simulated round trip of the login call
    pub login_delay_ms: u32,

    /// How long a toast stays on screen
    pub toast_duration_ms: u32,

    /// Older toasts are dropped beyond this many
    pub max_visible_toasts: usize,

    /// Static background picture for the tracking map
    pub map_background_url: String,

    /// Zoom step, bounds and defaults
    pub map: MapViewConfig,

    /// Console log level
    pub log_level: Level,
}

impl Config {
    pub fn new() -> Self {
        Self {
            login_delay_ms: 1500,
            toast_duration_ms: 4000,
            max_visible_toasts: 3,
            map_background_url: MAP_BACKGROUND_URL.to_string(),
            map: MapViewConfig::default(),
            log_level: if cfg!(debug_assertions) {
                Level::Debug
            } else {
                Level::Info
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
