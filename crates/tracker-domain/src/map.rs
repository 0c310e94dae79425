//! Geographic points, screen projection and map view state.
//!
//! The map is a static picture, so "projection" is a plain linear mapping of
//! longitude/latitude onto percentages of the map box. It is illustrative,
//! not cartographic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

// =============================================================================
// GEOGRAPHY
// =============================================================================

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point, rejecting anything outside [-90, 90] x [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates {
                lat: latitude,
                lon: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Position on the map box, in percent from the top-left corner
    #[must_use]
    pub fn project(&self) -> ScreenPoint {
        ScreenPoint {
            x: (self.longitude + 180.0) / 360.0 * 100.0,
            y: (90.0 - self.latitude) / 180.0 * 100.0,
        }
    }

    /// "lat, lng" with four decimals, as shown in the map info panel
    pub fn display(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// One recorded fix of the vehicle's past route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub position: GeoPoint,
    pub timestamp: DateTime<Utc>,
}

/// Point on the map box, both axes in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Project every trajectory point onto the map box, keeping order
pub fn project_trajectory(trajectory: &[TrajectoryPoint]) -> Vec<ScreenPoint> {
    trajectory.iter().map(|p| p.position.project()).collect()
}

/// SVG path data ("M x% y% L ...") through the points.
///
/// Returns `None` for fewer than two points since there is no line to draw.
pub fn polyline_path(points: &[ScreenPoint]) -> Option<String> {
    if points.len() < 2 {
        return None;
    }
    let segments: Vec<String> = points
        .iter()
        .map(|p| format!("{}% {}%", p.x, p.y))
        .collect();
    Some(format!("M {}", segments.join(" L ")))
}

// =============================================================================
// VIEW STATE
// =============================================================================

/// Zoom limits and defaults for the map view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapViewConfig {
    pub zoom_step: u16,
    pub min_zoom: u16,
    pub max_zoom: u16,
    pub default_zoom: u16,
    pub default_center: (u8, u8),
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            zoom_step: 25,
            min_zoom: 50,
            max_zoom: 200,
            default_zoom: 100,
            default_center: (50, 50),
        }
    }
}

/// Zoom percentage and center offset driving the map's CSS transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapView {
    pub zoom_pct: u16,
    pub center: (u8, u8),
    config: MapViewConfig,
}

impl MapView {
    pub fn new(config: MapViewConfig) -> Self {
        Self {
            zoom_pct: config.default_zoom,
            center: config.default_center,
            config,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom_pct = (self.zoom_pct + self.config.zoom_step).min(self.config.max_zoom);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_pct = self
            .zoom_pct
            .saturating_sub(self.config.zoom_step)
            .max(self.config.min_zoom);
    }

    /// Restore default zoom and center together
    pub fn reset(&mut self) {
        self.zoom_pct = self.config.default_zoom;
        self.center = self.config.default_center;
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom_pct < self.config.max_zoom
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom_pct > self.config.min_zoom
    }

    /// CSS `transform` value for the map layer
    pub fn css_transform(&self) -> String {
        let (cx, cy) = self.center;
        format!(
            "scale({}) translate({}%, {}%)",
            f64::from(self.zoom_pct) / 100.0,
            i16::from(cx) - 50,
            i16::from(cy) - 50
        )
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(MapViewConfig::default())
    }
}
