//! Chart configuration
//!
//! Every knob has a default matching the stock chart, so an empty JSON object
//! is a valid configuration file.

use crate::constants::{
    BRIGHT_STAR_MAGNITUDE, FALLBACK_LATITUDE, FALLBACK_LONGITUDE, HIT_RADIUS_PX, WHEEL_ZOOM_IN,
    WHEEL_ZOOM_OUT, ZOOM_MAX, ZOOM_MIN,
};
use crate::coordinates::GeoLocation;
use crate::{Result, SkychartError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which body sets the renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerToggles {
    pub stars: bool,
    pub constellations: bool,
    pub planets: bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            stars: true,
            constellations: true,
            planets: true,
        }
    }
}

/// A toggleable body set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Stars,
    Constellations,
    Planets,
}

impl LayerToggles {
    pub fn is_enabled(&self, layer: Layer) -> bool {
        match layer {
            Layer::Stars => self.stars,
            Layer::Constellations => self.constellations,
            Layer::Planets => self.planets,
        }
    }

    pub fn set(&mut self, layer: Layer, enabled: bool) {
        match layer {
            Layer::Stars => self.stars = enabled,
            Layer::Constellations => self.constellations = enabled,
            Layer::Planets => self.planets = enabled,
        }
    }
}

/// Colour tokens used by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub grid: String,
    pub horizon: String,
    pub cardinal_label: String,
    pub constellation: String,
    pub star_label: String,
    pub overlay_text: String,
    pub button: String,
    pub tooltip_background: String,
    pub tooltip_text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#05070f".to_string(),
            grid: "#1c2540".to_string(),
            horizon: "#3a4a78".to_string(),
            cardinal_label: "#8fa3d9".to_string(),
            constellation: "#2f5d8a".to_string(),
            star_label: "#c8d4f0".to_string(),
            overlay_text: "#dfe6ff".to_string(),
            button: "#26304f".to_string(),
            tooltip_background: "#111a33".to_string(),
            tooltip_text: "#ffffff".to_string(),
        }
    }
}

/// Configuration for a sky chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Smallest zoom factor
    pub zoom_min: f64,
    /// Largest zoom factor
    pub zoom_max: f64,
    /// Zoom multiplier for a wheel step with negative delta
    pub wheel_zoom_in: f64,
    /// Zoom multiplier for a wheel step with positive delta
    pub wheel_zoom_out: f64,
    /// Hit-test radius in chart-space pixels
    pub hit_radius: f64,
    /// Stars brighter than this get a glow and a name label
    pub bright_star_magnitude: f64,
    /// Altitudes (degrees) of the grid rings
    pub grid_altitudes: Vec<f64>,
    pub layers: LayerToggles,
    pub theme: Theme,
    /// Where the observer is assumed to be when no location is supplied
    pub fallback_location: GeoLocation,
    /// Half-width of the "visible near this instant" event window, in hours
    pub event_window_hours: f64,
    /// Maximum number of events in the side list
    pub max_listed_events: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            wheel_zoom_in: WHEEL_ZOOM_IN,
            wheel_zoom_out: WHEEL_ZOOM_OUT,
            hit_radius: HIT_RADIUS_PX,
            bright_star_magnitude: BRIGHT_STAR_MAGNITUDE,
            grid_altitudes: vec![30.0, 60.0],
            layers: LayerToggles::default(),
            theme: Theme::default(),
            fallback_location: GeoLocation::new(FALLBACK_LATITUDE, FALLBACK_LONGITUDE),
            event_window_hours: 24.0,
            max_listed_events: 5,
        }
    }
}

impl ChartConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zoom clamp range
    pub fn with_zoom_range(mut self, min: f64, max: f64) -> Self {
        self.zoom_min = min;
        self.zoom_max = max;
        self
    }

    /// Set the hit-test radius in chart-space pixels
    pub fn with_hit_radius(mut self, radius: f64) -> Self {
        self.hit_radius = radius;
        self
    }

    /// Set which body sets are drawn
    pub fn with_layers(mut self, layers: LayerToggles) -> Self {
        self.layers = layers;
        self
    }

    /// Set the fallback observer location
    pub fn with_fallback_location(mut self, location: GeoLocation) -> Self {
        self.fallback_location = location;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Check the configuration for values the chart cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.zoom_min > 0.0) {
            return Err(SkychartError::ConfigError(format!(
                "zoom_min must be positive, got {}",
                self.zoom_min
            )));
        }
        if !(self.zoom_min <= self.zoom_max) {
            return Err(SkychartError::ConfigError(format!(
                "zoom_min ({}) exceeds zoom_max ({})",
                self.zoom_min, self.zoom_max
            )));
        }
        if !(self.wheel_zoom_in > 0.0 && self.wheel_zoom_out > 0.0) {
            return Err(SkychartError::ConfigError(
                "wheel zoom factors must be positive".to_string(),
            ));
        }
        if !(self.hit_radius > 0.0) {
            return Err(SkychartError::ConfigError(format!(
                "hit_radius must be positive, got {}",
                self.hit_radius
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ChartConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents).map_err(|e| {
            warn!("Rejected config {}: {}", path.as_ref().display(), e);
            e
        })
    }
}
