//! Skychart: an observer-relative sky chart engine
//!
//! This crate turns catalog positions of stars and planets into an
//! interactive "what's up tonight" chart: it computes altitude/azimuth for an
//! observer, projects the visible hemisphere stereographically, and keeps the
//! pan/zoom view and pointer hit-testing in sync with what was drawn.
//!
//! The usual entry point is [`chart::SkyChart`], which owns the view and
//! interaction state for a single chart and draws onto any
//! [`render::Canvas`].

use thiserror::Error;

pub mod catalogs;
pub mod celestial;
pub mod chart;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod events;
pub mod interaction;
pub mod observer;
pub mod planetlib;
pub mod projection;
pub mod render;
pub mod time;
pub mod view;

// Re-export commonly used types
pub use catalogs::Catalog;
pub use celestial::{CelestialBody, CelestialObject};
pub use chart::SkyChart;
pub use config::ChartConfig;
pub use coordinates::{Equatorial, GeoLocation, Horizontal};
pub use observer::ObserverContext;

/// Main error type for the skychart library
#[derive(Debug, Error)]
pub enum SkychartError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Object not found: {0}")]
    BodyNotFound(String),
}

/// Result type for skychart operations
pub type Result<T> = std::result::Result<T, SkychartError>;
