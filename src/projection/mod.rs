//! Stereographic projection of the visible hemisphere
//!
//! The zenith sits at the viewport centre and the horizon on a circle of
//! radius `min(width, height) / 2`. North (azimuth 0) points up and azimuth
//! increases clockwise, so east is on the right as on a map held overhead.

use crate::constants::DEG2RAD;
use crate::coordinates::Horizontal;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the horizon circle
    pub fn horizon_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }
}

/// Distance from the chart centre for an altitude, in pixels
///
/// Zero at the zenith, the horizon radius at altitude 0. This is the true
/// stereographic radius, which uses the half angle `tan((90 - alt) / 2)`.
/// The full-angle `tan(90 - alt)` grows without bound at the horizon and
/// would not put altitude 0 on the edge circle, so do not switch to it.
pub fn radius_for_altitude(altitude_deg: f64, viewport: &Viewport) -> f64 {
    viewport.horizon_radius() * ((90.0 - altitude_deg) * DEG2RAD / 2.0).tan()
}

/// Point on the chart for an azimuth at a given distance from the centre
pub fn point_at(azimuth_deg: f64, radius: f64, viewport: &Viewport) -> Point2<f64> {
    let center = viewport.center();
    let azimuth = azimuth_deg * DEG2RAD;
    Point2::new(
        center.x + radius * azimuth.sin(),
        center.y - radius * azimuth.cos(),
    )
}

/// Project an altitude/azimuth into chart space
///
/// Returns `None` below the horizon. Altitude exactly zero is on the chart.
pub fn project(altitude_deg: f64, azimuth_deg: f64, viewport: &Viewport) -> Option<Point2<f64>> {
    if altitude_deg < 0.0 {
        return None;
    }
    Some(point_at(
        azimuth_deg,
        radius_for_altitude(altitude_deg, viewport),
        viewport,
    ))
}

/// Project horizontal coordinates into chart space
pub fn project_horizontal(horizontal: &Horizontal, viewport: &Viewport) -> Option<Point2<f64>> {
    project(horizontal.altitude, horizontal.azimuth, viewport)
}
