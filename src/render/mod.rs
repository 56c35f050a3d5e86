//! Rendering of the sky chart
//!
//! The renderer draws through the [`Canvas`] trait, which mirrors the small
//! subset of a 2D canvas API the chart needs: an affine transform stack,
//! circles, lines, rectangles and text. Anything that can provide those
//! (a browser canvas behind bindings, an image buffer, a terminal) can host a
//! chart.

pub mod ascii;
pub mod overlay;
pub mod recording;
pub mod renderer;
pub mod scene;

pub use ascii::AsciiCanvas;
pub use overlay::{ChartButton, Rect, ZoomButtons};
pub use recording::{DrawCommand, RecordingCanvas};
pub use renderer::{star_alpha, star_radius, Frame, FrameStats, SceneRenderer};
pub use scene::{BodyCategory, ProjectedBody, SkyScene};

use crate::projection::Viewport;
use nalgebra::{Point2, Vector2};

/// A 2D drawing surface
///
/// Coordinates passed to drawing calls are transformed by the current
/// translate/scale state, as on an HTML canvas. `save` and `restore` push and
/// pop that state.
pub trait Canvas {
    /// Size of the surface in pixels
    fn viewport(&self) -> Viewport;

    /// Whether pointer controls (zoom buttons, hover tooltip) make sense here
    fn shows_controls(&self) -> bool {
        true
    }

    /// Fill the whole surface, ignoring the current transform
    fn clear(&mut self, color: &str);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn scale(&mut self, factor: f64);

    fn stroke_circle(&mut self, center: Point2<f64>, radius: f64, color: &str, line_width: f64);
    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, color: &str, alpha: f64);
    /// Soft radial glow fading from `color` at the centre to transparent at `radius`
    fn glow(&mut self, center: Point2<f64>, radius: f64, color: &str);
    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, color: &str, line_width: f64);
    fn fill_rect(&mut self, origin: Point2<f64>, width: f64, height: f64, color: &str, alpha: f64);
    fn text(&mut self, at: Point2<f64>, text: &str, color: &str, size: f64);
}

/// Uniform scale followed by a translation
///
/// Canvas implementations use this to track the transform stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub scale: f64,
    pub offset: Vector2<f64>,
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Vector2::zeros(),
        }
    }

    /// Compose a translation applied before this transform
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.offset += Vector2::new(dx, dy) * self.scale;
    }

    /// Compose a scale applied before this transform
    pub fn scale(&mut self, factor: f64) {
        self.scale *= factor;
    }

    pub fn apply(&self, p: Point2<f64>) -> Point2<f64> {
        Point2::from(p.coords * self.scale + self.offset)
    }

    pub fn apply_length(&self, length: f64) -> f64 {
        length * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_affine_matches_canvas_semantics() {
        // translate(c + pan) scale(z) translate(-c) maps chart to screen
        let (cx, cy, zoom, pan_x, pan_y) = (400.0, 300.0, 2.0, 15.0, -5.0);
        let mut t = Affine::identity();
        t.translate(cx + pan_x, cy + pan_y);
        t.scale(zoom);
        t.translate(-cx, -cy);

        let p = t.apply(Point2::new(410.0, 290.0));
        assert_abs_diff_eq!(p.x, 400.0 + 10.0 * zoom + pan_x, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 300.0 - 10.0 * zoom + pan_y, epsilon = 1e-12);
        assert_abs_diff_eq!(t.apply_length(3.0), 6.0, epsilon = 1e-12);
    }
}
