//! Pan and zoom of the chart
//!
//! Positions are projected once per frame into chart space (unzoomed,
//! unpanned). Screen space is chart space scaled by `zoom` about the viewport
//! centre and then shifted by the pan offset:
//!
//! ```text
//! screen = (chart - center) * zoom + center + pan
//! chart  = (screen - pan - center) / zoom + center
//! ```

use crate::config::ChartConfig;
use crate::constants::{WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT, ZOOM_MAX, ZOOM_MIN};
use crate::projection::Viewport;
use nalgebra::{Point2, Vector2};

/// Anchor recorded when a drag begins
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    pointer: Point2<f64>,
    pan: Vector2<f64>,
}

/// Zoom factor and pan offset of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    zoom: f64,
    pan: Vector2<f64>,
    zoom_min: f64,
    zoom_max: f64,
    wheel_zoom_in: f64,
    wheel_zoom_out: f64,
    drag: Option<DragAnchor>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vector2::zeros(),
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            wheel_zoom_in: WHEEL_ZOOM_IN,
            wheel_zoom_out: WHEEL_ZOOM_OUT,
            drag: None,
        }
    }
}

impl ViewTransform {
    /// Create an identity view (zoom 1, no pan) with the default clamp range
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an identity view using the zoom settings from a config
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            zoom_min: config.zoom_min,
            zoom_max: config.zoom_max,
            wheel_zoom_in: config.wheel_zoom_in,
            wheel_zoom_out: config.wheel_zoom_out,
            ..Self::default()
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> Vector2<f64> {
        self.pan
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.zoom_min, self.zoom_max)
    }

    /// Zoom to `new_zoom` (clamped) keeping the screen point `pointer` fixed
    ///
    /// The pointer is taken relative to the viewport centre, the origin of the
    /// zoom. Returns false when the clamped zoom equals the current one, in
    /// which case nothing changes.
    pub fn zoom_about(&mut self, new_zoom: f64, pointer: Point2<f64>, viewport: &Viewport) -> bool {
        let new_zoom = self.clamp_zoom(new_zoom);
        if new_zoom == self.zoom {
            return false;
        }
        let ratio = new_zoom / self.zoom;
        let relative = pointer - viewport.center();
        self.pan = relative - (relative - self.pan) * ratio;
        self.zoom = new_zoom;
        true
    }

    /// Apply a wheel step at a screen position
    ///
    /// Positive `delta_y` (scrolling away) zooms out, anything else zooms in.
    pub fn apply_wheel(
        &mut self,
        delta_y: f64,
        pointer_x: f64,
        pointer_y: f64,
        viewport: &Viewport,
    ) -> bool {
        let factor = if delta_y > 0.0 {
            self.wheel_zoom_out
        } else {
            self.wheel_zoom_in
        };
        self.zoom_about(self.zoom * factor, Point2::new(pointer_x, pointer_y), viewport)
    }

    /// Zoom in one wheel step about the viewport centre
    pub fn zoom_in(&mut self, viewport: &Viewport) -> bool {
        self.zoom_about(self.zoom * self.wheel_zoom_in, viewport.center(), viewport)
    }

    /// Zoom out one wheel step about the viewport centre
    pub fn zoom_out(&mut self, viewport: &Viewport) -> bool {
        self.zoom_about(self.zoom * self.wheel_zoom_out, viewport.center(), viewport)
    }

    /// Start a drag at a screen position
    pub fn begin_drag(&mut self, screen_x: f64, screen_y: f64) {
        self.drag = Some(DragAnchor {
            pointer: Point2::new(screen_x, screen_y),
            pan: self.pan,
        });
    }

    /// Move an active drag; returns false if no drag is in progress
    pub fn update_drag(&mut self, screen_x: f64, screen_y: f64) -> bool {
        match self.drag {
            Some(anchor) => {
                self.pan = anchor.pan + (Point2::new(screen_x, screen_y) - anchor.pointer);
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Back to zoom 1 and no pan
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Vector2::zeros();
        self.drag = None;
    }

    /// Convert a screen point to chart space
    pub fn to_chart_space(&self, screen: Point2<f64>, viewport: &Viewport) -> Point2<f64> {
        let center = viewport.center();
        center + (screen - center - self.pan) / self.zoom
    }

    /// Convert a chart-space point to the screen
    pub fn to_screen_space(&self, chart: Point2<f64>, viewport: &Viewport) -> Point2<f64> {
        let center = viewport.center();
        center + (chart - center) * self.zoom + self.pan
    }

    /// Zoom as a whole percentage, as shown in the overlay
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}
