//! Frame rendering
//!
//! One call to [`SceneRenderer::render`] draws a complete frame: background,
//! the altitude grid and horizon under the pan/zoom transform, the enabled
//! body layers, and finally the screen-space overlays. The projected position
//! of every body that was drawn is written to the renderer's [`SkyScene`].

use crate::catalogs::Catalog;
use crate::celestial::{CelestialBody, CelestialObject};
use crate::config::ChartConfig;
use crate::coordinates::horizontal::horizontal_from_sidereal;
use crate::coordinates::Horizontal;
use crate::observer::ObserverContext;
use crate::projection::{point_at, project_horizontal, radius_for_altitude, Viewport};
use crate::render::overlay::{tooltip_lines, ZoomButtons};
use crate::render::{BodyCategory, Canvas, ProjectedBody, SkyScene};
use crate::time::{julian_day, local_sidereal_degrees};
use crate::view::ViewTransform;
use log::{debug, warn};
use nalgebra::{Point2, Vector2};
use std::collections::HashMap;

const PLANET_RADIUS: f64 = 4.5;
const LABEL_SIZE: f64 = 11.0;
const CARDINAL_SIZE: f64 = 14.0;
const CARDINAL_INSET: f64 = 14.0;
const CARDINALS: [(f64, &str); 4] = [(0.0, "N"), (90.0, "E"), (180.0, "S"), (270.0, "W")];

/// Dot radius for a star of the given magnitude
pub fn star_radius(magnitude: f64) -> f64 {
    (4.0 - 0.6 * magnitude).clamp(1.0, 5.0)
}

/// Dot opacity for a star of the given magnitude
pub fn star_alpha(magnitude: f64) -> f64 {
    (1.0 - 0.1 * magnitude).clamp(0.4, 1.0)
}

/// Everything a frame is drawn from
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    pub catalog: &'a Catalog,
    pub observer: &'a ObserverContext,
    pub view: &'a ViewTransform,
    pub config: &'a ChartConfig,
    /// Name of the body under the pointer, for the tooltip
    pub hovered: Option<&'a str>,
}

/// Counters for the most recent frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub stars: usize,
    pub planets: usize,
    pub constellation_segments: usize,
    pub below_horizon: usize,
    pub skipped: usize,
}

/// Draws frames and keeps the projected positions of the last one
#[derive(Debug, Default)]
pub struct SceneRenderer {
    scene: SkyScene,
    last_stats: FrameStats,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions recorded by the last frame
    pub fn scene(&self) -> &SkyScene {
        &self.scene
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Draw a full frame
    ///
    /// With no surface nothing is drawn, the previous scene is discarded and
    /// false is returned.
    pub fn render(&mut self, canvas: Option<&mut dyn Canvas>, frame: &Frame<'_>) -> bool {
        let canvas = match canvas {
            Some(canvas) => canvas,
            None => {
                warn!("No drawing surface available, skipping frame");
                self.scene.clear();
                self.last_stats = FrameStats::default();
                return false;
            }
        };

        let viewport = canvas.viewport();
        self.scene.begin_frame(viewport);
        let mut stats = FrameStats::default();
        let theme = &frame.config.theme;
        let layers = frame.config.layers;
        let center = viewport.center();
        let pan = frame.view.pan();

        canvas.clear(&theme.background);
        canvas.save();
        canvas.translate(center.x + pan.x, center.y + pan.y);
        canvas.scale(frame.view.zoom());
        canvas.translate(-center.x, -center.y);

        draw_grid(canvas, &viewport, frame.config);

        let instant = frame.observer.instant;
        let latitude = frame.observer.latitude();
        let lst = local_sidereal_degrees(julian_day(&instant), frame.observer.longitude());
        let locate = |body: &CelestialBody, stats: &mut FrameStats| {
            if !body.is_drawable() {
                debug!("Skipping malformed body {:?}", body.name);
                stats.skipped += 1;
                return None;
            }
            let horizontal = horizontal_from_sidereal(&body.position_at(&instant), latitude, lst);
            match project_horizontal(&horizontal, &viewport) {
                Some(point) => Some((horizontal, point)),
                None => {
                    stats.below_horizon += 1;
                    None
                }
            }
        };

        // Stars are located when either layer needs them; figures are drawn first
        // so the dots sit on top of the lines.
        let mut visible_stars: Vec<(&CelestialBody, Horizontal, Point2<f64>)> = Vec::new();
        if layers.stars || layers.constellations {
            for body in frame.catalog.stars() {
                if let Some((horizontal, point)) = locate(body, &mut stats) {
                    visible_stars.push((body, horizontal, point));
                }
            }
        }

        if layers.constellations {
            let points: HashMap<&str, Point2<f64>> = visible_stars
                .iter()
                .map(|(body, _, point)| (body.name.as_str(), *point))
                .collect();
            for segment in frame.catalog.constellation_lines() {
                if let (Some(from), Some(to)) =
                    (points.get(segment.from.as_str()), points.get(segment.to.as_str()))
                {
                    canvas.line(*from, *to, &theme.constellation, 1.0);
                    stats.constellation_segments += 1;
                }
            }
        }

        if layers.stars {
            for (body, horizontal, point) in &visible_stars {
                let radius = star_radius(body.magnitude);
                let bright = body.magnitude < frame.config.bright_star_magnitude;
                if bright {
                    canvas.glow(*point, radius * 3.0, &body.color);
                }
                canvas.fill_circle(*point, radius, &body.color, star_alpha(body.magnitude));
                if bright {
                    let at = *point + Vector2::new(radius + 3.0, -radius - 3.0);
                    canvas.text(at, &body.name, &theme.star_label, LABEL_SIZE);
                }
                self.scene.insert(ProjectedBody {
                    name: body.name.clone(),
                    category: BodyCategory::Star,
                    chart: *point,
                    horizontal: *horizontal,
                    magnitude: body.magnitude,
                });
                stats.stars += 1;
            }
        }

        if layers.planets {
            for body in frame.catalog.planets() {
                let Some((horizontal, point)) = locate(body, &mut stats) else {
                    continue;
                };
                canvas.fill_circle(point, PLANET_RADIUS, &body.color, 1.0);
                let at = point + Vector2::new(PLANET_RADIUS + 3.0, -PLANET_RADIUS - 3.0);
                canvas.text(at, &body.name, &body.color, LABEL_SIZE);
                self.scene.insert(ProjectedBody {
                    name: body.name.clone(),
                    category: BodyCategory::Planet,
                    chart: point,
                    horizontal,
                    magnitude: body.magnitude,
                });
                stats.planets += 1;
            }
        }

        canvas.restore();
        self.draw_overlays(canvas, &viewport, frame);

        debug!(
            "Frame: {} stars, {} planets, {} figure segments ({} below horizon, {} skipped)",
            stats.stars,
            stats.planets,
            stats.constellation_segments,
            stats.below_horizon,
            stats.skipped
        );
        self.last_stats = stats;
        true
    }

    fn draw_overlays(&self, canvas: &mut dyn Canvas, viewport: &Viewport, frame: &Frame<'_>) {
        let theme = &frame.config.theme;

        canvas.text(
            Point2::new(12.0, 20.0),
            &format!("{}%", frame.view.zoom_percent()),
            &theme.overlay_text,
            12.0,
        );

        if !canvas.shows_controls() {
            return;
        }

        for (button, rect) in ZoomButtons::layout(viewport) {
            canvas.fill_rect(rect.origin, rect.width, rect.height, &theme.button, 0.85);
            let at = rect.center() + Vector2::new(-4.0, 4.0);
            canvas.text(at, button.label(), &theme.overlay_text, 14.0);
        }

        let hovered = frame.hovered.and_then(|name| self.scene.get(name));
        if let Some(body) = hovered {
            let anchor = frame.view.to_screen_space(body.chart, viewport);
            let lines = tooltip_lines(body);
            let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            let origin = anchor + Vector2::new(12.0, -34.0);
            canvas.fill_rect(
                origin,
                widest as f64 * 7.0 + 12.0,
                36.0,
                &theme.tooltip_background,
                0.9,
            );
            for (i, line) in lines.iter().enumerate() {
                let at = origin + Vector2::new(6.0, 14.0 + 16.0 * i as f64);
                canvas.text(at, line, &theme.tooltip_text, LABEL_SIZE);
            }
        }
    }
}

fn draw_grid(canvas: &mut dyn Canvas, viewport: &Viewport, config: &ChartConfig) {
    let theme = &config.theme;
    let center = viewport.center();
    let horizon = viewport.horizon_radius();

    for &altitude in &config.grid_altitudes {
        if altitude > 0.0 && altitude < 90.0 {
            canvas.stroke_circle(center, radius_for_altitude(altitude, viewport), &theme.grid, 1.0);
        }
    }
    for (azimuth, _) in CARDINALS {
        canvas.line(center, point_at(azimuth, horizon, viewport), &theme.grid, 1.0);
    }
    canvas.stroke_circle(center, horizon, &theme.horizon, 2.0);
    for (azimuth, label) in CARDINALS {
        let at = point_at(azimuth, horizon - CARDINAL_INSET, viewport);
        canvas.text(at, label, &theme.cardinal_label, CARDINAL_SIZE);
    }
}
