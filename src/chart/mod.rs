//! The sky chart facade
//!
//! [`SkyChart`] ties the catalog, observer, view transform, renderer and
//! interaction controller together. Hosts feed it pointer events and a drawing
//! surface; it answers with "redraw needed" flags and body information.

use crate::catalogs::{Catalog, DEFAULT_CATALOG};
use crate::celestial::CelestialObject;
use crate::config::{ChartConfig, Layer};
use crate::coordinates::{equatorial_to_horizontal, GeoLocation, Horizontal};
use crate::events::{events_near, EventSource, SkyEvent};
use crate::interaction::{BodyInfo, InfoPanel, InteractionController, PointerEvent};
use crate::observer::{FixedObserver, ObserverContext, ObserverSource};
use crate::render::{Canvas, Frame, FrameStats, SceneRenderer};
use crate::view::ViewTransform;
use crate::{Result, SkychartError};
use chrono::{DateTime, Utc};
use log::{debug, info};
use nalgebra::Point2;

/// An interactive horizon-centred chart of the sky
pub struct SkyChart {
    config: ChartConfig,
    catalog: Catalog,
    observer: ObserverContext,
    view: ViewTransform,
    controller: InteractionController,
    renderer: SceneRenderer,
    events: Vec<SkyEvent>,
}

impl SkyChart {
    /// Chart of the built-in catalog for the fallback location at the current time
    pub fn new(config: ChartConfig) -> Result<Self> {
        Self::with_catalog(config, DEFAULT_CATALOG.clone())
    }

    pub fn with_catalog(config: ChartConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        let observer = ObserverContext::resolve(&FixedObserver::default(), config.fallback_location);
        info!(
            "Sky chart with {} bodies and {} figure segments",
            catalog.len(),
            catalog.constellation_lines().len()
        );
        Ok(Self {
            view: ViewTransform::from_config(&config),
            controller: InteractionController::from_config(&config),
            renderer: SceneRenderer::new(),
            events: Vec::new(),
            config,
            catalog,
            observer,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn observer(&self) -> &ObserverContext {
        &self.observer
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Replace the catalog; hover and selection refer to the old bodies so both are dropped
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.controller.clear();
    }

    pub fn set_observer(&mut self, observer: ObserverContext) {
        debug!(
            "Observer at ({:.3}, {:.3}) for {}",
            observer.latitude(),
            observer.longitude(),
            observer.instant
        );
        self.observer = observer;
    }

    /// Pull location and time from a collaborator, falling back where it has none
    pub fn update_observer(&mut self, source: &dyn ObserverSource) {
        self.set_observer(ObserverContext::resolve(source, self.config.fallback_location));
    }

    pub fn set_instant(&mut self, instant: DateTime<Utc>) {
        self.set_observer(ObserverContext::new(self.observer.location, instant));
    }

    pub fn set_location(&mut self, location: GeoLocation) {
        self.set_observer(ObserverContext::new(location, self.observer.instant));
    }

    pub fn set_layer(&mut self, layer: Layer, enabled: bool) {
        self.config.layers.set(layer, enabled);
    }

    /// Draw a frame; see [`SceneRenderer::render`]
    pub fn render(&mut self, canvas: Option<&mut dyn Canvas>) -> bool {
        let frame = Frame {
            catalog: &self.catalog,
            observer: &self.observer,
            view: &self.view,
            config: &self.config,
            hovered: self.controller.hovered(),
        };
        self.renderer.render(canvas, &frame)
    }

    pub fn last_frame_stats(&self) -> FrameStats {
        self.renderer.last_stats()
    }

    /// Route a pointer event; returns true when a redraw is needed
    pub fn handle_event(&mut self, event: PointerEvent, panel: &mut dyn InfoPanel) -> bool {
        self.controller
            .handle(event, &mut self.view, self.renderer.scene(), panel)
    }

    /// Body drawn nearest a screen point in the last frame, within the hit radius
    pub fn find_object_at(&self, screen_x: f64, screen_y: f64) -> Option<BodyInfo> {
        let scene = self.renderer.scene();
        let viewport = scene.viewport()?;
        let chart = self
            .view
            .to_chart_space(Point2::new(screen_x, screen_y), &viewport);
        scene
            .find_object_at(chart, self.config.hit_radius)
            .map(BodyInfo::from)
    }

    pub fn zoom_in(&mut self) -> bool {
        match self.renderer.scene().viewport() {
            Some(viewport) => self.view.zoom_in(&viewport),
            None => false,
        }
    }

    pub fn zoom_out(&mut self) -> bool {
        match self.renderer.scene().viewport() {
            Some(viewport) => self.view.zoom_out(&viewport),
            None => false,
        }
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Selected body as drawn in the last frame
    pub fn selected(&self) -> Option<BodyInfo> {
        let name = self.controller.selected()?;
        self.renderer.scene().get(name).map(BodyInfo::from)
    }

    /// Hovered body as drawn in the last frame
    pub fn hovered(&self) -> Option<BodyInfo> {
        let name = self.controller.hovered()?;
        self.renderer.scene().get(name).map(BodyInfo::from)
    }

    /// Every body drawn in the last frame, in draw order
    pub fn visible_bodies(&self) -> Vec<BodyInfo> {
        self.renderer.scene().iter().map(BodyInfo::from).collect()
    }

    /// Current altitude and azimuth of a catalog body, whether drawn or not
    pub fn horizontal_position(&self, name: &str) -> Result<Horizontal> {
        let body = self
            .catalog
            .get(name)
            .ok_or_else(|| SkychartError::BodyNotFound(name.to_string()))?;
        Ok(equatorial_to_horizontal(
            &body.position_at(&self.observer.instant),
            &self.observer.location,
            &self.observer.instant,
        ))
    }

    pub fn set_events(&mut self, source: &dyn EventSource) {
        self.events = source.event_list();
    }

    /// Events near the observer's instant, as configured for the side list
    pub fn visible_events(&self) -> Vec<&SkyEvent> {
        events_near(
            &self.events,
            &self.observer.instant,
            self.config.event_window_hours,
            self.config.max_listed_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::NullPanel;
    use crate::render::RecordingCanvas;
    use crate::time::j2000_instant;
    use chrono::Duration;

    fn chart_at_pole() -> SkyChart {
        let mut chart = SkyChart::new(ChartConfig::default()).unwrap();
        chart.set_observer(ObserverContext::new(GeoLocation::new(90.0, 0.0), j2000_instant()));
        chart
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ChartConfig::default().with_hit_radius(0.0);
        assert!(matches!(
            SkyChart::new(config),
            Err(SkychartError::ConfigError(_))
        ));
    }

    #[test]
    fn test_render_then_find() {
        let mut chart = chart_at_pole();
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        assert!(chart.render(Some(&mut canvas)));

        let polaris = chart
            .visible_bodies()
            .into_iter()
            .find(|b| b.name == "Polaris")
            .unwrap();
        assert!((polaris.altitude - 89.264).abs() < 0.01);

        // Near the zenith, so close to the viewport centre
        let found = chart.find_object_at(400.0, 300.0).unwrap();
        assert_eq!(found.name, "Polaris");
    }

    #[test]
    fn test_zoom_needs_a_frame() {
        let mut chart = chart_at_pole();
        assert!(!chart.zoom_in());
        chart.render(Some(&mut RecordingCanvas::new(800.0, 600.0)));
        assert!(chart.zoom_in());
        assert!(chart.zoom_out());
        chart.reset_view();
        assert_eq!(chart.view().zoom(), 1.0);
    }

    #[test]
    fn test_selection_through_events() {
        let mut chart = chart_at_pole();
        chart.render(Some(&mut RecordingCanvas::new(800.0, 600.0)));
        assert!(chart.handle_event(PointerEvent::Click { x: 400.0, y: 300.0 }, &mut NullPanel));
        assert_eq!(chart.selected().map(|b| b.name), Some("Polaris".to_string()));
    }

    #[test]
    fn test_horizontal_position_unknown_body() {
        let chart = chart_at_pole();
        assert!(matches!(
            chart.horizontal_position("Vulcan"),
            Err(SkychartError::BodyNotFound(_))
        ));
        let sirius = chart.horizontal_position("Sirius").unwrap();
        assert!(sirius.altitude < 0.0);
    }

    #[test]
    fn test_visible_events() {
        let mut chart = chart_at_pole();
        let t0 = j2000_instant();
        chart.set_events(&vec![
            SkyEvent::new("Soon", t0 + Duration::hours(2)),
            SkyEvent::new("Later", t0 + Duration::days(10)),
        ]);
        let titles: Vec<&str> = chart.visible_events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Soon"]);

        chart.set_instant(t0 + Duration::days(10));
        assert_eq!(chart.visible_events()[0].title, "Later");
    }
}
