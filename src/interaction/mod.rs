//! Pointer handling: hover, selection, drag-to-pan and wheel zoom
//!
//! The [`InteractionController`] is the only writer of hover and selection
//! state and, together with explicit zoom calls, of the [`ViewTransform`].
//! Hit tests run against the [`SkyScene`] of the last rendered frame.

use crate::config::ChartConfig;
use crate::render::{BodyCategory, ChartButton, ProjectedBody, SkyScene};
use crate::view::ViewTransform;
use log::{debug, trace};
use nalgebra::Point2;
use serde::Serialize;

/// Input events in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
    Click { x: f64, y: f64 },
    Wheel { delta_y: f64, x: f64, y: f64 },
    Button(ChartButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Dragging,
}

/// What the info panel shows about a body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyInfo {
    pub name: String,
    pub category: BodyCategory,
    pub altitude: f64,
    pub azimuth: f64,
    /// Catalog magnitude; planets have none since it varies with distance
    pub magnitude: Option<f64>,
}

impl From<&ProjectedBody> for BodyInfo {
    fn from(body: &ProjectedBody) -> Self {
        Self {
            name: body.name.clone(),
            category: body.category,
            altitude: body.horizontal.altitude,
            azimuth: body.horizontal.azimuth,
            magnitude: match body.category {
                BodyCategory::Star => Some(body.magnitude),
                BodyCategory::Planet => None,
            },
        }
    }
}

/// Display collaborator notified of hover and selection changes
pub trait InfoPanel {
    fn show_selection(&mut self, info: Option<&BodyInfo>);
    fn show_hover(&mut self, info: Option<&BodyInfo>);
}

/// Panel that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPanel;

impl InfoPanel for NullPanel {
    fn show_selection(&mut self, _info: Option<&BodyInfo>) {}
    fn show_hover(&mut self, _info: Option<&BodyInfo>) {}
}

/// Pointer state machine
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: PointerState,
    suppress_click: bool,
    hovered: Option<String>,
    selected: Option<String>,
    hit_radius: f64,
}

impl InteractionController {
    pub fn new(hit_radius: f64) -> Self {
        Self {
            state: PointerState::Idle,
            suppress_click: false,
            hovered: None,
            selected: None,
            hit_radius,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.hit_radius)
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Feed one event through the state machine
    ///
    /// Returns true when the chart needs to be redrawn.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        view: &mut ViewTransform,
        scene: &SkyScene,
        panel: &mut dyn InfoPanel,
    ) -> bool {
        trace!("{:?} in {:?}", event, self.state);
        match (self.state, event) {
            (_, PointerEvent::Wheel { delta_y, x, y }) => match scene.viewport() {
                Some(viewport) => view.apply_wheel(delta_y, x, y, &viewport),
                None => false,
            },
            (_, PointerEvent::Button(button)) => {
                let Some(viewport) = scene.viewport() else {
                    return false;
                };
                match button {
                    ChartButton::ZoomIn => view.zoom_in(&viewport),
                    ChartButton::ZoomOut => view.zoom_out(&viewport),
                    ChartButton::Reset => {
                        view.reset();
                        true
                    }
                }
            }
            (PointerState::Idle, PointerEvent::Down { x, y }) => {
                self.state = PointerState::Dragging;
                self.suppress_click = true;
                view.begin_drag(x, y);
                false
            }
            (PointerState::Dragging, PointerEvent::Move { x, y }) => view.update_drag(x, y),
            (PointerState::Dragging, PointerEvent::Up { .. } | PointerEvent::Leave) => {
                self.state = PointerState::Idle;
                view.end_drag();
                false
            }
            (PointerState::Idle, PointerEvent::Move { x, y }) => {
                let hit = self.hit_test(x, y, view, scene);
                if hit.as_ref().map(|b| b.name.as_str()) == self.hovered.as_deref() {
                    return false;
                }
                self.hovered = hit.as_ref().map(|b| b.name.clone());
                panel.show_hover(hit.as_ref());
                true
            }
            (PointerState::Idle, PointerEvent::Leave) => {
                if self.hovered.take().is_some() {
                    panel.show_hover(None);
                    true
                } else {
                    false
                }
            }
            (_, PointerEvent::Click { x, y }) => {
                if self.suppress_click {
                    self.suppress_click = false;
                    debug!("Click after press suppressed");
                    return false;
                }
                let hit = self.hit_test(x, y, view, scene);
                self.selected = hit.as_ref().map(|b| b.name.clone());
                debug!("Selected {:?}", self.selected);
                panel.show_selection(hit.as_ref());
                true
            }
            // Down while dragging, Up while idle
            _ => false,
        }
    }

    fn hit_test(&self, x: f64, y: f64, view: &ViewTransform, scene: &SkyScene) -> Option<BodyInfo> {
        let viewport = scene.viewport()?;
        let chart = view.to_chart_space(Point2::new(x, y), &viewport);
        scene
            .find_object_at(chart, self.hit_radius)
            .map(BodyInfo::from)
    }

    /// Forget hover and selection, e.g. after the catalog changed
    pub fn clear(&mut self) {
        self.hovered = None;
        self.selected = None;
    }
}
