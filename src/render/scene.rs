//! Per-frame projected positions
//!
//! A [`SkyScene`] is rebuilt from scratch on every render and records where
//! each drawn body ended up in chart space. Bodies below the horizon or in a
//! hidden layer never enter it, so hit-testing can only ever find what the
//! last frame actually drew.

use crate::coordinates::Horizontal;
use crate::projection::Viewport;
use nalgebra::Point2;
use serde::Serialize;
use std::collections::HashMap;

/// Which body set a projected entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BodyCategory {
    Star,
    Planet,
}

/// A body as drawn in the most recent frame
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedBody {
    pub name: String,
    pub category: BodyCategory,
    /// Position in chart space
    pub chart: Point2<f64>,
    pub horizontal: Horizontal,
    pub magnitude: f64,
}

/// Side-table of body name to last projected position
#[derive(Debug, Clone, Default)]
pub struct SkyScene {
    viewport: Option<Viewport>,
    bodies: Vec<ProjectedBody>,
    index: HashMap<String, usize>,
}

impl SkyScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame, dropping every position from the previous one
    pub fn begin_frame(&mut self, viewport: Viewport) {
        self.clear();
        self.viewport = Some(viewport);
    }

    /// Forget everything, including the viewport
    pub fn clear(&mut self) {
        self.viewport = None;
        self.bodies.clear();
        self.index.clear();
    }

    /// Viewport of the frame this scene describes, if one was drawn
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Record a drawn body; a later entry with the same name replaces the earlier one
    pub fn insert(&mut self, body: ProjectedBody) {
        match self.index.get(&body.name) {
            Some(&i) => self.bodies[i] = body,
            None => {
                self.index.insert(body.name.clone(), self.bodies.len());
                self.bodies.push(body);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ProjectedBody> {
        self.index.get(name).map(|&i| &self.bodies[i])
    }

    /// Entries in draw order (stars before planets)
    pub fn iter(&self) -> impl Iterator<Item = &ProjectedBody> {
        self.bodies.iter()
    }

    pub fn count(&self, category: BodyCategory) -> usize {
        self.bodies.iter().filter(|b| b.category == category).count()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Nearest drawn body within `radius` of a chart-space point
    ///
    /// Ties go to the earliest entry. NaN positions never match since every
    /// comparison against NaN is false.
    pub fn find_object_at(&self, chart: Point2<f64>, radius: f64) -> Option<&ProjectedBody> {
        let mut best: Option<(&ProjectedBody, f64)> = None;
        for body in &self.bodies {
            let distance = (body.chart - chart).norm();
            if !(distance <= radius) {
                continue;
            }
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((body, distance)),
            }
        }
        best.map(|(body, _)| body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str, category: BodyCategory, x: f64, y: f64) -> ProjectedBody {
        ProjectedBody {
            name: name.to_string(),
            category,
            chart: Point2::new(x, y),
            horizontal: Horizontal::new(45.0, 90.0),
            magnitude: 1.0,
        }
    }

    #[test]
    fn test_hit_radius_threshold() {
        let mut scene = SkyScene::new();
        scene.begin_frame(Viewport::new(800.0, 600.0));
        scene.insert(body("Near", BodyCategory::Star, 110.0, 100.0));
        scene.insert(body("Far", BodyCategory::Star, 100.0, 120.0));

        let hit = scene.find_object_at(Point2::new(100.0, 100.0), 15.0).unwrap();
        assert_eq!(hit.name, "Near");
        assert!(scene
            .find_object_at(Point2::new(100.0, 130.0), 15.0)
            .map(|b| b.name == "Far")
            .unwrap_or(false));
        assert!(scene.find_object_at(Point2::new(300.0, 300.0), 15.0).is_none());
    }

    #[test]
    fn test_nearest_wins_and_ties_go_first() {
        let mut scene = SkyScene::new();
        scene.insert(body("A", BodyCategory::Star, 10.0, 0.0));
        scene.insert(body("B", BodyCategory::Star, 4.0, 0.0));
        scene.insert(body("C", BodyCategory::Planet, -4.0, 0.0));

        let hit = scene.find_object_at(Point2::new(0.0, 0.0), 15.0).unwrap();
        assert_eq!(hit.name, "B");
    }

    #[test]
    fn test_nan_positions_never_hit() {
        let mut scene = SkyScene::new();
        scene.insert(body("Lost", BodyCategory::Star, f64::NAN, f64::NAN));
        assert!(scene.find_object_at(Point2::new(0.0, 0.0), 1e9).is_none());
    }

    #[test]
    fn test_begin_frame_invalidates_previous_positions() {
        let mut scene = SkyScene::new();
        scene.begin_frame(Viewport::new(100.0, 100.0));
        scene.insert(body("Setting", BodyCategory::Star, 50.0, 50.0));
        assert_eq!(scene.count(BodyCategory::Star), 1);

        scene.begin_frame(Viewport::new(100.0, 100.0));
        assert!(scene.get("Setting").is_none());
        assert!(scene.find_object_at(Point2::new(50.0, 50.0), 15.0).is_none());
    }
}
