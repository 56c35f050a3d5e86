//! Celestial body definitions

use crate::coordinates::Equatorial;
use crate::planetlib::Planet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trait for objects that have a position in the sky
pub trait CelestialObject {
    /// Get the position of the object at a specific time
    fn position_at(&self, instant: &DateTime<Utc>) -> Equatorial;
}

/// What kind of catalog entry a body is, and where its position comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Fixed catalog position
    Star(Equatorial),
    /// Position derived from the planet's orbit at render time
    Planet(Planet),
}

/// A named object drawn on the chart
///
/// Bodies are immutable catalog data. Per-frame screen positions live in
/// [`crate::render::SkyScene`], never on the body itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Unique name of the body
    pub name: String,
    pub kind: BodyKind,
    /// Apparent magnitude (lower is brighter)
    pub magnitude: f64,
    /// Display colour token, e.g. `#ffcc88`
    pub color: String,
}

impl CelestialBody {
    /// Create a star with a fixed catalog position
    pub fn star(name: &str, ra_hours: f64, dec_deg: f64, magnitude: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: BodyKind::Star(Equatorial::new(ra_hours, dec_deg)),
            magnitude,
            color: color.to_string(),
        }
    }

    /// Create a planet entry using its typical magnitude and colour
    pub fn planet(planet: Planet) -> Self {
        Self {
            name: planet.name().to_string(),
            kind: BodyKind::Planet(planet),
            magnitude: planet.typical_magnitude(),
            color: planet.color().to_string(),
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self.kind, BodyKind::Star(_))
    }

    pub fn is_planet(&self) -> bool {
        matches!(self.kind, BodyKind::Planet(_))
    }

    /// Whether every field needed to draw the body is present and finite
    pub fn is_drawable(&self) -> bool {
        let position_ok = match &self.kind {
            BodyKind::Star(position) => position.is_finite(),
            BodyKind::Planet(_) => true,
        };
        !self.name.is_empty() && !self.color.is_empty() && self.magnitude.is_finite() && position_ok
    }
}

impl CelestialObject for CelestialBody {
    fn position_at(&self, instant: &DateTime<Utc>) -> Equatorial {
        match &self.kind {
            BodyKind::Star(position) => *position,
            BodyKind::Planet(planet) => planet.position_at(instant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::j2000_instant;
    use chrono::Duration;

    #[test]
    fn test_star_position_is_time_invariant() {
        let vega = CelestialBody::star("Vega", 18.6156, 38.784, 0.03, "#cad8ff");
        assert!(vega.is_star());
        let t0 = j2000_instant();
        let t1 = t0 + Duration::days(4000);
        assert_eq!(vega.position_at(&t0), vega.position_at(&t1));
    }

    #[test]
    fn test_planet_position_moves() {
        let mars = CelestialBody::planet(Planet::Mars);
        assert!(mars.is_planet());
        assert_eq!(mars.name, "Mars");
        let t0 = j2000_instant();
        let t1 = t0 + Duration::days(60);
        assert_ne!(mars.position_at(&t0), mars.position_at(&t1));
    }

    #[test]
    fn test_drawable_checks() {
        assert!(CelestialBody::star("Rigel", 5.24, -8.2, 0.13, "#b5c7ff").is_drawable());
        assert!(!CelestialBody::star("", 5.24, -8.2, 0.13, "#b5c7ff").is_drawable());
        assert!(!CelestialBody::star("Bad", f64::NAN, -8.2, 0.13, "#fff").is_drawable());
        assert!(!CelestialBody::star("Dim", 1.0, 1.0, f64::NAN, "#fff").is_drawable());
    }
}
