//! Star catalogs module
//!
//! The chart draws from a small, static catalog: a few dozen bright stars with
//! fixed positions, the planets, and the constellation figures joining them.
//! The built-in catalog is available as [`Catalog::default`] or the shared
//! [`DEFAULT_CATALOG`]; custom catalogs load from JSON.

mod bright_stars;

pub use bright_stars::{create_bright_stars, create_constellation_lines};

use crate::celestial::{BodyKind, CelestialBody};
use crate::planetlib::Planet;
use crate::{Result, SkychartError};
use lazy_static::lazy_static;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

lazy_static! {
    /// Shared instance of the built-in catalog
    pub static ref DEFAULT_CATALOG: Catalog = Catalog::default();
}

/// A segment of a constellation figure, joining two catalog entries by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationLine {
    /// Constellation or asterism the segment belongs to
    pub constellation: String,
    pub from: String,
    pub to: String,
}

impl ConstellationLine {
    pub fn new(constellation: &str, from: &str, to: &str) -> Self {
        Self {
            constellation: constellation.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Catalog of named bodies and constellation figures
///
/// Iteration order is insertion order; the built-in catalog lists stars
/// before planets.
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: Vec<CelestialBody>,
    index: HashMap<String, usize>,
    constellation_lines: Vec<ConstellationLine>,
}

impl Default for Catalog {
    /// Get the built-in catalog: bright stars, the planets, and constellation figures
    fn default() -> Self {
        let mut catalog = Self::new();

        for star in create_bright_stars() {
            catalog.push_unchecked(star);
        }
        for planet in Planet::ALL {
            catalog.push_unchecked(CelestialBody::planet(planet));
        }
        catalog.constellation_lines = create_constellation_lines();

        catalog
    }
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            index: HashMap::new(),
            constellation_lines: Vec::new(),
        }
    }

    fn push_unchecked(&mut self, body: CelestialBody) {
        self.index.insert(body.name.clone(), self.bodies.len());
        self.bodies.push(body);
    }

    /// Add a body to the catalog; names must be unique
    pub fn add_body(&mut self, body: CelestialBody) -> Result<()> {
        if self.index.contains_key(&body.name) {
            return Err(SkychartError::CatalogError(format!(
                "duplicate body name: {}",
                body.name
            )));
        }
        self.push_unchecked(body);
        Ok(())
    }

    /// Add a constellation segment; both endpoints must already be in the catalog
    pub fn add_constellation_line(&mut self, line: ConstellationLine) -> Result<()> {
        for endpoint in [&line.from, &line.to] {
            if !self.index.contains_key(endpoint) {
                return Err(SkychartError::BodyNotFound(endpoint.clone()));
            }
        }
        self.constellation_lines.push(line);
        Ok(())
    }

    /// Look up a body by name
    pub fn get(&self, name: &str) -> Option<&CelestialBody> {
        self.index.get(name).map(|&i| &self.bodies[i])
    }

    /// All bodies in catalog order
    pub fn bodies(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Stars in catalog order
    pub fn stars(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|b| b.is_star())
    }

    /// Planets in catalog order
    pub fn planets(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|b| b.is_planet())
    }

    pub fn constellation_lines(&self) -> &[ConstellationLine] {
        &self.constellation_lines
    }

    /// Stars brighter than (or equal to) a magnitude
    pub fn brighter_than(&self, magnitude: f64) -> Vec<&CelestialBody> {
        self.stars().filter(|s| s.magnitude <= magnitude).collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Parse a catalog from its JSON form
    ///
    /// Star records missing a required field are skipped with a warning, as are
    /// constellation segments naming unknown bodies. Duplicate names are an error.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        let mut skipped = 0usize;

        for record in file.stars {
            match record.into_body() {
                Some(body) => catalog.add_body(body)?,
                None => skipped += 1,
            }
        }
        for planet in file.planets {
            catalog.add_body(CelestialBody::planet(planet))?;
        }
        for line in file.constellations {
            if let Err(e) = catalog.add_constellation_line(line) {
                warn!("Dropping constellation segment: {}", e);
            }
        }

        if skipped > 0 {
            warn!("Skipped {} incomplete star records", skipped);
        }
        debug!(
            "Loaded catalog with {} bodies and {} constellation segments",
            catalog.len(),
            catalog.constellation_lines.len()
        );
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Serialize the catalog to the JSON form accepted by [`Catalog::from_json_str`]
    pub fn to_json_string(&self) -> Result<String> {
        let mut file = CatalogFile::default();
        for body in &self.bodies {
            match &body.kind {
                BodyKind::Star(position) => file.stars.push(StarRecord {
                    name: Some(body.name.clone()),
                    ra_hours: Some(position.ra_hours),
                    dec_deg: Some(position.dec_deg),
                    magnitude: Some(body.magnitude),
                    color: Some(body.color.clone()),
                }),
                BodyKind::Planet(planet) => file.planets.push(*planet),
            }
        }
        file.constellations = self.constellation_lines.clone();
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

/// On-disk catalog layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    stars: Vec<StarRecord>,
    #[serde(default)]
    planets: Vec<Planet>,
    #[serde(default)]
    constellations: Vec<ConstellationLine>,
}

/// A star as written in a catalog file; every field may be missing
#[derive(Debug, Default, Serialize, Deserialize)]
struct StarRecord {
    name: Option<String>,
    ra_hours: Option<f64>,
    dec_deg: Option<f64>,
    magnitude: Option<f64>,
    color: Option<String>,
}

impl StarRecord {
    fn into_body(self) -> Option<CelestialBody> {
        let body = CelestialBody::star(
            &self.name?,
            self.ra_hours?,
            self.dec_deg?,
            self.magnitude?,
            &self.color?,
        );
        body.is_drawable().then_some(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_catalog_contents() {
        let catalog = Catalog::default();
        assert!(catalog.stars().count() >= 30);
        assert_eq!(catalog.planets().count(), Planet::ALL.len());

        let polaris = catalog.get("Polaris").expect("Polaris in catalog");
        assert!(polaris.is_star());
        assert!(catalog.get("Jupiter").unwrap().is_planet());
        assert!(catalog.get("Pluto").is_none());
    }

    #[test]
    fn test_stars_precede_planets() {
        let catalog = Catalog::default();
        let first_planet = catalog.bodies().position(|b| b.is_planet()).unwrap();
        assert!(catalog.bodies().skip(first_planet).all(|b| b.is_planet()));
    }

    #[test]
    fn test_constellation_endpoints_exist() {
        let catalog = Catalog::default();
        assert!(!catalog.constellation_lines().is_empty());
        for line in catalog.constellation_lines() {
            assert!(catalog.get(&line.from).is_some(), "missing {}", line.from);
            assert!(catalog.get(&line.to).is_some(), "missing {}", line.to);
        }
    }

    #[test]
    fn test_brighter_than() {
        let catalog = Catalog::default();
        let bright = catalog.brighter_than(0.0);
        assert!(bright.iter().any(|s| s.name == "Sirius"));
        assert!(bright.iter().all(|s| s.magnitude <= 0.0));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut catalog = Catalog::new();
        catalog
            .add_body(CelestialBody::star("Vega", 18.6, 38.8, 0.03, "#fff"))
            .unwrap();
        let err = catalog
            .add_body(CelestialBody::star("Vega", 1.0, 1.0, 1.0, "#fff"))
            .unwrap_err();
        assert!(matches!(err, SkychartError::CatalogError(_)));
    }

    #[test]
    fn test_json_skips_incomplete_records() {
        let json = r##"{
            "stars": [
                {"name": "Vega", "ra_hours": 18.6156, "dec_deg": 38.784, "magnitude": 0.03, "color": "#cad8ff"},
                {"name": "Nameless", "ra_hours": 1.0, "magnitude": 2.0, "color": "#fff"},
                {"name": "Deneb", "ra_hours": 20.6905, "dec_deg": 45.28, "magnitude": 1.25, "color": "#f0f4ff"}
            ],
            "planets": ["Mars"],
            "constellations": [
                {"constellation": "Test", "from": "Vega", "to": "Deneb"},
                {"constellation": "Test", "from": "Vega", "to": "Nameless"}
            ]
        }"##;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("Nameless").is_none());
        assert_eq!(catalog.constellation_lines().len(), 1);
    }

    #[test]
    fn test_json_file_round_trip() {
        let catalog = Catalog::default();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(catalog.to_json_string().unwrap().as_bytes())
            .unwrap();

        let loaded = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(loaded.len(), catalog.len());
        assert_eq!(
            loaded.constellation_lines().len(),
            catalog.constellation_lines().len()
        );
        assert_eq!(loaded.get("Sirius"), catalog.get("Sirius"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::from_json_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, SkychartError::IoError(_)));
    }
}
