//! Coordinate types used by the chart
//!
//! Catalog positions are equatorial (right ascension in hours, declination in
//! degrees) and do not depend on time. Everything the observer sees is
//! horizontal (altitude and azimuth in degrees), which depends on where and
//! when the observer stands.

pub mod horizontal;

pub use horizontal::equatorial_to_horizontal;

use crate::constants::DEG_PER_HOUR;
use serde::{Deserialize, Serialize};

/// Wrap an angle in degrees into [0, 360)
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle in hours into [0, 24)
pub fn normalize_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(24.0);
    if wrapped >= 24.0 {
        0.0
    } else {
        wrapped
    }
}

/// Equatorial coordinates (RA/Dec)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in hours, [0, 24)
    pub ra_hours: f64,
    /// Declination in degrees, [-90, 90]
    pub dec_deg: f64,
}

impl Equatorial {
    pub fn new(ra_hours: f64, dec_deg: f64) -> Self {
        Equatorial {
            ra_hours: normalize_hours(ra_hours),
            dec_deg,
        }
    }

    /// Create an equatorial coordinate with right ascension given in degrees
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(ra_deg / DEG_PER_HOUR, dec_deg)
    }

    /// Get right ascension in degrees
    pub fn ra_degrees(&self) -> f64 {
        self.ra_hours * DEG_PER_HOUR
    }

    pub fn is_finite(&self) -> bool {
        self.ra_hours.is_finite() && self.dec_deg.is_finite()
    }
}

/// Horizontal coordinates relative to an observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Angle above the horizon in degrees; negative means below it
    pub altitude: f64,
    /// Compass bearing in degrees, 0 = north, increasing through east
    pub azimuth: f64,
}

impl Horizontal {
    pub fn new(altitude: f64, azimuth: f64) -> Self {
        Self { altitude, azimuth }
    }

    /// Whether the position is on or above the horizon
    ///
    /// NaN altitudes are treated as visible here and fall out later at the
    /// hit-test distance check.
    pub fn is_above_horizon(&self) -> bool {
        !(self.altitude < 0.0)
    }
}

/// A point on the Earth's surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(360.0, 0.0)]
    #[case(-90.0, 270.0)]
    #[case(725.5, 5.5)]
    #[case(-1e-17, 0.0)]
    fn test_normalize_degrees(#[case] input: f64, #[case] expected: f64) {
        let wrapped = normalize_degrees(input);
        assert_abs_diff_eq!(wrapped, expected, epsilon = 1e-12);
        assert!((0.0..360.0).contains(&wrapped));
    }

    #[test]
    fn test_equatorial_conversions() {
        let vega = Equatorial::from_degrees(279.234, 38.784);
        assert_abs_diff_eq!(vega.ra_hours, 18.6156, epsilon = 1e-4);
        assert_abs_diff_eq!(vega.ra_degrees(), 279.234, epsilon = 1e-9);

        // Right ascension wraps into [0, 24)
        let wrapped = Equatorial::new(25.5, 10.0);
        assert_abs_diff_eq!(wrapped.ra_hours, 1.5, epsilon = 1e-12);
        assert!(!Equatorial::new(f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_horizon_check() {
        assert!(Horizontal::new(0.0, 10.0).is_above_horizon());
        assert!(Horizontal::new(45.0, 10.0).is_above_horizon());
        assert!(!Horizontal::new(-0.01, 10.0).is_above_horizon());
        assert!(Horizontal::new(f64::NAN, 10.0).is_above_horizon());
    }
}
