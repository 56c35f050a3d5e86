//! Approximate planetary positions
//!
//! Positions come from Keplerian mean elements referred to the J2000 ecliptic
//! with linear rates per Julian century (Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets", table 1, valid 1800-2050).
//! Accuracy is on the order of arcminutes for the inner planets, which is
//! plenty for a naked-eye chart but not for pointing a telescope.

use crate::constants::{DEG2RAD, J2000, JULIAN_CENTURY_DAYS, OBLIQUITY_J2000_DEG, RAD2DEG};
use crate::coordinates::{normalize_degrees, Equatorial};
use crate::time::julian_day;
use chrono::{DateTime, Utc};
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Newton iterations stop once the eccentric anomaly moves less than this (radians)
const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITERATIONS: usize = 30;

/// Enum representing the planets drawn on the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All planets in display order
    pub const ALL: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Get the planet's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Typical apparent magnitude near opposition (or greatest elongation)
    pub fn typical_magnitude(&self) -> f64 {
        match self {
            Planet::Mercury => 0.0,
            Planet::Venus => -4.2,
            Planet::Mars => 0.7,
            Planet::Jupiter => -2.2,
            Planet::Saturn => 0.7,
            Planet::Uranus => 5.7,
            Planet::Neptune => 7.8,
        }
    }

    /// Display colour token
    pub fn color(&self) -> &'static str {
        match self {
            Planet::Mercury => "#b5b5b5",
            Planet::Venus => "#fff3c4",
            Planet::Mars => "#ff6b4a",
            Planet::Jupiter => "#f5d6a0",
            Planet::Saturn => "#e8d38c",
            Planet::Uranus => "#9fe3e8",
            Planet::Neptune => "#6f8cff",
        }
    }

    fn elements(&self) -> &'static OrbitalElements {
        match self {
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
            Planet::Uranus => &URANUS,
            Planet::Neptune => &NEPTUNE,
        }
    }

    /// Geocentric equatorial position at an instant
    pub fn position_at(&self, instant: &DateTime<Utc>) -> Equatorial {
        geocentric_equatorial(*self, julian_day(instant))
    }
}

/// Mean orbital elements at J2000 and their rates per Julian century
///
/// Angles are in degrees, the semi-major axis in AU.
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    semi_major_axis: (f64, f64),
    eccentricity: (f64, f64),
    inclination: (f64, f64),
    mean_longitude: (f64, f64),
    longitude_of_perihelion: (f64, f64),
    longitude_of_node: (f64, f64),
}

const MERCURY: OrbitalElements = OrbitalElements {
    semi_major_axis: (0.387_099_27, 0.000_000_37),
    eccentricity: (0.205_635_93, 0.000_019_06),
    inclination: (7.004_979_02, -0.005_947_49),
    mean_longitude: (252.250_323_50, 149_472.674_111_75),
    longitude_of_perihelion: (77.457_796_28, 0.160_476_89),
    longitude_of_node: (48.330_765_93, -0.125_340_81),
};

const VENUS: OrbitalElements = OrbitalElements {
    semi_major_axis: (0.723_335_66, 0.000_003_90),
    eccentricity: (0.006_776_72, -0.000_041_07),
    inclination: (3.394_676_05, -0.000_788_90),
    mean_longitude: (181.979_099_50, 58_517.815_387_29),
    longitude_of_perihelion: (131.602_467_18, 0.002_683_29),
    longitude_of_node: (76.679_842_55, -0.277_694_18),
};

/// Earth-Moon barycenter
const EARTH: OrbitalElements = OrbitalElements {
    semi_major_axis: (1.000_002_61, 0.000_005_62),
    eccentricity: (0.016_711_23, -0.000_043_92),
    inclination: (-0.000_015_31, -0.012_946_68),
    mean_longitude: (100.464_571_66, 35_999.372_449_81),
    longitude_of_perihelion: (102.937_681_93, 0.323_273_64),
    longitude_of_node: (0.0, 0.0),
};

const MARS: OrbitalElements = OrbitalElements {
    semi_major_axis: (1.523_710_34, 0.000_018_47),
    eccentricity: (0.093_394_10, 0.000_078_82),
    inclination: (1.849_691_42, -0.008_131_31),
    mean_longitude: (-4.553_432_05, 19_140.302_684_99),
    longitude_of_perihelion: (-23.943_629_59, 0.444_410_88),
    longitude_of_node: (49.559_538_91, -0.292_573_43),
};

const JUPITER: OrbitalElements = OrbitalElements {
    semi_major_axis: (5.202_887_00, -0.000_116_07),
    eccentricity: (0.048_386_24, -0.000_132_53),
    inclination: (1.304_396_95, -0.001_837_14),
    mean_longitude: (34.396_440_51, 3_034.746_127_75),
    longitude_of_perihelion: (14.728_479_83, 0.212_526_68),
    longitude_of_node: (100.473_909_09, 0.204_691_06),
};

const SATURN: OrbitalElements = OrbitalElements {
    semi_major_axis: (9.536_675_94, -0.001_250_60),
    eccentricity: (0.053_861_79, -0.000_509_91),
    inclination: (2.485_991_87, 0.001_936_09),
    mean_longitude: (49.954_244_23, 1_222.493_622_01),
    longitude_of_perihelion: (92.598_878_31, -0.418_972_16),
    longitude_of_node: (113.662_424_48, -0.288_677_94),
};

const URANUS: OrbitalElements = OrbitalElements {
    semi_major_axis: (19.189_164_64, -0.001_961_76),
    eccentricity: (0.047_257_44, -0.000_043_97),
    inclination: (0.772_637_83, -0.002_429_39),
    mean_longitude: (313.238_104_51, 428.482_027_85),
    longitude_of_perihelion: (170.954_276_30, 0.408_052_81),
    longitude_of_node: (74.016_925_03, 0.042_405_89),
};

const NEPTUNE: OrbitalElements = OrbitalElements {
    semi_major_axis: (30.069_922_76, 0.000_262_91),
    eccentricity: (0.008_590_48, 0.000_051_05),
    inclination: (1.770_043_47, 0.000_353_72),
    mean_longitude: (-55.120_029_69, 218.459_453_25),
    longitude_of_perihelion: (44.964_762_27, -0.322_414_64),
    longitude_of_node: (131.784_225_74, -0.005_086_64),
};

fn at(element: (f64, f64), centuries: f64) -> f64 {
    element.0 + element.1 * centuries
}

/// Solve Kepler's equation `E - e sin E = M` for the eccentric anomaly (radians)
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut eccentric = if eccentricity < 0.8 {
        mean_anomaly
    } else {
        std::f64::consts::PI
    };

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (eccentric - eccentricity * eccentric.sin() - mean_anomaly)
            / (1.0 - eccentricity * eccentric.cos());
        eccentric -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    eccentric
}

/// Heliocentric position in the J2000 ecliptic frame, in AU
fn heliocentric_ecliptic(elements: &OrbitalElements, centuries: f64) -> Vector3<f64> {
    let a = at(elements.semi_major_axis, centuries);
    let e = at(elements.eccentricity, centuries);
    let inclination = at(elements.inclination, centuries) * DEG2RAD;
    let mean_longitude = at(elements.mean_longitude, centuries);
    let perihelion = at(elements.longitude_of_perihelion, centuries);
    let node = at(elements.longitude_of_node, centuries);

    let argument_of_perihelion = (perihelion - node) * DEG2RAD;
    // Mean anomaly folded into [-180, 180] so Newton starts close to the root
    let mean_anomaly = (normalize_degrees(mean_longitude - perihelion + 180.0) - 180.0) * DEG2RAD;

    let eccentric = solve_kepler(mean_anomaly, e);
    let in_plane = Vector3::new(
        a * (eccentric.cos() - e),
        a * (1.0 - e * e).sqrt() * eccentric.sin(),
        0.0,
    );

    let orientation = Rotation3::from_axis_angle(&Vector3::z_axis(), node * DEG2RAD)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), inclination)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), argument_of_perihelion);
    orientation * in_plane
}

/// Geocentric equatorial coordinates of a planet at a Julian Day
pub fn geocentric_equatorial(planet: Planet, jd: f64) -> Equatorial {
    let centuries = (jd - J2000) / JULIAN_CENTURY_DAYS;
    let geocentric = heliocentric_ecliptic(planet.elements(), centuries)
        - heliocentric_ecliptic(&EARTH, centuries);

    let to_equatorial =
        Rotation3::from_axis_angle(&Vector3::x_axis(), OBLIQUITY_J2000_DEG * DEG2RAD);
    let equatorial = to_equatorial * geocentric;

    let ra_deg = equatorial.y.atan2(equatorial.x) * RAD2DEG;
    let dec_deg = equatorial
        .z
        .atan2((equatorial.x * equatorial.x + equatorial.y * equatorial.y).sqrt())
        * RAD2DEG;
    Equatorial::from_degrees(ra_deg, dec_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::j2000_instant;
    use approx::assert_abs_diff_eq;
    use chrono::Duration;

    #[test]
    fn test_kepler_solution_satisfies_equation() {
        for &(m, e) in &[(0.3, 0.0167), (2.5, 0.2056), (-1.2, 0.0934), (3.1, 0.9)] {
            let eccentric = solve_kepler(m, e);
            assert_abs_diff_eq!(eccentric - e * eccentric.sin(), m, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_circular_orbit_is_identity() {
        assert_abs_diff_eq!(solve_kepler(1.234, 0.0), 1.234, epsilon = 1e-12);
    }

    #[test]
    fn test_earth_sun_distance_near_one_au() {
        let earth = heliocentric_ecliptic(&EARTH, 0.0);
        let distance = earth.norm();
        assert!((0.98..1.02).contains(&distance), "distance {}", distance);
    }

    #[test]
    fn test_outer_planets_at_j2000() {
        // Jupiter and Saturn were both in Aries at the start of 2000
        let jupiter = Planet::Jupiter.position_at(&j2000_instant());
        assert_abs_diff_eq!(jupiter.ra_hours, 1.59, epsilon = 0.2);
        assert_abs_diff_eq!(jupiter.dec_deg, 8.6, epsilon = 2.0);

        let saturn = Planet::Saturn.position_at(&j2000_instant());
        assert_abs_diff_eq!(saturn.ra_hours, 2.6, epsilon = 0.2);
        assert_abs_diff_eq!(saturn.dec_deg, 12.6, epsilon = 2.0);
    }

    #[test]
    fn test_planets_stay_near_ecliptic() {
        let start = j2000_instant();
        for day in (0..3650).step_by(97) {
            let instant = start + Duration::days(day);
            for planet in Planet::ALL {
                let position = planet.position_at(&instant);
                assert!((0.0..24.0).contains(&position.ra_hours));
                // Ecliptic reaches +/-23.4; Mercury and Venus can stray a few degrees past it
                assert!(
                    position.dec_deg.abs() < 30.0,
                    "{} at dec {}",
                    planet.name(),
                    position.dec_deg
                );
            }
        }
    }
}
