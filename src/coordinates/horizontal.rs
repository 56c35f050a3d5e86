//! Equatorial to horizontal conversion
//!
//! The conversion runs through local sidereal time and the hour angle:
//!
//! ```text
//! sin(alt) = sin(dec) sin(lat) + cos(dec) cos(lat) cos(H)
//! az       = atan2(-cos(dec) sin(H), sin(dec) cos(lat) - cos(dec) sin(lat) cos(H))
//! ```
//!
//! Both `atan2` arguments scale with `cos(alt)`, so the azimuth stays defined
//! for an observer at either pole. Objects west of the meridian (0 < H < 180)
//! land in (180, 360).

use super::{normalize_degrees, Equatorial, GeoLocation, Horizontal};
use crate::constants::{DEG2RAD, RAD2DEG};
use crate::time::{julian_day, local_sidereal_degrees};
use chrono::{DateTime, Utc};

/// Below this `cos(alt)` is treated as zero: the object is at the zenith or nadir
const AZIMUTH_SINGULARITY_EPS: f64 = 1e-12;

/// Azimuth reported when it is geometrically undefined
pub const INDETERMINATE_AZIMUTH: f64 = 0.0;

/// Convert a catalog position to altitude/azimuth for an observer at an instant
///
/// Never fails: NaN inputs produce NaN outputs, and the zenith/nadir
/// singularity resolves to [`INDETERMINATE_AZIMUTH`].
pub fn equatorial_to_horizontal(
    position: &Equatorial,
    location: &GeoLocation,
    instant: &DateTime<Utc>,
) -> Horizontal {
    let lst = local_sidereal_degrees(julian_day(instant), location.longitude);
    horizontal_from_sidereal(position, location.latitude, lst)
}

/// Same as [`equatorial_to_horizontal`] with the local sidereal time already known
///
/// The renderer computes the sidereal time once per frame and reuses it for
/// every body.
pub fn horizontal_from_sidereal(position: &Equatorial, latitude_deg: f64, lst_deg: f64) -> Horizontal {
    let hour_angle = normalize_degrees(lst_deg - position.ra_degrees()) * DEG2RAD;
    let dec = position.dec_deg * DEG2RAD;
    let lat = latitude_deg * DEG2RAD;

    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * hour_angle.cos();
    let altitude = sin_alt.clamp(-1.0, 1.0).asin();

    let east = -dec.cos() * hour_angle.sin();
    let north = dec.sin() * lat.cos() - dec.cos() * lat.sin() * hour_angle.cos();
    // hypot(east, north) is cos(alt)
    let azimuth = if east.hypot(north) < AZIMUTH_SINGULARITY_EPS {
        INDETERMINATE_AZIMUTH
    } else {
        normalize_degrees(east.atan2(north) * RAD2DEG)
    };

    Horizontal {
        altitude: (altitude * RAD2DEG).clamp(-90.0, 90.0),
        azimuth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{j2000_instant, local_sidereal_degrees};
    use approx::assert_abs_diff_eq;
    use chrono::{Duration, TimeZone};
    use rand::distributions::{Distribution, Uniform};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[test]
    fn test_object_on_meridian_culminates() {
        // An object with RA equal to the local sidereal time is on the meridian
        let lat = 40.0;
        let lst = 75.0;
        let position = Equatorial::from_degrees(lst, 10.0);
        let horizontal = horizontal_from_sidereal(&position, lat, lst);
        assert_abs_diff_eq!(horizontal.altitude, 90.0 - lat + 10.0, epsilon = 1e-9);
        // South of the zenith for a northern observer
        assert_abs_diff_eq!(horizontal.azimuth, 180.0, epsilon = 1e-4);
    }

    #[rstest]
    #[case(90.0, 90.0)]
    #[case(-33.9, -33.9)]
    #[case(0.0, 0.0)]
    fn test_zenith_is_singular_but_finite(#[case] lat: f64, #[case] dec: f64) {
        let lst = 123.0;
        let position = Equatorial::from_degrees(lst, dec);
        let horizontal = horizontal_from_sidereal(&position, lat, lst);
        assert_abs_diff_eq!(horizontal.altitude, 90.0, epsilon = 1e-5);
        assert!(horizontal.azimuth.is_finite());
        assert!((0.0..360.0).contains(&horizontal.azimuth));
    }

    #[test]
    fn test_rising_in_east_setting_in_west() {
        let lat = 10.0;
        let lst = 0.0;
        // Hour angle -90: object is east of the meridian
        let east = horizontal_from_sidereal(&Equatorial::from_degrees(90.0, 0.0), lat, lst);
        assert_abs_diff_eq!(east.altitude, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(east.azimuth, 90.0, epsilon = 1e-4);

        // Hour angle +90: object is west of the meridian
        let west = horizontal_from_sidereal(&Equatorial::from_degrees(270.0, 0.0), lat, lst);
        assert_abs_diff_eq!(west.altitude, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(west.azimuth, 270.0, epsilon = 1e-4);
    }

    #[rstest]
    // Hour angles 0, 270, 180, 90
    #[case(90.0, [180.0, 90.0, 0.0, 270.0])]
    #[case(-90.0, [0.0, 90.0, 180.0, 270.0])]
    fn test_polar_observer_sees_distinct_azimuths(#[case] lat: f64, #[case] expected: [f64; 4]) {
        let lst = 0.0;
        for (ra_hours, azimuth) in [0.0, 6.0, 12.0, 18.0].into_iter().zip(expected) {
            let dec = 45.0 * lat.signum();
            let horizontal = horizontal_from_sidereal(&Equatorial::new(ra_hours, dec), lat, lst);
            assert_abs_diff_eq!(horizontal.altitude, 45.0, epsilon = 1e-9);
            let off = (horizontal.azimuth - azimuth).abs();
            assert!(off.min(360.0 - off) < 1e-6, "RA {}h at azimuth {}", ra_hours, horizontal.azimuth);
        }
    }

    #[test]
    fn test_polar_sky_spreads_around_the_horizon() {
        let mut rng = StdRng::seed_from_u64(11);
        let ra = Uniform::new(0.0, 24.0);
        let dec = Uniform::new(5.0, 85.0);
        let mut quadrants = [0usize; 4];
        for _ in 0..400 {
            let position = Equatorial::new(ra.sample(&mut rng), dec.sample(&mut rng));
            let horizontal = horizontal_from_sidereal(&position, 90.0, 280.46);
            quadrants[(horizontal.azimuth / 90.0) as usize % 4] += 1;
        }
        assert!(quadrants.iter().all(|&n| n > 50), "{:?}", quadrants);
    }

    #[test]
    fn test_polaris_altitude_tracks_latitude() {
        let polaris = Equatorial::new(2.5303, 89.264);
        let location = GeoLocation::new(10.25, -61.63);
        let start = j2000_instant();
        for hour in 0..24 {
            let instant = start + Duration::hours(hour);
            let horizontal = equatorial_to_horizontal(&polaris, &location, &instant);
            assert!(
                (horizontal.altitude - location.latitude).abs() < 1.0,
                "Polaris at {} deg for hour {}",
                horizontal.altitude,
                hour
            );
            // Always close to due north
            let off_north = horizontal.azimuth.min(360.0 - horizontal.azimuth);
            assert!(off_north < 1.0, "Polaris azimuth {}", horizontal.azimuth);
        }
    }

    #[test]
    fn test_matches_sidereal_shortcut() {
        let instant = Utc.with_ymd_and_hms(2024, 8, 12, 3, 30, 0).unwrap();
        let location = GeoLocation::new(-33.87, 151.21);
        let position = Equatorial::new(16.49, -26.43);
        let lst = local_sidereal_degrees(julian_day(&instant), location.longitude);
        assert_eq!(
            equatorial_to_horizontal(&position, &location, &instant),
            horizontal_from_sidereal(&position, location.latitude, lst)
        );
    }

    #[test]
    fn test_output_ranges_over_random_inputs() {
        let mut rng = StdRng::seed_from_u64(7);
        let ra = Uniform::new(0.0, 24.0);
        let dec = Uniform::new_inclusive(-90.0, 90.0);
        let lat = Uniform::new_inclusive(-90.0, 90.0);
        let lst = Uniform::new(0.0, 360.0);

        for _ in 0..2000 {
            let position = Equatorial::new(ra.sample(&mut rng), dec.sample(&mut rng));
            let horizontal =
                horizontal_from_sidereal(&position, lat.sample(&mut rng), lst.sample(&mut rng));
            assert!((-90.0..=90.0).contains(&horizontal.altitude));
            assert!((0.0..360.0).contains(&horizontal.azimuth));
        }
    }

    #[test]
    fn test_nan_input_does_not_panic() {
        let position = Equatorial::new(f64::NAN, 10.0);
        let horizontal = horizontal_from_sidereal(&position, 10.0, 20.0);
        assert!(horizontal.altitude.is_nan());
    }
}
