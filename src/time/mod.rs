//! Time module for sidereal time calculations
//!
//! The chart only needs two things from a point in time: the Julian Day it
//! falls on and the orientation of the sky above Greenwich at that moment.
//! Both use the linear approximations common in planisphere software, good to
//! a fraction of a degree over several centuries around J2000.

use crate::constants::{DAY_S, GMST_AT_J2000_DEG, GMST_DEG_PER_DAY, J2000, UNIX_EPOCH_JD};
use crate::coordinates::normalize_degrees;
use chrono::{DateTime, Utc};

/// Julian Day for a UTC instant
///
/// The fractional part encodes the time of day (days start at noon).
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use skychart::time::julian_day;
///
/// let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(julian_day(&j2000), 2_451_545.0);
/// ```
pub fn julian_day(instant: &DateTime<Utc>) -> f64 {
    let seconds = instant.timestamp() as f64 + instant.timestamp_subsec_nanos() as f64 * 1e-9;
    seconds / DAY_S + UNIX_EPOCH_JD
}

/// Days elapsed since the J2000.0 epoch
pub fn days_since_j2000(instant: &DateTime<Utc>) -> f64 {
    julian_day(instant) - J2000
}

/// Greenwich mean sidereal time in degrees, normalized to [0, 360)
pub fn greenwich_sidereal_degrees(jd: f64) -> f64 {
    normalize_degrees(GMST_AT_J2000_DEG + GMST_DEG_PER_DAY * (jd - J2000))
}

/// Local sidereal time in degrees for an east-positive longitude, normalized to [0, 360)
pub fn local_sidereal_degrees(jd: f64, longitude_deg: f64) -> f64 {
    normalize_degrees(greenwich_sidereal_degrees(jd) + longitude_deg)
}

/// The J2000.0 epoch as a UTC instant
///
/// Used as the reference instant for catalog positions.
pub fn j2000_instant() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(946_728_000, 0).unwrap_or_default()
}
