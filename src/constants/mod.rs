//! Constants module for sky chart calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Unix epoch (1970-01-01T00:00:00Z) as Julian date
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

// Sidereal time
/// Greenwich mean sidereal time at J2000.0, in degrees
pub const GMST_AT_J2000_DEG: f64 = 280.460_618_37;
/// Sidereal rotation in degrees per solar day
pub const GMST_DEG_PER_DAY: f64 = 360.985_647_366_29;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees of right ascension per hour
pub const DEG_PER_HOUR: f64 = 15.0;
/// Mean obliquity of the ecliptic at J2000.0, in degrees
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_28;

// Chart defaults
/// Smallest allowed zoom factor
pub const ZOOM_MIN: f64 = 0.5;
/// Largest allowed zoom factor
pub const ZOOM_MAX: f64 = 3.0;
/// Zoom multiplier for a wheel step towards the user (zoom in)
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Zoom multiplier for a wheel step away from the user (zoom out)
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
/// Hit-test radius in chart-space pixels
pub const HIT_RADIUS_PX: f64 = 15.0;
/// Stars brighter than this magnitude get a glow and an inline label
pub const BRIGHT_STAR_MAGNITUDE: f64 = 1.5;

// Observer fallback (Port of Spain)
/// Fallback observer latitude in degrees
pub const FALLBACK_LATITUDE: f64 = 10.25;
/// Fallback observer longitude in degrees (east positive)
pub const FALLBACK_LONGITUDE: f64 = -61.63;
