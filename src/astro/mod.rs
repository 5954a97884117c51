//! Positional astronomy after Jean Meeus, *Astronomical Algorithms*.
//!
//! Only what the calendars in this crate need: the Sun's apparent position
//! (for the equation of time), the instants of equinoxes and solstices, and
//! the phases of the Moon. All instants are returned in [`Tt`](crate::time_scales::Tt).

pub mod moon;
pub mod season;
pub mod sun;

use std::f64::consts::PI;

/// Julian Date of the J2000.0 epoch.
pub const J2000: f64 = 2451545.0;
/// Days in a Julian century.
pub const JULIAN_CENTURY: f64 = 36525.0;
/// Days in a Julian millennium.
pub const JULIAN_MILLENNIUM: f64 = JULIAN_CENTURY * 10.0;
/// Mean tropical year in days.
pub const TROPICAL_YEAR: f64 = 365.24219878;

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / JULIAN_CENTURY
}

/// Sine of an angle in degrees.
pub fn dsin(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub fn dcos(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Reduces an angle in degrees to `[0, 360)`.
///
/// ```
/// use almanako::astro::fix_angle;
///
/// assert_eq!(10.0, fix_angle(370.0));
/// assert_eq!(350.0, fix_angle(-10.0));
/// ```
pub fn fix_angle(degrees: f64) -> f64 {
    degrees - 360.0 * (degrees / 360.0).floor()
}

/// Reduces an angle in radians to `[0, 2π)`.
pub fn fix_angle_rad(radians: f64) -> f64 {
    radians - 2.0 * PI * (radians / (2.0 * PI)).floor()
}

/// Evaluates `c[0] + c[1]·x + c[2]·x² + …`.
pub(crate) fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}
