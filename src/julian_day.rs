//! Continuous Julian Date, the interchange point between civil days and
//! astronomical instants.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::date::Date;
use crate::time_scales::Ut;

/// Julian Date of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2440587.5;
/// Offset of the Modified Julian Date.
const MJD_OFFSET: f64 = 2400000.5;

/// A Julian Date (JD) counted in fractional days since noon, January 1,
/// 4713 BC (proleptic Julian calendar), in universal time.
///
/// Unlike [`Date`] this represents an instant; a civil day runs from
/// `jdn - 0.5` to `jdn + 0.5`.
///
/// # Example
///
/// ```
/// use almanako::{Date, JulianDay};
///
/// let date = Date::from_gregorian(1987, 3, 10).unwrap();
/// let jd = JulianDay::from_date(date);
/// assert_eq!(2446864.5, jd.0);
/// assert_eq!(date, jd.date());
/// assert_eq!("Julian Day: 2446864.5", jd.to_string());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay(pub f64);

impl JulianDay {
    /// The instant at the start (midnight) of `date`.
    pub fn from_date(date: Date) -> Self {
        Self(date.jdn() as f64 - 0.5)
    }
    /// The current instant according to the system clock.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }
    /// The instant of `time`, to the millisecond.
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self(UNIX_EPOCH_JD + time.timestamp_millis() as f64 / 86_400_000.0)
    }
    /// The instant as a UTC timestamp, rounded to the millisecond.
    ///
    /// Returns `None` outside the range chrono can represent.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let millis = ((self.0 - UNIX_EPOCH_JD) * 86_400_000.0).round() as i64;
        DateTime::from_timestamp_millis(millis)
    }

    /// The civil (UT) day containing this instant.
    pub fn date(&self) -> Date {
        Date::from_jdn((self.0 + 0.5).floor().max(0.0) as u32)
    }
    /// Noon of the civil day containing this instant.
    pub fn at_noon(&self) -> Self {
        Self((self.0 + 0.5).floor())
    }
    /// Midnight at the start of the civil day containing this instant.
    pub fn at_midnight(&self) -> Self {
        Self((self.0 - 0.5).floor() + 0.5)
    }
    /// Modified Julian Date (days since 1858-11-17T00:00).
    pub fn modified(&self) -> f64 {
        self.0 - MJD_OFFSET
    }

    /// The same time of day `days` days later.
    pub fn plus_days(&self, days: i32) -> Self {
        Self(self.0 + days as f64)
    }
    /// The same time of day `days` days earlier.
    pub fn minus_days(&self, days: i32) -> Self {
        Self(self.0 - days as f64)
    }
}

impl From<Date> for JulianDay {
    fn from(date: Date) -> Self {
        Self::from_date(date)
    }
}

impl From<Ut> for JulianDay {
    fn from(ut: Ut) -> Self {
        Self(ut.0)
    }
}

impl From<JulianDay> for Ut {
    fn from(jd: JulianDay) -> Self {
        Ut(jd.0)
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Julian Day: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_and_midnight() {
        let jd = JulianDay(2446864.7);
        assert_eq!(2446865.0, jd.at_noon().0);
        assert_eq!(2446864.5, jd.at_midnight().0);
        let jd = JulianDay(2446864.2);
        assert_eq!(2446864.0, jd.at_noon().0);
        assert_eq!(2446863.5, jd.at_midnight().0);
        let jd = JulianDay(2446864.5);
        assert_eq!(2446865.0, jd.at_noon().0);
        assert_eq!(2446864.5, jd.at_midnight().0);
    }

    #[test]
    fn civil_day_boundaries() {
        let date = Date::from_jdn(2446865);
        assert_eq!(date, JulianDay(2446864.5).date());
        assert_eq!(date, JulianDay(2446865.49).date());
        assert_eq!(date + 1, JulianDay(2446865.5).date());
    }

    #[test]
    fn modified_julian_date() {
        assert_eq!(0.0, JulianDay(2400000.5).modified());
        assert_eq!(51544.5, JulianDay(2451545.0).modified());
    }

    #[test]
    fn day_arithmetic() {
        let jd = JulianDay(2451545.0);
        assert_eq!(2451555.0, jd.plus_days(10).0);
        assert_eq!(2451535.0, jd.minus_days(10).0);
    }

    #[test]
    fn chrono_timestamps() {
        let noon = JulianDay(2451545.0).to_datetime().unwrap();
        assert_eq!("2000-01-01 12:00:00 UTC", noon.to_string());
        assert_eq!(JulianDay(2451545.0), JulianDay::from_datetime(noon));
    }

    #[test]
    fn now_is_after_2020() {
        assert!(JulianDay::now().0 > 2458849.5);
    }
}
