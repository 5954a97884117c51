//! Calendar-independent date.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};

/// Julian day number of 0001-01-01 (proleptic Gregorian) minus one, i.e. the
/// offset between chrono's day count from the common era and JDN.
const JDN_CE_OFFSET: i64 = 1721425;

/// A calendar-independent date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
/// Every calendar in this crate converts through this type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Creates a `Date` from a signed day number, returning `None` before
    /// JDN 0.
    pub(crate) fn from_jdn_checked(jdn: i64) -> Option<Self> {
        u32::try_from(jdn).ok().map(Self::from_jdn)
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Returns today's date according to the local wall clock.
    pub fn today() -> Self {
        let today = chrono::Local::now().date_naive();
        // Any date the system clock can report lies well after JDN 0.
        Self::from_naive(today).unwrap_or(Self::from_jdn(0))
    }
    /// Converts a chrono date, returning `None` before JDN 0.
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::Date;
    /// use chrono::NaiveDate;
    ///
    /// let naive = NaiveDate::from_ymd_opt(1987, 3, 10).unwrap();
    /// assert_eq!(2446865, Date::from_naive(naive).unwrap().jdn());
    /// ```
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        Self::from_jdn_checked(date.num_days_from_ce() as i64 + JDN_CE_OFFSET)
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (year as i64, month as i64, day as i64);
        Self::from_jdn_checked(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn % 7 + 1) as i32
    }

    /// Returns the first date on or after `self` falling on ISO weekday
    /// `day_of_week`.
    pub fn on_or_after(self, day_of_week: i32) -> Date {
        self + (day_of_week - self.day_of_week()).rem_euclid(7)
    }
    /// Returns the last date on or before `self` falling on ISO weekday
    /// `day_of_week`.
    pub fn on_or_before(self, day_of_week: i32) -> Date {
        self + -(self.day_of_week() - day_of_week).rem_euclid(7)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

/// Adds a number of days, saturating at JDN 0.
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn.saturating_add_signed(rhs))
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Determines if `year` is a leap year in Julian calendar.
    pub fn from_julian(year: i32) -> Self {
        if year.rem_euclid(4) == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

impl From<bool> for YearType {
    fn from(leap: bool) -> Self {
        if leap { Self::Leap } else { Self::Common }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(1987, 3, 10).unwrap();
        assert_eq!(2446865, date.jdn());
        assert_eq!(None, Date::from_gregorian(-4800, 1, 1));
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2446865);
        assert_eq!((1987, 3, 10), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        let date = Date::from_gregorian(1987, 3, 10).unwrap();
        assert_eq!(2, date.day_of_week());
    }

    #[test]
    fn weekday_search() {
        // 2015-11-27 is a Friday
        let date = Date::from_gregorian(2015, 11, 27).unwrap();
        assert_eq!("2015-11-29", date.on_or_after(7).iso_gregorian());
        assert_eq!("2015-11-27", date.on_or_after(5).iso_gregorian());
        assert_eq!("2015-11-23", date.on_or_before(1).iso_gregorian());
        assert_eq!("2015-11-27", date.on_or_before(5).iso_gregorian());
    }

    #[test]
    fn from_chrono() {
        let naive = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(Some(Date::from_jdn(2451545)), Date::from_naive(naive));
    }

    #[test]
    fn julian_leap_years() {
        assert!(YearType::from_julian(1900).is_leap());
        assert!(!YearType::from_gregorian(1900).is_leap());
        assert!(YearType::from_julian(-4).is_leap());
        assert!(!YearType::from_julian(-3).is_leap());
    }

    #[test]
    fn day_arithmetic() {
        let date = Date::from_jdn(2446865);
        assert_eq!(Date::from_jdn(2446875), date + 10);
        assert_eq!(Date::from_jdn(2446855), date + -10);
        assert_eq!(-10, (date + -10) - date);
        assert_eq!(Date::from_jdn(0), Date::from_jdn(5) + -10);
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }
}
