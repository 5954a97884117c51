//! Arithmetic Persian (Solar Hijri) calendar.
//!
//! Leap years follow the 2820-year grand cycle of 683 leap years rather
//! than the observed vernal equinox in Tehran, so a few years around the
//! present differ from the official calendar (e.g. 1403).

use std::fmt;

use crate::almanac::{self, Almanac};
use crate::date::Date;
use crate::error::Error;

const CALENDAR: &str = "Persian";

/// JDN of 1 Farvardin AP 1.
pub const EPOCH: i64 = 1948321;

const CYCLE_YEARS: i64 = 2820;
const CYCLE_DAYS: i64 = 1029983;
/// Year from which the cycle arithmetic is counted.
const CYCLE_BASE: i64 = 474;

pub const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// A date in the Persian calendar, with astronomical year numbering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PersianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl PersianDate {
    /// # Example
    ///
    /// ```
    /// use almanako::Almanac;
    /// use almanako::persian::PersianDate;
    ///
    /// // Nowruz 1404
    /// let date = PersianDate::new(1404, 1, 1).unwrap();
    /// assert_eq!("2025-03-20", date.to_date().unwrap().iso_gregorian());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        almanac::validate(CALENDAR, (year, month, day), 12, |m| {
            days_in_month(year, m)
        })?;
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn day(&self) -> u32 {
        self.day
    }
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }
    /// Day of the year, 1 for 1 Farvardin.
    pub fn day_of_year(&self) -> u32 {
        days_before_month(self.month) as u32 + self.day
    }

    fn jdn(&self) -> i64 {
        let (base, year) = cycle_position(self.year);
        self.day as i64
            + days_before_month(self.month)
            + (year * 682 - 110).div_euclid(2816)
            + (year - 1) * 365
            + base.div_euclid(CYCLE_YEARS) * CYCLE_DAYS
            + EPOCH
            - 1
    }
    /// JDN of 1 Farvardin of `year`.
    fn first_of(year: i32) -> i64 {
        Self {
            year,
            month: 1,
            day: 1,
        }
        .jdn()
    }
}

/// Splits `year` into its offset from the cycle base and its position in
/// the grand cycle, counted from 474.
fn cycle_position(year: i32) -> (i64, i64) {
    let base = year as i64 - CYCLE_BASE;
    (base, CYCLE_BASE + base.rem_euclid(CYCLE_YEARS))
}

fn days_before_month(month: u32) -> i64 {
    let month = month as i64;
    if month <= 7 {
        (month - 1) * 31
    } else {
        (month - 1) * 30 + 6
    }
}

/// ```
/// use almanako::persian::is_leap_year;
///
/// let leap: Vec<i32> = (1395..=1408).filter(|&y| is_leap_year(y)).collect();
/// assert_eq!(vec![1395, 1399, 1404, 1408], leap);
/// ```
pub fn is_leap_year(year: i32) -> bool {
    let (_, year) = cycle_position(year);
    ((year + 38) * 682).rem_euclid(2816) < 682
}

/// Number of days in `month`, or 0 for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

pub fn month_name(month: u32) -> Result<&'static str, Error> {
    almanac::month_name(CALENDAR, &MONTH_NAMES, month)
}

impl Almanac for PersianDate {
    const NAME: &'static str = "Persian Calendar";

    fn from_date(date: Date) -> Self {
        let jdn = date.jdn() as i64;
        let days = jdn - Self::first_of(CYCLE_BASE as i32 + 1);
        let cycle = days.div_euclid(CYCLE_DAYS);
        let day_of_cycle = days.rem_euclid(CYCLE_DAYS);
        let year_of_cycle = if day_of_cycle == CYCLE_DAYS - 1 {
            CYCLE_YEARS
        } else {
            let (a, b) = (day_of_cycle / 366, day_of_cycle % 366);
            (2134 * a + 2816 * b + 2815) / 1028522 + a + 1
        };
        let year = (year_of_cycle + CYCLE_YEARS * cycle + CYCLE_BASE) as i32;

        let day_of_year = jdn - Self::first_of(year) + 1;
        let month = match day_of_year {
            ..=186 => (day_of_year + 30) / 31,
            _ => (day_of_year - 6 + 29) / 30,
        } as u32;
        let first_of_month = Self::first_of(year) + days_before_month(month);
        Self {
            year,
            month,
            day: (jdn - first_of_month + 1) as u32,
        }
    }
    fn to_date(&self) -> Result<Date, Error> {
        almanac::date_from_jdn(CALENDAR, self.jdn())
    }
}

impl fmt::Display for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(date: &PersianDate) -> (i32, u32, u32) {
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn from_jdn() {
        let date = PersianDate::from_date(Date::from_jdn(2446865));
        assert_eq!((1365, 12, 19), ymd(&date));
        assert_eq!("19 Esfand 1365", date.to_string());
        assert_eq!("Persian Calendar: 19 Esfand 1365", date.describe());
    }

    #[test]
    fn nowruz() {
        let date = PersianDate::from_date(Date::from_gregorian(2025, 3, 20).unwrap());
        assert_eq!((1404, 1, 1), ymd(&date));
        assert_eq!(Ok(Date::from_jdn(EPOCH as u32)), PersianDate::new(1, 1, 1).unwrap().to_date());
    }

    #[test]
    fn esfand_in_common_and_leap_years() {
        assert!(PersianDate::new(1403, 12, 30).is_err());
        assert!(PersianDate::new(1404, 12, 30).is_ok());
        let before_epoch = PersianDate::from_date(Date::from_jdn(EPOCH as u32 - 1));
        assert_eq!((0, 12, 30), ymd(&before_epoch));
    }

    #[test]
    fn month_boundaries() {
        let date = PersianDate::new(1365, 6, 31).unwrap();
        assert_eq!(186, date.day_of_year());
        let next = PersianDate::from_date(date.to_date().unwrap() + 1);
        assert_eq!((1365, 7, 1), ymd(&next));
        assert!(PersianDate::new(1365, 7, 31).is_err());
        assert_eq!(Ok("Mehr"), month_name(7));
    }

    #[test]
    fn grand_cycle_has_683_leap_years() {
        let leap = (475..475 + 2820).filter(|&y| is_leap_year(y)).count();
        assert_eq!(683, leap);
    }

    #[test]
    fn round_trip() {
        for jdn in (0..2_600_000).step_by(997) {
            let date = Date::from_jdn(jdn);
            assert_eq!(Ok(date), PersianDate::from_date(date).to_date(), "{jdn}");
        }
    }
}
