//! Indian national calendar (Saka era).
//!
//! Adopted in 1957, its year starts on the day after the vernal equinox by
//! the Gregorian reckoning: 22 March, or 21 March when the Gregorian year is
//! a leap year. Chaitra then has 31 days instead of 30.

use std::fmt;

use crate::almanac::{self, Almanac};
use crate::date::Date;
use crate::error::Error;
use crate::gregorian;

const CALENDAR: &str = "Indian Civil";

/// Difference between the Gregorian and the Saka year numbers for dates
/// from Chaitra to Pausa.
const SAKA_OFFSET: i32 = 78;

pub const MONTH_NAMES: [&str; 12] = [
    "Chaitra",
    "Vaisakha",
    "Jyaistha",
    "Asadha",
    "Sravana",
    "Bhadra",
    "Asvina",
    "Kartika",
    "Agrahayana",
    "Pausa",
    "Magha",
    "Phalguna",
];

/// A date in the Indian national calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct IndianCivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl IndianCivilDate {
    /// # Example
    ///
    /// ```
    /// use almanako::Almanac;
    /// use almanako::indian_civil::IndianCivilDate;
    ///
    /// let date = IndianCivilDate::new(1946, 10, 11).unwrap();
    /// assert_eq!("2025-01-01", date.to_date().unwrap().iso_gregorian());
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
}

/// A Saka year is a leap year when the Gregorian year it begins in is.
pub fn is_leap_year(year: i32) -> bool {
    // The Gregorian leap pattern repeats every 400 years.
    gregorian::is_leap_year((i64::from(year) + i64::from(SAKA_OFFSET)).rem_euclid(400) as i32)
}

/// Number of days in `month`, or 0 for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 if is_leap_year(year) => 31,
        1 => 30,
        2..=6 => 31,
        7..=12 => 30,
        _ => 0,
    }
}

pub fn month_name(month: u32) -> Result<&'static str, Error> {
    almanac::month_name(CALENDAR, &MONTH_NAMES, month)
}

/// JDN of 1 Chaitra of `year`.
fn first_of(year: i32) -> i64 {
    let day = if is_leap_year(year) { 21 } else { 22 };
    gregorian::jdn(i64::from(year) + i64::from(SAKA_OFFSET), 3, day)
}

fn days_before_month(year: i32, month: u32) -> i64 {
    (1..month).map(|m| days_in_month(year, m) as i64).sum()
}

impl Almanac for IndianCivilDate {
    const NAME: &'static str = "Indian Civil Calendar";

    fn from_date(date: Date) -> Self {
        let jdn = date.jdn() as i64;
        let mut year = date.gregorian().0 - SAKA_OFFSET;
        let mut start = first_of(year);
        if jdn < start {
            year -= 1;
            start = first_of(year);
        }

        let mut day_of_year = jdn - start;
        let mut month = 1;
        while month < 12 && day_of_year >= days_in_month(year, month) as i64 {
            day_of_year -= days_in_month(year, month) as i64;
            month += 1;
        }
        Self {
            year,
            month,
            day: day_of_year as u32 + 1,
        }
    }
    fn to_date(&self) -> Result<Date, Error> {
        let jdn = first_of(self.year) + days_before_month(self.year, self.month) + self.day as i64
            - 1;
        almanac::date_from_jdn(CALENDAR, jdn)
    }
}

impl fmt::Display for IndianCivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.day, self.month_name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(date: &IndianCivilDate) -> (i32, u32, u32) {
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn from_jdn() {
        let date = IndianCivilDate::from_date(Date::from_jdn(2446865));
        assert_eq!((1908, 12, 19), ymd(&date));
        assert_eq!("19 Phalguna, 1908", date.to_string());
    }

    #[test]
    fn new_year() {
        // 2024 is a Gregorian leap year
        let date = IndianCivilDate::from_date(Date::from_gregorian(2024, 3, 21).unwrap());
        assert_eq!((1946, 1, 1), ymd(&date));
        let date = IndianCivilDate::from_date(Date::from_gregorian(2025, 3, 21).unwrap());
        assert_eq!((1946, 12, 30), ymd(&date));
        let date = IndianCivilDate::from_date(Date::from_gregorian(2025, 3, 22).unwrap());
        assert_eq!((1947, 1, 1), ymd(&date));
        let date = IndianCivilDate::from_date(Date::from_gregorian(79, 3, 22).unwrap());
        assert_eq!((1, 1, 1), ymd(&date));
    }

    #[test]
    fn chaitra_length() {
        assert_eq!(31, days_in_month(1946, 1));
        assert_eq!(30, days_in_month(1947, 1));
        assert!(IndianCivilDate::new(1947, 1, 31).is_err());
        assert!(IndianCivilDate::new(1946, 1, 31).is_ok());
        let date = IndianCivilDate::from_date(Date::from_gregorian(2024, 4, 21).unwrap());
        assert_eq!((1946, 2, 1), ymd(&date));
    }

    #[test]
    fn new_year_day() {
        let date = IndianCivilDate::from_date(Date::from_gregorian(2025, 1, 1).unwrap());
        assert_eq!((1946, 10, 11), ymd(&date));
        assert_eq!("Pausa", date.month_name());
    }

    #[test]
    fn round_trip() {
        for jdn in (1_700_000..2_600_000).step_by(331) {
            let date = Date::from_jdn(jdn);
            assert_eq!(Ok(date), IndianCivilDate::from_date(date).to_date(), "{jdn}");
        }
    }

    #[test]
    fn names() {
        assert_eq!(Ok("Phalguna"), month_name(12));
        assert!(month_name(13).is_err());
    }
}
