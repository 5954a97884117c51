//! Proleptic Gregorian calendar.

use std::fmt;

use crate::almanac::{self, Almanac};
use crate::date::{Date, YearType};
use crate::error::Error;

const CALENDAR: &str = "Gregorian";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day names in ISO order, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A date in the proleptic Gregorian calendar, with astronomical year
/// numbering (1 BC is year `0`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct GregorianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl GregorianDate {
    /// # Example
    ///
    /// ```
    /// use almanako::gregorian::GregorianDate;
    ///
    /// assert!(GregorianDate::new(2024, 2, 29).is_ok());
    /// assert!(GregorianDate::new(2023, 2, 29).is_err());
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
    pub fn weekday_name(&self) -> Result<&'static str, Error> {
        let date = self.to_date()?;
        Ok(WEEKDAY_NAMES[date.day_of_week() as usize - 1])
    }
    /// Day of the year, 1 for January 1.
    pub fn day_of_year(&self) -> u32 {
        (1..self.month).map(|m| days_in_month(self.year, m)).sum::<u32>() + self.day
    }
}

pub fn is_leap_year(year: i32) -> bool {
    YearType::from_gregorian(year).is_leap()
}

/// Number of days in `month`, or 0 for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// JDN of a proleptic Gregorian date, valid for any year.
pub(crate) fn jdn(year: i64, month: u32, day: u32) -> i64 {
    let (y, m, d) = (year, month as i64, day as i64);
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32045
}

/// Three letter abbreviation of a month name.
pub fn short_month_name(month: u32) -> Result<&'static str, Error> {
    almanac::month_name(CALENDAR, &MONTH_NAMES, month).map(|name| &name[..3])
}

impl Almanac for GregorianDate {
    const NAME: &'static str = "Gregorian Calendar";

    fn from_date(date: Date) -> Self {
        let (year, month, day) = date.gregorian();
        Self {
            year,
            month: month as u32,
            day: day as u32,
        }
    }
    fn to_date(&self) -> Result<Date, Error> {
        almanac::date_from_jdn(CALENDAR, jdn(self.year.into(), self.month, self.day))
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month_name(), self.day, self.year)
    }
}
