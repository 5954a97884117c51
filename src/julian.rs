//! Proleptic Julian calendar.

use std::fmt;

use crate::almanac::{self, Almanac};
use crate::date::{Date, YearType};
use crate::error::Error;
use crate::gregorian::MONTH_NAMES;

const CALENDAR: &str = "Julian";

/// A date in the proleptic Julian calendar, with astronomical year numbering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct JulianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl JulianDate {
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

    fn jdn(&self) -> i64 {
        let (y, m, d) = (self.year as i64, self.month as i64, self.day as i64);
        let a = (14 - m) / 12;
        let y = y + 4800 - a;
        let m = m + 12 * a - 3;
        d + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - 32083
    }
}

/// Every fourth year is a leap year, without exception.
pub fn is_leap_year(year: i32) -> bool {
    YearType::from_julian(year).is_leap()
}

/// Number of days in `month`, or 0 for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        m => crate::gregorian::days_in_month(year, m),
    }
}

impl Almanac for JulianDate {
    const NAME: &'static str = "Julian Calendar";

    fn from_date(date: Date) -> Self {
        let c = date.jdn() as i64 + 32082;
        let d = (4 * c + 3) / 1461;
        let e = c - 1461 * d / 4;
        let m = (5 * e + 2) / 153;
        Self {
            year: (d - 4800 + m / 10) as i32,
            month: (m + 3 - 12 * (m / 10)) as u32,
            day: (e - (153 * m + 2) / 5 + 1) as u32,
        }
    }
    fn to_date(&self) -> Result<Date, Error> {
        almanac::date_from_jdn(CALENDAR, self.jdn())
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month_name(), self.day, self.year)
    }
}
