//! Hebrew calendar
//!
//! The arithmetic calendar fixed by Hillel II. Years begin on 1 Tishri,
//! which is placed from the mean conjunction (molad) of Tishri and then
//! postponed by up to two days so that the year has an allowed length.
//! Leap years, 7 in each 19-year cycle, insert a second month of Adar.
//!
//! Months are numbered from Nisan (1), as in the Torah, so a year runs from
//! month 7 to the last month and then from 1 to 6.

use std::fmt as std_fmt;

use tracing::trace;

use crate::almanac::{self, Almanac};
use crate::date::Date;
use crate::error::Error;

pub mod fmt;

const CALENDAR: &str = "Hebrew";

/// JDN of 1 Tishri AM 1 (7 October 3761 BC, proleptic Julian).
pub const EPOCH: i64 = 347998;

/// Parts (1/1080 hour) in a day.
const DAY_PARTS: i64 = 25920;
/// Parts in a mean synodic month, 29d 12h 793p, beyond whole days.
const MONTH_PARTS: i64 = 13753;
/// Molad of Tishri AM 1 (BaHaRaD) in parts after the epoch day began.
const MOLAD_EPOCH_PARTS: i64 = 12084;

/// First month of the civil year.
const TISHRI: u32 = 7;

/// A date in the Hebrew calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HebrewDate {
    /// # Example
    ///
    /// ```
    /// use almanako::Almanac;
    /// use almanako::hebrew::HebrewDate;
    ///
    /// // Rosh Hashanah 5786
    /// let date = HebrewDate::new(5786, 7, 1).unwrap();
    /// assert_eq!("2025-09-23", date.to_date().unwrap().iso_gregorian());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        almanac::validate(CALENDAR, (year, month, day), months_in_year(year), |m| {
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
        // `new` and `from_date` only produce months in 1..=13.
        fmt::month(self.month, self.is_leap_year()).unwrap_or_default()
    }
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// The date written in Hebrew script with Hebrew numerals.
    ///
    /// ```
    /// use almanako::{Almanac, Date};
    /// use almanako::hebrew::HebrewDate;
    ///
    /// let date = HebrewDate::from_date(Date::from_jdn(2446865));
    /// assert_eq!(Ok("ט׳ אדר תשמ״ז".to_owned()), date.hebrew_form());
    /// ```
    pub fn hebrew_form(&self) -> Result<String, Error> {
        Ok(format!(
            "{} {} {}",
            fmt::to_hebrew_numeral(self.day)?,
            fmt::hebrew_month(self.month, self.is_leap_year()).ok_or(Error::InvalidMonth {
                calendar: CALENDAR,
                month: self.month,
            })?,
            fmt::to_hebrew_numeral(self.year.rem_euclid(1000) as u32)?
        ))
    }
}

/// Leap years are years 3, 6, 8, 11, 14, 17 and 19 of the Metonic cycle.
pub fn is_leap_year(year: i32) -> bool {
    (7 * year as i64 + 1).rem_euclid(19) < 7
}

pub fn months_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from the epoch to the molad of Tishri of `year`, after the
/// postponement for a molad falling on Sunday, Wednesday or Friday.
fn elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = MOLAD_EPOCH_PARTS + MONTH_PARTS * months;
    let day = months * 29 + parts.div_euclid(DAY_PARTS);
    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day + 1
    } else {
        day
    }
}

/// Further postponement keeping the year from being 356 or 382 days long.
fn new_year_delay(year: i64) -> i64 {
    let last = elapsed_days(year - 1);
    let present = elapsed_days(year);
    let next = elapsed_days(year + 1);
    if next - present == 356 {
        2
    } else if present - last == 382 {
        1
    } else {
        0
    }
}

/// JDN of 1 Tishri of `year`.
fn new_year(year: i64) -> i64 {
    EPOCH + elapsed_days(year) + new_year_delay(year)
}

/// Length of `year`: 353, 354 or 355 days, or 383, 384 or 385 in a leap
/// year.
///
/// ```
/// use almanako::hebrew::days_in_year;
///
/// assert_eq!(383, days_in_year(5784));
/// assert_eq!(355, days_in_year(5785));
/// assert_eq!(354, days_in_year(5786));
/// ```
pub fn days_in_year(year: i32) -> u32 {
    let year = i64::from(year);
    (new_year(year + 1) - new_year(year)) as u32
}

/// Number of days in `month`, or 0 for a month the year does not have.
///
/// Heshvan and Kislev vary so that the year has the length its
/// postponements give it.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 | 4 | 6 | 10 | 13 if month <= months_in_year(year) => 29,
        12 if !is_leap_year(year) => 29,
        8 if days_in_year(year) % 10 != 5 => 29,
        9 if days_in_year(year) % 10 == 3 => 29,
        1..=12 => 30,
        _ => 0,
    }
}

/// Name of `month` in `year`, distinguishing Adar I from Adar II in leap
/// years.
pub fn month_name(year: i32, month: u32) -> Result<&'static str, Error> {
    let invalid = Error::InvalidMonth {
        calendar: CALENDAR,
        month,
    };
    if month > months_in_year(year) {
        return Err(invalid);
    }
    fmt::month(month, is_leap_year(year)).ok_or(invalid)
}

/// Months of `year` in calendar order, from Tishri to Elul.
fn months_in_order(year: i32) -> impl Iterator<Item = u32> {
    (TISHRI..=months_in_year(year)).chain(1..TISHRI)
}

impl Almanac for HebrewDate {
    const NAME: &'static str = "Hebrew Calendar";

    fn from_date(date: Date) -> Self {
        let jdn = date.jdn() as i64;
        // Mean year of 35975351 / 98496 days.
        let mut year = ((jdn - EPOCH) * 98496).div_euclid(35975351) as i32 + 1;
        while new_year(i64::from(year) + 1) <= jdn {
            year += 1;
        }
        while new_year(year.into()) > jdn {
            year -= 1;
        }
        trace!(%date, year, "located hebrew year");

        let mut first = new_year(year.into());
        let mut month = TISHRI;
        for m in months_in_order(year) {
            month = m;
            let length = days_in_month(year, m) as i64;
            if jdn < first + length {
                break;
            }
            first += length;
        }
        Self {
            year,
            month,
            day: (jdn - first + 1) as u32,
        }
    }
    fn to_date(&self) -> Result<Date, Error> {
        let before: i64 = months_in_order(self.year)
            .take_while(|&m| m != self.month)
            .map(|m| days_in_month(self.year, m) as i64)
            .sum();
        almanac::date_from_jdn(
            CALENDAR,
            new_year(self.year.into()) + before + self.day as i64 - 1,
        )
    }
}

impl std_fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}
