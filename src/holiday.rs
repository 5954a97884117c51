//! Movable and fixed holidays of several traditions.
//!
//! Every holiday resolves to the single date on which it falls within a
//! given Gregorian year. Islamic holidays can occur twice in one Gregorian
//! year; the first occurrence is taken.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::almanac::{self, Almanac};
use crate::date::Date;
use crate::error::Error;
use crate::gregorian::GregorianDate;
use crate::hebrew::HebrewDate;
use crate::islamic::{IslamicDate, LeapYearRule};

/// Difference between the Hebrew year beginning in autumn and the
/// Gregorian year it begins in.
const HEBREW_YEAR_OFFSET: i32 = 3761;

const MONDAY: i32 = 1;
const THURSDAY: i32 = 4;
const SUNDAY: i32 = 7;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tradition {
    Christian,
    Islamic,
    Jewish,
    UsFederal,
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tradition::Christian => "Christian",
            Tradition::Islamic => "Islamic",
            Tradition::Jewish => "Jewish",
            Tradition::UsFederal => "US Federal",
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Holiday {
    AshWednesday,
    PalmSunday,
    HolyThursday,
    GoodFriday,
    Easter,
    Ascension,
    Pentecost,
    TrinitySunday,
    Advent,
    Ashura,
    Ramadan,
    EidAlFitr,
    EidAlAdha,
    Passover,
    Shavuot,
    RoshHashanah,
    YomKippur,
    Sukkot,
    SheminiAtzeret,
    NewYearsDay,
    MartinLutherKingJrDay,
    WashingtonsBirthday,
    MemorialDay,
    IndependenceDay,
    LaborDay,
    ColumbusDay,
    VeteransDay,
    Thanksgiving,
    Christmas,
}

impl Holiday {
    pub const ALL: [Holiday; 29] = [
        Holiday::AshWednesday,
        Holiday::PalmSunday,
        Holiday::HolyThursday,
        Holiday::GoodFriday,
        Holiday::Easter,
        Holiday::Ascension,
        Holiday::Pentecost,
        Holiday::TrinitySunday,
        Holiday::Advent,
        Holiday::Ashura,
        Holiday::Ramadan,
        Holiday::EidAlFitr,
        Holiday::EidAlAdha,
        Holiday::Passover,
        Holiday::Shavuot,
        Holiday::RoshHashanah,
        Holiday::YomKippur,
        Holiday::Sukkot,
        Holiday::SheminiAtzeret,
        Holiday::NewYearsDay,
        Holiday::MartinLutherKingJrDay,
        Holiday::WashingtonsBirthday,
        Holiday::MemorialDay,
        Holiday::IndependenceDay,
        Holiday::LaborDay,
        Holiday::ColumbusDay,
        Holiday::VeteransDay,
        Holiday::Thanksgiving,
        Holiday::Christmas,
    ];

    pub fn name(self) -> &'static str {
        use Holiday::*;
        match self {
            AshWednesday => "Ash Wednesday",
            PalmSunday => "Palm Sunday",
            HolyThursday => "Holy Thursday",
            GoodFriday => "Good Friday",
            Easter => "Easter",
            Ascension => "Ascension",
            Pentecost => "Pentecost",
            TrinitySunday => "Trinity Sunday",
            Advent => "Advent",
            Ashura => "Ashura",
            Ramadan => "Ramadan",
            EidAlFitr => "Eid al-Fitr",
            EidAlAdha => "Eid al-Adha",
            Passover => "Passover",
            Shavuot => "Shavuot",
            RoshHashanah => "Rosh Hashanah",
            YomKippur => "Yom Kippur",
            Sukkot => "Sukkot",
            SheminiAtzeret => "Shemini Atzeret",
            NewYearsDay => "New Year's Day",
            MartinLutherKingJrDay => "Martin Luther King Jr. Day",
            WashingtonsBirthday => "Washington's Birthday",
            MemorialDay => "Memorial Day",
            IndependenceDay => "Independence Day",
            LaborDay => "Labor Day",
            ColumbusDay => "Columbus Day",
            VeteransDay => "Veterans Day",
            Thanksgiving => "Thanksgiving",
            Christmas => "Christmas",
        }
    }

    pub fn tradition(self) -> Tradition {
        use Holiday::*;
        match self {
            AshWednesday | PalmSunday | HolyThursday | GoodFriday | Easter | Ascension
            | Pentecost | TrinitySunday | Advent => Tradition::Christian,
            Ashura | Ramadan | EidAlFitr | EidAlAdha => Tradition::Islamic,
            Passover | Shavuot | RoshHashanah | YomKippur | Sukkot | SheminiAtzeret => {
                Tradition::Jewish
            }
            NewYearsDay | MartinLutherKingJrDay | WashingtonsBirthday | MemorialDay
            | IndependenceDay | LaborDay | ColumbusDay | VeteransDay | Thanksgiving
            | Christmas => Tradition::UsFederal,
        }
    }

    /// Date of the holiday in Gregorian year `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::Holiday;
    ///
    /// let date = Holiday::Thanksgiving.date_in(2015).unwrap();
    /// assert_eq!("2015-11-26", date.iso_gregorian());
    /// ```
    pub fn date_in(self, year: i32) -> Result<Date, Error> {
        self.date_in_with_rule(year, LeapYearRule::default())
    }

    /// As [`date_in`](Self::date_in), placing Islamic holidays with the
    /// given leap year rule.
    pub fn date_in_with_rule(self, year: i32, rule: LeapYearRule) -> Result<Date, Error> {
        use Holiday::*;
        let date = match self {
            AshWednesday => easter(year)? + -46,
            PalmSunday => easter(year)? + -7,
            HolyThursday => easter(year)? + -3,
            GoodFriday => easter(year)? + -2,
            Easter => easter(year)?,
            Ascension => easter(year)? + 39,
            Pentecost => easter(year)? + 49,
            TrinitySunday => easter(year)? + 56,
            Advent => gregorian(year, 11, 27)?.on_or_after(SUNDAY),

            Ashura => first_islamic(year, 1, 10, rule)?,
            Ramadan => first_islamic(year, 9, 1, rule)?,
            EidAlFitr => first_islamic(year, 10, 1, rule)?,
            EidAlAdha => first_islamic(year, 12, 10, rule)?,

            Passover => hebrew(year, HEBREW_YEAR_OFFSET - 1, 1, 15)?,
            Shavuot => hebrew(year, HEBREW_YEAR_OFFSET - 1, 3, 6)?,
            RoshHashanah => hebrew(year, HEBREW_YEAR_OFFSET, 7, 1)?,
            YomKippur => hebrew(year, HEBREW_YEAR_OFFSET, 7, 10)?,
            Sukkot => hebrew(year, HEBREW_YEAR_OFFSET, 7, 15)?,
            SheminiAtzeret => hebrew(year, HEBREW_YEAR_OFFSET, 7, 22)?,

            NewYearsDay => gregorian(year, 1, 1)?,
            MartinLutherKingJrDay => gregorian(year, 1, 15)?.on_or_after(MONDAY),
            WashingtonsBirthday => gregorian(year, 2, 15)?.on_or_after(MONDAY),
            MemorialDay => gregorian(year, 5, 31)?.on_or_before(MONDAY),
            IndependenceDay => gregorian(year, 7, 4)?,
            LaborDay => gregorian(year, 9, 1)?.on_or_after(MONDAY),
            ColumbusDay => gregorian(year, 10, 8)?.on_or_after(MONDAY),
            VeteransDay => gregorian(year, 11, 11)?,
            Thanksgiving => gregorian(year, 11, 22)?.on_or_after(THURSDAY),
            Christmas => gregorian(year, 12, 25)?,
        };
        trace!(holiday = self.name(), year, %date, "resolved holiday");
        Ok(date)
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Holiday {
    type Err = Error;

    /// Matches holiday names in any case, with words separated by `-`, `_`
    /// or spaces. Apostrophes and periods may be left out.
    ///
    /// ```
    /// use almanako::Holiday;
    ///
    /// assert_eq!(Ok(Holiday::AshWednesday), "ash-wednesday".parse());
    /// assert_eq!(Ok(Holiday::NewYearsDay), "NEW_YEARS_DAY".parse());
    /// assert_eq!(Ok(Holiday::EidAlFitr), "Eid al-Fitr".parse());
    /// assert!("Arbor Day".parse::<Holiday>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = almanac::normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|holiday| almanac::normalize_name(holiday.name()) == wanted)
            .ok_or_else(|| Error::UnknownHoliday { name: s.to_owned() })
    }
}

/// Easter Sunday of Gregorian year `year`, by the Gregorian computus.
///
/// # Example
///
/// ```
/// use almanako::holiday::easter;
///
/// assert_eq!("2000-04-23", easter(2000).unwrap().iso_gregorian());
/// ```
pub fn easter(year: i32) -> Result<Date, Error> {
    let y = year as i64;
    let a = y.rem_euclid(19);
    let (b, c) = (y.div_euclid(100), y.rem_euclid(100));
    let (d, e) = (b.div_euclid(4), b.rem_euclid(4));
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let (i, k) = (c / 4, c % 4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    gregorian(year, (n / 31) as u32, (n % 31 + 1) as u32)
}

fn gregorian(year: i32, month: u32, day: u32) -> Result<Date, Error> {
    GregorianDate::new(year, month, day)?.to_date()
}

/// `day` of Hebrew `month` in the Hebrew year `offset` years after
/// Gregorian `year`.
fn hebrew(year: i32, offset: i32, month: u32, day: u32) -> Result<Date, Error> {
    let year = year
        .checked_add(offset)
        .ok_or(Error::OutOfRange { calendar: "Hebrew" })?;
    HebrewDate::new(year, month, day)?.to_date()
}

/// First date in Gregorian `year` falling on `day` of Islamic `month`.
fn first_islamic(year: i32, month: u32, day: u32, rule: LeapYearRule) -> Result<Date, Error> {
    let new_year = gregorian(year, 1, 1)?;
    let islamic_year = IslamicDate::from_date_with_rule(new_year, rule).year();
    let date = IslamicDate::with_rule(islamic_year, month, day, rule)?.to_date()?;
    if date >= new_year {
        Ok(date)
    } else {
        IslamicDate::with_rule(islamic_year + 1, month, day, rule)?.to_date()
    }
}
