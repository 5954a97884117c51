//! Tabular Islamic (Hijri) calendar.
//!
//! Months alternate between 30 and 29 days, and Dhu al-Hijjah gains a day in
//! the 11 leap years of each 30-year cycle. Which years of the cycle are
//! leap depends on the [`LeapYearRule`]; the civil epoch (16 July 622,
//! Julian) is used throughout.

use std::fmt;
use std::str::FromStr;

use crate::almanac::{self, Almanac};
use crate::date::Date;
use crate::error::Error;

const CALENDAR: &str = "Islamic";

/// JDN of 1 Muharram AH 1.
pub const EPOCH: i64 = 1948440;

const CYCLE_YEARS: i32 = 30;
const CYCLE_LEAP_YEARS: i64 = 11;

pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' ath-Thani",
    "Jumada al-Ula",
    "Jumada ath-Thaniyah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qa'dah",
    "Dhu al-Hijjah",
];

/// Distribution of leap years within the 30-year cycle.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LeapYearRule {
    /// Years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29; the most widely
    /// used arrangement.
    #[default]
    WestIslamic,
    /// As [`WestIslamic`](Self::WestIslamic) but with year 15 in place
    /// of 16.
    EastIslamic,
    /// Years 2, 5, 8, 10, 13, 16, 19, 21, 24, 27 and 29.
    TaiyabiIsmaili,
    /// Years 2, 5, 8, 11, 13, 16, 19, 21, 24, 27 and 30.
    HabashAlHasib,
}

impl LeapYearRule {
    pub const ALL: [LeapYearRule; 4] = [
        LeapYearRule::WestIslamic,
        LeapYearRule::EastIslamic,
        LeapYearRule::TaiyabiIsmaili,
        LeapYearRule::HabashAlHasib,
    ];

    fn leap_years(self) -> &'static [i32; 11] {
        match self {
            LeapYearRule::WestIslamic => &[2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29],
            LeapYearRule::EastIslamic => &[2, 5, 7, 10, 13, 15, 18, 21, 24, 26, 29],
            LeapYearRule::TaiyabiIsmaili => &[2, 5, 8, 10, 13, 16, 19, 21, 24, 27, 29],
            LeapYearRule::HabashAlHasib => &[2, 5, 8, 11, 13, 16, 19, 21, 24, 27, 30],
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            LeapYearRule::WestIslamic => "west-islamic",
            LeapYearRule::EastIslamic => "east-islamic",
            LeapYearRule::TaiyabiIsmaili => "taiyabi-ismaili",
            LeapYearRule::HabashAlHasib => "habash-al-hasib",
        }
    }

    pub fn is_leap_year(self, year: i32) -> bool {
        self.leap_years()
            .contains(&((i64::from(year) - 1).rem_euclid(CYCLE_YEARS.into()) as i32 + 1))
    }

    /// Number of leap years in `1..year`, counting negatively for years
    /// before 1.
    fn leap_years_before(self, year: i32) -> i64 {
        let elapsed = i64::from(year) - 1;
        let cycles = elapsed.div_euclid(CYCLE_YEARS.into());
        let position = elapsed.rem_euclid(CYCLE_YEARS.into()) as i32;
        let partial = self.leap_years().iter().filter(|&&y| y <= position).count() as i64;
        cycles * CYCLE_LEAP_YEARS + partial
    }
}

impl fmt::Display for LeapYearRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LeapYearRule {
    type Err = Error;

    /// Accepts the rule names in any case, with words separated by `-`, `_`
    /// or spaces.
    ///
    /// ```
    /// use almanako::islamic::LeapYearRule;
    ///
    /// assert_eq!(Ok(LeapYearRule::HabashAlHasib), "Habash al Hasib".parse());
    /// assert_eq!(Ok(LeapYearRule::EastIslamic), "EAST_ISLAMIC".parse());
    /// assert!("lunar".parse::<LeapYearRule>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = almanac::normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|rule| rule.name() == wanted)
            .ok_or_else(|| Error::UnknownLeapYearRule { name: s.to_owned() })
    }
}

/// A date in the tabular Islamic calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct IslamicDate {
    year: i32,
    month: u32,
    day: u32,
    rule: LeapYearRule,
}

impl IslamicDate {
    /// Creates a date under the default [`LeapYearRule`].
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::Almanac;
    /// use almanako::islamic::IslamicDate;
    ///
    /// let date = IslamicDate::new(1407, 7, 9).unwrap();
    /// assert_eq!("1987-03-10", date.to_date().unwrap().iso_gregorian());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        Self::with_rule(year, month, day, LeapYearRule::default())
    }
    pub fn with_rule(year: i32, month: u32, day: u32, rule: LeapYearRule) -> Result<Self, Error> {
        almanac::validate(CALENDAR, (year, month, day), 12, |m| {
            days_in_month(year, m, rule)
        })?;
        Ok(Self {
            year,
            month,
            day,
            rule,
        })
    }

    /// Represents `date` under `rule`.
    ///
    /// ```
    /// use almanako::Date;
    /// use almanako::islamic::{IslamicDate, LeapYearRule};
    ///
    /// // AH 15 is a leap year under one rule but not the other.
    /// let date = Date::from_jdn(1953755);
    /// let west = IslamicDate::from_date_with_rule(date, LeapYearRule::WestIslamic);
    /// let east = IslamicDate::from_date_with_rule(date, LeapYearRule::EastIslamic);
    /// assert_eq!((16, 1, 1), (west.year(), west.month(), west.day()));
    /// assert_eq!((15, 12, 30), (east.year(), east.month(), east.day()));
    /// ```
    pub fn from_date_with_rule(date: Date, rule: LeapYearRule) -> Self {
        let jdn = date.jdn() as i64;
        let mut year = ((jdn - EPOCH) * CYCLE_YEARS as i64).div_euclid(10631) as i32 + 1;
        while first_day(year + 1, rule) <= jdn {
            year += 1;
        }
        while first_day(year, rule) > jdn {
            year -= 1;
        }
        let day_of_year = jdn - first_day(year, rule);
        let mut month = 1;
        while month < 12 && month_offset(month + 1) <= day_of_year {
            month += 1;
        }
        Self {
            year,
            month,
            day: (day_of_year - month_offset(month) + 1) as u32,
            rule,
        }
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
    pub fn rule(&self) -> LeapYearRule {
        self.rule
    }
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }
    pub fn is_leap_year(&self) -> bool {
        self.rule.is_leap_year(self.year)
    }
}

/// Days from 1 Muharram to the first of `month`.
fn month_offset(month: u32) -> i64 {
    (59 * (month as i64 - 1) + 1) / 2
}

/// JDN of 1 Muharram of `year`.
fn first_day(year: i32, rule: LeapYearRule) -> i64 {
    EPOCH + 354 * (year as i64 - 1) + rule.leap_years_before(year)
}

/// Name of a 1-based month number.
pub fn month_name(month: u32) -> Result<&'static str, Error> {
    almanac::month_name(CALENDAR, &MONTH_NAMES, month)
}

/// Returns `true` if `year` is a leap year under the default rule.
pub fn is_leap_year(year: i32) -> bool {
    LeapYearRule::default().is_leap_year(year)
}

/// Number of days in `month`, or 0 for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32, rule: LeapYearRule) -> u32 {
    match month {
        12 if rule.is_leap_year(year) => 30,
        1..=12 if month % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

pub fn days_in_year(year: i32, rule: LeapYearRule) -> u32 {
    if rule.is_leap_year(year) { 355 } else { 354 }
}

impl Almanac for IslamicDate {
    const NAME: &'static str = "Islamic Calendar";

    fn from_date(date: Date) -> Self {
        Self::from_date_with_rule(date, LeapYearRule::default())
    }
    fn to_date(&self) -> Result<Date, Error> {
        let jdn = first_day(self.year, self.rule) + month_offset(self.month) + self.day as i64 - 1;
        almanac::date_from_jdn(CALENDAR, jdn)
    }
}

impl fmt::Display for IslamicDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month_name(), self.day, self.year)
    }
}
