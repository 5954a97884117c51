//! French Republican calendar
//!
//! Each year begins at midnight (Paris true solar time) of the day on which
//! the autumnal equinox falls in Paris, the rule written into the decree of
//! 4 frimaire an II. Year I began on 22 September 1792. Every month has three
//! décades of ten days, and five or six complementary days (the
//! Sans-culottides) close the year.
//!
//! The equinox comes from [`astro::season`](crate::astro::season), so years
//! are astronomically exact rather than following any proposed leap rule.

use std::fmt as std_fmt;

use tracing::debug;

use crate::almanac::{self, Almanac};
use crate::astro::season::{self, Season};
use crate::astro::sun::equation_of_time;
use crate::date::Date;
use crate::error::Error;
use crate::time_scales::delta_t;

pub mod fmt;

const CALENDAR: &str = "French Republican";

/// Longitude of the Paris Observatory, 2°20′15″ east, as a fraction of a day.
const PARIS_MERIDIAN: f64 = (2.0 + 20.0 / 60.0 + 15.0 / 3600.0) / 360.0;

/// Gregorian year in which Republican year 1 began.
const EPOCH_YEAR: i32 = 1792;

/// A date in the French Republican calendar.
///
/// `decade` is the 1-based décade (ten-day week) of the month and `day` the
/// 1-based day within it. The Sans-culottides (month 13) form a single
/// short décade.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FrenchRepublicanDate {
    year: i32,
    month: u32,
    decade: u32,
    day: u32,
}

impl FrenchRepublicanDate {
    /// # Example
    ///
    /// ```
    /// use almanako::Almanac;
    /// use almanako::french_republican::FrenchRepublicanDate;
    ///
    /// // 9 Thermidor an II
    /// let date = FrenchRepublicanDate::new(2, 11, 1, 9).unwrap();
    /// assert_eq!("1794-07-27", date.to_date().unwrap().iso_gregorian());
    /// ```
    pub fn new(year: i32, month: u32, decade: u32, day: u32) -> Result<Self, Error> {
        // The following year must begin in a representable Gregorian year.
        if year.checked_add(EPOCH_YEAR).is_none() {
            return Err(Error::OutOfRange { calendar: CALENDAR });
        }
        let valid = match month {
            1..=12 => (1..=3).contains(&decade) && (1..=10).contains(&day),
            13 => decade == 1 && day >= 1 && day <= days_in_month(year, 13),
            _ => false,
        };
        if !valid {
            return Err(Error::InvalidDate {
                calendar: CALENDAR,
                year,
                month,
                day: (decade.max(1) - 1) * 10 + day,
            });
        }
        Ok(Self {
            year,
            month,
            decade,
            day,
        })
    }
    /// Creates a date from the day of the month, `1..=30`.
    pub fn from_day_of_month(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        if day == 0 {
            return Err(Error::InvalidDate {
                calendar: CALENDAR,
                year,
                month,
                day,
            });
        }
        Self::new(year, month, (day - 1) / 10 + 1, (day - 1) % 10 + 1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn decade(&self) -> u32 {
        self.decade
    }
    /// Day within the décade, `1..=10`.
    pub fn day(&self) -> u32 {
        self.day
    }
    /// Day within the month, `1..=30`.
    pub fn day_of_month(&self) -> u32 {
        (self.decade - 1) * 10 + self.day
    }

    pub fn month_name(&self) -> &'static str {
        fmt::MONTH_NAMES[self.month as usize - 1]
    }
    /// Name of the day within the décade, Primidi through Décadi.
    pub fn weekday_name(&self) -> &'static str {
        fmt::WEEKDAY_NAMES[self.day as usize - 1]
    }
    /// The plant, animal, tool or festival the day is named after.
    pub fn day_name(&self) -> &'static str {
        match self.month {
            13 => fmt::FESTIVALS[self.day as usize - 1],
            m => fmt::DAY_NAMES[m as usize - 1][self.day_of_month() as usize - 1],
        }
    }
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// The year in Roman numerals where it can be written so, otherwise in
    /// Arabic numerals.
    pub fn year_numeral(&self) -> String {
        u32::try_from(self.year)
            .ok()
            .and_then(|y| fmt::to_roman(y).ok())
            .unwrap_or_else(|| self.year.to_string())
    }

    /// Spells the date out the way it was written in official documents.
    ///
    /// ```
    /// use almanako::{Almanac, Date};
    /// use almanako::french_republican::FrenchRepublicanDate;
    ///
    /// let date = FrenchRepublicanDate::from_date(Date::from_jdn(2446865));
    /// assert_eq!(
    ///     "Nonidi 19 Ventôse an CXCV de la République (Cerfeuil)",
    ///     date.long_form()
    /// );
    /// ```
    pub fn long_form(&self) -> String {
        format!(
            "{} {} {} an {} de la République ({})",
            self.weekday_name(),
            self.day_of_month(),
            self.month_name(),
            self.year_numeral(),
            self.day_name()
        )
    }
}

/// JDN of the day of the autumnal equinox in Paris apparent solar time.
fn equinox_day(gregorian_year: i32) -> i64 {
    let tt = season::equinox(gregorian_year, Season::SeptemberEquinox);
    let ut = tt.0 - delta_t(gregorian_year as f64) / 86400.0;
    let apparent = ut + equation_of_time(tt.0) + PARIS_MERIDIAN;
    (apparent + 0.5).floor() as i64
}

/// JDN of 1 Vendémiaire of Republican year `year`, if the Gregorian year
/// it begins in fits an `i32`.
fn new_year_day(year: i32) -> Option<i64> {
    year.checked_add(EPOCH_YEAR - 1).map(equinox_day)
}

/// Returns `true` if `year` has six Sans-culottides.
///
/// ```
/// use almanako::french_republican::is_leap_year;
///
/// let leap: Vec<i32> = (1..=12).filter(|&y| is_leap_year(y)).collect();
/// assert_eq!(vec![3, 7, 11], leap);
/// ```
pub fn is_leap_year(year: i32) -> bool {
    let next = year.checked_add(1).and_then(new_year_day);
    match (new_year_day(year), next) {
        (Some(start), Some(end)) => end.checked_sub(start) == Some(366),
        _ => false,
    }
}

/// Number of days in `month`, or 0 for a month outside `1..=13`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1..=12 => 30,
        13 if is_leap_year(year) => 6,
        13 => 5,
        _ => 0,
    }
}

/// First day of Republican year `year`.
pub fn first_day_of_year(year: i32) -> Result<Date, Error> {
    let jdn = new_year_day(year).ok_or(Error::OutOfRange { calendar: CALENDAR })?;
    almanac::date_from_jdn(CALENDAR, jdn)
}

impl Almanac for FrenchRepublicanDate {
    const NAME: &'static str = "French Republican Calendar";

    fn from_date(date: Date) -> Self {
        let jdn = date.jdn() as i64;
        let mut gregorian_year = date.gregorian().0;
        let mut start = equinox_day(gregorian_year);
        if jdn < start {
            gregorian_year -= 1;
            start = equinox_day(gregorian_year);
        }
        debug!(%date, equinox = start, "located republican new year");
        let days = (jdn - start) as u32;
        let rest = days % 30;
        Self {
            year: gregorian_year - EPOCH_YEAR + 1,
            month: days / 30 + 1,
            decade: rest / 10 + 1,
            day: rest % 10 + 1,
        }
    }
    fn to_date(&self) -> Result<Date, Error> {
        let start = new_year_day(self.year).ok_or(Error::OutOfRange { calendar: CALENDAR })?;
        let offset = 30 * (self.month as i64 - 1) + self.day_of_month() as i64 - 1;
        let jdn = start
            .checked_add(offset)
            .ok_or(Error::OutOfRange { calendar: CALENDAR })?;
        almanac::date_from_jdn(CALENDAR, jdn)
    }
}

impl std_fmt::Display for FrenchRepublicanDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(
            f,
            "{} {}, {}",
            self.day_of_month(),
            self.month_name(),
            self.year_numeral()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymdd(date: &FrenchRepublicanDate) -> (i32, u32, u32, u32) {
        (date.year(), date.month(), date.decade(), date.day())
    }

    #[test]
    fn from_jdn() {
        let date = FrenchRepublicanDate::from_date(Date::from_jdn(2446865));
        assert_eq!((195, 6, 2, 9), ymdd(&date));
        assert_eq!("19 Ventôse, CXCV", date.to_string());
        assert_eq!("Nonidi", date.weekday_name());
    }

    #[test]
    fn epoch() {
        let date = FrenchRepublicanDate::from_date(Date::from_gregorian(1792, 9, 22).unwrap());
        assert_eq!((1, 1, 1, 1), ymdd(&date));
        assert_eq!("1 Vendémiaire, I", date.to_string());
        assert_eq!(Date::from_gregorian(1792, 9, 22), first_day_of_year(1).ok());
    }

    #[test]
    fn historic_dates() {
        // 9 Thermidor an II
        let date = FrenchRepublicanDate::from_date(Date::from_gregorian(1794, 7, 27).unwrap());
        assert_eq!((2, 11, 1, 9), ymdd(&date));
        // 10 Nivôse an XIV, the last day before the return to the Gregorian
        // calendar
        let date = FrenchRepublicanDate::from_date(Date::from_gregorian(1805, 12, 31).unwrap());
        assert_eq!((14, 4, 1, 10), ymdd(&date));
    }

    #[test]
    fn modern_new_years() {
        for (year, gregorian) in [(224, (2015, 9, 23)), (229, (2020, 9, 22)), (233, (2024, 9, 22))] {
            let (y, m, d) = gregorian;
            let date = FrenchRepublicanDate::from_date(Date::from_gregorian(y, m, d).unwrap());
            assert_eq!((year, 1, 1, 1), ymdd(&date), "{gregorian:?}");
        }
        let date = FrenchRepublicanDate::from_date(Date::from_gregorian(2026, 10, 16).unwrap());
        assert_eq!((235, 1, 3, 4), ymdd(&date));
    }

    #[test]
    fn sans_culottides() {
        let date = FrenchRepublicanDate::new(3, 13, 1, 6).unwrap();
        assert_eq!("La Fête de la Révolution", date.day_name());
        let next = FrenchRepublicanDate::from_date(date.to_date().unwrap() + 1);
        assert_eq!((4, 1, 1, 1), ymdd(&next));
        assert!(FrenchRepublicanDate::new(4, 13, 1, 6).is_err());
        assert!(FrenchRepublicanDate::new(4, 13, 2, 1).is_err());
    }

    #[test]
    fn round_trip_over_years() {
        for year in [1, 2, 100, 195, 235, 400] {
            let first = first_day_of_year(year).unwrap();
            let date = FrenchRepublicanDate::from_date(first);
            assert_eq!((year, 1, 1, 1), ymdd(&date));
            let last = FrenchRepublicanDate::from_date(first + -1);
            assert_eq!(year - 1, last.year());
            assert_eq!(13, last.month());
        }
    }

    #[test]
    fn day_of_month_constructor() {
        let date = FrenchRepublicanDate::from_day_of_month(195, 6, 19).unwrap();
        assert_eq!((195, 6, 2, 9), ymdd(&date));
        let date = FrenchRepublicanDate::from_day_of_month(195, 6, 30).unwrap();
        assert_eq!((195, 6, 3, 10), ymdd(&date));
        assert!(FrenchRepublicanDate::from_day_of_month(195, 6, 0).is_err());
        assert!(FrenchRepublicanDate::from_day_of_month(195, 6, 31).is_err());
    }

    #[test]
    fn extreme_years() {
        assert_eq!(
            Err(Error::OutOfRange { calendar: CALENDAR }),
            FrenchRepublicanDate::new(i32::MAX, 13, 1, 1)
        );
        assert!(FrenchRepublicanDate::new(i32::MAX - EPOCH_YEAR + 1, 1, 1, 1).is_err());
        assert!(!is_leap_year(i32::MAX));
        assert!(first_day_of_year(i32::MAX).is_err());
        assert!(first_day_of_year(i32::MIN).is_err());
    }

    #[test]
    fn years_without_roman_numerals() {
        let date = FrenchRepublicanDate::new(-5, 1, 1, 1).unwrap();
        assert_eq!("1 Vendémiaire, -5", date.to_string());
    }
}
