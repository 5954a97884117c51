//! The trait shared by every calendar system.

use std::fmt;

use crate::date::Date;
use crate::error::Error;
use crate::julian_day::JulianDay;

/// A date in some calendar system, convertible through [`Date`].
///
/// `Display` gives the date alone (e.g. `March 10, 1987`), while
/// [`describe`](Almanac::describe) prefixes it with the calendar's name.
///
/// # Example
///
/// ```
/// use almanako::{Almanac, Date};
/// use almanako::julian::JulianDate;
///
/// let date = Date::from_gregorian(1987, 3, 10).unwrap();
/// let julian = JulianDate::from_date(date);
/// assert_eq!("Julian Calendar: February 25, 1987", julian.describe());
/// assert_eq!(Ok(date), julian.to_date());
/// ```
pub trait Almanac: Sized + fmt::Display {
    /// Human-readable name of the calendar, e.g. `"Hebrew Calendar"`.
    const NAME: &'static str;

    /// Represents `date` in this calendar.
    fn from_date(date: Date) -> Self;
    /// Converts back into a calendar-independent date.
    ///
    /// Fails only when the date lies before JDN 0.
    fn to_date(&self) -> Result<Date, Error>;

    /// Calendar name and date on one line, e.g.
    /// `Julian Calendar: February 25, 1987`.
    fn describe(&self) -> String {
        format!("{}: {}", Self::NAME, self)
    }

    /// Represents the civil day containing `jd`.
    fn from_julian_day(jd: JulianDay) -> Self {
        Self::from_date(jd.date())
    }
    /// The instant at the start of this day.
    fn to_julian_day(&self) -> Result<JulianDay, Error> {
        self.to_date().map(JulianDay::from_date)
    }

    /// Today's date according to the local wall clock.
    fn today() -> Self {
        Self::from_date(Date::today())
    }
}

/// Converts a date between two calendar systems.
///
/// ```
/// use almanako::almanac::convert;
/// use almanako::gregorian::GregorianDate;
/// use almanako::persian::PersianDate;
///
/// let nowruz = GregorianDate::new(2025, 3, 20).unwrap();
/// let persian: PersianDate = convert(&nowruz).unwrap();
/// assert_eq!((1404, 1, 1), (persian.year(), persian.month(), persian.day()));
/// ```
pub fn convert<A: Almanac, B: Almanac>(from: &A) -> Result<B, Error> {
    from.to_date().map(B::from_date)
}

/// Checks that `month` and `day` name a day of a calendar year with
/// `months` months whose lengths are given by `days_in_month`.
pub(crate) fn validate(
    calendar: &'static str,
    (year, month, day): (i32, u32, u32),
    months: u32,
    days_in_month: impl FnOnce(u32) -> u32,
) -> Result<(), Error> {
    if (1..=months).contains(&month) && day >= 1 && day <= days_in_month(month) {
        Ok(())
    } else {
        Err(Error::InvalidDate {
            calendar,
            year,
            month,
            day,
        })
    }
}

/// Looks up the name of a 1-based `month` in `names`.
pub(crate) fn month_name(
    calendar: &'static str,
    names: &[&'static str],
    month: u32,
) -> Result<&'static str, Error> {
    month
        .checked_sub(1)
        .and_then(|i| names.get(i as usize))
        .copied()
        .ok_or(Error::InvalidMonth { calendar, month })
}

/// Converts a signed day number, failing before JDN 0.
pub(crate) fn date_from_jdn(calendar: &'static str, jdn: i64) -> Result<Date, Error> {
    Date::from_jdn_checked(jdn).ok_or(Error::OutOfRange { calendar })
}

/// Lower-cases `name`, drops punctuation and joins its words with `-`, so
/// that `"New Year's Day"` and `"new_years_day"` compare equal.
pub(crate) fn normalize_name(name: &str) -> String {
    name.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_bad_days() {
        let thirty = |_| 30;
        assert!(validate("Test", (1, 1, 1), 12, thirty).is_ok());
        assert!(validate("Test", (1, 12, 30), 12, thirty).is_ok());
        assert!(validate("Test", (1, 0, 1), 12, thirty).is_err());
        assert!(validate("Test", (1, 13, 1), 12, thirty).is_err());
        assert!(validate("Test", (1, 1, 0), 12, thirty).is_err());
        assert_eq!(
            Err(Error::InvalidDate {
                calendar: "Test",
                year: 1,
                month: 2,
                day: 31
            }),
            validate("Test", (1, 2, 31), 12, thirty)
        );
    }

    #[test]
    fn month_names_are_one_based() {
        let names = ["A", "B"];
        assert_eq!(Ok("A"), month_name("Test", &names, 1));
        assert_eq!(Ok("B"), month_name("Test", &names, 2));
        assert!(month_name("Test", &names, 0).is_err());
        assert!(month_name("Test", &names, 3).is_err());
    }

    #[test]
    fn names_normalize_to_kebab_case() {
        assert_eq!("new-years-day", normalize_name("New Year's Day"));
        assert_eq!("new-years-day", normalize_name("new_years_day"));
        assert_eq!("martin-luther-king-jr-day", normalize_name("Martin Luther King Jr. Day"));
        assert_eq!("eid-al-fitr", normalize_name("  EID  al-Fitr "));
        assert_eq!("", normalize_name(" - "));
    }

    #[test]
    fn negative_day_numbers_are_out_of_range() {
        assert_eq!(
            Err(Error::OutOfRange { calendar: "Test" }),
            date_from_jdn("Test", -1)
        );
        assert_eq!(Ok(Date::from_jdn(0)), date_from_jdn("Test", 0));
    }
}
