//! Utilities for converting between dates in different calendars, along
//! with the lunar phase, equinoxes and holidays.
//!
//! Every calendar converts through the calendar-independent [`Date`], a
//! Julian day number, and implements the [`Almanac`] trait. Supported
//! calendars are the proleptic Gregorian and Julian, the French Republican
//! (astronomical rule), the Maya long count, the tabular Islamic, the
//! Hebrew, the arithmetic Persian and the Indian national calendar.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use almanako::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Converting into other calendars:
//!
//! ```
//! use almanako::{Almanac, Date};
//! use almanako::hebrew::HebrewDate;
//! use almanako::maya::LongCount;
//!
//! let date = Date::from_gregorian(1987, 3, 10).unwrap();
//!
//! assert_eq!("Hebrew Calendar: 9 Adar 5747", HebrewDate::from_date(date).describe());
//! assert_eq!("12.18.13.15.2", LongCount::from_date(date).to_string());
//! ```
//!
//! Moon quarters and holidays:
//!
//! ```
//! use almanako::{Date, Holiday};
//! use almanako::astro::moon::{MoonPhase, MoonQuarters};
//!
//! let date = Date::from_gregorian(2015, 4, 5).unwrap();
//! assert_eq!(Ok(date), Holiday::Easter.date_in(2015));
//!
//! let quarters = MoonQuarters::containing(date, 0);
//! let (phase, full_moon) = quarters.dates(0)[2];
//! assert_eq!(MoonPhase::Full, phase);
//! assert_eq!("2015-04-04", full_moon.iso_gregorian());
//! ```

pub mod almanac;
pub mod astro;
pub mod date;
pub mod error;
pub mod french_republican;
pub mod gregorian;
pub mod hebrew;
pub mod holiday;
pub mod indian_civil;
pub mod islamic;
pub mod julian;
pub mod julian_day;
pub mod maya;
pub mod persian;
pub mod time_scales;

pub use almanac::Almanac;
pub use date::{Date, YearType};
pub use error::Error;
pub use holiday::Holiday;
pub use julian_day::JulianDay;
