//! Maya long count, with the Haab and Tzolk'in cycles.
//!
//! Uses the Goodman–Martinez–Thompson correlation: 13.0.0.0.0 4 Ajaw 8 Kumk'u
//! fell on JDN 584283 (11 August 3114 BC, proleptic Gregorian).

use std::fmt;

use crate::almanac::{self, Almanac};
use crate::date::Date;
use crate::error::Error;

const CALENDAR: &str = "Maya";

/// JDN of the start of the current great cycle.
pub const EPOCH: i64 = 584283;

const KIN_PER_BAKTUN: i64 = 144000;
const KIN_PER_KATUN: i64 = 7200;
const KIN_PER_TUN: i64 = 360;
const KIN_PER_UINAL: i64 = 20;

pub const HAAB_MONTHS: [&str; 19] = [
    "Pop", "Wo'", "Sip", "Sotz'", "Sek", "Xul", "Yaxk'in'", "Mol", "Ch'en", "Yax", "Sak'", "Keh",
    "Mak", "K'ank'in", "Muwan'", "Pax", "K'ayab", "Kumk'u", "Wayeb",
];

pub const TZOLKIN_DAYS: [&str; 20] = [
    "Imix'", "Ik'", "Ak'b'al", "K'an", "Chikchan", "Kimi", "Manik'", "Lamat", "Muluk", "Ok",
    "Chuwen", "Eb'", "B'en", "Ix", "Men", "Kib'", "Kab'an", "Etz'nab'", "Kawak", "Ajaw",
];

/// A date in the long count.
///
/// Only the baktun may fall outside its usual range; dates before the
/// epoch have a negative baktun.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LongCount {
    baktun: i32,
    katun: u32,
    tun: u32,
    uinal: u32,
    kin: u32,
}

/// Position in the 365-day vague year: `day` is `0..=19` (`0..=4` in
/// Wayeb) and `month` is `1..=19`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Haab {
    pub day: u32,
    pub month: u32,
}

/// Position in the 260-day ritual count: `number` is `1..=13` and `day` is
/// `1..=20`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tzolkin {
    pub number: u32,
    pub day: u32,
}

impl LongCount {
    /// # Example
    ///
    /// ```
    /// use almanako::Almanac;
    /// use almanako::maya::LongCount;
    ///
    /// // The end of the 13th baktun
    /// let date = LongCount::new(13, 0, 0, 0, 0).unwrap();
    /// assert_eq!("2012-12-21", date.to_date().unwrap().iso_gregorian());
    /// ```
    pub fn new(baktun: i32, katun: u32, tun: u32, uinal: u32, kin: u32) -> Result<Self, Error> {
        if katun >= 20 || tun >= 20 || uinal >= 18 || kin >= 20 {
            return Err(Error::InvalidDate {
                calendar: CALENDAR,
                year: baktun,
                month: katun,
                day: tun * 360 + uinal * 20 + kin,
            });
        }
        Ok(Self {
            baktun,
            katun,
            tun,
            uinal,
            kin,
        })
    }

    pub fn baktun(&self) -> i32 {
        self.baktun
    }
    pub fn katun(&self) -> u32 {
        self.katun
    }
    pub fn tun(&self) -> u32 {
        self.tun
    }
    pub fn uinal(&self) -> u32 {
        self.uinal
    }
    pub fn kin(&self) -> u32 {
        self.kin
    }

    /// Days elapsed since the epoch.
    pub fn days(&self) -> i64 {
        self.baktun as i64 * KIN_PER_BAKTUN
            + self.katun as i64 * KIN_PER_KATUN
            + self.tun as i64 * KIN_PER_TUN
            + self.uinal as i64 * KIN_PER_UINAL
            + self.kin as i64
    }

    pub fn haab(&self) -> Haab {
        let day = (self.days() + 8 + 17 * 20).rem_euclid(365);
        Haab {
            day: (day % 20) as u32,
            month: (day / 20 + 1) as u32,
        }
    }
    pub fn tzolkin(&self) -> Tzolkin {
        let days = self.days();
        Tzolkin {
            number: ((days + 3).rem_euclid(13) + 1) as u32,
            day: ((days + 19).rem_euclid(20) + 1) as u32,
        }
    }

    /// The full calendar round with the long count, e.g.
    /// `12.18.13.15.2 11 Ik' 15 K'ayab`.
    pub fn calendar_round(&self) -> String {
        format!("{} {} {}", self, self.tzolkin(), self.haab())
    }
}

impl Haab {
    pub fn month_name(&self) -> &'static str {
        HAAB_MONTHS[self.month as usize - 1]
    }
}

impl Tzolkin {
    pub fn day_name(&self) -> &'static str {
        TZOLKIN_DAYS[self.day as usize - 1]
    }
}

impl fmt::Display for Haab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.month_name())
    }
}

impl fmt::Display for Tzolkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.day_name())
    }
}

impl Almanac for LongCount {
    const NAME: &'static str = "Maya Calendar";

    fn from_date(date: Date) -> Self {
        let days = date.jdn() as i64 - EPOCH;
        let baktun = days.div_euclid(KIN_PER_BAKTUN);
        let rest = days.rem_euclid(KIN_PER_BAKTUN);
        Self {
            baktun: baktun as i32,
            katun: (rest / KIN_PER_KATUN) as u32,
            tun: (rest % KIN_PER_KATUN / KIN_PER_TUN) as u32,
            uinal: (rest % KIN_PER_TUN / KIN_PER_UINAL) as u32,
            kin: (rest % KIN_PER_UINAL) as u32,
        }
    }
    fn to_date(&self) -> Result<Date, Error> {
        almanac::date_from_jdn(CALENDAR, EPOCH + self.days())
    }
}

impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.baktun, self.katun, self.tun, self.uinal, self.kin
        )
    }
}
