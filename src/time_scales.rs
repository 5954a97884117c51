//! Deals with different time scales, specifically, conversion from TT into
//! UT (UTC or UT1).
//!
//! Every astronomical result in this crate (equinoxes, moon phases) is an
//! instant in TT and must pass through [`Ut::convert`] before it names a
//! civil date.

use crate::date::Date;

/// [Terristrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented in Julian date (JD).
///
/// Meeus' "Julian Ephemeris Day" (JDE) values are in this time scale. TDB
/// differs no more than centisenconds from it, so the two are treated
/// numerically the same in this crate.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

impl From<Tai> for Tt {
    fn from(tai: Tai) -> Tt {
        Tt(tai.0 + 32.184 / 86400.0)
    }
}

/// [International atomic time](https://en.wikipedia.org/wiki/International_Atomic_Time),
/// represented in Julian date (JD).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tai(pub f64);

impl From<Tt> for Tai {
    fn from(tt: Tt) -> Tai {
        Tai(tt.0 - 32.184 / 86400.0)
    }
}

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time), the actual
/// civil time used for determining the actual date at a given time point.
///
/// This can be either UTC (coordinated universal time, based on TAI with leap
/// seconds) or UT1 (mean solar time on the Prime Meridian) depending on the
/// year. Specifically, UTC from 1972-01-01T00:00Z to the expiry of the known
/// leap second table, UT1 otherwise.
///
/// Before 1972, UT1 is derived from tabulated and extrapolated values of
/// ΔT, see [`delta_t`]. After the leap second table expires, conversion
/// relies on a parabolic fit with
/// [a method described here](https://astro.ukho.gov.uk/nao/lvm/).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Converts a TAI (or other time scale easily convertible to TAI) into
    /// UT.
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::time_scales::{Tt, Ut};
    /// let tt = Tt(2451543.166666667);
    /// let ut = Ut::convert(tt);
    /// assert_eq!((1999, 12, 30), ut.date_in_timezone(0).gregorian());
    ///
    /// // Before UTC, ΔT is about 29 seconds in 1950.
    /// let ut = Ut::convert(Tt(2433282.5));
    /// assert!((ut.0 - 2433282.5) * 86400.0 < -28.0);
    /// ```
    pub fn convert<T>(time: T) -> Self
    where
        T: Into<Tai>,
    {
        let tai = time.into();
        let &leap_seconds::Data {
            starts,
            ref leap_seconds,
            expires,
            c2,
        } = leap_seconds::data();

        if tai < starts {
            let tt = Tt::from(tai);
            let year = 2000.0 + (tt.0 - 2451544.5) / 365.2425;
            return Ut(tt.0 - delta_t(year) / 86400.0); // NOTE UT1, ne UTC
        } else if tai > expires {
            let diff = leap_seconds::estimate(tai) + c2;
            return Ut(tai.0 - diff / 86400.0); // NOTE UT1, ne UTC
        }

        let ls = match leap_seconds.partition_point(|ls| ls.tai <= tai) {
            0 => return Ut(tai.0 - 10.0 / 86400.0),
            i => &leap_seconds[i - 1],
        };
        // 23:59:60 spreads over the two TAI seconds around the insertion
        let leap = ((tai.0 - ls.tai.0) * 86400.0).min(2.0) / 2.0;
        Ut(tai.0 - (ls.delta_secs as f64 + leap) / 86400.0)
    }
    /// Returns the date at the time point in timezone ahead (east) of UTC by
    /// `tz_offset_minutes`minutes.
    ///
    /// For Paris in winter (UTC+1), `tz_offset_minutes` should be +60.
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::time_scales::{Tt, Ut};
    /// let tt = Tt(2451543.166666667);
    /// let ut = Ut::convert(tt);
    /// assert_eq!((1999, 12, 30), ut.date_in_timezone(480).gregorian());
    /// ```
    pub fn date_in_timezone(&self, tz_offset_minutes: i32) -> Date {
        let jdn = (self.0 + tz_offset_minutes as f64 / 1440.0).round();
        Date::from_jdn(jdn.max(0.0) as u32)
    }
}

/// ΔT = TT − UT1 in seconds for a (fractional) year.
///
/// Years 1620 through 2000 interpolate a biennial table of observed values;
/// other years use the polynomial extrapolations of Morrison & Stephenson
/// (before 948) and Meeus (afterwards, with a correction term that keeps the
/// curve continuous for the 21st century).
///
/// # Example
///
/// ```
/// use almanako::time_scales::delta_t;
///
/// assert!((delta_t(1900.0) - (-2.8)).abs() < 1e-9);
/// assert!((delta_t(2015.0) - 86.41925).abs() < 1e-6);
/// ```
pub fn delta_t(year: f64) -> f64 {
    if (1620.0..=2000.0).contains(&year) {
        let pos = (year - 1620.0) / 2.0;
        let i = (pos.floor() as usize).min(DELTA_T_TABLE.len() - 2);
        let frac = pos - i as f64;
        return DELTA_T_TABLE[i] + (DELTA_T_TABLE[i + 1] - DELTA_T_TABLE[i]) * frac;
    }
    let t = (year - 2000.0) / 100.0;
    if year < 948.0 {
        return 2177.0 + 497.0 * t + 44.1 * t * t;
    }
    let mut dt = 102.0 + 102.0 * t + 25.3 * t * t;
    if year > 2000.0 && year < 2100.0 {
        dt += 0.37 * (year - 2100.0);
    }
    dt
}

/// Observed ΔT every second year from 1620 to 2002.
#[rustfmt::skip]
const DELTA_T_TABLE: [f64; 192] = [
    121.0, 112.0, 103.0, 95.0, 88.0, 82.0, 77.0, 72.0, 68.0, 63.0,
    60.0, 56.0, 53.0, 51.0, 48.0, 46.0, 44.0, 42.0, 40.0, 38.0,
    35.0, 33.0, 31.0, 29.0, 26.0, 24.0, 22.0, 20.0, 18.0, 16.0,
    14.0, 12.0, 11.0, 10.0, 9.0, 8.0, 7.0, 7.0, 7.0, 7.0,
    7.0, 7.0, 8.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0, 10.0,
    10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 11.0, 11.0,
    11.0, 11.0, 12.0, 12.0, 12.0, 12.0, 13.0, 13.0, 13.0, 14.0,
    14.0, 14.0, 14.0, 15.0, 15.0, 15.0, 15.0, 15.0, 16.0, 16.0,
    16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 15.0, 15.0, 14.0, 13.0,
    13.1, 12.5, 12.2, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 11.9,
    11.6, 11.0, 10.2, 9.2, 8.2, 7.1, 6.2, 5.6, 5.4, 5.3,
    5.4, 5.6, 5.9, 6.2, 6.5, 6.8, 7.1, 7.3, 7.5, 7.6,
    7.7, 7.3, 6.2, 5.2, 2.7, 1.4, -1.2, -2.8, -3.8, -4.8,
    -5.5, -5.3, -5.6, -5.7, -5.9, -6.0, -6.3, -6.5, -6.2, -4.7,
    -2.8, -0.1, 2.6, 5.3, 7.7, 10.4, 13.3, 16.0, 18.2, 20.2,
    21.1, 22.4, 23.5, 23.8, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0,
    24.3, 25.3, 26.2, 27.3, 28.2, 29.1, 30.0, 30.7, 31.4, 32.2,
    33.1, 34.0, 35.0, 36.5, 38.3, 40.2, 42.2, 44.5, 46.5, 48.5,
    50.5, 52.2, 53.8, 54.9, 55.8, 56.9, 58.3, 60.0, 61.6, 63.0,
    65.0, 66.6,
];

mod leap_seconds {
    use super::{Tai, Tt};
    use crate::date::Date;
    use std::sync::LazyLock;

    pub const DATES: &[(i32, i32, i32)] = &[
        (1972, 6, 30),
        (1972, 12, 31),
        (1973, 12, 31),
        (1974, 12, 31),
        (1975, 12, 31),
        (1976, 12, 31),
        (1977, 12, 31),
        (1978, 12, 31),
        (1979, 12, 31),
        (1981, 6, 30),
        (1982, 6, 30),
        (1983, 6, 30),
        (1985, 6, 30),
        (1987, 12, 31),
        (1989, 12, 31),
        (1990, 12, 31),
        (1992, 6, 30),
        (1993, 6, 30),
        (1994, 6, 30),
        (1995, 12, 31),
        (1997, 6, 30),
        (1998, 12, 31),
        (2005, 12, 31),
        (2008, 12, 31),
        (2012, 6, 30),
        (2015, 6, 30),
        (2016, 12, 31),
    ];
    /// Last day covered by IERS Bulletin C announcing no further leap second.
    pub const DATE_EXPIRES: (i32, i32, i32) = (2026, 6, 30);

    #[derive(Debug, Clone)]
    pub struct Data {
        pub starts: Tai,
        pub leap_seconds: Vec<LeapSecond>,
        pub expires: Tai,
        pub c2: f64,
    }
    #[derive(Debug, Clone)]
    pub struct LeapSecond {
        pub tai: Tai,
        pub delta_secs: i32,
    }

    static COMPUTED: LazyLock<Data> = LazyLock::new(|| {
        let jdn = |(y, m, d): (i32, i32, i32)| {
            Date::from_gregorian(y, m, d).map_or(0, |date| date.jdn()) as f64
        };
        let starts = Tai(jdn((1972, 1, 1)) + 10.0 / 86400.0);
        let leap_seconds: Vec<_> = (10..)
            .zip(DATES)
            .map(|(delta_secs, &ymd)| LeapSecond {
                tai: Tai(jdn(ymd) + (43199 + delta_secs) as f64 / 86400.0),
                delta_secs,
            })
            .collect();
        let expires = Tai(jdn(DATE_EXPIRES) + (43199 + 10 + DATES.len()) as f64 / 86400.0);
        let c2 = (DATES.len() + 10) as f64 - estimate(expires);
        Data {
            starts,
            leap_seconds,
            expires,
            c2,
        }
    });

    pub fn data() -> &'static Data {
        &COMPUTED
    }

    pub fn estimate<T: Into<Tt>>(tt: T) -> f64 {
        use std::f64::consts::PI;
        let tt = tt.into();
        let y = (tt.0 - 2451544.5) / 365.2425 + 2000.0;
        let t = (y - 1825.0) / 100.0;
        31.4115 * t * t + 284.8435805251424 * (2.0 * PI * (t + 0.75) / 14.0).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tt_to_ut() {
        let tt = Tt(2451543.166666667);
        let ut = Ut::convert(tt);
        assert_eq!((1999, 12, 30), ut.date_in_timezone(0).gregorian());
        assert_eq!((1999, 12, 30), ut.date_in_timezone(480).gregorian());
        let ut_midnight = Ut(ut.0 + (32.0 + 32.184) / 86400.0);
        let ut_before_midnight = Ut(ut_midnight.0 - 1.0 / 86400.0);
        assert_eq!(
            (1999, 12, 30),
            ut_before_midnight.date_in_timezone(480).gregorian()
        );
        assert_eq!(
            (1999, 12, 31),
            ut_midnight.date_in_timezone(480).gregorian()
        );
    }

    #[test]
    fn leap_second_offset_in_2020() {
        // TT - UTC = 37 + 32.184 seconds after 2017-01-01
        let tt = Tt(2458849.5);
        let ut = Ut::convert(tt);
        assert!(((tt.0 - ut.0) * 86400.0 - 69.184).abs() < 1e-4);
    }

    #[test]
    fn after_expiry_stays_close() {
        let tt = Tt(2462501.166666667 + 5.647029454550371);
        let ut = Ut::convert(tt);
        assert!((ut.0 - 2462506.81319).abs() <= 30.0 / 86400.0);
    }

    #[test]
    fn before_utc_uses_delta_t() {
        let tt = Tt(2415020.5); // 1900-01-01
        let ut = Ut::convert(tt);
        assert!(((tt.0 - ut.0) * 86400.0 - delta_t(1900.0)).abs() < 0.01);
    }

    #[test]
    fn delta_t_extrapolations() {
        assert!((delta_t(0.0) - (2177.0 - 497.0 * 20.0 + 44.1 * 400.0)).abs() < 1e-9);
        assert!((delta_t(2200.0) - (102.0 + 204.0 + 101.2)).abs() < 1e-9);
        assert!((delta_t(1621.0) - 116.5).abs() < 1e-9);
    }
}
