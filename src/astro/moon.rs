//! Phases of the Moon.
//!
//! Instants of the principal phases follow Meeus chapter 49; the phase angle
//! at an arbitrary instant uses the low precision series of chapter 48.

use std::fmt;

use tracing::trace;

use super::{centuries_since_j2000, dcos, dsin, fix_angle, polynomial};
use crate::date::Date;
use crate::time_scales::{Tt, Ut};

/// Mean length of a synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588861;

/// The four principal phases of the Moon.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoonPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 4] = [
        MoonPhase::New,
        MoonPhase::FirstQuarter,
        MoonPhase::Full,
        MoonPhase::LastQuarter,
    ];

    /// Fraction of a lunation after the new moon.
    pub fn offset(self) -> f64 {
        match self {
            MoonPhase::New => 0.0,
            MoonPhase::FirstQuarter => 0.25,
            MoonPhase::Full => 0.5,
            MoonPhase::LastQuarter => 0.75,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::Full => "Full Moon",
            MoonPhase::LastQuarter => "Last Quarter",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(coefficient, power of E, multipliers of M, M', F, Ω)`
type PhaseTerm = (f64, i32, [i32; 4]);

/// Instant of a principal phase of the Moon.
///
/// `k` counts lunations from the new moon of 2000-01-06: integral values
/// give new moons, and `.25`, `.5`, `.75` give first quarter, full and last
/// quarter moons. Other fractions are rounded to the nearest quarter.
///
/// # Example
///
/// ```
/// use almanako::astro::moon::phase_instant;
///
/// // Meeus example 49.a: new moon of 1977 February
/// assert!((phase_instant(-283.0).0 - 2443192.65118).abs() < 1e-5);
/// // Meeus example 49.b: last quarter of 2044 January
/// assert!((phase_instant(544.75).0 - 2467636.49186).abs() < 1e-5);
/// ```
pub fn phase_instant(k: f64) -> Tt {
    let t = k / 1236.85;
    let mut jde = polynomial(
        &[2451550.09766, 0.0, 0.00015437, -0.000000150, 0.00000000073],
        t,
    ) + SYNODIC_MONTH * k;
    let e = polynomial(&[1.0, -0.002516, -0.0000074], t);
    let m = polynomial(&[2.5534, 0.0, -0.0000014, -0.00000011], t) + 29.10535670 * k;
    let mp = polynomial(&[201.5643, 0.0, 0.0107582, 0.00001238, -0.000000058], t)
        + 385.81693528 * k;
    let f = polynomial(&[160.7108, 0.0, -0.0016118, -0.00000227, 0.000000011], t)
        + 390.67050284 * k;
    let omega = polynomial(&[124.7746, 0.0, 0.0020672, 0.00000215], t) - 1.56375588 * k;
    let args = [m, mp, f, omega];

    let quarter = ((k - k.floor()) * 4.0).round() as i32 % 4;
    let terms: &[PhaseTerm] = match quarter {
        0 => &NEW_MOON_TERMS,
        2 => &FULL_MOON_TERMS,
        _ => &QUARTER_TERMS,
    };
    for &(coefficient, e_power, mult) in terms {
        let angle: f64 = mult.iter().zip(args).map(|(&n, a)| n as f64 * a).sum();
        jde += coefficient * e.powi(e_power) * dsin(angle);
    }
    if quarter % 2 == 1 {
        let w = 0.00306 - 0.00038 * e * dcos(m) + 0.00026 * dcos(mp)
            - 0.00002 * dcos(mp - m)
            + 0.00002 * dcos(mp + m)
            + 0.00002 * dcos(2.0 * f);
        jde += if quarter == 1 { w } else { -w };
    }
    for (i, &(coefficient, a0, rate)) in PLANETARY_TERMS.iter().enumerate() {
        let mut a = a0 + rate * k;
        if i == 0 {
            a -= 0.009173 * t * t;
        }
        jde += coefficient * dsin(a);
    }
    Tt(jde)
}

/// Elongation of the Moon from the Sun in degrees, `[0, 360)`: 0 at new
/// moon, 90 at first quarter, 180 at full moon and 270 at last quarter.
///
/// # Example
///
/// ```
/// use almanako::astro::moon::{lunar_phase, phase_instant};
///
/// let full = phase_instant(296.5); // 2023-12-27
/// assert!((lunar_phase(full.0) - 180.0).abs() < 0.5);
/// ```
pub fn lunar_phase(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let d = fix_angle(polynomial(
        &[
            297.8501921,
            445267.1114034,
            -0.0018819,
            1.0 / 545868.0,
            -1.0 / 113065000.0,
        ],
        t,
    ));
    let m = fix_angle(polynomial(
        &[357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0],
        t,
    ));
    let mp = fix_angle(polynomial(
        &[
            134.9633964,
            477198.8675055,
            0.0087414,
            1.0 / 69699.0,
            -1.0 / 14712000.0,
        ],
        t,
    ));
    fix_angle(
        d + 6.289 * dsin(mp) - 2.100 * dsin(m) + 1.274 * dsin(2.0 * d - mp)
            + 0.658 * dsin(2.0 * d)
            + 0.214 * dsin(2.0 * mp)
            + 0.110 * dsin(d),
    )
}

/// Illuminated fraction of the Moon's disk in percent for a phase angle
/// from [`lunar_phase`].
///
/// ```
/// use almanako::astro::moon::illumination_from_phase;
///
/// assert_eq!(0.0, illumination_from_phase(0.0));
/// assert!((illumination_from_phase(90.0) - 50.0).abs() < 1e-9);
/// assert_eq!(100.0, illumination_from_phase(180.0));
/// ```
pub fn illumination_from_phase(phase: f64) -> f64 {
    (1.0 - dcos(phase)) / 2.0 * 100.0
}

/// Illuminated percentage of the Moon at `jd`.
pub fn illumination(jd: f64) -> f64 {
    illumination_from_phase(lunar_phase(jd))
}

/// Common name of the Moon's appearance for a phase angle.
pub fn describe_phase(phase: f64) -> &'static str {
    const NAMES: [&str; 8] = [
        "New Moon",
        "Waxing Crescent",
        "First Quarter",
        "Waxing Gibbous",
        "Full Moon",
        "Waning Gibbous",
        "Last Quarter",
        "Waning Crescent",
    ];
    let octant = (fix_angle(phase + 22.5) / 45.0).floor() as usize;
    NAMES[octant.min(7)]
}

/// The principal phases of one lunation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MoonQuarters {
    /// Lunation number, see [`phase_instant`].
    pub lunation: i64,
    pub new_moon: Tt,
    pub first_quarter: Tt,
    pub full_moon: Tt,
    pub last_quarter: Tt,
}

impl MoonQuarters {
    /// The phases of lunation `k`.
    pub fn for_lunation(k: i64) -> Self {
        let at = |phase: MoonPhase| phase_instant(k as f64 + phase.offset());
        Self {
            lunation: k,
            new_moon: at(MoonPhase::New),
            first_quarter: at(MoonPhase::FirstQuarter),
            full_moon: at(MoonPhase::Full),
            last_quarter: at(MoonPhase::LastQuarter),
        }
    }

    /// The lunation in progress on `date` in the given time zone, i.e. the
    /// one whose new moon falls on the latest day not after `date`.
    pub fn containing(date: Date, tz_offset_minutes: i32) -> Self {
        let new_moon_day = |k: i64| {
            Ut::convert(phase_instant(k as f64)).date_in_timezone(tz_offset_minutes)
        };
        let (y, m, d) = date.gregorian();
        let year = y as f64 + ((m - 1) as f64 * 30.6 + d as f64) / 365.25;
        let mut k = ((year - 2000.0) * 12.3685).floor() as i64;
        while new_moon_day(k) > date {
            k -= 1;
        }
        while new_moon_day(k + 1) <= date {
            k += 1;
        }
        trace!(date = %date, lunation = k, "found lunation");
        Self::for_lunation(k)
    }

    pub fn get(&self, phase: MoonPhase) -> Tt {
        match phase {
            MoonPhase::New => self.new_moon,
            MoonPhase::FirstQuarter => self.first_quarter,
            MoonPhase::Full => self.full_moon,
            MoonPhase::LastQuarter => self.last_quarter,
        }
    }

    /// Civil dates of the four phases in the given time zone.
    pub fn dates(&self, tz_offset_minutes: i32) -> [(MoonPhase, Date); 4] {
        MoonPhase::ALL.map(|phase| {
            let date = Ut::convert(self.get(phase)).date_in_timezone(tz_offset_minutes);
            (phase, date)
        })
    }
}

/// Phases of the lunation in progress on `date` (UTC).
///
/// # Example
///
/// ```
/// use almanako::Date;
/// use almanako::astro::moon::moon_quarters;
///
/// let date = Date::from_gregorian(2023, 12, 20).unwrap();
/// let dates = moon_quarters(date).dates(0).map(|(_, d)| d.iso_gregorian());
/// assert_eq!(["2023-12-12", "2023-12-19", "2023-12-27", "2024-01-04"], dates);
/// ```
pub fn moon_quarters(date: Date) -> MoonQuarters {
    MoonQuarters::containing(date, 0)
}

#[rustfmt::skip]
const NEW_MOON_TERMS: [PhaseTerm; 25] = [
    (-0.40720, 0, [ 0,  1,  0,  0]),
    (0.17241, 1, [ 1,  0,  0,  0]),
    (0.01608, 0, [ 0,  2,  0,  0]),
    (0.01039, 0, [ 0,  0,  2,  0]),
    (0.00739, 1, [-1,  1,  0,  0]),
    (-0.00514, 1, [ 1,  1,  0,  0]),
    (0.00208, 2, [ 2,  0,  0,  0]),
    (-0.00111, 0, [ 0,  1, -2,  0]),
    (-0.00057, 0, [ 0,  1,  2,  0]),
    (0.00056, 1, [ 1,  2,  0,  0]),
    (-0.00042, 0, [ 0,  3,  0,  0]),
    (0.00042, 1, [ 1,  0,  2,  0]),
    (0.00038, 1, [ 1,  0, -2,  0]),
    (-0.00024, 1, [-1,  2,  0,  0]),
    (-0.00017, 0, [ 0,  0,  0,  1]),
    (-0.00007, 0, [ 2,  1,  0,  0]),
    (0.00004, 0, [ 0,  2, -2,  0]),
    (0.00004, 0, [ 3,  0,  0,  0]),
    (0.00003, 0, [ 1,  1, -2,  0]),
    (0.00003, 0, [ 0,  2,  2,  0]),
    (-0.00003, 0, [ 1,  1,  2,  0]),
    (0.00003, 0, [-1,  1,  2,  0]),
    (-0.00002, 0, [-1,  1, -2,  0]),
    (-0.00002, 0, [ 1,  3,  0,  0]),
    (0.00002, 0, [ 0,  4,  0,  0]),
];
#[rustfmt::skip]
const FULL_MOON_TERMS: [PhaseTerm; 25] = [
    (-0.40614, 0, [ 0,  1,  0,  0]),
    (0.17302, 1, [ 1,  0,  0,  0]),
    (0.01614, 0, [ 0,  2,  0,  0]),
    (0.01043, 0, [ 0,  0,  2,  0]),
    (0.00734, 1, [-1,  1,  0,  0]),
    (-0.00515, 1, [ 1,  1,  0,  0]),
    (0.00209, 2, [ 2,  0,  0,  0]),
    (-0.00111, 0, [ 0,  1, -2,  0]),
    (-0.00057, 0, [ 0,  1,  2,  0]),
    (0.00056, 1, [ 1,  2,  0,  0]),
    (-0.00042, 0, [ 0,  3,  0,  0]),
    (0.00042, 1, [ 1,  0,  2,  0]),
    (0.00038, 1, [ 1,  0, -2,  0]),
    (-0.00024, 1, [-1,  2,  0,  0]),
    (-0.00017, 0, [ 0,  0,  0,  1]),
    (-0.00007, 0, [ 2,  1,  0,  0]),
    (0.00004, 0, [ 0,  2, -2,  0]),
    (0.00004, 0, [ 3,  0,  0,  0]),
    (0.00003, 0, [ 1,  1, -2,  0]),
    (0.00003, 0, [ 0,  2,  2,  0]),
    (-0.00003, 0, [ 1,  1,  2,  0]),
    (0.00003, 0, [-1,  1,  2,  0]),
    (-0.00002, 0, [-1,  1, -2,  0]),
    (-0.00002, 0, [ 1,  3,  0,  0]),
    (0.00002, 0, [ 0,  4,  0,  0]),
];
#[rustfmt::skip]
const QUARTER_TERMS: [PhaseTerm; 25] = [
    (-0.62801, 0, [ 0,  1,  0,  0]),
    (0.17172, 1, [ 1,  0,  0,  0]),
    (-0.01183, 1, [ 1,  1,  0,  0]),
    (0.00862, 0, [ 0,  2,  0,  0]),
    (0.00804, 0, [ 0,  0,  2,  0]),
    (0.00454, 1, [-1,  1,  0,  0]),
    (0.00204, 2, [ 2,  0,  0,  0]),
    (-0.00180, 0, [ 0,  1, -2,  0]),
    (-0.00070, 0, [ 0,  1,  2,  0]),
    (-0.00040, 0, [ 0,  3,  0,  0]),
    (-0.00034, 1, [-1,  2,  0,  0]),
    (0.00032, 1, [ 1,  0,  2,  0]),
    (0.00032, 1, [ 1,  0, -2,  0]),
    (-0.00028, 2, [ 2,  1,  0,  0]),
    (0.00027, 1, [ 1,  2,  0,  0]),
    (-0.00017, 0, [ 0,  0,  0,  1]),
    (-0.00005, 0, [-1,  1, -2,  0]),
    (0.00004, 0, [ 0,  2,  2,  0]),
    (-0.00004, 0, [ 1,  1,  2,  0]),
    (0.00004, 0, [-2,  1,  0,  0]),
    (0.00003, 0, [ 1,  1, -2,  0]),
    (0.00003, 0, [ 3,  0,  0,  0]),
    (0.00002, 0, [ 0,  2, -2,  0]),
    (0.00002, 0, [-1,  1,  2,  0]),
    (-0.00002, 0, [ 1,  3,  0,  0]),
];
/// Planetary arguments A1..A14: `(coefficient, A at k = 0, increase per lunation)`.
#[rustfmt::skip]
const PLANETARY_TERMS: [(f64, f64, f64); 14] = [
    (0.000325, 299.77, 0.107408),
    (0.000165, 251.88, 0.016321),
    (0.000164, 251.83, 26.651886),
    (0.000126, 349.42, 36.412478),
    (0.000110, 84.66, 18.206239),
    (0.000062, 141.74, 53.303771),
    (0.000060, 207.14, 2.453732),
    (0.000056, 154.84, 7.30686),
    (0.000047, 34.52, 27.261239),
    (0.000042, 207.19, 0.121824),
    (0.000040, 291.34, 1.844379),
    (0.000037, 161.72, 24.198154),
    (0.000035, 239.56, 25.513099),
    (0.000023, 331.55, 3.592518),
];
