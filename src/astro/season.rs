//! Equinoxes and solstices (Meeus chapter 27).

use std::fmt;

use super::{J2000, JULIAN_CENTURY, dcos, polynomial};
use crate::time_scales::Tt;

/// The four astronomical seasons, named by the event that begins them in the
/// northern hemisphere.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Season {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::MarchEquinox,
        Season::JuneSolstice,
        Season::SeptemberEquinox,
        Season::DecemberSolstice,
    ];

    /// Name of the event beginning the season.
    pub fn name(self) -> &'static str {
        match self {
            Season::MarchEquinox => "March Equinox",
            Season::JuneSolstice => "June Solstice",
            Season::SeptemberEquinox => "September Equinox",
            Season::DecemberSolstice => "December Solstice",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean instants for years -1000..1000, in millennia from year 0.
#[rustfmt::skip]
const MEAN_BEFORE_1000: [[f64; 5]; 4] = [
    [1721139.29189, 365242.13740, 0.06134, 0.00111, -0.00071],
    [1721233.25401, 365241.72562, -0.05323, 0.00907, 0.00025],
    [1721325.70455, 365242.49558, -0.11677, -0.00297, 0.00074],
    [1721414.39987, 365242.88257, -0.00769, -0.00933, -0.00006],
];
/// Mean instants for years 1000..3000, in millennia from 2000.
#[rustfmt::skip]
const MEAN_AFTER_1000: [[f64; 5]; 4] = [
    [2451623.80984, 365242.37404, 0.05169, -0.00411, -0.00057],
    [2451716.56767, 365241.62603, 0.00325, 0.00888, -0.00030],
    [2451810.21715, 365242.01767, -0.11575, 0.00337, 0.00078],
    [2451900.05952, 365242.74049, -0.06223, -0.00823, 0.00032],
];
/// Periodic terms `(A, B, C)` of `A cos(B + C T)`.
#[rustfmt::skip]
const PERIODIC: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1934.136),
    (203.0, 337.23, 32964.467),
    (199.0, 342.08, 20.186),
    (182.0, 27.85, 445267.112),
    (156.0, 73.14, 45036.886),
    (136.0, 171.52, 22518.443),
    (77.0, 222.54, 65928.934),
    (74.0, 296.72, 3034.906),
    (70.0, 243.58, 9037.513),
    (58.0, 119.81, 33718.147),
    (52.0, 297.17, 150.678),
    (50.0, 21.02, 2281.226),
    (45.0, 247.54, 29929.562),
    (44.0, 325.15, 31555.956),
    (29.0, 60.93, 4443.417),
    (18.0, 155.12, 67555.328),
    (17.0, 288.79, 4562.452),
    (16.0, 198.04, 62894.029),
    (14.0, 199.76, 31436.921),
    (12.0, 95.39, 14577.848),
    (12.0, 287.11, 31931.756),
    (12.0, 320.81, 34777.259),
    (9.0, 227.73, 1222.114),
    (8.0, 15.45, 16859.074),
];

/// Instant of the equinox or solstice beginning `season` in `year`.
///
/// # Example
///
/// ```
/// use almanako::astro::season::{Season, equinox};
///
/// // Meeus example 27.a
/// let solstice = equinox(1962, Season::JuneSolstice);
/// assert!((solstice.0 - 2437837.39245).abs() < 1e-5);
/// ```
pub fn equinox(year: i32, season: Season) -> Tt {
    let (y, coefficients) = if year < 1000 {
        (year as f64 / 1000.0, &MEAN_BEFORE_1000[season.index()])
    } else {
        ((year as f64 - 2000.0) / 1000.0, &MEAN_AFTER_1000[season.index()])
    };
    let jde0 = polynomial(coefficients, y);
    let t = (jde0 - J2000) / JULIAN_CENTURY;
    let w = 35999.373 * t - 2.47;
    let dl = 1.0 + 0.0334 * dcos(w) + 0.0007 * dcos(2.0 * w);
    let s: f64 = PERIODIC.iter().map(|&(a, b, c)| a * dcos(b + c * t)).sum();
    Tt(jde0 + 0.00001 * s / dl)
}
