//! Position of the Sun, obliquity of the ecliptic, nutation and the
//! equation of time.

use super::{J2000, JULIAN_CENTURY, JULIAN_MILLENNIUM, dcos, dsin, fix_angle, polynomial};

/// Mean obliquity of the ecliptic in degrees, after Laskar's polynomial.
///
/// Valid within 10,000 years of J2000; outside that range only the J2000
/// value is returned.
///
/// ```
/// use almanako::astro::sun::obliquity;
///
/// assert!((obliquity(2451545.0) - 23.4392911).abs() < 1e-6);
/// ```
pub fn obliquity(jd: f64) -> f64 {
    const BASE: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;
    #[rustfmt::skip]
    const TERMS: [f64; 10] = [
        -4680.93, -1.55, 1999.25, -51.38, -249.67,
        -39.05, 7.12, 27.87, 5.79, 2.45,
    ];
    let u = (jd - J2000) / (JULIAN_CENTURY * 100.0);
    if u.abs() >= 1.0 {
        return BASE;
    }
    let mut v = u;
    let mut eps = 0.0;
    for term in TERMS {
        eps += term / 3600.0 * v;
        v *= u;
    }
    BASE + eps
}

/// Nutation in longitude and obliquity, both in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Nutation {
    /// Δψ
    pub longitude: f64,
    /// Δε
    pub obliquity: f64,
}

/// Nutation by the 63-term IAU 1980 series (Meeus table 22.A).
pub fn nutation(jd: f64) -> Nutation {
    let t = (jd - J2000) / JULIAN_CENTURY;
    let args = [
        polynomial(&[297.850363, 445267.111480, -0.0019142, 1.0 / 189474.0], t),
        polynomial(&[357.527720, 35999.050340, -0.0001603, -1.0 / 300000.0], t),
        polynomial(&[134.962980, 477198.867398, 0.0086972, 1.0 / 56250.0], t),
        polynomial(&[93.271910, 483202.017538, -0.0036825, 1.0 / 327170.0], t),
        polynomial(&[125.044520, -1934.136261, 0.0020708, 1.0 / 450000.0], t),
    ]
    .map(f64::to_radians);
    let to10 = t / 10.0;

    let (mut dpsi, mut deps) = (0.0, 0.0);
    for &(mult, psi, psi_t, eps, eps_t) in NUTATION_TERMS {
        let angle: f64 = mult.iter().zip(args).map(|(&m, a)| m as f64 * a).sum();
        dpsi += (psi + psi_t * to10) * angle.sin();
        deps += (eps + eps_t * to10) * angle.cos();
    }
    Nutation {
        longitude: dpsi / (3600.0 * 10000.0),
        obliquity: deps / (3600.0 * 10000.0),
    }
}

/// Geometric and apparent position of the Sun, all angles in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SunPosition {
    /// L₀
    pub mean_longitude: f64,
    /// M
    pub mean_anomaly: f64,
    /// Eccentricity of Earth's orbit
    pub eccentricity: f64,
    /// C
    pub equation_of_center: f64,
    /// ☉
    pub true_longitude: f64,
    /// ν
    pub true_anomaly: f64,
    /// Earth–Sun distance in AU
    pub radius_vector: f64,
    /// λ
    pub apparent_longitude: f64,
    pub right_ascension: f64,
    pub declination: f64,
    pub apparent_right_ascension: f64,
    pub apparent_declination: f64,
}

impl SunPosition {
    /// Low precision position of the Sun (Meeus chapter 25).
    ///
    /// ```
    /// use almanako::astro::sun::SunPosition;
    ///
    /// // 1992-10-13T00:00 TD
    /// let sun = SunPosition::at(2448908.5);
    /// assert!((sun.apparent_longitude - 199.90895).abs() < 1e-3);
    /// assert!((sun.apparent_declination - (-7.78507)).abs() < 1e-3);
    /// ```
    pub fn at(jd: f64) -> Self {
        let t = (jd - J2000) / JULIAN_CENTURY;
        let t2 = t * t;
        let l0 = fix_angle(280.46646 + 36000.76983 * t + 0.0003032 * t2);
        let m = fix_angle(357.52911 + 35999.05029 * t - 0.0001537 * t2);
        let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;
        let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * dsin(m)
            + (0.019993 - 0.000101 * t) * dsin(2.0 * m)
            + 0.000289 * dsin(3.0 * m);
        let true_longitude = l0 + c;
        let true_anomaly = m + c;
        let radius_vector = 1.000001018 * (1.0 - e * e) / (1.0 + e * dcos(true_anomaly));
        let omega = 125.04 - 1934.136 * t;
        let lambda = true_longitude - 0.00569 - 0.00478 * dsin(omega);
        let eps0 = obliquity(jd);
        let eps = eps0 + 0.00256 * dcos(omega);

        let equatorial = |eps: f64, lon: f64| {
            let ra = fix_angle((dcos(eps) * dsin(lon)).atan2(dcos(lon)).to_degrees());
            let dec = (dsin(eps) * dsin(lon)).asin().to_degrees();
            (ra, dec)
        };
        let (right_ascension, declination) = equatorial(eps0, true_longitude);
        let (apparent_right_ascension, apparent_declination) = equatorial(eps, lambda);

        Self {
            mean_longitude: l0,
            mean_anomaly: m,
            eccentricity: e,
            equation_of_center: c,
            true_longitude,
            true_anomaly,
            radius_vector,
            apparent_longitude: lambda,
            right_ascension,
            declination,
            apparent_right_ascension,
            apparent_declination,
        }
    }
}

/// Equation of time (apparent minus mean solar time) as a fraction of a day.
///
/// ```
/// use almanako::astro::sun::equation_of_time;
///
/// // 1992-10-13, Meeus example 28.a: +13m42.6s
/// let minutes = equation_of_time(2448908.5) * 1440.0;
/// assert!((minutes - 13.71).abs() < 0.05);
/// ```
pub fn equation_of_time(jd: f64) -> f64 {
    let tau = (jd - J2000) / JULIAN_MILLENNIUM;
    let l0 = fix_angle(polynomial(
        &[
            280.4664567,
            360007.6982779,
            0.03032028,
            1.0 / 49931.0,
            -1.0 / 15300.0,
            -1.0 / 2000000.0,
        ],
        tau,
    ));
    let alpha = SunPosition::at(jd).apparent_right_ascension;
    let nut = nutation(jd);
    let eps = obliquity(jd) + nut.obliquity;
    let mut e = l0 - 0.0057183 - alpha + nut.longitude * dcos(eps);
    e -= 360.0 * (e / 360.0).round();
    // 1° of hour angle is 1/360 day
    e / 360.0
}

/// Argument multipliers of D, M, M', F, Ω followed by Δψ and Δε
/// coefficients in units of 0.0001".
#[rustfmt::skip]
const NUTATION_TERMS: &[([i8; 5], f64, f64, f64, f64)] = &[
    ([ 0,  0,  0,  0,  1], -171996.0, -1742.0, 92095.0, 89.0),
    ([-2,  0,  0,  2,  2], -13187.0, -16.0, 5736.0, -31.0),
    ([ 0,  0,  0,  2,  2], -2274.0, -2.0, 977.0, -5.0),
    ([ 0,  0,  0,  0,  2], 2062.0, 2.0, -895.0, 5.0),
    ([ 0,  1,  0,  0,  0], 1426.0, -34.0, 54.0, -1.0),
    ([ 0,  0,  1,  0,  0], 712.0, 1.0, -7.0, 0.0),
    ([-2,  1,  0,  2,  2], -517.0, 12.0, 224.0, -6.0),
    ([ 0,  0,  0,  2,  1], -386.0, -4.0, 200.0, 0.0),
    ([ 0,  0,  1,  2,  2], -301.0, 0.0, 129.0, -1.0),
    ([-2, -1,  0,  2,  2], 217.0, -5.0, -95.0, 3.0),
    ([-2,  0,  1,  0,  0], -158.0, 0.0, 0.0, 0.0),
    ([-2,  0,  0,  2,  1], 129.0, 1.0, -70.0, 0.0),
    ([ 0,  0, -1,  2,  2], 123.0, 0.0, -53.0, 0.0),
    ([ 2,  0,  0,  0,  0], 63.0, 0.0, 0.0, 0.0),
    ([ 0,  0,  1,  0,  1], 63.0, 1.0, -33.0, 0.0),
    ([ 2,  0, -1,  2,  2], -59.0, 0.0, 26.0, 0.0),
    ([ 0,  0, -1,  0,  1], -58.0, -1.0, 32.0, 0.0),
    ([ 0,  0,  1,  2,  1], -51.0, 0.0, 27.0, 0.0),
    ([-2,  0,  2,  0,  0], 48.0, 0.0, 0.0, 0.0),
    ([ 0,  0, -2,  2,  1], 46.0, 0.0, -24.0, 0.0),
    ([ 2,  0,  0,  2,  2], -38.0, 0.0, 16.0, 0.0),
    ([ 0,  0,  2,  2,  2], -31.0, 0.0, 13.0, 0.0),
    ([ 0,  0,  2,  0,  0], 29.0, 0.0, 0.0, 0.0),
    ([-2,  0,  1,  2,  2], 29.0, 0.0, -12.0, 0.0),
    ([ 0,  0,  0,  2,  0], 26.0, 0.0, 0.0, 0.0),
    ([-2,  0,  0,  2,  0], -22.0, 0.0, 0.0, 0.0),
    ([ 0,  0, -1,  2,  1], 21.0, 0.0, -10.0, 0.0),
    ([ 0,  2,  0,  0,  0], 17.0, -1.0, 0.0, 0.0),
    ([ 2,  0, -1,  0,  1], 16.0, 0.0, -8.0, 0.0),
    ([-2,  2,  0,  2,  2], -16.0, 1.0, 7.0, 0.0),
    ([ 0,  1,  0,  0,  1], -15.0, 0.0, 9.0, 0.0),
    ([-2,  0,  1,  0,  1], -13.0, 0.0, 7.0, 0.0),
    ([ 0, -1,  0,  0,  1], -12.0, 0.0, 6.0, 0.0),
    ([ 0,  0,  2, -2,  0], 11.0, 0.0, 0.0, 0.0),
    ([ 2,  0, -1,  2,  1], -10.0, 0.0, 5.0, 0.0),
    ([ 2,  0,  1,  2,  2], -8.0, 0.0, 3.0, 0.0),
    ([ 0,  1,  0,  2,  2], 7.0, 0.0, -3.0, 0.0),
    ([-2,  1,  1,  0,  0], -7.0, 0.0, 0.0, 0.0),
    ([ 0, -1,  0,  2,  2], -7.0, 0.0, 3.0, 0.0),
    ([ 2,  0,  0,  2,  1], -7.0, 0.0, 3.0, 0.0),
    ([ 2,  0,  1,  0,  0], 6.0, 0.0, 0.0, 0.0),
    ([-2,  0,  2,  2,  2], 6.0, 0.0, -3.0, 0.0),
    ([-2,  0,  1,  2,  1], 6.0, 0.0, -3.0, 0.0),
    ([ 2,  0, -2,  0,  1], -6.0, 0.0, 3.0, 0.0),
    ([ 2,  0,  0,  0,  1], -6.0, 0.0, 3.0, 0.0),
    ([ 0, -1,  1,  0,  0], 5.0, 0.0, 0.0, 0.0),
    ([-2, -1,  0,  2,  1], -5.0, 0.0, 3.0, 0.0),
    ([-2,  0,  0,  0,  1], -5.0, 0.0, 3.0, 0.0),
    ([ 0,  0,  2,  2,  1], -5.0, 0.0, 3.0, 0.0),
    ([-2,  0,  2,  0,  1], 4.0, 0.0, 0.0, 0.0),
    ([-2,  1,  0,  2,  1], 4.0, 0.0, 0.0, 0.0),
    ([ 0,  0,  1, -2,  0], 4.0, 0.0, 0.0, 0.0),
    ([-1,  0,  1,  0,  0], -4.0, 0.0, 0.0, 0.0),
    ([-2,  1,  0,  0,  0], -4.0, 0.0, 0.0, 0.0),
    ([ 1,  0,  0,  0,  0], -4.0, 0.0, 0.0, 0.0),
    ([ 0,  0,  1,  2,  0], 3.0, 0.0, 0.0, 0.0),
    ([-1, -1,  1,  0,  0], -3.0, 0.0, 0.0, 0.0),
    ([ 0,  1,  1,  0,  0], -3.0, 0.0, 0.0, 0.0),
    ([ 0, -1,  1,  2,  2], -3.0, 0.0, 0.0, 0.0),
    ([ 2, -1, -1,  2,  2], -3.0, 0.0, 0.0, 0.0),
    ([ 0,  0, -2,  2,  2], -3.0, 0.0, 0.0, 0.0),
    ([ 0,  0,  3,  2,  2], -3.0, 0.0, 0.0, 0.0),
    ([ 2, -1,  0,  2,  2], -3.0, 0.0, 0.0, 0.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutation_meeus_example() {
        // Meeus example 22.a: 1987-04-10T00:00 TD
        let nut = nutation(2446895.5);
        assert!((nut.longitude * 3600.0 - (-3.788)).abs() < 0.5);
        assert!((nut.obliquity * 3600.0 - 9.443).abs() < 0.5);
    }

    #[test]
    fn obliquity_meeus_example() {
        // 23°26'27.407"
        let eps = obliquity(2446895.5);
        assert!((eps - (23.0 + 26.0 / 60.0 + 27.407 / 3600.0)).abs() < 1e-5);
    }

    #[test]
    fn sun_radius_vector() {
        let sun = SunPosition::at(2448908.5);
        assert!((sun.radius_vector - 0.99766).abs() < 1e-4);
        assert!((sun.true_longitude - 199.90988).abs() < 1e-3);
    }

    #[test]
    fn equation_of_time_stays_small() {
        for day in (0..366).step_by(5) {
            let minutes = equation_of_time(2460310.5 + day as f64) * 1440.0;
            assert!((-17.0..17.0).contains(&minutes), "day {day}: {minutes}");
        }
    }
}
