use almanako::astro::moon::{
    MoonPhase, MoonQuarters, SYNODIC_MONTH, describe_phase, illumination, lunar_phase,
    moon_quarters, phase_instant,
};
use almanako::astro::season::{Season, equinox};
use almanako::time_scales::Ut;
use almanako::{Date, JulianDay};

fn date(y: i32, m: i32, d: i32) -> Date {
    Date::from_gregorian(y, m, d).unwrap()
}

#[test]
fn quarters_of_april_2015() {
    let quarters = moon_quarters(date(2015, 4, 5));
    let dates = quarters.dates(0).map(|(_, d)| d.iso_gregorian());
    assert_eq!(["2015-03-20", "2015-03-27", "2015-04-04", "2015-04-12"], dates);
}

#[test]
fn lunation_contains_its_date() {
    let mut day = date(2024, 1, 1);
    while day < date(2025, 1, 1) {
        let [(_, new_moon), ..] = MoonQuarters::containing(day, 0).dates(0);
        assert!(new_moon <= day, "{day}");
        assert!(day - new_moon < 31, "{day}");
        day = day + 1;
    }
}

#[test]
fn time_zone_moves_quarter_dates() {
    // New moon of 2023-12-12 at 23:32 UTC.
    let day = date(2023, 12, 20);
    let [(phase, utc), ..] = MoonQuarters::containing(day, 0).dates(0);
    assert_eq!(MoonPhase::New, phase);
    assert_eq!("2023-12-12", utc.iso_gregorian());
    let [(_, tokyo), ..] = MoonQuarters::containing(day, 540).dates(540);
    assert_eq!("2023-12-13", tokyo.iso_gregorian());
}

#[test]
fn phase_angle_follows_the_quarters() {
    let quarters = MoonQuarters::for_lunation(296);
    for (phase, expected) in MoonPhase::ALL.into_iter().zip([0.0, 90.0, 180.0, 270.0]) {
        let angle = lunar_phase(quarters.get(phase).0);
        let error = (angle - expected + 180.0).rem_euclid(360.0) - 180.0;
        assert!(error.abs() < 1.0, "{phase}: {angle}");
    }
}

#[test]
fn illumination_over_a_lunation() {
    let new_moon = phase_instant(300.0).0;
    assert!(illumination(new_moon) < 1.0);
    assert!(illumination(new_moon + SYNODIC_MONTH / 2.0) > 99.0);
    assert_eq!("Waxing Crescent", describe_phase(lunar_phase(new_moon + 4.0)));
    assert_eq!("Waning Gibbous", describe_phase(lunar_phase(new_moon + 19.0)));
}

#[test]
fn full_moon_at_noon() {
    let jd = JulianDay::from_date(date(2015, 4, 4)).at_noon();
    assert!(illumination(jd.0) > 99.5);
}

#[test]
fn equinoxes_of_2025() {
    let expected = [
        (Season::MarchEquinox, "2025-03-20"),
        (Season::JuneSolstice, "2025-06-21"),
        (Season::SeptemberEquinox, "2025-09-22"),
        (Season::DecemberSolstice, "2025-12-21"),
    ];
    for (season, iso) in expected {
        let day = Ut::convert(equinox(2025, season)).date_in_timezone(0);
        assert_eq!(iso, day.iso_gregorian(), "{season}");
    }
}
