use almanako::almanac::convert;
use almanako::french_republican::FrenchRepublicanDate;
use almanako::gregorian::GregorianDate;
use almanako::hebrew::HebrewDate;
use almanako::indian_civil::IndianCivilDate;
use almanako::islamic::{IslamicDate, LeapYearRule};
use almanako::julian::JulianDate;
use almanako::maya::LongCount;
use almanako::persian::PersianDate;
use almanako::{Almanac, Date, Error};

#[test]
fn one_day_in_every_calendar() {
    let date = Date::from_jdn(2446865);
    assert_eq!("1987-03-10", date.iso_gregorian());
    assert_eq!(2, date.day_of_week());
    assert_eq!(
        "Gregorian Calendar: March 10, 1987",
        GregorianDate::from_date(date).describe()
    );
    assert_eq!(
        "Julian Calendar: February 25, 1987",
        JulianDate::from_date(date).describe()
    );
    assert_eq!(
        "French Republican Calendar: 19 Ventôse, CXCV",
        FrenchRepublicanDate::from_date(date).describe()
    );
    assert_eq!("Maya Calendar: 12.18.13.15.2", LongCount::from_date(date).describe());
    assert_eq!(
        "12.18.13.15.2 11 Ik' 15 K'ayab",
        LongCount::from_date(date).calendar_round()
    );
    assert_eq!(
        "Islamic Calendar: Rajab 9, 1407",
        IslamicDate::from_date(date).describe()
    );
    assert_eq!("Hebrew Calendar: 9 Adar 5747", HebrewDate::from_date(date).describe());
    assert_eq!(
        "Persian Calendar: 19 Esfand 1365",
        PersianDate::from_date(date).describe()
    );
    assert_eq!(
        "Indian Civil Calendar: 19 Phalguna, 1908",
        IndianCivilDate::from_date(date).describe()
    );
}

#[test]
fn new_years() {
    let hebrew: GregorianDate = convert(&HebrewDate::new(5786, 7, 1).unwrap()).unwrap();
    assert_eq!("September 23, 2025", hebrew.to_string());
    let persian: GregorianDate = convert(&PersianDate::new(1404, 1, 1).unwrap()).unwrap();
    assert_eq!("March 20, 2025", persian.to_string());
    let indian: GregorianDate = convert(&IndianCivilDate::new(1947, 1, 1).unwrap()).unwrap();
    assert_eq!("March 22, 2025", indian.to_string());
    let indian: GregorianDate = convert(&IndianCivilDate::new(1946, 1, 1).unwrap()).unwrap();
    assert_eq!("March 21, 2024", indian.to_string());
    let maya: GregorianDate = convert(&LongCount::new(13, 0, 0, 0, 0).unwrap()).unwrap();
    assert_eq!("December 21, 2012", maya.to_string());
}

#[test]
fn julian_and_gregorian_reform() {
    let julian = JulianDate::new(1582, 10, 4).unwrap();
    let gregorian: GregorianDate = convert(&julian).unwrap();
    assert_eq!("October 14, 1582", gregorian.to_string());
    assert_eq!(
        julian.to_date().unwrap() + 1,
        GregorianDate::new(1582, 10, 15).unwrap().to_date().unwrap()
    );
}

fn assert_round_trip<A: Almanac + std::fmt::Debug>(date: Date) {
    let converted = A::from_date(date);
    assert_eq!(Ok(date), converted.to_date(), "{} {converted:?}", A::NAME);
}

#[test]
fn round_trips() {
    for jdn in (2_300_000..2_500_000).step_by(97) {
        let date = Date::from_jdn(jdn);
        assert_round_trip::<GregorianDate>(date);
        assert_round_trip::<JulianDate>(date);
        assert_round_trip::<LongCount>(date);
        assert_round_trip::<IslamicDate>(date);
        assert_round_trip::<HebrewDate>(date);
        assert_round_trip::<PersianDate>(date);
        assert_round_trip::<IndianCivilDate>(date);
    }
    for jdn in (2_375_000..2_500_000).step_by(1009) {
        assert_round_trip::<FrenchRepublicanDate>(Date::from_jdn(jdn));
    }
}

#[test]
fn islamic_rules_round_trip() {
    for rule in LeapYearRule::ALL {
        for jdn in (1_948_440..1_970_000).step_by(13) {
            let date = Date::from_jdn(jdn);
            let islamic = IslamicDate::from_date_with_rule(date, rule);
            assert_eq!(rule, islamic.rule());
            assert_eq!(Ok(date), islamic.to_date(), "{rule} {islamic:?}");
        }
    }
}

#[test]
fn consecutive_days_advance_by_one() {
    let start = Date::from_gregorian(2023, 1, 1).unwrap();
    for offset in 0..800 {
        let today = HebrewDate::from_date(start + offset);
        let tomorrow = HebrewDate::from_date(start + offset + 1);
        if tomorrow.day() != 1 {
            assert_eq!(today.day() + 1, tomorrow.day(), "{today} {tomorrow}");
        }
        let today = PersianDate::from_date(start + offset);
        let tomorrow = PersianDate::from_date(start + offset + 1);
        if tomorrow.day() != 1 {
            assert_eq!(today.day() + 1, tomorrow.day(), "{today} {tomorrow}");
        }
    }
}

#[test]
fn invalid_dates_are_errors() {
    assert!(matches!(
        GregorianDate::new(2023, 2, 29),
        Err(Error::InvalidDate { .. })
    ));
    assert!(JulianDate::new(1900, 2, 29).is_ok());
    assert!(HebrewDate::new(5785, 13, 1).is_err());
    assert!(HebrewDate::new(5784, 13, 1).is_ok());
    assert!(IslamicDate::new(1445, 13, 1).is_err());
    assert!(PersianDate::new(1403, 12, 30).is_err());
    assert!(PersianDate::new(1404, 12, 30).is_ok());
    assert!(IndianCivilDate::new(1946, 1, 31).is_ok());
    assert!(IndianCivilDate::new(1947, 1, 31).is_err());
    assert!(LongCount::new(13, 20, 0, 0, 0).is_err());
}

#[test]
fn extreme_years_are_out_of_range() {
    fn out_of_range<A: Almanac>(date: A) -> bool {
        matches!(date.to_date(), Err(Error::OutOfRange { .. }))
    }
    for year in [i32::MIN, i32::MAX] {
        assert!(out_of_range(GregorianDate::new(year, 12, 31).unwrap()), "{year}");
        assert!(out_of_range(JulianDate::new(year, 12, 31).unwrap()), "{year}");
        assert!(out_of_range(HebrewDate::new(year, 8, 1).unwrap()), "{year}");
        assert!(out_of_range(PersianDate::new(year, 12, 1).unwrap()), "{year}");
        assert!(out_of_range(IndianCivilDate::new(year, 1, 1).unwrap()), "{year}");
        for rule in LeapYearRule::ALL {
            let islamic = IslamicDate::with_rule(year, 12, 1, rule).unwrap();
            assert!(out_of_range(islamic), "{year} {rule}");
        }
        assert!(out_of_range(LongCount::new(year, 0, 0, 0, 0).unwrap()), "{year}");
    }
    assert!(FrenchRepublicanDate::new(i32::MAX, 13, 1, 1).is_err());
    assert!(matches!(
        FrenchRepublicanDate::new(i32::MIN, 1, 1, 1).map(|date| date.to_date()),
        Ok(Err(Error::OutOfRange { .. }))
    ));
}

#[test]
fn dates_before_jdn_zero() {
    let date = GregorianDate::new(-4713, 11, 23).unwrap();
    assert!(matches!(date.to_date(), Err(Error::OutOfRange { .. })));
    let day_zero = GregorianDate::new(-4713, 11, 24).unwrap();
    assert_eq!(Ok(Date::from_jdn(0)), day_zero.to_date());
}
