//! Text reports printed by the binary, one `String` per output line.

use anyhow::{Context, Result};

use almanako::astro::moon::{self, MoonPhase, MoonQuarters};
use almanako::astro::season::{self, Season};
use almanako::french_republican::FrenchRepublicanDate;
use almanako::gregorian::GregorianDate;
use almanako::hebrew::HebrewDate;
use almanako::indian_civil::IndianCivilDate;
use almanako::islamic::{IslamicDate, LeapYearRule};
use almanako::julian::JulianDate;
use almanako::maya::LongCount;
use almanako::persian::PersianDate;
use almanako::time_scales::Ut;
use almanako::{Almanac, Date, Holiday, JulianDay};

/// `date` in every supported calendar.
pub fn calendar_lines(date: Date, rule: LeapYearRule) -> Vec<String> {
    vec![
        GregorianDate::from_date(date).describe(),
        JulianDate::from_date(date).describe(),
        FrenchRepublicanDate::from_date(date).describe(),
        LongCount::from_date(date).describe(),
        IslamicDate::from_date_with_rule(date, rule).describe(),
        HebrewDate::from_date(date).describe(),
        PersianDate::from_date(date).describe(),
        IndianCivilDate::from_date(date).describe(),
    ]
}

/// Phase and illumination at `jd`, then the quarters of the lunation in
/// progress on `date`.
pub fn lunar_report(date: Date, jd: JulianDay, tz_offset_minutes: i32) -> Vec<String> {
    let phase = moon::lunar_phase(jd.0);
    let illumination = moon::illumination_from_phase(phase);
    let mut lines = vec![
        format!(
            "The lunar phase is {}°, or {}% illuminated",
            phase as i64, illumination as i64
        ),
        String::new(),
    ];
    let quarters = MoonQuarters::containing(date, tz_offset_minutes);
    lines.extend(
        quarters
            .dates(tz_offset_minutes)
            .into_iter()
            .map(|(phase, date)| {
                let date = long_date(date);
                match phase {
                    MoonPhase::New | MoonPhase::Full => format!("{phase} is {date}"),
                    MoonPhase::FirstQuarter | MoonPhase::LastQuarter => {
                        format!("{phase} moon is {date}")
                    }
                }
            }),
    );
    lines
}

pub fn today_report(
    date: Date,
    jd: JulianDay,
    tz_offset_minutes: i32,
    rule: LeapYearRule,
) -> Vec<String> {
    let mut lines = vec!["Today is...".to_string()];
    lines.extend(calendar_lines(date, rule));
    lines.push(String::new());
    lines.extend(lunar_report(date, jd, tz_offset_minutes));
    lines
}

/// `<name> <Gregorian date>` for each of `holidays` in Gregorian `year`.
pub fn holiday_report(year: i32, holidays: &[Holiday], rule: LeapYearRule) -> Result<Vec<String>> {
    holidays
        .iter()
        .map(|&holiday| {
            let date = holiday
                .date_in_with_rule(year, rule)
                .with_context(|| format!("failed to compute {holiday} in {year}"))?;
            Ok(format!("{holiday} {}", long_date(date)))
        })
        .collect()
}

/// `date` written out in the Gregorian calendar, e.g. `April 5, 2015`.
fn long_date(date: Date) -> String {
    GregorianDate::from_date(date).to_string()
}

/// Equinoxes and solstices of Gregorian `year`, to the minute in UTC.
pub fn season_report(year: i32) -> Result<Vec<String>> {
    Season::ALL
        .into_iter()
        .map(|event| {
            let ut = Ut::convert(season::equinox(year, event));
            let time = JulianDay::from(ut)
                .to_datetime()
                .with_context(|| format!("{event} of {year} is out of range"))?;
            Ok(format!("{event} {}", time.format("%Y-%m-%d %H:%M UTC")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_10_1987() -> Date {
        Date::from_gregorian(1987, 3, 10).unwrap()
    }

    #[test]
    fn every_calendar_in_order() {
        let lines = calendar_lines(march_10_1987(), LeapYearRule::default());
        assert_eq!(8, lines.len());
        let prefixes = [
            "Gregorian Calendar: ",
            "Julian Calendar: ",
            "French Republican Calendar: ",
            "Maya Calendar: ",
            "Islamic Calendar: ",
            "Hebrew Calendar: ",
            "Persian Calendar: ",
            "Indian Civil Calendar: ",
        ];
        for (line, prefix) in lines.iter().zip(prefixes) {
            assert!(line.starts_with(prefix), "{line:?}");
        }
        assert_eq!("Maya Calendar: 12.18.13.15.2", lines[3]);
        assert_eq!("Islamic Calendar: Rajab 9, 1407", lines[4]);
        assert_eq!("Hebrew Calendar: 9 Adar 5747", lines[5]);
        assert_eq!("Persian Calendar: 19 Esfand 1365", lines[6]);
        assert_eq!("Indian Civil Calendar: 19 Phalguna, 1908", lines[7]);
    }

    #[test]
    fn lunar_lines() {
        let date = Date::from_gregorian(2015, 4, 5).unwrap();
        let lines = lunar_report(date, JulianDay::from_date(date).at_noon(), 0);
        assert_eq!(6, lines.len());
        assert!(lines[0].starts_with("The lunar phase is "));
        assert!(lines[0].ends_with("% illuminated"));
        assert_eq!("", lines[1]);
        assert_eq!("New Moon is March 20, 2015", lines[2]);
        assert_eq!("First Quarter moon is March 27, 2015", lines[3]);
        assert_eq!("Full Moon is April 4, 2015", lines[4]);
        assert_eq!("Last Quarter moon is April 12, 2015", lines[5]);
    }

    #[test]
    fn full_moon_is_fully_lit() {
        // 2015-04-04 12:06 UTC
        let date = Date::from_gregorian(2015, 4, 4).unwrap();
        let lines = lunar_report(date, JulianDay::from_date(date).at_noon(), 0);
        let phase: i64 = lines[0]
            .trim_start_matches("The lunar phase is ")
            .split('°')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!((178..=181).contains(&phase), "{}", lines[0]);
        assert!(lines[0].ends_with(", or 99% illuminated") || lines[0].ends_with(", or 100% illuminated"));
    }

    #[test]
    fn today_layout() {
        let date = march_10_1987();
        let lines = today_report(date, JulianDay::from_date(date).at_noon(), 0, LeapYearRule::default());
        assert_eq!(16, lines.len());
        assert_eq!("Today is...", lines[0]);
        assert_eq!("Gregorian Calendar: March 10, 1987", lines[1]);
        assert_eq!("", lines[9]);
        assert!(lines[10].starts_with("The lunar phase is "));
        assert_eq!("", lines[11]);
        assert!(lines[12].starts_with("New Moon is "));
    }

    #[test]
    fn holiday_lines() {
        let lines = holiday_report(
            2015,
            &[Holiday::Easter, Holiday::YomKippur, Holiday::Thanksgiving],
            LeapYearRule::default(),
        )
        .unwrap();
        assert_eq!(
            vec![
                "Easter April 5, 2015",
                "Yom Kippur September 23, 2015",
                "Thanksgiving November 26, 2015"
            ],
            lines
        );
    }

    #[test]
    fn season_lines() {
        let lines = season_report(2025).unwrap();
        assert_eq!(4, lines.len());
        assert!(lines[0].starts_with("March Equinox 2025-03-20 09:0"), "{}", lines[0]);
        assert!(lines[1].starts_with("June Solstice 2025-06-21 02:"), "{}", lines[1]);
        assert!(lines[2].starts_with("September Equinox 2025-09-22 18:"), "{}", lines[2]);
        assert!(lines[3].starts_with("December Solstice 2025-12-21 15:0"), "{}", lines[3]);
    }
}
