//! Month names and Hebrew numerals.

use crate::error::Error;

/// Month names, Nisan first. In leap years month 12 is called Adar I and
/// month 13 Adar II; see [`month`].
pub const MONTH_NAMES: [&str; 13] = [
    "Nisan", "Iyyar", "Sivan", "Tammuz", "Av", "Elul", "Tishri", "Heshvan", "Kislev", "Teveth",
    "Shevat", "Adar", "Adar II",
];

/// Month names in Hebrew script, in the order of [`MONTH_NAMES`].
pub const HEBREW_MONTH_NAMES: [&str; 13] = [
    "ניסן", "אייר", "סיון", "תמוז", "אב", "אלול", "תשרי", "חשון", "כסלו", "טבת", "שבט", "אדר",
    "אדר ב׳",
];

const GERESH: char = '׳';
const GERSHAYIM: char = '״';

/// Name of `month` in a common or a leap year, or `None` if `month` is not
/// in `1..=13`.
///
/// # Example
///
/// ```
/// use almanako::hebrew;
///
/// assert_eq!(Some("Adar"), hebrew::fmt::month(12, false));
/// assert_eq!(Some("Adar I"), hebrew::fmt::month(12, true));
/// assert_eq!(Some("Adar II"), hebrew::fmt::month(13, true));
/// assert_eq!(None, hebrew::fmt::month(14, true));
/// ```
pub fn month(month: u32, leap: bool) -> Option<&'static str> {
    match month {
        12 if leap => Some("Adar I"),
        1..=13 => Some(MONTH_NAMES[month as usize - 1]),
        _ => None,
    }
}

/// Hebrew-script name of `month`, see [`month`].
pub fn hebrew_month(month: u32, leap: bool) -> Option<&'static str> {
    match month {
        12 if leap => Some("אדר א׳"),
        1..=13 => Some(HEBREW_MONTH_NAMES[month as usize - 1]),
        _ => None,
    }
}

fn final_form(letter: char) -> char {
    match letter {
        'כ' => 'ך',
        'מ' => 'ם',
        'נ' => 'ן',
        'פ' => 'ף',
        'צ' => 'ץ',
        other => other,
    }
}

/// Writes `num` in Hebrew numerals, the way years and days are written.
///
/// Thousands are dropped, as is customary for years. A single letter is
/// followed by a geresh, otherwise a gershayim precedes the last letter,
/// which takes its final form. 15 and 16 are written ט״ו and ט״ז to avoid
/// spelling a divine name.
///
/// # Example
///
/// ```
/// use almanako::hebrew::fmt::to_hebrew_numeral;
///
/// assert_eq!(Ok("תשמ״ז".to_owned()), to_hebrew_numeral(5747));
/// assert_eq!(Ok("ט״ו".to_owned()), to_hebrew_numeral(15));
/// assert_eq!(Ok("ט׳".to_owned()), to_hebrew_numeral(9));
/// assert!(to_hebrew_numeral(6000).is_err());
/// ```
pub fn to_hebrew_numeral(num: u32) -> Result<String, Error> {
    const HUNDREDS: [char; 4] = ['ק', 'ר', 'ש', 'ת'];
    const TENS: [char; 9] = ['י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
    const UNITS: [char; 9] = ['א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];

    let mut rest = num % 1000;
    if rest == 0 {
        return Err(Error::InvalidNumeral {
            numeral: num.to_string(),
            reason: "multiples of 1000 have no letters",
        });
    }

    let mut letters = Vec::new();
    while rest >= 400 {
        letters.push('ת');
        rest -= 400;
    }
    if rest >= 100 {
        letters.push(HUNDREDS[(rest / 100 - 1) as usize]);
        rest %= 100;
    }
    match rest {
        15 => letters.extend(['ט', 'ו']),
        16 => letters.extend(['ט', 'ז']),
        _ => {
            if rest >= 10 {
                letters.push(TENS[(rest / 10 - 1) as usize]);
            }
            if rest % 10 > 0 {
                letters.push(UNITS[(rest % 10 - 1) as usize]);
            }
        }
    }

    let mut rt = String::new();
    match letters.split_last() {
        Some((&only, [])) => {
            rt.push(only);
            rt.push(GERESH);
        }
        Some((&last, init)) => {
            rt.extend(init);
            rt.push(GERSHAYIM);
            rt.push(final_form(last));
        }
        None => {}
    }
    Ok(rt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numerals() {
        for (std, num) in [
            ("א׳", 1),
            ("י׳", 10),
            ("י״א", 11),
            ("ט״ו", 15),
            ("ט״ז", 16),
            ("י״ז", 17),
            ("כ׳", 20),
            ("ל׳", 30),
            ("נ׳", 50),
            ("ק׳", 100),
            ("תת״ק", 900),
            ("תשמ״ז", 5747),
            ("תש״ף", 5780),
            ("תשפ״ו", 5786),
            ("תשע״ה", 5775),
            ("תשכ״ה", 5725),
            ("תש״ן", 5750),
        ] {
            assert_eq!(Ok(std.to_owned()), to_hebrew_numeral(num), "{num}");
        }
    }

    #[test]
    fn thousands_are_dropped() {
        assert_eq!(to_hebrew_numeral(786), to_hebrew_numeral(5786));
        assert!(to_hebrew_numeral(0).is_err());
        assert!(to_hebrew_numeral(5000).is_err());
    }

    #[test]
    fn test_month() {
        assert_eq!(Some("Nisan"), month(1, true));
        assert_eq!(Some("Tishri"), month(7, false));
        assert_eq!(Some("Adar"), month(12, false));
        assert_eq!(Some("Adar I"), month(12, true));
        assert_eq!(Some("אדר"), hebrew_month(12, false));
        assert_eq!(Some("אדר א׳"), hebrew_month(12, true));
    }

    #[test]
    fn months_out_of_range() {
        for leap in [false, true] {
            assert_eq!(None, month(0, leap));
            assert_eq!(None, month(14, leap));
            assert_eq!(None, hebrew_month(0, leap));
            assert_eq!(None, hebrew_month(14, leap));
        }
    }
}
