//! Error type shared by every calendar in the crate.

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A year/month/day triple that does not name a day in `calendar`.
    #[error("invalid {calendar} date: {year}-{month}-{day}")]
    InvalidDate {
        calendar: &'static str,
        year: i32,
        month: u32,
        day: u32,
    },

    /// A month number outside the months of `calendar`.
    #[error("invalid {calendar} month: {month}")]
    InvalidMonth { calendar: &'static str, month: u32 },

    /// A date that exists in `calendar` but lies before the first
    /// supported Julian day number.
    #[error("{calendar} date is out of supported range")]
    OutOfRange { calendar: &'static str },

    /// A numeral that could not be parsed or formatted.
    #[error("invalid numeral {numeral:?}: {reason}")]
    InvalidNumeral { numeral: String, reason: &'static str },

    /// A holiday name that matches none of [`crate::Holiday`].
    #[error("unknown holiday: {name:?}")]
    UnknownHoliday { name: String },

    /// A leap year rule name that matches none of
    /// [`crate::islamic::LeapYearRule`].
    #[error("unknown Islamic leap year rule: {name:?}")]
    UnknownLeapYearRule { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        let err = Error::InvalidDate {
            calendar: "Persian",
            year: 1403,
            month: 12,
            day: 31,
        };
        assert_eq!(err.to_string(), "invalid Persian date: 1403-12-31");
    }

    #[test]
    fn error_invalid_month() {
        let err = Error::InvalidMonth {
            calendar: "Hebrew",
            month: 13,
        };
        assert_eq!(err.to_string(), "invalid Hebrew month: 13");
    }

    #[test]
    fn error_invalid_numeral() {
        let err = Error::InvalidNumeral {
            numeral: "MMMM".to_owned(),
            reason: "value exceeds 3999",
        };
        assert_eq!(err.to_string(), "invalid numeral \"MMMM\": value exceeds 3999");
    }

    #[test]
    fn error_unknown_holiday() {
        let err = Error::UnknownHoliday {
            name: "boxing-day".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown holiday: \"boxing-day\"");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
