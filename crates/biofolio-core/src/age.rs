//! Age calculation from a calendar birthdate.

use biofolio_types::error::BiographyError;
use chrono::{Datelike, NaiveDate};

/// Wire format of birthdates in submissions.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` birthdate.
pub fn parse_birthdate(input: &str) -> Result<NaiveDate, BiographyError> {
    NaiveDate::parse_from_str(input.trim(), BIRTHDATE_FORMAT).map_err(|e| {
        BiographyError::InvalidBirthdate {
            input: input.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Whole years from `birthdate` to `today`.
///
/// One year is subtracted while this year's birthday is still ahead. A Feb 29
/// birthday is reached on Mar 1 in non-leap years. A birthdate after `today`
/// gives a negative age.
pub fn calculate_age(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let birthday_pending = (today.month(), today.day()) < (birthdate.month(), birthdate.day());
    today.year() - birthdate.year() - i32::from(birthday_pending)
}

/// Parse `birthdate` and compute the age at `today`.
pub fn age(birthdate: &str, today: NaiveDate) -> Result<i32, BiographyError> {
    Ok(calculate_age(parse_birthdate(birthdate)?, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_before_birthday() {
        assert_eq!(calculate_age(date(2000, 6, 15), date(2024, 6, 14)), 23);
    }

    #[test]
    fn test_on_birthday() {
        assert_eq!(calculate_age(date(2000, 6, 15), date(2024, 6, 15)), 24);
    }

    #[test]
    fn test_day_after_birthday() {
        assert_eq!(calculate_age(date(2000, 6, 15), date(2024, 6, 16)), 24);
    }

    #[test]
    fn test_earlier_month_later_day() {
        // May 31 is before June 15 even though 31 > 15
        assert_eq!(calculate_age(date(2000, 6, 15), date(2024, 5, 31)), 23);
    }

    #[test]
    fn test_born_today() {
        assert_eq!(calculate_age(date(2024, 3, 1), date(2024, 3, 1)), 0);
    }

    #[test]
    fn test_leap_day_birthday() {
        assert_eq!(calculate_age(date(2000, 2, 29), date(2023, 2, 28)), 22);
        assert_eq!(calculate_age(date(2000, 2, 29), date(2023, 3, 1)), 23);
        assert_eq!(calculate_age(date(2000, 2, 29), date(2024, 2, 29)), 24);
    }

    #[test]
    fn test_future_birthdate_is_negative() {
        assert_eq!(calculate_age(date(2030, 1, 1), date(2024, 6, 15)), -6);
    }

    #[test]
    fn test_age_from_string() {
        assert_eq!(age("2000-06-15", date(2024, 6, 14)).unwrap(), 23);
        assert_eq!(age(" 2000-06-15 ", date(2024, 6, 15)).unwrap(), 24);
    }

    #[test]
    fn test_age_rejects_malformed_dates() {
        for input in ["", "15/06/2000", "2000-13-01", "2023-02-29", "not a date"] {
            let err = age(input, date(2024, 1, 1)).unwrap_err();
            assert!(
                matches!(err, BiographyError::InvalidBirthdate { .. }),
                "expected InvalidBirthdate for {input:?}"
            );
        }
    }
}
