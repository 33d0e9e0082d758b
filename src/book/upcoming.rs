//! Upcoming birthday computation.

use crate::domain::{Birthday, BIRTHDAY_FORMAT};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Default look-ahead, in days, for the upcoming birthday query.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Date to congratulate on (weekend occurrences already moved to Monday)
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(BIRTHDAY_FORMAT))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// The next occurrence of `birthday` on or after `reference`.
pub fn next_occurrence(birthday: &Birthday, reference: NaiveDate) -> NaiveDate {
    let this_year = birthday.occurrence_in(reference.year());
    if this_year < reference {
        birthday.occurrence_in(reference.year() + 1)
    } else {
        this_year
    }
}

/// Move Saturday and Sunday to the following Monday.
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let offset = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

/// Date to congratulate on, if the birthday falls within the window.
///
/// The window is tested against the real occurrence; the weekend shift only
/// changes the reported date, so a Sunday birthday on day 7 is kept and
/// reported on day 8.
pub fn congratulation_date(
    birthday: &Birthday,
    reference: NaiveDate,
    window_days: u32,
    shift_weekends: bool,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, reference);
    let days_until = (occurrence - reference).num_days();
    if !(0..=i64::from(window_days)).contains(&days_until) {
        return None;
    }

    Some(if shift_weekends {
        shift_off_weekend(occurrence)
    } else {
        occurrence
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::parse("20.06.1990").unwrap();
        assert_eq!(next_occurrence(&birthday, date(2024, 6, 10)), date(2024, 6, 20));
    }

    #[test]
    fn test_next_occurrence_today() {
        let birthday = Birthday::parse("10.06.1990").unwrap();
        assert_eq!(next_occurrence(&birthday, date(2024, 6, 10)), date(2024, 6, 10));
    }

    #[test]
    fn test_next_occurrence_already_passed_rolls_over() {
        let birthday = Birthday::parse("09.06.1990").unwrap();
        assert_eq!(next_occurrence(&birthday, date(2024, 6, 10)), date(2025, 6, 9));
    }

    #[test]
    fn test_shift_off_weekend() {
        // 2024-06-15 is a Saturday
        assert_eq!(shift_off_weekend(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(shift_off_weekend(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(shift_off_weekend(date(2024, 6, 12)), date(2024, 6, 12));
    }

    #[test]
    fn test_window_boundaries() {
        // 2024-06-12 is a Wednesday; day 7 is Wednesday 2024-06-19
        let reference = date(2024, 6, 12);
        let on = |s: &str| {
            congratulation_date(&Birthday::parse(s).unwrap(), reference, 7, false)
        };

        assert_eq!(on("12.06.2000"), Some(date(2024, 6, 12)));
        assert_eq!(on("19.06.2000"), Some(date(2024, 6, 19)));
        assert_eq!(on("20.06.2000"), None);
        assert_eq!(on("11.06.2000"), None);
    }

    #[test]
    fn test_window_is_tested_before_shift() {
        // Reference Monday 2024-06-10; Sunday 2024-06-16 is day 6
        let reference = date(2024, 6, 10);
        let sunday = Birthday::parse("16.06.1985").unwrap();
        assert_eq!(
            congratulation_date(&sunday, reference, 7, true),
            Some(date(2024, 6, 17))
        );

        // Window of 5 excludes the Sunday even though Monday would be day 7
        assert_eq!(congratulation_date(&sunday, reference, 5, true), None);
    }

    #[test]
    fn test_window_across_year_end() {
        let birthday = Birthday::parse("03.01.1970").unwrap();
        // 2024-12-28 to 2025-01-03 is 6 days; 2025-01-03 is a Friday
        assert_eq!(
            congratulation_date(&birthday, date(2024, 12, 28), 7, true),
            Some(date(2025, 1, 3))
        );
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        // Falls on Tuesday 2023-02-28
        assert_eq!(
            congratulation_date(&birthday, date(2023, 2, 25), 7, true),
            Some(date(2023, 2, 28))
        );
    }

    #[test]
    fn test_display() {
        let entry = UpcomingBirthday {
            name: "Ann".to_string(),
            date: date(2024, 6, 17),
        };
        assert_eq!(entry.to_string(), "Ann - 17.06.2024");
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"name":"Ann","date":"17.06.2024"}"#
        );
    }
}
