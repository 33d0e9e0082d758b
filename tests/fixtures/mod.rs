//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable address books and dates so individual
//! tests only spell out what they assert on.

use chrono::{Days, NaiveDate};
use contact_assistant::{AddressBook, Record};

/// Build a calendar date, panicking on invalid input (tests only).
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// A birthday string whose month/day lands `days` after `reference`.
///
/// The birth year is fixed to 1990 unless the occurrence is 29 February,
/// in which case a leap birth year is used.
#[allow(dead_code)]
pub fn birthday_in(reference: NaiveDate, days: i64) -> String {
    let target = if days >= 0 {
        reference + Days::new(days as u64)
    } else {
        reference - Days::new(days.unsigned_abs())
    };
    let birth_year = if target.format("%d.%m").to_string() == "29.02" {
        1992
    } else {
        1990
    };
    format!("{}.{}", target.format("%d.%m"), birth_year)
}

/// Create a record with optional phone and birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phone: Option<&str>, birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid name");
    if let Some(phone) = phone {
        record.add_phone(phone).expect("valid phone");
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).expect("valid birthday");
    }
    record
}

/// An address book where each `(name, birthday)` pair becomes a record.
#[allow(dead_code)]
pub fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_record(sample_record(name, None, Some(birthday)));
    }
    book
}
