//! Insertion-ordered address book.

use crate::book::upcoming::{self, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// The in-memory collection of all records, keyed by contact name.
///
/// Iteration follows insertion order. Re-inserting an existing name replaces
/// the record but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any existing one.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            debug!("Replaced record for {}", name);
        } else {
            debug!("Added record for {}", name);
            self.order.push(name);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name. Deleting a missing name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            self.order.retain(|key| key != name);
            debug!("Deleted record for {}", name);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Birthdays in the 7 days starting at `reference`, weekend-shifted.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(reference, DEFAULT_WINDOW_DAYS, true)
    }

    /// Birthdays whose next occurrence is `0..=window_days` days after
    /// `reference`, in insertion order.
    pub fn upcoming_birthdays_within(
        &self,
        reference: NaiveDate,
        window_days: u32,
        shift_weekends: bool,
    ) -> Vec<UpcomingBirthday> {
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                upcoming::congratulation_date(birthday, reference, window_days, shift_weekends)
                    .map(|date| UpcomingBirthday {
                        name: record.name().to_string(),
                        date,
                    })
            })
            .collect()
    }
}
