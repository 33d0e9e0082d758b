//! Record model: one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BotError, BotResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact's stored data.
///
/// Phones keep insertion order and may contain duplicates. Every mutation
/// validates its input before touching the record, so a rejected phone or
/// birthday leaves the record unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, also the address book key
    name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Birthday, if one was set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.push_phone(PhoneNumber::parse(phone)?);
        Ok(())
    }

    /// Append an already validated phone number.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone equal to `phone`. Absent phones are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before the lookup, so an invalid replacement is
    /// reported even when `old` is missing.
    ///
    /// # Errors
    ///
    /// - `BotError::InvalidPhoneFormat` if `new` is not 10 digits
    /// - `BotError::PhoneNotFound` if no phone equals `old`
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BotResult<()> {
        let replacement = PhoneNumber::parse(new)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| BotError::PhoneNotFound(old.to_string()))?;
        *slot = replacement;
        Ok(())
    }

    /// Return the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, overwriting any previous one.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_display())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
