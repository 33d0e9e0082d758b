//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every `BotError` renders as the exact message the shell prints.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while running a command against the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// Phone string is not exactly 10 digits
    #[error("Invalid phone number: {0}. Phone must contain exactly 10 digits.")]
    InvalidPhoneFormat(String),

    /// Birthday string is not a valid DD.MM.YYYY calendar date
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat(String),

    /// No record exists under the given name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// The phone to edit is not on the record
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),

    /// The record exists but has no phones
    #[error("No phone found for {0}.")]
    NoPhoneForContact(String),

    /// The record exists but has no birthday
    #[error("No birthday found for {0}.")]
    NoBirthdaySet(String),

    /// Too few arguments for the command
    #[error("Please provide all necessary arguments.")]
    MissingArguments,

    /// Anything else
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl From<ValidationError> for BotError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidPhone(phone) => BotError::InvalidPhoneFormat(phone),
            ValidationError::InvalidBirthday(date) => BotError::InvalidDateFormat(date),
            ValidationError::EmptyName => BotError::Unexpected(err.to_string()),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BotError
pub type BotResult<T> = Result<T, BotError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
