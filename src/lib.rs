//! Contact Assistant - an interactive command-line contact manager.
//!
//! Stores names, phone numbers and birthdays in memory, validates input, and
//! answers queries such as "who has a birthday in the next 7 days".
//!
//! # Architecture
//!
//! - **domain**: Validated value types (name, phone number, birthday)
//! - **models**: The contact record
//! - **book**: Insertion-ordered address book and the upcoming birthday query
//! - **handlers**: Stateless command handlers and the error-to-text boundary
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **shell**: Line-based command loop used by the binary

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod shell;

pub use book::{AddressBook, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BotError, BotResult, ConfigError};
pub use models::Record;
pub use shell::{Command, Reply, Shell};
