//! Command handlers for the contact assistant.
//!
//! Handlers translate one command's arguments plus the address book into a
//! reply or a typed error. The boundary adapter renders either as text.

pub mod boundary;
pub mod commands;

pub use boundary::{guarded, respond};
pub use commands::{
    add_birthday, add_contact, birthdays, birthdays_report, change_contact, show_all,
    show_birthday, show_phone, NO_CONTACTS, NO_UPCOMING_BIRTHDAYS,
};
