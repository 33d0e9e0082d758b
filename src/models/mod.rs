//! Data models for the contact assistant.
//!
//! This module contains the record type stored in the address book.

pub mod record;

pub use record::Record;
