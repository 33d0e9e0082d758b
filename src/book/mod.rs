//! Address book storage and queries.
//!
//! The address book owns every record for the lifetime of the process. It
//! keeps insertion order so listings and the upcoming birthday query are
//! deterministic.

pub mod address_book;
pub mod upcoming;

pub use address_book::AddressBook;
pub use upcoming::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};
