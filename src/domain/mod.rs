//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names, phone numbers and birthdays. Each
//! one validates at construction time, so invalid data cannot be represented
//! anywhere else in the crate.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
