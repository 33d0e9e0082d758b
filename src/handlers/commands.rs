//! Command handlers.
//!
//! Each handler takes the already-tokenized arguments of one command and the
//! address book, and returns either the reply text or a `BotError`. Handlers
//! hold no state between calls.

use crate::book::{AddressBook, DEFAULT_WINDOW_DAYS};
use crate::domain::{Birthday, PhoneNumber};
use crate::error::{BotError, BotResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Reply for `show_all` on an empty book.
pub const NO_CONTACTS: &str = "No contacts found.";

/// Reply for `birthdays` when nobody is in the window.
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays.";

/// Take the first `N` arguments, or fail with `MissingArguments`.
fn required<'a, const N: usize>(args: &[&'a str]) -> BotResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&str; N]>::try_from(head).ok())
        .ok_or(BotError::MissingArguments)
}

fn find<'a>(book: &'a AddressBook, name: &str) -> BotResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BotError::ContactNotFound(name.to_string()))
}

fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> BotResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BotError::ContactNotFound(name.to_string()))
}

/// `add <name> [phone]`: create the contact or add a phone to an existing one.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> BotResult<String> {
    let [name] = required::<1>(args)?;
    let phone = args.get(1).copied();

    if let Some(record) = book.find_mut(name) {
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        debug!("Updated contact {}", name);
        return Ok("Contact updated.".to_string());
    }

    // Validate before inserting so a bad phone leaves no empty record behind
    let phone = phone.map(PhoneNumber::parse).transpose()?;
    let mut record = Record::new(name)?;
    if let Some(phone) = phone {
        record.push_phone(phone);
    }
    book.add_record(record);
    debug!("Added contact {}", name);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> BotResult<String> {
    let [name, old_phone, new_phone] = required::<3>(args)?;
    find_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    debug!("Changed phone for {}", name);
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &AddressBook) -> BotResult<String> {
    let [name] = required::<1>(args)?;
    let record = find(book, name)?;
    if record.phones().is_empty() {
        return Err(BotError::NoPhoneForContact(name.to_string()));
    }
    Ok(format!("{}: {}", name, record.phones_display()))
}

/// `all`: every record, one per line, in insertion order.
pub fn show_all(_args: &[&str], book: &AddressBook) -> BotResult<String> {
    if book.is_empty() {
        return Ok(NO_CONTACTS.to_string());
    }
    Ok(book
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> BotResult<String> {
    let [name, birthday] = required::<2>(args)?;
    let record = find_mut(book, name)?;
    record.set_birthday(birthday)?;
    debug!("Set birthday for {}", name);
    Ok(format!("Birthday for {} added: {}.", name, birthday))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> BotResult<String> {
    let [name] = required::<1>(args)?;
    let birthday = find(book, name)?
        .birthday()
        .map(Birthday::to_string)
        .ok_or_else(|| BotError::NoBirthdaySet(name.to_string()))?;
    Ok(format!("{}'s birthday is {}.", name, birthday))
}

/// `birthdays`: upcoming birthdays for the next seven days from the local
/// date, with weekend dates moved to Monday.
///
/// This is the fixed-default entry point for library callers. The shell calls
/// [`birthdays_report`] instead so the window, weekend shift and clock can come
/// from its configuration.
pub fn birthdays(_args: &[&str], book: &AddressBook) -> BotResult<String> {
    birthdays_report(book, Local::now().date_naive(), DEFAULT_WINDOW_DAYS, true)
}

/// Render the upcoming birthdays relative to `today`, one `name - date` per
/// line, in address book order.
pub fn birthdays_report(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
    shift_weekends: bool,
) -> BotResult<String> {
    let upcoming = book.upcoming_birthdays_within(today, window_days, shift_weekends);
    if upcoming.is_empty() {
        return Ok(NO_UPCOMING_BIRTHDAYS.to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
