//! Boundary adapter between handlers and the shell.
//!
//! The shell never branches on error kinds: every handler call goes through
//! [`guarded`], which turns both success and failure into the text to print.

use crate::error::{BotError, BotResult};
use tracing::warn;

/// Render a handler result as display text.
pub fn respond(result: BotResult<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(err) => {
            match &err {
                BotError::Unexpected(detail) => warn!("Unexpected command failure: {}", detail),
                other => warn!("Command rejected: {:?}", other),
            }
            err.to_string()
        }
    }
}

/// Run one handler invocation and render its result.
///
/// # Example
///
/// ```
/// use contact_assistant::book::AddressBook;
/// use contact_assistant::handlers::{guarded, show_phone};
///
/// let book = AddressBook::new();
/// let reply = guarded(|| show_phone(&["Ann"], &book));
/// assert_eq!(reply, "Contact Ann not found.");
/// ```
pub fn guarded<F>(handler: F) -> String
where
    F: FnOnce() -> BotResult<String>,
{
    respond(handler())
}
