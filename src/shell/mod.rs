//! Interactive command shell.
//!
//! The shell reads one line at a time, splits it into a command keyword and
//! arguments, dispatches to the matching handler and prints the reply. It
//! owns the address book for the whole session; nothing is persisted.

use crate::book::AddressBook;
use crate::config::Config;
use crate::handlers::{self, guarded};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// A command keyword understood by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    Unknown(String),
}

impl Command {
    /// Match a keyword, ignoring case and surrounding whitespace.
    pub fn parse(word: &str) -> Self {
        match word.trim().to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "exit" | "close" => Command::Exit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

/// Split a line into a command and its arguments.
///
/// Returns `None` for blank lines.
pub fn tokenize(line: &str) -> Option<(Command, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = Command::parse(parts.next()?);
    Some((command, parts.collect()))
}

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command
    Continue(String),
    /// Print the text and stop
    Exit(String),
}

/// A shell session over one address book.
pub struct Shell {
    book: AddressBook,
    config: Config,
    today: Option<NaiveDate>,
}

impl Shell {
    /// Create a session with an empty address book.
    pub fn new(config: Config) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            today: None,
        }
    }

    /// Pin the date used by `birthdays` instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Execute one command against the session's address book.
    pub fn execute(&mut self, command: Command, args: &[&str]) -> Reply {
        debug!("Executing {:?} with {} argument(s)", command, args.len());
        let today = self.today();
        let book = &mut self.book;

        let text = match command {
            Command::Exit => return Reply::Exit(FAREWELL.to_string()),
            Command::Hello => GREETING.to_string(),
            Command::Add => guarded(|| handlers::add_contact(args, book)),
            Command::Change => guarded(|| handlers::change_contact(args, book)),
            Command::Phone => guarded(|| handlers::show_phone(args, book)),
            Command::All => guarded(|| handlers::show_all(args, book)),
            Command::AddBirthday => guarded(|| handlers::add_birthday(args, book)),
            Command::ShowBirthday => guarded(|| handlers::show_birthday(args, book)),
            Command::Birthdays => {
                let window = self.config.birthday_window_days;
                let shift = self.config.shift_weekend_birthdays;
                guarded(|| handlers::birthdays_report(book, today, window, shift))
            }
            Command::Unknown(word) => {
                debug!("Unknown command: {}", word);
                INVALID_COMMAND.to_string()
            }
        };

        Reply::Continue(text)
    }

    /// Run the read-eval-print loop until `exit`/`close` or end of input.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writer.write_all(format!("{}\n", WELCOME).as_bytes()).await?;
        info!("Shell started (today is {})", self.today());

        let mut lines = reader.lines();
        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                info!("End of input, leaving shell");
                break;
            };

            let Some((command, args)) = tokenize(&line) else {
                continue;
            };

            match self.execute(command, &args) {
                Reply::Continue(text) => {
                    writer.write_all(format!("{}\n", text).as_bytes()).await?;
                }
                Reply::Exit(text) => {
                    writer.write_all(format!("{}\n", text).as_bytes()).await?;
                    break;
                }
            }
        }

        writer.flush().await?;
        Ok(())
    }
}
