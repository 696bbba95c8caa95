//! Assistant commands.
//!
//! A command line is parsed into a [`Command`] and run by [`execute`]
//! against a directory passed in by the caller. There is no global command
//! table or shared book.

mod handlers;
mod parser;

pub use handlers::{execute, Outcome};
pub use parser::Command;

use crate::config::Config;
use crate::models::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use chrono::{Local, NaiveDate};

/// Settings the handlers need besides the directory itself.
#[derive(Debug, Clone)]
pub struct CommandContext {
    birthday_window_days: u32,
    today: Option<NaiveDate>,
}

impl CommandContext {
    /// Create a context with the default `birthdays` window.
    pub fn new(birthday_window_days: u32) -> Self {
        Self {
            birthday_window_days,
            today: None,
        }
    }

    /// Pin the date used as "today" instead of the local calendar date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn birthday_window_days(&self) -> u32 {
        self.birthday_window_days
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new(DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }
}

impl From<&Config> for CommandContext {
    fn from(config: &Config) -> Self {
        Self::new(config.birthday_window_days)
    }
}
