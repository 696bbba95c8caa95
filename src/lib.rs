//! Contact Book - a command-line assistant for a personal contact book.
//!
//! Contacts hold validated phone numbers and an optional birthday. The book
//! is driven by short text commands, reports upcoming birthdays and is saved
//! to a JSON file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone number, birthday)
//! - **models**: Records and the directory, including the upcoming-birthdays query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the directory as a versioned snapshot
//! - **commands**: Command parsing and handlers
//! - **shell**: The interactive command loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod shell;

pub use commands::{Command, CommandContext, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{Directory, Record, UpcomingBirthday};
pub use repositories::{DirectoryRepository, JsonFileRepository};
