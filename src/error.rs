//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit is not on the record
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),
}

/// Errors that can occur while loading or saving the contact book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not a valid snapshot
    #[error("Invalid contact book data: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file was written by an incompatible version
    #[error("Unsupported contact book format version {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur while parsing or executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not known
    #[error("Unknown command '{0}'. Type 'help' to see available commands.")]
    UnknownCommand(String),

    /// Required arguments are missing
    #[error("Enter the argument for the command. Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// An argument has the wrong shape
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The named contact does not exist
    #[error("Contact {0} does not exist")]
    ContactNotFound(String),

    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
