//! Tokenizing a command line into a [`Command`].

use crate::error::{CommandError, CommandResult};
use std::str::FromStr;

pub(crate) const USAGE_ADD: &str = "add <name> [phone]";
pub(crate) const USAGE_CHANGE: &str = "change <name> <old phone> <new phone>";
pub(crate) const USAGE_PHONE: &str = "phone <name>";
pub(crate) const USAGE_ADD_BIRTHDAY: &str = "add-birthday <name> <DD.MM.YYYY>";
pub(crate) const USAGE_SHOW_BIRTHDAY: &str = "show-birthday <name>";
pub(crate) const USAGE_BIRTHDAYS: &str = "birthdays [days]";
pub(crate) const USAGE_REMOVE_PHONE: &str = "remove-phone <name> <phone>";
pub(crate) const USAGE_DELETE: &str = "delete <name>";

/// A parsed assistant command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greet the user
    Hello,
    /// Create a contact or add a phone to an existing one
    Add { name: String, phone: Option<String> },
    /// Replace one phone number of a contact
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// Show one contact
    Phone { name: String },
    /// Show every contact
    All,
    /// Set the birthday of a contact
    AddBirthday { name: String, birthday: String },
    /// Show the birthday of a contact
    ShowBirthday { name: String },
    /// List birthdays in the coming days
    Birthdays { days: Option<u32> },
    /// Remove one phone number from a contact
    RemovePhone { name: String, phone: String },
    /// Remove a contact
    Delete { name: String },
    /// List available commands
    Help,
    /// End the session
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a line such as `add John 1234567890`.
    ///
    /// The command word is case-insensitive. Arguments beyond the ones a
    /// command takes are ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let word = tokens
            .next()
            .ok_or_else(|| CommandError::InvalidArgument("empty command".to_string()))?
            .to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let arg = |index: usize, usage: &'static str| -> CommandResult<String> {
            args.get(index)
                .map(|s| s.to_string())
                .ok_or(CommandError::MissingArguments { usage })
        };

        match word.as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add {
                name: arg(0, USAGE_ADD)?,
                phone: args.get(1).map(|s| s.to_string()),
            }),
            "change" => Ok(Command::Change {
                name: arg(0, USAGE_CHANGE)?,
                old_phone: arg(1, USAGE_CHANGE)?,
                new_phone: arg(2, USAGE_CHANGE)?,
            }),
            "phone" => Ok(Command::Phone {
                name: arg(0, USAGE_PHONE)?,
            }),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday {
                name: arg(0, USAGE_ADD_BIRTHDAY)?,
                birthday: arg(1, USAGE_ADD_BIRTHDAY)?,
            }),
            "show-birthday" => Ok(Command::ShowBirthday {
                name: arg(0, USAGE_SHOW_BIRTHDAY)?,
            }),
            "birthdays" => {
                let days = match args.first() {
                    Some(raw) => Some(raw.parse::<u32>().map_err(|_| {
                        CommandError::InvalidArgument(format!(
                            "days must be a non-negative number, got: {}. Usage: {}",
                            raw, USAGE_BIRTHDAYS
                        ))
                    })?),
                    None => None,
                };
                Ok(Command::Birthdays { days })
            }
            "remove-phone" => Ok(Command::RemovePhone {
                name: arg(0, USAGE_REMOVE_PHONE)?,
                phone: arg(1, USAGE_REMOVE_PHONE)?,
            }),
            "delete" => Ok(Command::Delete {
                name: arg(0, USAGE_DELETE)?,
            }),
            "help" => Ok(Command::Help),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand(word)),
        }
    }
}
