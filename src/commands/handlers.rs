//! Command handlers.
//!
//! Every handler receives the directory it works on explicitly and returns
//! the reply text for the user.

use super::parser::Command;
use super::CommandContext;
use crate::domain::BIRTHDAY_FORMAT;
use crate::error::{CommandError, CommandResult};
use crate::models::{Directory, Record};

const HELP_TEXT: &str = "Available commands:
  hello                                   greet the assistant
  add <name> [phone]                      add a contact or a phone to it
  change <name> <old phone> <new phone>   replace a phone number
  phone <name>                            show a contact
  all                                     show every contact
  add-birthday <name> <DD.MM.YYYY>        set a birthday
  show-birthday <name>                    show a birthday
  birthdays [days]                        list upcoming birthdays
  remove-phone <name> <phone>             remove a phone number
  delete <name>                           remove a contact
  close | exit                            save and quit";

/// What the session should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and keep reading commands
    Reply(String),
    /// Print the message and end the session
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Reply(message) | Outcome::Exit(message) => message,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// Run `command` against `book`.
pub fn execute(
    command: Command,
    book: &mut Directory,
    ctx: &CommandContext,
) -> CommandResult<Outcome> {
    let reply = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add { name, phone } => add_contact(book, name, phone)?,
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_phone(book, &name, &old_phone, &new_phone)?,
        Command::Phone { name } => show_contact(book, &name)?,
        Command::All => show_all(book),
        Command::AddBirthday { name, birthday } => add_birthday(book, &name, &birthday)?,
        Command::ShowBirthday { name } => show_birthday(book, &name)?,
        Command::Birthdays { days } => {
            birthdays(book, ctx, days.unwrap_or(ctx.birthday_window_days()))
        }
        Command::RemovePhone { name, phone } => remove_phone(book, &name, &phone)?,
        Command::Delete { name } => delete_contact(book, &name)?,
        Command::Help => HELP_TEXT.to_string(),
        Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
    };
    Ok(Outcome::Reply(reply))
}

fn contact<'a>(book: &'a Directory, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn contact_mut<'a>(book: &'a mut Directory, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

/// A new contact is stored only once its phone (if any) validated.
fn add_contact(book: &mut Directory, name: String, phone: Option<String>) -> CommandResult<String> {
    if let Some(record) = book.find_mut(&name) {
        if let Some(phone) = phone {
            record.add_phone(&phone)?;
        }
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name.as_str())?;
    if let Some(phone) = phone {
        record.add_phone(&phone)?;
    }
    book.add(record);
    Ok(format!("Contact {} added.", name))
}

fn change_phone(book: &mut Directory, name: &str, old: &str, new: &str) -> CommandResult<String> {
    contact_mut(book, name)?.edit_phone(old, new)?;
    Ok(format!("Contact {} has been changed.", name))
}

fn show_contact(book: &Directory, name: &str) -> CommandResult<String> {
    Ok(contact(book, name)?.render())
}

fn show_all(book: &Directory) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }

    let mut lines = vec!["Book records:".to_string()];
    lines.extend(book.iter().map(Record::render));
    lines.join("\n")
}

fn add_birthday(book: &mut Directory, name: &str, birthday: &str) -> CommandResult<String> {
    contact_mut(book, name)?.add_birthday(birthday)?;
    Ok(format!("Birthday information for {} updated.", name))
}

fn show_birthday(book: &Directory, name: &str) -> CommandResult<String> {
    let reply = match contact(book, name)?.birthday() {
        Some(birthday) => format!("{} birthday: {}", name, birthday),
        None => format!("{} has no birthday set.", name),
    };
    Ok(reply)
}

fn birthdays(book: &Directory, ctx: &CommandContext, window_days: u32) -> String {
    let upcoming = book.upcoming_birthdays(ctx.today(), window_days);
    if upcoming.is_empty() {
        return format!("No birthdays in the next {} days.", window_days);
    }

    let mut lines = vec![format!(
        "Congratulation list for the next {} days:",
        window_days
    )];
    lines.extend(
        upcoming
            .iter()
            .map(|b| format!("{}: {}", b.name, b.date.format(BIRTHDAY_FORMAT))),
    );
    lines.join("\n")
}

fn remove_phone(book: &mut Directory, name: &str, phone: &str) -> CommandResult<String> {
    let reply = match contact_mut(book, name)?.remove_phone(phone) {
        Some(removed) => format!("Phone {} removed from {}.", removed, name),
        None => format!("Contact {} has no phone {}.", name, phone),
    };
    Ok(reply)
}

fn delete_contact(book: &mut Directory, name: &str) -> CommandResult<String> {
    book.delete(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    Ok(format!("Contact {} deleted.", name))
}
