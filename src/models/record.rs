//! Record model representing one contact in the book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// Phone numbers keep the order they were added in. The same number may be
/// stored more than once; no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Name of the contact, also its key in the directory
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Birthday, absent until set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with a name and nothing else.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a new record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it to the phone list.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(number)?);
        Ok(())
    }

    /// Remove the first phone equal to `number`.
    ///
    /// Returns the removed phone, or `None` if the record has no such number.
    pub fn remove_phone(&mut self, number: &str) -> Option<PhoneNumber> {
        let index = self.phones.iter().position(|p| p.as_str() == number)?;
        Some(self.phones.remove(index))
    }

    /// Replace the first occurrence of `old` with `new`.
    ///
    /// The new number is appended before the old one is removed, so a
    /// rejected `new` leaves the phone list untouched.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old` is not on this record
    /// - `BookError::Validation` if `new` is not a valid phone number
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }

        self.add_phone(new)?;
        self.remove_phone(old);
        Ok(())
    }

    /// Find the phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Set the birthday from `DD.MM.YYYY` text, replacing any previous one.
    pub fn add_birthday(&mut self, text: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(text)?);
        Ok(())
    }

    /// One-line summary of the contact.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, birthday: ", self.name)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday)?,
            None => write!(f, "not set")?,
        }
        write!(f, ", phones: {}", phones)
    }
}
