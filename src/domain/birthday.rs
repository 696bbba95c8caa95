//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only textual birthday format accepted or produced.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is a valid regex")
});

/// A birthday in `DD.MM.YYYY` form.
///
/// The text is parsed into a calendar date at construction time, so a
/// `Birthday` always holds a real date. Rendering returns the original text,
/// not a reformatted date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("10.10.1990").unwrap();
/// assert_eq!(birthday.as_str(), "10.10.1990");
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 10, 10).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from `DD.MM.YYYY` text.
    ///
    /// # Validation Rules
    ///
    /// - Two-digit day, two-digit month, four-digit year separated by dots
    /// - The day must exist in that month and year (`29.02.2023` is rejected)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if either rule fails.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();

        if !BIRTHDAY_PATTERN.is_match(&text) {
            return Err(ValidationError::InvalidBirthday(text));
        }

        match NaiveDate::parse_from_str(&text, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { text, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(text)),
        }
    }

    /// Get the birthday text as given at construction.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day()).or_else(|| {
            if self.date.month() == 2 && self.date.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
