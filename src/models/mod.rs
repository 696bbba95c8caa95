//! Data models for the contact book.
//!
//! A [`Record`] is one contact; the [`Directory`] holds every record and
//! answers the upcoming-birthdays query.

pub mod directory;
pub mod record;

pub use directory::{Directory, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
