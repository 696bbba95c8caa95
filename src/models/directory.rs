//! The address book: all records, keyed by contact name.

use super::record::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Default horizon, in days, of [`Directory::upcoming_birthdays`].
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Day to send congratulations on (weekend birthdays move to Monday)
    pub date: NaiveDate,
}

/// The collection of all contact records.
///
/// Records are stored in insertion order and looked up by name. The key of
/// every entry is read from the record's own name, so a record can never be
/// filed under a different key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    ///
    /// A replaced record keeps its position and is returned whole; nothing
    /// from it is merged into the new one.
    pub fn add(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(index) => Some(std::mem::replace(&mut self.records[index], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove and return the record named `name`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        Some(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    /// Contacts whose next birthday is at most `window_days` days after `today`.
    ///
    /// Both ends of the window are inclusive. A birthday on a Saturday or a
    /// Sunday is reported on the following Monday, which may fall outside
    /// the window. Records without a birthday are skipped. Results follow
    /// insertion order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;

                let mut next = birthday.anniversary_in(today.year())?;
                if next < today {
                    next = birthday.anniversary_in(today.year() + 1)?;
                }

                let days_until = (next - today).num_days();
                if days_until > i64::from(window_days) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date: roll_weekend_to_monday(next),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// Move a Saturday or Sunday forward to the next Monday.
fn roll_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            // Days ahead to Monday is always strictly positive here
            let weekday = i64::from(date.weekday().num_days_from_monday());
            let mut days_ahead = -weekday;
            if days_ahead <= 0 {
                days_ahead += 7;
            }
            date + Days::new(days_ahead as u64)
        }
        _ => date,
    }
}
