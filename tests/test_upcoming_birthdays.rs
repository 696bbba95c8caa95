//! Upcoming-birthday query through the public API.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use contact_book::models::{Directory, Record, DEFAULT_BIRTHDAY_WINDOW_DAYS};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_with_birthdays(entries: &[(&str, &str)]) -> Directory {
    let mut book = Directory::new();
    for (name, birthday) in entries {
        let mut record = Record::new(*name).unwrap();
        record.add_birthday(birthday).unwrap();
        book.add(record);
    }
    book
}

#[test]
fn test_default_window_is_one_week() {
    assert_eq!(DEFAULT_BIRTHDAY_WINDOW_DAYS, 7);
}

#[test]
fn test_birthday_five_days_ahead() {
    let book = book_with_birthdays(&[("Anna", "10.10.2022")]);
    let upcoming = book.upcoming_birthdays(ymd(2024, 10, 5), DEFAULT_BIRTHDAY_WINDOW_DAYS);

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Anna");
    assert_eq!(upcoming[0].date, ymd(2024, 10, 10));
}

#[test]
fn test_birthday_across_new_year() {
    let book = book_with_birthdays(&[("Anna", "01.01.2000")]);
    let upcoming = book.upcoming_birthdays(ymd(2024, 12, 28), DEFAULT_BIRTHDAY_WINDOW_DAYS);

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].date, ymd(2025, 1, 1));
}

#[test]
fn test_contact_without_birthday_never_listed() {
    let mut book = book_with_birthdays(&[("Anna", "05.10.2000")]);
    book.add(Record::new("Bob").unwrap());

    for window in [0, 7, 30, 366] {
        let upcoming = book.upcoming_birthdays(ymd(2024, 10, 5), window);
        assert!(upcoming.iter().all(|b| b.name != "Bob"));
    }
}

#[test]
fn test_zero_window_matches_only_today() {
    // 2024-10-08 is a Tuesday
    let book = book_with_birthdays(&[("Today", "08.10.1970"), ("Tomorrow", "09.10.1970")]);
    let upcoming = book.upcoming_birthdays(ymd(2024, 10, 8), 0);

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Today");
}

/// For every day of a leap year and a common year, each reported date is a
/// weekday that lies within the window, pushed at most two days past it.
#[test]
fn test_reported_dates_are_weekdays_near_the_window() {
    let book = book_with_birthdays(&[
        ("A", "01.01.1990"),
        ("B", "29.02.1992"),
        ("C", "15.06.1985"),
        ("D", "31.12.1999"),
        ("E", "28.02.2001"),
    ]);

    for year in [2023, 2024] {
        let mut today = ymd(year, 1, 1);
        while today.year() == year {
            for b in book.upcoming_birthdays(today, 7) {
                assert!(
                    !matches!(b.date.weekday(), Weekday::Sat | Weekday::Sun),
                    "{} reported on a weekend from {}",
                    b.name,
                    today
                );
                assert!(b.date >= today);
                assert!(b.date <= today + Days::new(9));
            }
            today = today + Days::new(1);
        }
    }
}

#[test]
fn test_every_birthday_reported_once_per_year() {
    let book = book_with_birthdays(&[("Anna", "17.03.1991")]);

    // With a zero window, the birthday shows up on exactly one day a year
    let mut hits = 0;
    let mut today = ymd(2025, 1, 1);
    while today.year() == 2025 {
        hits += book.upcoming_birthdays(today, 0).len();
        today = today + Days::new(1);
    }
    assert_eq!(hits, 1);
}
