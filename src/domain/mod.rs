//! Domain value objects.
//!
//! The validated fields a contact is built from: its name, its phone numbers
//! and its birthday. Each one checks its input at construction time, so an
//! invalid value can never be represented.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
