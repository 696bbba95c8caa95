//! Versioned on-disk representation of a [`Directory`].

use crate::error::{StorageError, StorageResult};
use crate::models::{Directory, Record};
use serde::{Deserialize, Serialize};

/// Format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The whole contact book as stored in the data file.
///
/// ```json
/// { "version": 1, "contacts": [ { "name": "Anna", "phones": ["0501234567"], "birthday": "10.10.1990" } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectorySnapshot {
    /// Format version of the file
    pub version: u32,

    /// One entry per contact, in directory order
    #[serde(default)]
    pub contacts: Vec<Record>,
}

impl DirectorySnapshot {
    /// Take a snapshot of `directory`.
    pub fn capture(directory: &Directory) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            contacts: directory.iter().cloned().collect(),
        }
    }

    /// Rebuild the directory, rejecting unknown format versions.
    ///
    /// Later entries with a repeated name replace earlier ones.
    pub fn restore(self) -> StorageResult<Directory> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(self.version));
        }

        let mut directory = Directory::new();
        for record in self.contacts {
            directory.add(record);
        }
        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_keeps_order_and_fields() {
        let mut directory = Directory::new();
        let mut anna = Record::new("Anna").unwrap();
        anna.add_phone("0501234567").unwrap();
        anna.add_birthday("10.10.1990").unwrap();
        directory.add(anna);
        directory.add(Record::new("Bob").unwrap());

        let json = serde_json::to_value(DirectorySnapshot::capture(&directory)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": 1,
                "contacts": [
                    {"name": "Anna", "phones": ["0501234567"], "birthday": "10.10.1990"},
                    {"name": "Bob", "phones": []}
                ]
            })
        );
    }

    #[test]
    fn test_restore_rejects_unknown_version() {
        let snapshot = DirectorySnapshot {
            version: 2,
            contacts: Vec::new(),
        };
        assert!(matches!(
            snapshot.restore(),
            Err(StorageError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn test_restore_duplicate_names_last_wins() {
        let json = r#"{"version":1,"contacts":[
            {"name":"Anna","phones":["1111111111"]},
            {"name":"Anna","phones":["2222222222"]}
        ]}"#;
        let snapshot: DirectorySnapshot = serde_json::from_str(json).unwrap();
        let directory = snapshot.restore().unwrap();

        assert_eq!(directory.len(), 1);
        let anna = directory.find("Anna").unwrap();
        assert_eq!(anna.phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_invalid_field_fails_to_parse() {
        let json = r#"{"version":1,"contacts":[{"name":"Anna","birthday":"1990-10-10"}]}"#;
        assert!(serde_json::from_str::<DirectorySnapshot>(json).is_err());
    }
}
