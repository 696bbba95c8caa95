use async_trait::async_trait;
use contact_book::error::{StorageError, StorageResult};
use contact_book::models::Directory;
use contact_book::repositories::DirectoryRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock directory repository for testing.
///
/// Keeps the saved directory in memory, can be told to fail the next save,
/// and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDirectoryRepository {
    saved: Arc<Mutex<Option<Directory>>>,
    fail_save: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a repository with nothing saved yet.
    pub fn new() -> Self {
        Self {
            saved: Arc::new(Mutex::new(None)),
            fail_save: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository that already holds `directory`.
    pub fn with_directory(directory: Directory) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(directory);
        repo
    }

    /// The directory passed to the last successful save.
    pub fn saved(&self) -> Option<Directory> {
        self.saved.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_save.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockDirectoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryRepository for MockDirectoryRepository {
    async fn load(&self) -> StorageResult<Directory> {
        self.track_call("load");
        Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
    }

    async fn save(&self, directory: &Directory) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_save.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }
        *self.saved.lock().unwrap() = Some(directory.clone());
        Ok(())
    }
}
