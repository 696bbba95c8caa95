use super::snapshot::DirectorySnapshot;
use crate::error::StorageResult;
use crate::models::Directory;
use crate::repositories::traits::DirectoryRepository;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory repository backed by a single JSON file.
///
/// The file holds a [`DirectorySnapshot`]. A missing file means nothing has
/// been saved yet and loads as an empty directory.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DirectoryRepository for JsonFileRepository {
    async fn load(&self) -> StorageResult<Directory> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No contact book at {}, starting empty",
                    self.path.display()
                );
                return Ok(Directory::new());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: DirectorySnapshot = serde_json::from_str(&raw)?;
        let directory = snapshot.restore()?;
        debug!(
            "Loaded {} contacts from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }

    async fn save(&self, directory: &Directory) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(&DirectorySnapshot::capture(directory))?;
        tokio::fs::write(&self.path, json).await?;
        debug!(
            "Saved {} contacts to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }
}
