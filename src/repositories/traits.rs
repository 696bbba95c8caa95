use crate::error::StorageResult;
use crate::models::Directory;
use async_trait::async_trait;

/// Repository holding the whole contact book between sessions.
///
/// The directory is always loaded and saved as one snapshot; there are no
/// per-record operations. Implementations exist for a JSON file and, in
/// tests, for memory.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Load the saved directory.
    ///
    /// Returns an empty directory when nothing has been saved yet.
    async fn load(&self) -> StorageResult<Directory>;

    /// Replace the saved directory with `directory`.
    async fn save(&self, directory: &Directory) -> StorageResult<()>;
}
