mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{DirItem, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Describe `path` itself, following symlinks. Used for the root.
    async fn metadata(&self, path: &Path) -> Result<FsEntry>;

    /// Check that `path` can be opened: listed if it is a directory, read
    /// otherwise. The handle is closed before returning.
    async fn open(&self, path: &Path, is_dir: bool) -> Result<()>;

    /// List the immediate children of `dir`, in no particular order.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<DirItem>>;
}
