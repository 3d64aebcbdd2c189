use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{DirItem, EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response<T> {
    Ok(T),
    Err(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    metadata: HashMap<PathBuf, Response<FsEntry>>,
    listings: HashMap<PathBuf, Response<Vec<DirItem>>>,
    open_errors: HashMap<PathBuf, String>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_root(&self, path: impl Into<PathBuf>, size_bytes: u64) {
        let path = path.into();
        let entry = FsEntry {
            name: path.display().to_string(),
            kind: EntryKind::Directory,
            size_bytes,
            path: path.clone(),
        };
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.metadata.insert(path, Response::Ok(entry));
    }

    pub fn set_root_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .metadata
            .insert(path.into(), Response::Err(message.into()));
    }

    /// Metadata for `path` still succeeds, but opening it fails.
    pub fn set_open_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.open_errors.insert(path.into(), message.into());
    }

    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<DirItem>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.listings.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .listings
            .insert(dir.into(), Response::Err(message.into()));
    }

    /// Directories that were listed, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn metadata(&self, path: &Path) -> Result<FsEntry> {
        let inner = self.inner.lock().expect("mock fs lock");
        match inner.metadata.get(path) {
            Some(Response::Ok(entry)) => Ok(entry.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock metadata for {}", path.display())),
        }
    }

    async fn open(&self, path: &Path, _is_dir: bool) -> Result<()> {
        let inner = self.inner.lock().expect("mock fs lock");
        match inner.open_errors.get(path) {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }

    async fn read_dir(&self, dir: &Path) -> Result<Vec<DirItem>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.listings.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }
}
