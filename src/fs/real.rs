use anyhow::Result;
use async_trait::async_trait;
use std::fs::FileType;
use std::path::Path;
use tokio::task;

use crate::models::{DirItem, EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn metadata(&self, path: &Path) -> Result<FsEntry> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || {
            let metadata = std::fs::metadata(&path)?;
            Ok(FsEntry {
                name: path.display().to_string(),
                kind: entry_kind(metadata.file_type()),
                size_bytes: metadata.len(),
                path,
            })
        })
        .await?
    }

    async fn open(&self, path: &Path, is_dir: bool) -> Result<()> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || {
            if is_dir {
                std::fs::read_dir(&path)?;
            } else {
                std::fs::File::open(&path)?;
            }
            Ok(())
        })
        .await?
    }

    async fn read_dir(&self, dir: &Path) -> Result<Vec<DirItem>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut items = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let name = entry.file_name().to_string_lossy().into_owned();

                // DirEntry::metadata does not traverse symlinks.
                let item = match entry.metadata() {
                    Ok(metadata) => DirItem::Entry(FsEntry {
                        path: entry.path(),
                        name,
                        kind: entry_kind(metadata.file_type()),
                        size_bytes: metadata.len(),
                    }),
                    Err(err) => DirItem::Unreadable {
                        name,
                        reason: err.to_string(),
                    },
                };
                items.push(item);
            }
            Ok(items)
        })
        .await?
    }
}

fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
