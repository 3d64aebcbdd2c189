use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    pub size_bytes: u64,
}

impl FsEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// One element of a directory listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DirItem {
    Entry(FsEntry),
    /// Listed by name, but its metadata could not be read.
    Unreadable { name: String, reason: String },
}

impl DirItem {
    pub fn name(&self) -> &str {
        match self {
            DirItem::Entry(entry) => &entry.name,
            DirItem::Unreadable { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, DirItem::Entry(entry) if entry.is_dir())
    }
}
