mod entry;
mod summary;

pub use entry::{DirItem, EntryKind, FsEntry};
pub use summary::WalkCounts;
