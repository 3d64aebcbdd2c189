use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures met while walking a root.
///
/// The `Display` form of each filesystem variant is the diagnostic line
/// printed in the tree output. The underlying cause is kept in `reason`
/// for logging only.
#[derive(Error, Debug)]
pub enum WalkError {
    /// The root itself could not be opened. Fatal for that root.
    #[error("\"{}\" [error opening dir]", path.display())]
    Open { path: PathBuf, reason: String },

    /// An entry was listed but its metadata could not be read.
    #[error("\"{name}\" [error checking path]")]
    Stat { name: String, reason: String },

    /// A directory's contents could not be listed.
    #[error("\"{}\" [error getting directory contents]", path.display())]
    ReadDir { path: PathBuf, reason: String },

    /// Writing to the output sink failed.
    #[error(transparent)]
    Output(#[from] io::Error),
}

impl WalkError {
    pub fn reason(&self) -> Option<&str> {
        match self {
            WalkError::Open { reason, .. }
            | WalkError::Stat { reason, .. }
            | WalkError::ReadDir { reason, .. } => Some(reason),
            WalkError::Output(_) => None,
        }
    }
}
