pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

use std::path::PathBuf;

use log::warn;
use termcolor::WriteColor;

use crate::core::{WalkOptions, walk_root};
use crate::error::WalkError;
use crate::fs::FileSystem;

/// Walk each root in turn, printing its tree followed by its summary.
///
/// A root that cannot be opened gets a one-line diagnostic and no summary;
/// the remaining roots are still walked. Only output failures are returned.
pub async fn run<F: FileSystem, W: WriteColor>(
    fs: &F,
    roots: &[PathBuf],
    options: &WalkOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    for root in roots {
        match walk_root(fs, root, options, out).await {
            Ok(counts) => writeln!(out, "\n{counts}")?,
            Err(err @ WalkError::Open { .. }) => {
                warn!("{}: {}", root.display(), err.reason().unwrap_or_default());
                writeln!(out, "{err}")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    out.flush()?;
    Ok(())
}
