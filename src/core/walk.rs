use std::cmp::Ordering;
use std::path::Path;

use log::{debug, info};
use termcolor::WriteColor;

use crate::error::WalkError;
use crate::fs::FileSystem;
use crate::models::{DirItem, WalkCounts};

use super::filter::IgnoreTokens;
use super::render::{write_label, write_prefix};

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Deepest level to print, counting the root's children as level 0.
    /// Zero means unlimited.
    pub max_depth: usize,
    /// Comma-separated substrings to ignore (e.g., "target,.git")
    pub ignore_pattern: Option<String>,
    /// Whether to sort directories before files
    pub dirs_first: bool,
}

/// Walk one root, writing a line per visited entry to `out`.
///
/// Only a root that cannot be opened, or a failing `out`, is an error.
/// Unreadable entries and directories below the root are reported inline
/// and the walk carries on.
pub async fn walk_root<F: FileSystem, W: WriteColor>(
    fs: &F,
    root: &Path,
    options: &WalkOptions,
    out: &mut W,
) -> Result<WalkCounts, WalkError> {
    let open_error = |err: anyhow::Error| WalkError::Open {
        path: root.to_path_buf(),
        reason: format!("{err:#}"),
    };
    let root_entry = fs.metadata(root).await.map_err(open_error)?;
    fs.open(root, root_entry.is_dir())
        .await
        .map_err(open_error)?;
    info!("walking {}", root.display());

    write_label(out, root_entry.size_bytes, &root.display().to_string(), true)?;

    let mut state = WalkState {
        fs,
        out,
        ignore: IgnoreTokens::new(options.ignore_pattern.as_deref().unwrap_or_default()),
        max_depth: options.max_depth,
        dirs_first: options.dirs_first,
        counts: WalkCounts {
            directories: 1,
            files: 0,
        },
    };
    state.walk_dir(root, "", 0, &mut Vec::new()).await?;

    debug!("finished {}: {}", root.display(), state.counts);
    Ok(state.counts)
}

/// Everything a single traversal owns. Never shared between roots.
struct WalkState<'a, F, W> {
    fs: &'a F,
    out: W,
    ignore: IgnoreTokens,
    max_depth: usize,
    dirs_first: bool,
    counts: WalkCounts,
}

impl<F: FileSystem, W: WriteColor> WalkState<'_, F, W> {
    /// Print the children of `dir`, which sit at `depth`, and recurse.
    async fn walk_dir(
        &mut self,
        dir: &Path,
        relative: &str,
        depth: usize,
        ancestor_has_more: &mut Vec<bool>,
    ) -> Result<(), WalkError> {
        if self.max_depth > 0 && depth > self.max_depth {
            debug!("depth limit reached at {}", dir.display());
            return Ok(());
        }

        debug!("reading {}", dir.display());
        let mut items = match self.fs.read_dir(dir).await {
            Ok(items) => items,
            Err(err) => {
                return self.report(WalkError::ReadDir {
                    path: dir.to_path_buf(),
                    reason: format!("{err:#}"),
                });
            }
        };
        sort_items(&mut items, self.dirs_first);

        let ignore = &self.ignore;
        let visible: Vec<(String, DirItem)> = items
            .into_iter()
            .filter_map(|item| {
                let child_relative = child_path(relative, item.name());
                if ignore.matches(&child_relative) {
                    debug!("ignoring {child_relative}");
                    None
                } else {
                    Some((child_relative, item))
                }
            })
            .collect();

        // Unreadable items print no connector, so they never close a branch.
        let last = visible
            .iter()
            .rposition(|(_, item)| matches!(item, DirItem::Entry(_)));

        for (index, (child_relative, item)) in visible.into_iter().enumerate() {
            let entry = match item {
                DirItem::Entry(entry) => entry,
                DirItem::Unreadable { name, reason } => {
                    self.report(WalkError::Stat { name, reason })?;
                    continue;
                }
            };

            let is_last = Some(index) == last;
            write_prefix(&mut self.out, ancestor_has_more, is_last)?;
            write_label(&mut self.out, entry.size_bytes, &entry.name, entry.is_dir())?;

            if entry.is_dir() {
                self.counts.directories += 1;
                ancestor_has_more.push(!is_last);
                Box::pin(self.walk_dir(
                    &entry.path,
                    &child_relative,
                    depth + 1,
                    ancestor_has_more,
                ))
                .await?;
                ancestor_has_more.pop();
            } else {
                self.counts.files += 1;
            }
        }

        Ok(())
    }

    fn report(&mut self, err: WalkError) -> Result<(), WalkError> {
        debug!("{err}: {}", err.reason().unwrap_or_default());
        writeln!(self.out, "{err}")?;
        Ok(())
    }
}

fn sort_items(items: &mut [DirItem], dirs_first: bool) {
    if dirs_first {
        items.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name().cmp(b.name()),
        });
    } else {
        items.sort_by(|a, b| a.name().cmp(b.name()));
    }
}

/// Root-relative path of a child, always `/`-separated.
fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}/{name}")
    }
}
