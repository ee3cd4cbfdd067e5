//! Directory walking functionality
//!
//! This module visits a root directory recursively and builds the queue of files
//! to scan. Excluded directories are pruned before their contents are read, and
//! unreadable entries are skipped without failing the walk.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::filter::{Disposition, PathFilter};
use crate::error::ResultExt;
use crate::models::config::ScanConfig;

/// Ordered list of files discovered under the root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileQueue {
    paths: Vec<PathBuf>,
}

impl FileQueue {
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }
}

/// Recursive walker producing a `FileQueue`
#[derive(Debug, Clone, Default)]
pub struct TreeWalker {
    max_depth: Option<usize>,
    follow_links: bool,
}

impl TreeWalker {
    /// Create a walker with no depth limit that does not follow links
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            max_depth: config.max_depth(),
            follow_links: config.follow_links(),
        }
    }

    /// Walk `root`, queueing every file the filter accepts
    ///
    /// Entries are visited in file-name order within each directory, so the queue
    /// is stable for an unchanged tree.
    pub fn walk(&self, root: &Path, filter: &PathFilter) -> FileQueue {
        let mut walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name();
        if let Some(max_depth) = self.max_depth {
            walker = walker.max_depth(max_depth);
        }

        // The root itself is never pruned; exclusions apply to what lies under it.
        let entries = walker.into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || filter.classify(
                    relative_to(root, entry.path()),
                    true,
                    &entry.file_name().to_string_lossy(),
                ) != Disposition::Prune
        });

        let mut paths = Vec::new();
        let mut skipped = 0usize;

        for result in entries {
            let entry_path = result
                .as_ref()
                .err()
                .and_then(|err| err.path())
                .unwrap_or(root)
                .to_path_buf();

            let entry = match result.with_file_context(&entry_path) {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(path = %entry_path.display(), error = %err, "skipping unreadable entry");
                    skipped += 1;
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy();
            let is_dir = entry.file_type().is_dir();
            let accepted = if entry.depth() == 0 {
                !is_dir && filter.matches_extension(&name)
            } else {
                filter.classify(relative_to(root, entry.path()), is_dir, &name) == Disposition::Accept
            };
            if accepted {
                paths.push(entry.into_path());
            }
        }

        debug!(
            root = %root.display(),
            files = paths.len(),
            skipped,
            "traversal complete"
        );

        FileQueue { paths }
    }
}

fn relative_to<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
