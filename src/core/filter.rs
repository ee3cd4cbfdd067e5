//! Path filtering for directory traversal
//!
//! Decides, per filesystem entry, whether the walker descends into it, prunes
//! its whole subtree, or queues/ignores it as a file.

use glob::Pattern;
use std::path::Path;

use crate::models::config::ScanConfig;

/// Version-control metadata directory that is never scanned
pub const RESERVED_DIR_NAME: &str = ".git";

/// What the walker should do with an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Directory to walk into
    Descend,
    /// Directory whose subtree must not be visited at all
    Prune,
    /// File to queue for scanning
    Accept,
    /// File to ignore
    Reject,
}

/// Predicate over filesystem entries
#[derive(Debug, Clone)]
pub struct PathFilter {
    extension: String,
    exclude_patterns: Vec<Pattern>,
}

impl PathFilter {
    /// Create a filter accepting files whose suffix equals `extension`
    pub fn new(extension: impl Into<String>, exclude_patterns: Vec<Pattern>) -> Self {
        Self {
            extension: extension.into(),
            exclude_patterns,
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.extension(), config.exclude_patterns().to_vec())
    }

    /// Classify one entry
    pub fn classify(&self, path: &Path, is_dir: bool, name: &str) -> Disposition {
        if is_dir {
            if name == RESERVED_DIR_NAME || self.is_excluded(path, name) {
                Disposition::Prune
            } else {
                Disposition::Descend
            }
        } else if self.matches_extension(name) && !self.is_excluded(path, name) {
            Disposition::Accept
        } else {
            Disposition::Reject
        }
    }

    /// Suffix match from the last dot of the file name, `main.go` -> `.go`
    pub fn matches_extension(&self, name: &str) -> bool {
        name.rfind('.')
            .map(|idx| &name[idx..] == self.extension)
            .unwrap_or(false)
    }

    fn is_excluded(&self, path: &Path, name: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.matches(name) || pattern.matches_path(path))
    }
}
