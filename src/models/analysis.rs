//! Analysis result structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::declaration::{FileScan, FunctionDeclaration, KeywordCounts, TypeDeclaration};
use crate::error::{ErrorSeverity, ScanError};

/// Merged outcome of one scan
///
/// The coordinator builds this single-threaded after all file tasks have joined;
/// callers only ever see the finished value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    summary: ScanSummary,
    type_declarations: Vec<TypeDeclaration>,
    function_declarations: Vec<FunctionDeclaration>,
    keyword_counts: KeywordCounts,
    failures: Vec<FileFailure>,
    warnings: Vec<FileFailure>,
}

impl AnalysisResult {
    /// Create an empty result for a scan that started at `started_at`
    pub(crate) fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            summary: ScanSummary::new(started_at),
            type_declarations: Vec::new(),
            function_declarations: Vec::new(),
            keyword_counts: KeywordCounts::new(),
            failures: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record the size of the file queue
    pub(crate) fn set_file_count(&mut self, count: usize) {
        self.summary.file_count = count;
    }

    /// Fold one file's private result into the shared collections
    pub(crate) fn merge_file_scan(&mut self, scan: FileScan) {
        self.summary.files_scanned += 1;
        self.keyword_counts.merge(&scan.keywords);
        self.type_declarations.extend(scan.types);
        self.function_declarations.extend(scan.functions);

        for warning in &scan.warnings {
            self.warnings.push(FileFailure::from_error(&scan.path, warning));
        }
    }

    /// Record a file whose contribution is excluded from the result
    pub(crate) fn add_failure(&mut self, path: impl AsRef<Path>, error: &ScanError) {
        self.summary.files_failed += 1;
        self.failures.push(FileFailure::from_error(path, error));
    }

    /// Order the merged collections and compute summary totals
    pub(crate) fn finalize(&mut self, duration: Duration) {
        // Completion order of tasks is arbitrary; present results by location
        self.type_declarations
            .sort_by(|a, b| (&a.file, a.line).cmp(&(&b.file, b.line)));
        self.function_declarations
            .sort_by(|a, b| (&a.file, a.line).cmp(&(&b.file, b.line)));
        self.failures.sort_by(|a, b| a.path.cmp(&b.path));

        self.summary.type_count = self.type_declarations.len();
        self.summary.function_count = self.function_declarations.len();
        self.summary.field_count = self
            .type_declarations
            .iter()
            .map(|t| t.fields.len())
            .sum();
        self.summary.warnings_count = self.warnings.len();
        self.summary.scan_duration = duration;
    }

    /// Number of files queued for scanning
    pub fn file_count(&self) -> usize {
        self.summary.file_count
    }

    pub fn type_declarations(&self) -> &[TypeDeclaration] {
        &self.type_declarations
    }

    pub fn function_declarations(&self) -> &[FunctionDeclaration] {
        &self.function_declarations
    }

    /// Keyword occurrences summed over every scanned file
    pub fn keyword_counts(&self) -> &KeywordCounts {
        &self.keyword_counts
    }

    /// Files that could not be scanned
    pub fn failed_files(&self) -> &[FileFailure] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Malformed records that were repaired or discarded
    pub fn warnings(&self) -> &[FileFailure] {
        &self.warnings
    }

    pub fn summary(&self) -> &ScanSummary {
        &self.summary
    }

    /// Find a type declaration by name
    pub fn find_type(&self, name: &str) -> Option<&TypeDeclaration> {
        self.type_declarations.iter().find(|t| t.name == name)
    }
}

/// Summary statistics of a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub file_count: usize,
    pub files_scanned: usize,
    pub files_failed: usize,
    pub type_count: usize,
    pub function_count: usize,
    pub field_count: usize,
    pub warnings_count: usize,
    pub scan_duration: Duration,
    pub started_at: DateTime<Utc>,
}

impl ScanSummary {
    fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            file_count: 0,
            files_scanned: 0,
            files_failed: 0,
            type_count: 0,
            function_count: 0,
            field_count: 0,
            warnings_count: 0,
            scan_duration: Duration::from_secs(0),
            started_at,
        }
    }

    /// Total number of declarations found
    pub fn declaration_count(&self) -> usize {
        self.type_count + self.function_count
    }

    /// Format the scan duration as a human-readable string
    pub fn format_duration(&self) -> String {
        let secs = self.scan_duration.as_secs();
        let millis = self.scan_duration.subsec_millis();

        if secs == 0 {
            format!("{}ms", millis)
        } else if secs < 60 {
            format!("{}.{:03}s", secs, millis)
        } else {
            let mins = secs / 60;
            let secs = secs % 60;
            format!("{}m {}s", mins, secs)
        }
    }
}

/// A per-file problem recorded in the result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
    pub severity: ErrorSeverity,
}

impl FileFailure {
    pub fn from_error(path: impl AsRef<Path>, error: &ScanError) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            message: error.user_message(),
            severity: error.severity(),
        }
    }
}
