//! Error types and definitions for declscan
//!
//! This module provides the error taxonomy for a scan: configuration problems that
//! stop an invocation before traversal, per-entry and per-file problems that are
//! recovered locally, and output problems raised while writing a report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current file fails but the scan continues
    Error,
    /// Critical level - the invocation should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for declscan operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Root path that does not exist
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// A single entry could not be read while walking the tree
    #[error("Traversal error for {path}: {message}")]
    TraversalEntry { path: PathBuf, message: String },

    /// A queued file could not be opened by its scan task
    #[error("Failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A queued file failed while its lines were being read
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The extractor met a token sequence it could not turn into a record
    #[error("Malformed declaration in {path} at line {line}: {message}")]
    ScanLogic {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Worker pool could not be created
    #[error("Thread pool error: {message}")]
    ThreadPool { message: String },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV buffer was not valid UTF-8
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl ScanError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            ScanError::PermissionDenied { .. } => ErrorSeverity::Warning,
            ScanError::TraversalEntry { .. } => ErrorSeverity::Warning,
            ScanError::ScanLogic { .. } => ErrorSeverity::Warning,

            // Critical errors - invocation should terminate
            ScanError::Config { .. } => ErrorSeverity::Critical,
            ScanError::InvalidPath { .. } => ErrorSeverity::Critical,
            ScanError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ScanError::ConfigRead { .. } => ErrorSeverity::Critical,
            ScanError::ConfigParse { .. } => ErrorSeverity::Critical,
            ScanError::GlobPattern { .. } => ErrorSeverity::Critical,
            ScanError::ThreadPool { .. } => ErrorSeverity::Critical,
            ScanError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            ScanError::OutputWrite { .. } => ErrorSeverity::Critical,
            ScanError::StdoutWrite { .. } => ErrorSeverity::Critical,

            // Regular errors - current file fails but the scan continues
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ScanError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            ScanError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            ScanError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide an existing directory to scan.", path.display())
            }
            ScanError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create one with --init or use command line options.", path.display())
            }
            ScanError::FileOpen { path, source } => {
                format!("Could not open '{}': {}. Skipping file.", path.display(), source)
            }
            ScanError::FileRead { path, source } => {
                format!("Could not read '{}': {}. Skipping file.", path.display(), source)
            }
            ScanError::ScanLogic { path, line, message } => {
                format!("{}:{}: {}", path.display(), line, message)
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        ScanError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ScanError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        ScanError::PermissionDenied { path: path.into() }
    }

    /// Create a traversal entry error
    pub fn traversal_entry_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScanError::TraversalEntry {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file open error, mapping permission problems to their own variant
    pub fn file_open_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            return ScanError::PermissionDenied { path };
        }
        ScanError::FileOpen { path, source }
    }

    /// Create a malformed-record error
    pub fn scan_logic_error(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        ScanError::ScanLogic {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::io_error(err)
    }
}

impl From<csv::Error> for ScanError {
    fn from(err: csv::Error) -> Self {
        ScanError::Csv { source: err }
    }
}

impl From<glob::PatternError> for ScanError {
    fn from(err: glob::PatternError) -> Self {
        ScanError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::JsonSerialize { source: err }
    }
}

/// Result type alias for declscan operations
pub type Result<T> = std::result::Result<T, ScanError>;
