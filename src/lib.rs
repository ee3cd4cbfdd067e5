//! declscan - a concurrent declaration scanner for source trees
//!
//! This library walks a directory tree, selects files by extension, and scans
//! each file on its own worker for aggregate type declarations and function
//! declarations. Per-file results are merged once every worker has finished.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use crate::core::{run, ScanCoordinator};
pub use error::{handle_error, ErrorSeverity, Result, ResultExt, ScanError};
pub use models::{
    analysis::{AnalysisResult, FileFailure, ScanSummary},
    config::{OutputFormat, ScanConfig, Settings},
    declaration::{Field, FunctionDeclaration, KeywordCounts, TypeDeclaration},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
