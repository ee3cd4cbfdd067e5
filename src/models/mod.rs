//! Data models and structures for declscan

pub mod analysis;
pub mod config;
pub mod declaration;

pub use analysis::{AnalysisResult, FileFailure, ScanSummary};
pub use config::{OutputFormat, PartialSettings, ScanConfig, Settings};
pub use declaration::{Field, FileScan, FunctionDeclaration, KeywordCounts, TypeDeclaration};
