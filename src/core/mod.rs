//! Core functionality for tree walking and declaration extraction

pub mod coordinator;
pub mod extractor;
pub mod filter;
pub mod parallel;
pub mod walker;

pub use coordinator::ScanCoordinator;
pub use extractor::DeclarationExtractor;
pub use filter::{Disposition, PathFilter};
pub use parallel::ProgressUpdate;
pub use walker::{FileQueue, TreeWalker};

use crate::error::Result;
use crate::models::analysis::AnalysisResult;
use crate::models::config::ScanConfig;

/// Scan the configured root and return the merged result
pub fn run(config: &ScanConfig) -> Result<AnalysisResult> {
    ScanCoordinator::new(config.clone()).run()
}
