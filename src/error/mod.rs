//! Error handling for declscan
//!
//! This module provides the error taxonomy, result alias, and error context
//! utilities shared by every stage of a scan.

pub mod context;
#[cfg(test)]
mod tests;
pub mod types;

pub use context::{handle_error, ResultExt};
pub use types::{ErrorSeverity, Result, ScanError};
