//! Error context utilities for declscan
//!
//! This module provides utilities for adding context to errors and handling
//! errors in a consistent way throughout the application.

use std::path::Path;
use tracing::{error, warn};

use crate::error::{ErrorSeverity, Result, ScanError};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Turn any error into a configuration error prefixed with a custom message
    fn with_config_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Add file context to an error
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_config_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| ScanError::Config {
            message: format!("{}: {}", context(), err),
        })
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            let dyn_err: &(dyn std::error::Error + 'static) = &err;
            let io_err = dyn_err.downcast_ref::<std::io::Error>().or_else(|| {
                dyn_err
                    .source()
                    .and_then(|source| source.downcast_ref::<std::io::Error>())
            });

            if let Some(io_err) = io_err {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    return ScanError::permission_denied(path.as_ref());
                }
            }

            ScanError::traversal_entry_error(path.as_ref(), err.to_string())
        })
    }
}

/// Handle an error based on its severity
///
/// - Warning: Log the error and return None
/// - Error: Log the error and return None
/// - Critical: Log the error and return Some(error)
pub fn handle_error(err: ScanError) -> Option<ScanError> {
    let message = err.user_message();

    match err.severity() {
        ErrorSeverity::Warning => {
            warn!("{}", message);
            None
        }
        ErrorSeverity::Error => {
            error!("{}", message);
            None
        }
        ErrorSeverity::Critical => {
            error!("critical: {}", message);
            Some(err)
        }
    }
}
