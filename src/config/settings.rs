//! Validation of merged settings

use std::path::Path;

use crate::error::{Result, ScanError};
use crate::models::config::{ScanConfig, Settings};

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and derive the scan configuration from them
    pub fn validate(settings: &Settings) -> Result<ScanConfig> {
        let config = ScanConfig::from_settings(settings)?;

        if !settings.root_path.exists() {
            return Err(ScanError::InvalidPath {
                path: settings.root_path.clone(),
            });
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(config)
    }

    /// Validate that an output path is writable
    fn validate_output_path(path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return Ok(()),
        };

        if !parent.exists() {
            return Err(ScanError::InvalidPath {
                path: parent.to_path_buf(),
            });
        }

        let metadata = std::fs::metadata(parent).map_err(ScanError::io_error)?;
        if metadata.permissions().readonly() {
            return Err(ScanError::permission_denied(parent));
        }

        Ok(())
    }
}
