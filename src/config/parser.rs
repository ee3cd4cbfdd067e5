//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ResultExt, ScanError};
use crate::models::config::PartialSettings;
use super::file::DEFAULT_CONFIG_FILE;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScanError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ScanError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| ScanError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(root_path) = &settings.root_path {
        if root_path.as_os_str().is_empty() {
            return Err(ScanError::config_error(format!(
                "Invalid empty root_path in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(extension) = &settings.extension {
        let extension = extension.trim();
        if extension.is_empty() || extension == "." {
            return Err(ScanError::config_error(format!(
                "Invalid empty extension in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(ScanError::config_error(format!(
                    "Empty exclude pattern in config file: {}",
                    path.display()
                )));
            }

            glob::Pattern::new(pattern).with_config_context(|| {
                format!(
                    "Invalid exclude pattern '{}' in config file {}",
                    pattern,
                    path.display()
                )
            })?;
        }
    }

    if settings.max_depth == Some(0) {
        return Err(ScanError::config_error(format!(
            "Invalid max_depth 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if settings.threads == Some(0) {
        return Err(ScanError::config_error(format!(
            "Invalid threads 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(ScanError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Candidate locations of the default configuration file, in lookup order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("declscan").join("config.toml"));
    }

    locations
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ScanError::io_error)?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config).map_err(|e| ScanError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
