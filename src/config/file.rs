//! Configuration file and environment variable sources

use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};
use crate::models::config::PartialSettings;
use super::{ConfigSource, parser};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".declscan.toml";

/// Prefix of the environment variables read by [`EnvConfig`]
pub const DEFAULT_ENV_PREFIX: &str = "DECLSCAN";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    required: bool,
    priority: u8,
}

impl FileConfig {
    /// A file named on the command line; it is an error for it to be missing
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            required: true,
            priority: 10,
        }
    }

    /// The first default location that holds a file, if any
    pub fn discover() -> Option<Self> {
        parser::default_config_locations()
            .into_iter()
            .find(|location| location.is_file())
            .map(|path| Self {
                name: format!("default config file ({})", path.display()),
                path,
                required: false,
                priority: 10,
            })
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ScanError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_ROOT_PATH`, `<PREFIX>_EXTENSION`, `<PREFIX>_EXCLUDE` (comma separated),
/// `<PREFIX>_MAX_DEPTH`, `<PREFIX>_THREADS` and `<PREFIX>_OUTPUT_FORMAT`.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 20, // Between the config file and the command line
        }
    }

    fn var(&self, suffix: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, suffix)).ok()
    }

    fn parse_count(&self, suffix: &str) -> Result<Option<usize>> {
        match self.var(suffix) {
            Some(value) => value.trim().parse().map(Some).map_err(|_| {
                ScanError::config_error(format!(
                    "{}_{} must be a positive integer, got '{}'",
                    self.prefix, suffix, value
                ))
            }),
            None => Ok(None),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_PREFIX)
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            root_path: self.var("ROOT_PATH").map(PathBuf::from),
            extension: self.var("EXTENSION"),
            max_depth: self.parse_count("MAX_DEPTH")?,
            threads: self.parse_count("THREADS")?,
            ..Default::default()
        };

        if let Some(exclude) = self.var("EXCLUDE") {
            settings.exclude_patterns = Some(
                exclude
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            settings.output_format = Some(format.parse()?);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ["ROOT_PATH", "EXTENSION", "EXCLUDE", "MAX_DEPTH", "THREADS", "OUTPUT_FORMAT"]
            .iter()
            .any(|suffix| self.var(suffix).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
