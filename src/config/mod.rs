//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML file, then `DECLSCAN_*`
//! environment variables, then command-line options. Later layers win field by
//! field, and the merged result is validated once into a [`ScanConfig`].

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use tracing::debug;

use crate::error::Result;
use crate::models::config::{PartialSettings, ScanConfig, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig, DEFAULT_CONFIG_FILE, DEFAULT_ENV_PREFIX};
pub use parser::{create_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Whether an unavailable source is an error instead of being skipped
    fn is_required(&self) -> bool {
        false
    }

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource + ?Sized>(self, source: &S) -> Result<Self> {
        if !source.is_available() && !source.is_required() {
            debug!(source = source.name(), "configuration source not available");
            return Ok(self);
        }

        let partial = source.load()?;
        debug!(source = source.name(), priority = source.priority(), "configuration source loaded");
        Ok(self.merge(partial))
    }

    /// Merge every source, lowest priority first
    pub fn load_sources(mut self, mut sources: Vec<&dyn ConfigSource>) -> Result<Self> {
        sources.sort_by_key(|source| source.priority());
        for source in sources {
            self = self.load_from(source)?;
        }
        Ok(self)
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<(Settings, ScanConfig)> {
        let settings = self.partial.to_settings();
        let config = SettingsValidator::validate(&settings)?;
        Ok((settings, config))
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from every source with the standard precedence
pub fn load_config(cli_args: CliArgs) -> Result<(Settings, ScanConfig)> {
    load_config_with_env_prefix(cli_args, DEFAULT_ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(
    cli_args: CliArgs,
    env_prefix: &str,
) -> Result<(Settings, ScanConfig)> {
    let file = match &cli_args.config {
        Some(path) => Some(FileConfig::with_path(path)),
        None => FileConfig::discover(),
    };
    let env = EnvConfig::new(env_prefix);
    let cli = CliConfig::new(cli_args);

    let mut sources: Vec<&dyn ConfigSource> = Vec::new();
    sources.push(&cli);
    sources.push(&env);
    if let Some(file) = &file {
        sources.push(file);
    }

    ConfigBuilder::new().load_sources(sources)?.build()
}
