//! Configuration-related data structures

use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ResultExt, ScanError};

/// Root scanned when none is configured
pub const DEFAULT_ROOT_PATH: &str = "./";

/// Source suffix scanned when none is configured
pub const DEFAULT_EXTENSION: &str = ".go";

/// Validated, immutable configuration consumed by exactly one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    root_path: PathBuf,
    extension: String,
    exclude_patterns: Vec<Pattern>,
    max_depth: Option<usize>,
    follow_links: bool,
    threads: Option<usize>,
}

impl ScanConfig {
    /// Create a configuration for `root_path`, matching files whose suffix is `extension`.
    ///
    /// An extension given without its leading dot (`"go"`) is normalized to `".go"`.
    /// Empty values for either field are configuration errors.
    pub fn new(root_path: impl AsRef<Path>, extension: impl AsRef<str>) -> Result<Self> {
        let root_path = root_path.as_ref();
        if root_path.as_os_str().is_empty() {
            return Err(ScanError::config_error("Root path must not be empty"));
        }

        Ok(Self {
            root_path: root_path.to_path_buf(),
            extension: normalize_extension(extension.as_ref())?,
            exclude_patterns: Vec::new(),
            max_depth: None,
            follow_links: false,
            threads: None,
        })
    }

    /// Build a scan configuration from fully merged settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.root_path, &settings.extension)?
            .with_exclude_patterns(&settings.exclude_patterns)?
            .with_max_depth(settings.max_depth)?
            .with_threads(settings.threads)
            .map(|config| config.with_follow_links(settings.follow_links))
    }

    /// Add glob patterns naming directories to prune and files to reject
    pub fn with_exclude_patterns<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.trim().is_empty() {
                return Err(ScanError::config_error("Exclude patterns must not be empty"));
            }
            compiled.push(
                Pattern::new(pattern)
                    .with_config_context(|| format!("Invalid exclude pattern '{}'", pattern))?,
            );
        }
        self.exclude_patterns = compiled;
        Ok(self)
    }

    /// Limit traversal depth; the root is depth 0
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Result<Self> {
        if max_depth == Some(0) {
            return Err(ScanError::config_error("Max depth must be at least 1"));
        }
        self.max_depth = max_depth;
        Ok(self)
    }

    /// Cap the number of concurrent file workers
    pub fn with_threads(mut self, threads: Option<usize>) -> Result<Self> {
        if threads == Some(0) {
            return Err(ScanError::config_error("Thread count must be at least 1"));
        }
        self.threads = threads;
        Ok(self)
    }

    /// Follow symbolic links while walking
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn exclude_patterns(&self) -> &[Pattern] {
        &self.exclude_patterns
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn follow_links(&self) -> bool {
        self.follow_links
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Number of workers the coordinator runs with
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from(DEFAULT_ROOT_PATH),
            extension: DEFAULT_EXTENSION.to_string(),
            exclude_patterns: Vec::new(),
            max_depth: None,
            follow_links: false,
            threads: None,
        }
    }
}

fn normalize_extension(extension: &str) -> Result<String> {
    let extension = extension.trim();
    if extension.is_empty() || extension == "." {
        return Err(ScanError::config_error("Extension must not be empty"));
    }
    if extension.starts_with('.') {
        Ok(extension.to_string())
    } else {
        Ok(format!(".{}", extension))
    }
}

/// Main configuration settings for declscan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory to scan
    pub root_path: PathBuf,

    /// File suffix to scan, including the leading dot
    pub extension: String,

    /// Extra glob patterns to exclude from scanning
    pub exclude_patterns: Vec<String>,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Number of worker threads (one per CPU when unset)
    pub threads: Option<usize>,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show progress bars
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from(DEFAULT_ROOT_PATH),
            extension: DEFAULT_EXTENSION.to_string(),
            exclude_patterns: Vec::new(),
            max_depth: None,
            follow_links: false,
            threads: None,
            output_format: OutputFormat::Text,
            output_file: None,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output, one row per declaration
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ScanError::InvalidOutputFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub root_path: Option<PathBuf>,
    pub extension: Option<String>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub follow_links: Option<bool>,
    pub threads: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.root_path.is_some() {
            self.root_path = other.root_path;
        }
        if other.extension.is_some() {
            self.extension = other.extension;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.threads.is_some() {
            self.threads = other.threads;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(root_path) = &self.root_path {
            settings.root_path = root_path.clone();
        }
        if let Some(extension) = &self.extension {
            settings.extension = extension.clone();
        }
        if let Some(exclude_patterns) = &self.exclude_patterns {
            settings.exclude_patterns = exclude_patterns.clone();
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = Some(max_depth);
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(threads) = self.threads {
            settings.threads = Some(threads);
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}
