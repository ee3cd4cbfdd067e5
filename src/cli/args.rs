//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// declscan - concurrent declaration scanner for source trees
#[derive(Parser, Debug, Default)]
#[command(name = "declscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a source tree for aggregate type and function declarations")]
#[command(long_about = "declscan walks a directory tree, selects files by extension, and scans each file \
concurrently for `type NAME struct {` bodies and `func NAME` introductions. Results from every file \
are merged into one report once all workers have finished.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Scan the current directory for .go files
    declscan

    # Scan a specific directory
    declscan --path ./service

    # Scan a different file suffix
    declscan --extension .gox

    # Exclude directories or files (can specify multiple patterns)
    declscan --exclude vendor --exclude '*_test.go'

Output Options:
    # Output in JSON format
    declscan --output json

    # One CSV row per declaration
    declscan --output csv --output-file declarations.csv

Performance Options:
    # Limit the number of worker threads
    declscan --threads 4

    # Limit directory traversal depth
    declscan --max-depth 3

Configuration:
    # Use a specific configuration file
    declscan --config ./declscan.toml

    # Create a default configuration file
    declscan --init
")]
pub struct Args {
    /// Target directory to scan
    #[arg(short, long, value_name = "PATH", help = "Directory to scan (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// File suffix to scan
    #[arg(long, value_name = "EXT", help = "File suffix to scan, with or without the leading dot (defaults to .go)")]
    pub extension: Option<String>,

    /// Exclude entries matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for directories or files to exclude (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse (the root is depth 0)")]
    pub max_depth: Option<usize>,

    /// Number of worker threads
    #[arg(short = 'j', long, value_name = "N", help = "Number of worker threads (defaults to one per CPU)")]
    pub threads: Option<usize>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Output format: 'text' for humans, 'json' for machine processing, 'csv' for one row per declaration")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write output to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (one summary line, no progress)")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show declaration locations and debug logging")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .declscan.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links during directory traversal")]
    pub follow_links: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable progress bars (useful for CI environments or when redirecting output)")]
    pub no_progress: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.declscan.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output, one row per declaration
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
