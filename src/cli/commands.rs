//! Command implementations

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::Args;
use crate::config::{self, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::ScanCoordinator;
use crate::error::{ErrorSeverity, Result};
use crate::models::analysis::AnalysisResult;
use crate::models::config::Settings;
use crate::output::{create_formatter, create_progress_callback, create_writer, ProgressReporter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Scan the configured directory and write a report
    Analyze(Args),
    /// Initialize a default configuration file
    Init(PathBuf),
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init(PathBuf::from(DEFAULT_CONFIG_FILE));
        }

        Command::Analyze(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                let (settings, scan_config) = config::load_config(CliArgs::from(args))?;
                debug!(?settings, "settings resolved");

                let results = scan(ScanCoordinator::new(scan_config), &settings)?;
                write_report(&results, &settings)
            }
            Command::Init(path) => init_config(path),
        }
    }

    /// Run the command and map the outcome to a process exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());

                match err.severity() {
                    ErrorSeverity::Warning => 0,
                    ErrorSeverity::Error => 1,
                    ErrorSeverity::Critical => 2,
                }
            }
        }
    }
}

fn scan(coordinator: ScanCoordinator, settings: &Settings) -> Result<AnalysisResult> {
    let reporter = Arc::new(ProgressReporter::new(!settings.quiet && settings.show_progress));
    if !reporter.is_enabled() {
        return coordinator.run();
    }
    reporter.start(&format!("Scanning {}", coordinator.config().root_path().display()));

    let results = coordinator.run_with_progress(create_progress_callback(reporter.clone()));

    match &results {
        Ok(results) => reporter.finish(&format!(
            "Scanned {} files in {}",
            results.file_count(),
            results.summary().format_duration()
        )),
        Err(_) => reporter.finish("Scan aborted"),
    }

    results
}

fn write_report(results: &AnalysisResult, settings: &Settings) -> Result<()> {
    // Escape codes only make sense on a terminal
    let use_colors = settings.use_colors && settings.output_file.is_none();
    let formatter = create_formatter(
        settings.output_format,
        use_colors,
        settings.verbose,
        settings.quiet,
    );
    let content = formatter.format(results)?;

    create_writer(settings.output_file.as_ref()).write(&content)?;

    if let Some(path) = &settings.output_file {
        info!(path = %path.display(), format = %settings.output_format, "report written");
    }

    Ok(())
}

fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Configuration file already exists at: {}", path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    config::create_default_config(path)?;

    println!("Created default configuration file at: {}", path.display());
    println!("\nEvery option is commented out; uncomment a line to change its default:");
    println!("  - root_path: Directory to scan");
    println!("  - extension: File suffix to scan");
    println!("  - exclude_patterns: Glob patterns for entries to skip");
    println!("  - max_depth: Maximum directory depth to traverse");
    println!("  - threads: Number of worker threads");
    println!("  - output_format: Output format (text, json, csv)");

    Ok(())
}
