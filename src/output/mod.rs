//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::analysis::AnalysisResult;
use crate::models::config::OutputFormat;

/// Trait for different output formatters
pub trait Formatter {
    /// Format analysis results into a string
    fn format(&self, results: &AnalysisResult) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, results: &AnalysisResult) -> Result<String> {
        if self.quiet {
            let summary = results.summary();
            let mut output = format!(
                "Files: {}, Types: {}, Functions: {}\n",
                summary.file_count, summary.type_count, summary.function_count
            );
            if summary.files_failed > 0 {
                output.push_str(&format!("Failed files: {}\n", summary.files_failed));
            }
            return Ok(output);
        }

        Ok(formatters::format_results_text(
            results,
            self.use_colors,
            self.verbose,
        ))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, results: &AnalysisResult) -> Result<String> {
        formatters::format_results_json(results, self.pretty)
    }
}

/// CSV formatter, one row per declaration
#[derive(Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, results: &AnalysisResult) -> Result<String> {
        formatters::format_results_csv(results)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}
