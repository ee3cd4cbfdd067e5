//! Output formatting functionality
//!
//! This module renders a finished scan as text, JSON or CSV.

use ansi_term::Colour::{Blue, Cyan, Green, Red, Yellow};
use ansi_term::Style;
use serde::Serialize;
use std::path::Path;

use crate::error::{ErrorSeverity, Result, ScanError};
use crate::models::analysis::{AnalysisResult, FileFailure, ScanSummary};
use crate::models::declaration::{FunctionDeclaration, KeywordCounts, TypeDeclaration};

/// Shape of the JSON report
#[derive(Serialize)]
struct JsonReport<'a> {
    file_count: usize,
    type_declarations: &'a [TypeDeclaration],
    function_declarations: &'a [FunctionDeclaration],
    keyword_counts: &'a KeywordCounts,
    failed_files: &'a [FileFailure],
    warnings: &'a [FileFailure],
    summary: &'a ScanSummary,
}

fn paint(use_colors: bool, style: Style, text: impl AsRef<str>) -> String {
    if use_colors {
        style.paint(text.as_ref()).to_string()
    } else {
        text.as_ref().to_string()
    }
}

fn location(file: &Path, line: usize) -> String {
    format!("{}:{}", file.display(), line)
}

/// Render one type declaration as `Name { a int; b string }`
pub fn format_type_text(decl: &TypeDeclaration, use_colors: bool, verbose: bool) -> String {
    let fields = decl
        .fields
        .iter()
        .map(|f| format!("{} {}", f.name, f.field_type))
        .collect::<Vec<_>>()
        .join("; ");

    let mut output = format!("  {}", paint(use_colors, Cyan.bold(), &decl.name));
    if fields.is_empty() {
        output.push_str(" {}");
    } else {
        output.push_str(&format!(" {{ {} }}", fields));
    }
    if verbose {
        output.push_str(&format!(
            "  {}",
            paint(use_colors, Style::new().dimmed(), location(&decl.file, decl.line))
        ));
    }
    output.push('\n');
    output
}

/// Render one function declaration
pub fn format_function_text(decl: &FunctionDeclaration, use_colors: bool, verbose: bool) -> String {
    let mut output = format!("  {}", paint(use_colors, Green.normal(), &decl.name));
    if verbose {
        output.push_str(&format!(
            "  {}",
            paint(use_colors, Style::new().dimmed(), location(&decl.file, decl.line))
        ));
    }
    output.push('\n');
    output
}

/// Format the summary block of a scan
pub fn format_summary_text(results: &AnalysisResult, use_colors: bool) -> String {
    let summary = results.summary();
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n\n",
        paint(use_colors, Blue.bold(), "Declaration Scan Summary")
    ));
    output.push_str(&format!("Files queued: {}\n", summary.file_count));
    output.push_str(&format!("Files scanned: {}\n", summary.files_scanned));
    output.push_str(&format!("Type declarations: {}\n", summary.type_count));
    output.push_str(&format!("Function declarations: {}\n", summary.function_count));
    output.push_str(&format!("Fields: {}\n", summary.field_count));

    if !results.keyword_counts().is_empty() {
        let keywords = results
            .keyword_counts()
            .iter()
            .map(|(keyword, count)| format!("{}={}", keyword, count))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("Keywords: {}\n", keywords));
    }

    output.push_str(&format!("Scan duration: {}\n", summary.format_duration()));

    if results.has_failures() {
        output.push_str(&format!(
            "\n{}\n",
            paint(
                use_colors,
                Yellow.bold(),
                format!("Files failed: {}", summary.files_failed)
            )
        ));
        for failure in results.failed_files() {
            output.push_str(&format_failure_text(failure, use_colors));
        }
    }

    output
}

fn format_failure_text(failure: &FileFailure, use_colors: bool) -> String {
    let severity = match failure.severity {
        ErrorSeverity::Warning => paint(use_colors, Yellow.normal(), "WARNING"),
        ErrorSeverity::Error => paint(use_colors, Red.normal(), "ERROR"),
        ErrorSeverity::Critical => paint(use_colors, Red.bold(), "CRITICAL"),
    };
    format!("  [{}] {}\n", severity, failure.message)
}

/// Format the full text report
pub fn format_results_text(results: &AnalysisResult, use_colors: bool, verbose: bool) -> String {
    let mut output = format_summary_text(results, use_colors);

    if !results.type_declarations().is_empty() {
        output.push_str(&format!("\n{}\n", paint(use_colors, Style::new().bold(), "Types:")));
        for decl in results.type_declarations() {
            output.push_str(&format_type_text(decl, use_colors, verbose));
        }
    }

    if !results.function_declarations().is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            paint(use_colors, Style::new().bold(), "Functions:")
        ));
        for decl in results.function_declarations() {
            output.push_str(&format_function_text(decl, use_colors, verbose));
        }
    }

    if verbose && !results.warnings().is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            paint(use_colors, Style::new().bold(), "Warnings:")
        ));
        for warning in results.warnings() {
            output.push_str(&format_failure_text(warning, use_colors));
        }
    }

    output
}

/// Format analysis results as JSON
pub fn format_results_json(results: &AnalysisResult, pretty: bool) -> Result<String> {
    let report = JsonReport {
        file_count: results.file_count(),
        type_declarations: results.type_declarations(),
        function_declarations: results.function_declarations(),
        keyword_counts: results.keyword_counts(),
        failed_files: results.failed_files(),
        warnings: results.warnings(),
        summary: results.summary(),
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    rendered.map_err(|e| ScanError::JsonSerialize { source: e })
}

/// Format analysis results as CSV, one row per declaration
pub fn format_results_csv(results: &AnalysisResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["kind", "name", "fields", "file", "line"])?;

    for decl in results.type_declarations() {
        let fields = decl
            .fields
            .iter()
            .map(|f| format!("{} {}", f.name, f.field_type))
            .collect::<Vec<_>>()
            .join("; ");

        let file = decl.file.display().to_string();
        let line = decl.line.to_string();
        writer.write_record([
            "type",
            decl.name.as_str(),
            fields.as_str(),
            file.as_str(),
            line.as_str(),
        ])?;
    }

    for decl in results.function_declarations() {
        let file = decl.file.display().to_string();
        let line = decl.line.to_string();
        writer.write_record(["func", decl.name.as_str(), "", file.as_str(), line.as_str()])?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| ScanError::Csv { source: e.into_error().into() })?;
    String::from_utf8(buffer).map_err(|e| ScanError::CsvSerialize { source: e })
}
