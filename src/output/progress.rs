//! Progress reporting functionality
//!
//! Draws a progress bar on stderr while files are scanned. Nothing is drawn in
//! quiet mode or when progress is disabled, so stdout stays clean for reports.

use crate::core::parallel::ProgressUpdate;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}";

/// Progress reporter for a scan
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter; `enabled` is false for quiet or no-progress runs
    pub fn new(enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new(0);
            let style = ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .map(|style| style.progress_chars("#>-"))
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            bar.set_style(style);
            bar
        });

        Self { bar }
    }

    /// Start a new progress operation
    pub fn start(&self, operation: &str) {
        if let Some(bar) = &self.bar {
            bar.reset();
            bar.set_message(operation.to_string());
            bar.enable_steady_tick(Duration::from_millis(100));
        }
    }

    /// Update progress
    pub fn update(&self, current: usize, total: usize, message: &str) {
        debug!(current, total, "{}", message);

        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
            bar.set_message(message.to_string());
        }
    }

    /// Update progress from a ProgressUpdate
    pub fn update_from(&self, progress: ProgressUpdate) {
        self.update(progress.current, progress.total, &progress.message);
    }

    /// Finish the progress operation and clear the bar
    pub fn finish(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    /// Check whether anything is drawn
    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }
}

/// Create a progress callback function that updates a ProgressReporter
pub fn create_progress_callback(
    reporter: Arc<ProgressReporter>,
) -> impl Fn(ProgressUpdate) + Send + Sync {
    move |progress: ProgressUpdate| {
        reporter.update_from(progress);
    }
}
