//! Concurrent scan coordination
//!
//! A scan has three phases. The tree is walked on the calling thread to build the
//! file queue. Every queued file is then extracted by its own task on a bounded
//! rayon pool; a task owns its `FileScan` and shares nothing with its siblings.
//! Once all tasks have joined, their results are merged into one
//! `AnalysisResult` on the calling thread, so the shared collections are never
//! touched concurrently.

use chrono::Utc;
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::core::extractor::DeclarationExtractor;
use crate::core::filter::PathFilter;
use crate::core::parallel::{parallel_process, parallel_process_with_progress, ProgressUpdate};
use crate::core::walker::{FileQueue, TreeWalker};
use crate::error::{handle_error, Result, ScanError};
use crate::models::analysis::AnalysisResult;
use crate::models::config::ScanConfig;
use crate::models::declaration::FileScan;

type TaskOutcome = (PathBuf, Result<FileScan>);

/// Runs one scan of a configured root
#[derive(Debug, Clone)]
pub struct ScanCoordinator {
    config: ScanConfig,
    filter: PathFilter,
    walker: TreeWalker,
}

impl ScanCoordinator {
    pub fn new(config: ScanConfig) -> Self {
        let filter = PathFilter::from_config(&config);
        let walker = TreeWalker::from_config(&config);
        Self {
            config,
            filter,
            walker,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk the root and return the files that will be scanned
    pub fn build_queue(&self) -> Result<FileQueue> {
        let root = self.config.root_path();
        if !root.exists() {
            return Err(ScanError::InvalidPath {
                path: root.to_path_buf(),
            });
        }
        Ok(self.walker.walk(root, &self.filter))
    }

    /// Scan every queued file and merge the results
    pub fn run(&self) -> Result<AnalysisResult> {
        self.scan(|paths| parallel_process(paths, extract))
    }

    /// Same as [`run`](Self::run), reporting each finished file to `progress_callback`
    pub fn run_with_progress<F>(&self, progress_callback: F) -> Result<AnalysisResult>
    where
        F: Fn(ProgressUpdate) + Send + Sync,
    {
        progress_callback(ProgressUpdate::new(0, 0, "Walking directory tree"));
        let result = self.scan(|paths| {
            parallel_process_with_progress(paths, extract, &progress_callback)
        })?;
        let total = result.file_count();
        progress_callback(ProgressUpdate::new(total, total, "Scan complete"));
        Ok(result)
    }

    fn scan<E>(&self, execute: E) -> Result<AnalysisResult>
    where
        E: FnOnce(Vec<PathBuf>) -> Vec<TaskOutcome> + Send,
    {
        let start_time = Instant::now();
        let mut result = AnalysisResult::new(Utc::now());

        let queue = self.build_queue()?;
        result.set_file_count(queue.len());
        info!(
            root = %self.config.root_path().display(),
            files = queue.len(),
            extension = self.config.extension(),
            "file queue built"
        );

        let workers = self.config.worker_count();
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("declscan-worker-{}", idx))
            .build()
            .map_err(|err| ScanError::ThreadPool {
                message: err.to_string(),
            })?;
        debug!(workers, "worker pool ready");

        let outcomes = pool.install(|| execute(queue.into_paths()));

        // Every task has joined; merging happens on this thread only
        for (path, outcome) in outcomes {
            match outcome {
                Ok(scan) => {
                    debug!(
                        path = %path.display(),
                        declarations = scan.declaration_count(),
                        warnings = scan.warnings.len(),
                        "file scanned"
                    );
                    result.merge_file_scan(scan);
                }
                Err(err) => {
                    result.add_failure(&path, &err);
                    if let Some(critical) = handle_error(err) {
                        return Err(critical);
                    }
                }
            }
        }

        result.finalize(start_time.elapsed());
        let summary = result.summary();
        info!(
            files = summary.file_count,
            types = summary.type_count,
            functions = summary.function_count,
            failed = summary.files_failed,
            duration = %summary.format_duration(),
            "scan complete"
        );

        Ok(result)
    }
}

fn extract(path: PathBuf) -> TaskOutcome {
    let outcome = DeclarationExtractor::extract_file(&path);
    (path, outcome)
}
