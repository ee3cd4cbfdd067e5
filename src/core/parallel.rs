//! Parallel processing utilities

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Progress update information for parallel operations
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }

    /// Calculate progress percentage
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64) * 100.0
        }
    }
}

/// Execute a function in parallel on a collection of items
///
/// Results come back in the order of `items`, whatever order the tasks finish in.
pub fn parallel_process<T, F, R>(items: Vec<T>, f: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    items.into_par_iter().map(f).collect()
}

/// Execute a function in parallel on a collection of items with progress reporting
///
/// The callback runs on worker threads once per finished item.
pub fn parallel_process_with_progress<T, F, R, P>(
    items: Vec<T>,
    f: F,
    progress_callback: P,
) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let total = items.len();
    let counter = AtomicUsize::new(0);

    items
        .into_par_iter()
        .map(|item| {
            let result = f(item);
            let done = counter.fetch_add(1, Ordering::Relaxed) + 1;

            progress_callback(ProgressUpdate::new(
                done,
                total,
                format!("Scanned {}/{} files", done, total),
            ));

            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_percentage() {
        assert_eq!(ProgressUpdate::new(1, 4, "").percentage(), 25.0);
        assert_eq!(ProgressUpdate::new(0, 0, "").percentage(), 0.0);
    }

    #[test]
    fn test_parallel_process_preserves_input_order() {
        let items: Vec<usize> = (0..100).collect();
        let doubled = parallel_process(items, |n| n * 2);
        assert_eq!(doubled, (0..100).map(|n| n * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_progress_reports_every_item() {
        let seen = Mutex::new(Vec::new());
        let results = parallel_process_with_progress(
            vec![1, 2, 3, 4, 5],
            |n| n + 1,
            |update| seen.lock().unwrap().push(update.current),
        );

        assert_eq!(results, vec![2, 3, 4, 5, 6]);
        let mut seen = seen.into_inner().unwrap();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }
}
