//! CLI-specific progress handling for linkdist
//!
//! Provides the progress bar shown while a distance matrix is being filled.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use linkdist::ProgressCallback;

/// Creates a progress bar counting node pairs
pub fn create_progress_bar(total_pairs: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_pairs);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} pairs ({percent}%) {per_sec} ETA: {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Progress manager for a matrix fill
pub struct ProgressManager {
    pub pb: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new(total_pairs: u64, message: &str) -> Self {
        let pb = create_progress_bar(total_pairs);

        // Print initial message to stderr
        eprintln!("{}", message);

        Self { pb }
    }

    /// Callback that drives the bar from the fill workers.
    ///
    /// Workers can report out of order, so the bar only advances by the gap
    /// above the highest count seen so far.
    pub fn callback(&self) -> ProgressCallback {
        let pb = self.pb.clone();
        let highest = Arc::new(AtomicU64::new(0));
        Arc::new(move |done, total| {
            let previous = highest.fetch_max(done, Ordering::Relaxed);
            if done <= previous {
                return;
            }
            pb.inc(done - previous);
            if done >= total {
                pb.finish_with_message("done");
            }
        })
    }
}
