//! Parallel distance-matrix fill
//!
//! Every output cell (i, j) is an independent bidirectional search that reads
//! the two shared, immutable link matrices and writes only its own slot. The
//! flat N² index space is handed to rayon, whose work stealing keeps workers
//! busy even though unreachable or distant pairs cost far more than
//! neighbouring ones.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;

use crate::core::error::{Error, Result};
use crate::core::matrix::{check_len, LinkMatrix};
use crate::core::search::BidirectionalSearch;

/// Progress callback receiving (completed pairs, total pairs)
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Options for a matrix fill
#[derive(Default)]
pub struct FillOptions {
    /// Size of a dedicated worker pool; `None` runs on rayon's global pool
    pub threads: Option<usize>,

    /// Optional progress callback, invoked once per N completed pairs; the
    /// last call reports `(total, total)`
    pub progress: Option<ProgressCallback>,
}

/// Summary of a completed fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillStats {
    pub nodes: usize,
    /// Off-diagonal pairs with a path
    pub reachable_pairs: usize,
    pub unreachable_pairs: usize,
    /// Longest shortest path, 0 if nothing off the diagonal is reachable
    pub max_distance: i32,
    pub elapsed: Duration,
}

/// Matrix fill driver over a validated pair of link matrices
pub struct MatrixFiller<'a> {
    search: BidirectionalSearch<'a>,
    unreachable: i32,
}

impl<'a> MatrixFiller<'a> {
    pub fn new(forward: LinkMatrix<'a>, reverse: LinkMatrix<'a>, unreachable: i32) -> Self {
        Self {
            search: BidirectionalSearch::new(forward, reverse),
            unreachable,
        }
    }

    /// Fill `output` on the current rayon pool.
    ///
    /// Each cell is written exactly once. `output` must hold N×N entries.
    pub fn fill(&self, output: &mut [i32], progress: Option<&ProgressCallback>) {
        let n = self.search.size();
        debug_assert_eq!(output.len(), n * n);
        let total = output.len() as u64;
        let done = AtomicU64::new(0);

        output.par_iter_mut().enumerate().for_each(|(idx, cell)| {
            let (i, j) = (idx / n, idx % n);
            *cell = self.search.distance_or(i, j, self.unreachable);

            if let Some(progress) = progress {
                let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
                if completed % n as u64 == 0 {
                    progress(completed, total);
                }
            }
        });
    }

    /// Fill `output` on a dedicated pool of `threads` workers
    pub fn fill_with_threads(
        &self,
        output: &mut [i32],
        threads: usize,
        progress: Option<&ProgressCallback>,
    ) -> Result<()> {
        if threads == 0 {
            return Err(Error::InvalidInput(
                "thread count must be positive".to_string(),
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("linkdist-{i}"))
            .build()?;
        pool.install(|| self.fill(output, progress));
        Ok(())
    }

    /// Summarise a filled matrix
    pub fn stats(&self, output: &[i32], elapsed: Duration) -> FillStats {
        let n = self.search.size();
        let mut stats = FillStats {
            nodes: n,
            reachable_pairs: 0,
            unreachable_pairs: 0,
            max_distance: 0,
            elapsed,
        };
        for (idx, &d) in output.iter().enumerate() {
            if idx / n == idx % n {
                continue;
            }
            if d == self.unreachable {
                stats.unreachable_pairs += 1;
            } else {
                stats.reachable_pairs += 1;
                stats.max_distance = stats.max_distance.max(d);
            }
        }
        stats
    }
}

/// Validate all buffers and run the fill with `options`
pub fn fill_checked(
    output: &mut [i32],
    forward: &[i32],
    reverse: &[i32],
    n: usize,
    unreachable: i32,
    options: &FillOptions,
) -> Result<FillStats> {
    let forward = LinkMatrix::try_new(forward, n, "forward")?;
    let reverse = LinkMatrix::try_new(reverse, n, "reverse")?;
    check_len("output", output.len(), n)?;
    forward.check_transpose(&reverse)?;

    if unreachable >= 0 && (unreachable as u64) < n as u64 {
        debug!(
            "Unreachable sentinel {unreachable} is below N={n} and may collide with a real distance"
        );
    }

    let filler = MatrixFiller::new(forward, reverse, unreachable);
    debug!(
        "Filling {n}x{n} distance matrix ({} edges) on {} threads",
        forward.edge_count(),
        options.threads.unwrap_or_else(rayon::current_num_threads)
    );

    let start = Instant::now();
    match options.threads {
        Some(threads) => filler.fill_with_threads(output, threads, options.progress.as_ref())?,
        None => filler.fill(output, options.progress.as_ref()),
    }
    let elapsed = start.elapsed();

    let stats = filler.stats(output, elapsed);
    debug!(
        "Filled {} pairs in {:?}: {} reachable, {} unreachable, max distance {}",
        output.len(),
        stats.elapsed,
        stats.reachable_pairs,
        stats.unreachable_pairs,
        stats.max_distance
    );
    Ok(stats)
}
