//! # linkdist
//!
//! All-pairs shortest-path distance matrices for directed, unweighted graphs
//! stored as dense link matrices.
//!
//! Each (i, j) pair is solved with a bidirectional breadth-first search: one
//! search grows from i over the link matrix, another grows from j over its
//! transpose, and the distance is read off the predecessor maps where they
//! meet. Pairs are independent, so the N² searches run in parallel on a
//! rayon pool and write straight into their own output cells.
//!
//! ## Basic Usage
//!
//! ```rust
//! // 0 → 1 → 2 → 3
//! let n = 4;
//! let mut forward = vec![0; n * n];
//! for i in 0..n - 1 {
//!     forward[i * n + i + 1] = 1;
//! }
//! let reverse = linkdist::transpose(&forward, n);
//!
//! let mut distances = vec![0; n * n];
//! linkdist::fill_distance_matrix(&mut distances, &forward, &reverse, n, n as i32);
//!
//! assert_eq!(distances[3], 3); // 0 → 3
//! assert_eq!(distances[3 * n], 4); // 3 → 0 is unreachable
//! ```
//!
//! ## Validation and Progress
//!
//! ```rust
//! use linkdist::FillOptions;
//! use std::sync::Arc;
//!
//! let forward = vec![0, 1, 1, 0];
//! let reverse = linkdist::transpose(&forward, 2);
//! let mut distances = vec![0; 4];
//!
//! let options = FillOptions {
//!     threads: Some(2),
//!     progress: Some(Arc::new(|done, total| {
//!         println!("{done}/{total} pairs");
//!     })),
//! };
//! let stats = linkdist::fill_distance_matrix_with_options(
//!     &mut distances, &forward, &reverse, 2, -1, &options,
//! )?;
//! assert_eq!(stats.reachable_pairs, 2);
//! # Ok::<(), linkdist::Error>(())
//! ```

// Re-export core types that users might need
pub use crate::core::error::{Error, Result};
pub use crate::core::fill::{FillOptions, FillStats, MatrixFiller, ProgressCallback};
pub use crate::core::frontier::{next_level, DiscoveryMap};
pub use crate::core::matrix::{transpose, LinkMatrix};
pub use crate::core::metrics::{default_unreachable, DistanceMatrix};
pub use crate::core::reference;
pub use crate::core::search::BidirectionalSearch;

// Internal modules
mod core;

// C-compatible FFI bindings (optional)
#[cfg(feature = "c-bindings")]
pub mod ffi;

/// Fill `output` with the shortest directed distance for every node pair.
///
/// `output[i * n + j]` receives the edge count of a shortest path from `i`
/// to `j`, or `unreachable` if there is none. `reverse` must be the
/// transpose of `forward`, and all three buffers must hold `n * n` entries.
/// None of this is checked in release builds; a short buffer panics on
/// indexing and a wrong transpose yields wrong distances. Use
/// [`fill_distance_matrix_with_options`] to have the inputs validated.
///
/// Pick `unreachable` outside `0..n`; no shortest path is longer than
/// `n - 1` edges.
pub fn fill_distance_matrix(
    output: &mut [i32],
    forward: &[i32],
    reverse: &[i32],
    n: usize,
    unreachable: i32,
) {
    let filler = MatrixFiller::new(
        LinkMatrix::new(forward, n),
        LinkMatrix::new(reverse, n),
        unreachable,
    );
    filler.fill(output, None);
}

/// Validating variant of [`fill_distance_matrix`].
///
/// Rejects an empty dimension, buffers that are not `n * n`, and a reverse
/// matrix that is not the transpose of `forward`, then fills `output` using
/// the pool size and progress callback from `options`.
pub fn fill_distance_matrix_with_options(
    output: &mut [i32],
    forward: &[i32],
    reverse: &[i32],
    n: usize,
    unreachable: i32,
    options: &FillOptions,
) -> Result<FillStats> {
    crate::core::fill::fill_checked(output, forward, reverse, n, unreachable, options)
}

/// Allocate and fill a validated distance matrix.
///
/// `unreachable` defaults to `n`. Wrap the result in [`DistanceMatrix`] with
/// the same sentinel for centrality, compactness and stratum.
pub fn distance_matrix(
    forward: &[i32],
    reverse: &[i32],
    n: usize,
    unreachable: Option<i32>,
) -> Result<Vec<i32>> {
    let len = n
        .checked_mul(n)
        .ok_or_else(|| Error::InvalidInput(format!("matrix dimension {n} overflows")))?;
    let unreachable = match unreachable {
        Some(value) => value,
        None => default_unreachable(n)?,
    };
    let mut output = vec![unreachable; len];
    crate::core::fill::fill_checked(
        &mut output,
        forward,
        reverse,
        n,
        unreachable,
        &FillOptions::default(),
    )?;
    Ok(output)
}
