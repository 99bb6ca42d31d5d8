//! Core library modules for linkdist
//!
//! Leaf-first: `matrix` enumerates neighbors, `frontier` expands one BFS
//! level, `search` runs the bidirectional search for one pair and `fill`
//! drives it across every pair in parallel. `metrics` summarizes a filled
//! matrix.

pub mod error;
pub mod fill;
pub mod frontier;
pub mod matrix;
pub mod metrics;
pub mod reference;
pub mod search;

