//! CLI-specific utilities for linkdist
//!
//! This module contains code specific to the command-line interface,
//! separate from the core library functionality.

pub mod graph;
pub mod progress;

pub use graph::Topology;
pub use progress::ProgressManager;
