//! Synthetic link matrices for benchmarking and verification runs

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of the generated graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Topology {
    /// 0 → 1 → … → N-1
    Chain,
    /// Chain plus N-1 → 0
    Cycle,
    /// Every i → j with i ≠ j
    Complete,
    /// No edges at all
    Empty,
    /// Each i → j (i ≠ j) present with probability `density`
    Random,
}

/// Build an N×N row-major link matrix
pub fn generate(topology: Topology, n: usize, density: f64, seed: u64) -> Vec<i32> {
    let mut m = vec![0; n * n];
    match topology {
        Topology::Chain | Topology::Cycle => {
            for i in 0..n.saturating_sub(1) {
                m[i * n + i + 1] = 1;
            }
            if topology == Topology::Cycle && n > 1 {
                m[(n - 1) * n] = 1;
            }
        }
        Topology::Complete => {
            for i in 0..n {
                for j in 0..n {
                    if i != j {
                        m[i * n + j] = 1;
                    }
                }
            }
        }
        Topology::Empty => {}
        Topology::Random => {
            let mut rng = StdRng::seed_from_u64(seed);
            for i in 0..n {
                for j in 0..n {
                    if i != j && rng.random_bool(density) {
                        m[i * n + j] = 1;
                    }
                }
            }
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_closes() {
        let m = generate(Topology::Cycle, 3, 0.0, 0);
        assert_eq!(m, vec![0, 1, 0, 0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_complete_has_no_self_loops() {
        let n = 4;
        let m = generate(Topology::Complete, n, 0.0, 0);
        assert_eq!(m.iter().filter(|&&e| e != 0).count(), n * (n - 1));
        assert!((0..n).all(|i| m[i * n + i] == 0));
    }

    #[test]
    fn test_random_is_seeded() {
        let a = generate(Topology::Random, 12, 0.3, 42);
        let b = generate(Topology::Random, 12, 0.3, 42);
        assert_eq!(a, b);
        assert!(generate(Topology::Random, 12, 0.0, 42).iter().all(|&e| e == 0));
    }
}
