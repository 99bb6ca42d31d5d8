//! Integration tests for linkdist distance matrices
//!
//! Small hand-built graphs check the documented scenarios; seeded random
//! graphs are compared cell by cell with single-source BFS.

use linkdist::reference::reference_distance_matrix;
use linkdist::{
    distance_matrix, fill_distance_matrix, fill_distance_matrix_with_options, transpose,
    BidirectionalSearch, Error, FillOptions, LinkMatrix,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Never produced by a fill, so any survivor is an unwritten cell
const STALE: i32 = -12345;

fn random_graph(n: usize, density: f64, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n * n)
        .map(|idx| {
            let (i, j) = (idx / n, idx % n);
            i32::from(i != j && rng.random_bool(density))
        })
        .collect()
}

fn fill(forward: &[i32], n: usize, sentinel: i32) -> Vec<i32> {
    let reverse = transpose(forward, n);
    let mut out = vec![STALE; n * n];
    fill_distance_matrix(&mut out, forward, &reverse, n, sentinel);
    out
}

#[test]
fn test_chain_of_four() {
    let n = 4;
    let sentinel = 99;
    let mut forward = vec![0; n * n];
    forward[1] = 1; // 0 → 1
    forward[n + 2] = 1; // 1 → 2
    forward[2 * n + 3] = 1; // 2 → 3

    let out = fill(&forward, n, sentinel);

    assert_eq!(out[0], 0);
    assert_eq!(out[1], 1);
    assert_eq!(out[2], 2);
    assert_eq!(out[3], 3);
    assert_eq!(out[n], sentinel); // 1 → 0
    assert_eq!(out[3 * n], sentinel); // 3 → 0
}

#[test]
fn test_two_isolated_nodes() {
    let out = fill(&[0, 0, 0, 0], 2, 2);
    assert_eq!(out, vec![0, 2, 2, 0]);
}

#[test]
fn test_complete_graph_is_all_ones() {
    let n = 7;
    let forward: Vec<i32> = (0..n * n).map(|idx| i32::from(idx / n != idx % n)).collect();
    let out = fill(&forward, n, n as i32);

    for i in 0..n {
        for j in 0..n {
            let expected = if i == j { 0 } else { 1 };
            assert_eq!(out[i * n + j], expected, "({i}, {j})");
        }
    }
}

#[test]
fn test_single_node() {
    assert_eq!(fill(&[0], 1, 1), vec![0]);
    // A self-loop does not change the zero diagonal.
    assert_eq!(fill(&[1], 1, 1), vec![0]);
}

#[test]
fn test_matches_reference_bfs_on_random_graphs() {
    for (seed, n, density) in [(1, 12, 0.15), (2, 30, 0.05), (3, 40, 0.1), (4, 25, 0.3)] {
        let sentinel = n as i32;
        let forward = random_graph(n, density, seed);
        let out = fill(&forward, n, sentinel);
        let expected = reference_distance_matrix(&forward, n, sentinel);
        assert_eq!(out, expected, "seed {seed}, n {n}, density {density}");
    }
}

#[test]
fn test_every_cell_written_and_diagonal_zero() {
    let n = 33;
    let forward = random_graph(n, 0.04, 11);
    let out = fill(&forward, n, n as i32);

    assert!(out.iter().all(|&d| d != STALE));
    assert!((0..n).all(|i| out[i * n + i] == 0));
}

#[test]
fn test_triangle_inequality() {
    let n = 24;
    let sentinel = n as i32;
    let out = fill(&random_graph(n, 0.08, 5), n, sentinel);

    for i in 0..n {
        for k in 0..n {
            let ik = out[i * n + k];
            if ik == sentinel {
                continue;
            }
            for j in 0..n {
                let kj = out[k * n + j];
                if kj == sentinel {
                    continue;
                }
                let ij = out[i * n + j];
                assert_ne!(ij, sentinel, "{i} → {k} → {j} exists but {i} → {j} is unreachable");
                assert!(ij <= ik + kj, "d({i},{j})={ij} > d({i},{k})+d({k},{j})={}", ik + kj);
            }
        }
    }
}

#[test]
fn test_deterministic_across_runs_and_thread_counts() {
    let n = 40;
    let forward = random_graph(n, 0.06, 8);
    let reverse = transpose(&forward, n);
    let baseline = fill(&forward, n, -1);

    assert_eq!(fill(&forward, n, -1), baseline);
    for threads in [1, 2, 5] {
        let mut out = vec![STALE; n * n];
        let options = FillOptions {
            threads: Some(threads),
            progress: None,
        };
        fill_distance_matrix_with_options(&mut out, &forward, &reverse, n, -1, &options)
            .expect("valid input");
        assert_eq!(out, baseline, "threads = {threads}");
    }
}

#[test]
fn test_shortest_paths_follow_edges() {
    let n = 20;
    let forward = random_graph(n, 0.12, 21);
    let reverse = transpose(&forward, n);
    let fwd = LinkMatrix::new(&forward, n);
    let search = BidirectionalSearch::new(fwd, LinkMatrix::new(&reverse, n));
    let expected = reference_distance_matrix(&forward, n, -1);

    for a in 0..n {
        for b in 0..n {
            match search.shortest_path(a, b) {
                Some(path) => {
                    assert_eq!(path.first(), Some(&a));
                    assert_eq!(path.last(), Some(&b));
                    assert!(path.windows(2).all(|w| fwd.has_edge(w[0], w[1])));
                    assert_eq!((path.len() - 1) as i32, expected[a * n + b]);
                    assert_eq!(search.distance(a, b), Some(path.len() - 1));
                }
                None => assert_eq!(expected[a * n + b], -1),
            }
        }
    }
}

#[test]
fn test_validation_errors() {
    let forward = vec![0, 1, 0, 0];
    let reverse = transpose(&forward, 2);

    assert_eq!(distance_matrix(&forward, &reverse, 0, Some(9)), Err(Error::EmptyMatrix));
    assert!(matches!(
        distance_matrix(&forward, &reverse[..3], 2, Some(9)),
        Err(Error::DimensionMismatch { buffer: "reverse", .. })
    ));
    assert_eq!(
        distance_matrix(&forward, &forward, 2, Some(9)),
        Err(Error::NotTranspose { row: 0, col: 1 })
    );

    let mut out = vec![0; 4];
    let options = FillOptions {
        threads: Some(0),
        progress: None,
    };
    assert!(matches!(
        fill_distance_matrix_with_options(&mut out, &forward, &reverse, 2, 9, &options),
        Err(Error::InvalidInput(_))
    ));
}
