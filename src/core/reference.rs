//! Single-source BFS ground truth
//!
//! Plain one-directional BFS over the forward matrix only. It shares no code
//! with the bidirectional searcher, which makes it a useful cross-check for
//! filled matrices.

use std::collections::VecDeque;

use crate::core::matrix::LinkMatrix;

/// Distances from `source` to every node, `None` where unreachable
pub fn bfs_distances(forward: &LinkMatrix<'_>, source: usize) -> Vec<Option<usize>> {
    let n = forward.size();
    let mut dist = vec![None; n];
    let mut queue = VecDeque::with_capacity(n);

    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let next = dist[u].map_or(0, |d| d + 1);
        for (v, &entry) in forward.row(u).iter().enumerate() {
            if entry != 0 && dist[v].is_none() {
                dist[v] = Some(next);
                queue.push_back(v);
            }
        }
    }

    dist
}

/// Full distance matrix built from N single-source searches
pub fn reference_distance_matrix(forward: &[i32], n: usize, unreachable: i32) -> Vec<i32> {
    let matrix = LinkMatrix::new(forward, n);
    let mut out = Vec::with_capacity(n * n);
    for source in 0..n {
        out.extend(bfs_distances(&matrix, source).into_iter().map(|d| {
            d.and_then(|d| i32::try_from(d).ok())
                .unwrap_or(unreachable)
        }));
    }
    out
}
