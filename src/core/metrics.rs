//! Whole-graph analytics over a filled distance matrix
//!
//! Row and column sums give each node's out- and in-distance, and the total
//! over every cell is the converted distance. Unreachable cells count at the
//! sentinel's value there. `compactness` normalizes the converted distance
//! between a complete graph (1.0) and an edgeless one (0.0); `stratum`
//! measures how hierarchical the reachability is, with unreachable cells
//! counted as 0.

use crate::core::error::{Error, Result};
use crate::core::matrix::check_len;

/// Sentinel used when the caller does not pick one: the node count, one more
/// than the longest possible shortest path.
pub fn default_unreachable(n: usize) -> Result<i32> {
    i32::try_from(n).map_err(|_| {
        Error::InvalidInput(format!("matrix dimension {n} does not fit the i32 sentinel"))
    })
}

/// Borrowed view over a filled row-major N×N distance matrix
#[derive(Debug, Clone, Copy)]
pub struct DistanceMatrix<'a> {
    distances: &'a [i32],
    n: usize,
    unreachable: i32,
}

impl<'a> DistanceMatrix<'a> {
    pub fn new(distances: &'a [i32], n: usize, unreachable: i32) -> Self {
        debug_assert_eq!(distances.len(), n * n, "distance matrix must be N×N");
        Self {
            distances,
            n,
            unreachable,
        }
    }

    /// Wrap a buffer, rejecting empty or non-square input
    pub fn try_new(distances: &'a [i32], n: usize, unreachable: i32) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyMatrix);
        }
        check_len("distances", distances.len(), n)?;
        Ok(Self::new(distances, n, unreachable))
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn unreachable(&self) -> i32 {
        self.unreachable
    }

    /// Distance from `from` to `to`, or `None` if the cell holds the sentinel
    pub fn distance(&self, from: usize, to: usize) -> Option<i32> {
        let d = self.distances[from * self.n + to];
        (d != self.unreachable).then_some(d)
    }

    fn row(&self, i: usize) -> &'a [i32] {
        &self.distances[i * self.n..(i + 1) * self.n]
    }

    fn column(&self, j: usize) -> impl Iterator<Item = i32> + 'a {
        let n = self.n;
        self.distances[j..].iter().step_by(n).copied()
    }

    /// Sum of row `i`, sentinel cells included
    pub fn out_distance(&self, i: usize) -> i64 {
        self.row(i).iter().map(|&d| i64::from(d)).sum()
    }

    /// Sum of column `j`, sentinel cells included
    pub fn in_distance(&self, j: usize) -> i64 {
        self.column(j).map(i64::from).sum()
    }

    /// Sum of every cell
    pub fn converted_distance(&self) -> i64 {
        self.distances.iter().map(|&d| i64::from(d)).sum()
    }

    /// Converted distance over the out-distance of `i`; `None` when that is 0
    pub fn relative_out_centrality(&self, i: usize) -> Option<f64> {
        ratio(self.converted_distance(), self.out_distance(i))
    }

    /// Converted distance over the in-distance of `j`; `None` when that is 0
    pub fn relative_in_centrality(&self, j: usize) -> Option<f64> {
        ratio(self.converted_distance(), self.in_distance(j))
    }

    /// Converted distance of an edgeless graph: every off-diagonal cell is the
    /// sentinel.
    pub fn max_centrality_norm_factor(&self) -> f64 {
        self.off_diagonal() * f64::from(self.unreachable)
    }

    /// Converted distance of a complete graph: every off-diagonal cell is 1.
    pub fn min_centrality_norm_factor(&self) -> f64 {
        self.off_diagonal()
    }

    fn off_diagonal(&self) -> f64 {
        let n = self.n as f64;
        n * n - n
    }

    /// `(max - converted) / (max - min)`. `None` when the two factors
    /// coincide, i.e. for a single node or a sentinel of 1.
    pub fn compactness(&self) -> Option<f64> {
        let max = self.max_centrality_norm_factor();
        let min = self.min_centrality_norm_factor();
        if max == min {
            return None;
        }
        Some((max - self.converted_distance() as f64) / (max - min))
    }

    /// Sum over nodes of |status - contrastatus|, divided by the value for a
    /// linear order of N nodes. Status is the row sum and contrastatus the
    /// column sum, both with sentinel cells counted as 0. `None` for a single
    /// node.
    pub fn stratum(&self) -> Option<f64> {
        let n = self.n as f64;
        let cube = n * n * n;
        let linear = if self.n % 2 == 0 {
            cube / 4.0
        } else {
            (cube - n) / 4.0
        };
        if linear == 0.0 {
            return None;
        }

        let reached = |d: i32| if d == self.unreachable { 0 } else { i64::from(d) };
        let total: i64 = (0..self.n)
            .map(|i| {
                let status: i64 = self.row(i).iter().map(|&d| reached(d)).sum();
                let contrastatus: i64 = self.column(i).map(reached).sum();
                (status - contrastatus).abs()
            })
            .sum();
        Some(total as f64 / linear)
    }
}

fn ratio(numerator: i64, denominator: i64) -> Option<f64> {
    (denominator != 0).then(|| numerator as f64 / denominator as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    // 0 → 1 → 2 → 3, sentinel 4
    const CHAIN: [i32; 16] = [
        0, 1, 2, 3, //
        4, 0, 1, 2, //
        4, 4, 0, 1, //
        4, 4, 4, 0,
    ];

    // Every pair linked, sentinel 4
    const COMPLETE: [i32; 16] = [
        0, 1, 1, 1, //
        1, 0, 1, 1, //
        1, 1, 0, 1, //
        1, 1, 1, 0,
    ];

    // Edges 0 → 4, 1 → 2, 2 → 3, 4 → 4, sentinel 5
    const SPARSE: [i32; 25] = [
        0, 5, 5, 5, 1, //
        5, 0, 1, 2, 5, //
        5, 5, 0, 1, 5, //
        5, 5, 5, 0, 5, //
        5, 5, 5, 5, 0,
    ];

    fn close(actual: Option<f64>, expected: f64) -> bool {
        actual.is_some_and(|v| (v - expected).abs() < EPS)
    }

    #[test]
    fn test_row_and_column_sums_include_sentinel() {
        let m = DistanceMatrix::new(&CHAIN, 4, 4);
        assert_eq!(m.out_distance(0), 6);
        assert_eq!(m.out_distance(3), 12);
        assert_eq!(m.in_distance(0), 12);
        assert_eq!(m.in_distance(3), 6);
        assert_eq!(m.converted_distance(), 34);
    }

    #[test]
    fn test_chain_compactness_and_stratum() {
        let m = DistanceMatrix::new(&CHAIN, 4, 4);
        assert_eq!(m.max_centrality_norm_factor(), 48.0);
        assert_eq!(m.min_centrality_norm_factor(), 12.0);
        // (48 - 34) / (48 - 12)
        assert!(close(m.compactness(), 14.0 / 36.0));
        // |6-0| + |3-1| + |1-3| + |0-6| = 16 over 4³/4
        assert!(close(m.stratum(), 1.0));
    }

    #[test]
    fn test_complete_graph_is_fully_compact_and_flat() {
        let m = DistanceMatrix::new(&COMPLETE, 4, 4);
        assert_eq!(m.converted_distance(), 12);
        assert!(close(m.compactness(), 1.0));
        assert!(close(m.stratum(), 0.0));
    }

    #[test]
    fn test_edgeless_graph_has_zero_compactness() {
        let m = DistanceMatrix::new(&[0, 2, 2, 0], 2, 2);
        assert!(close(m.compactness(), 0.0));
        assert!(close(m.stratum(), 0.0));
    }

    #[test]
    fn test_sparse_graph_centrality() {
        let m = DistanceMatrix::new(&SPARSE, 5, 5);
        assert_eq!(m.out_distance(1), 13);
        assert_eq!(m.in_distance(4), 16);
        assert_eq!(m.converted_distance(), 85);
        assert!(close(m.relative_out_centrality(2), 5.3125));
        assert!(close(m.relative_in_centrality(4), 5.3125));
        // (100 - 85) / (100 - 20)
        assert!(close(m.compactness(), 0.1875));
        // statuses 1,3,1,0,0 against contrastatuses 0,0,1,3,1; (5³-5)/4 = 30
        assert!(close(m.stratum(), 8.0 / 30.0));
    }

    #[test]
    fn test_single_node_has_no_ratios() {
        let m = DistanceMatrix::new(&[0], 1, 1);
        assert_eq!(m.relative_out_centrality(0), None);
        assert_eq!(m.compactness(), None);
        assert_eq!(m.stratum(), None);
    }

    #[test]
    fn test_distance_hides_sentinel() {
        let m = DistanceMatrix::new(&CHAIN, 4, 4);
        assert_eq!(m.distance(0, 3), Some(3));
        assert_eq!(m.distance(3, 0), None);
    }

    #[test]
    fn test_try_new_rejects_bad_shape() {
        assert_eq!(DistanceMatrix::try_new(&[], 0, 0).err(), Some(Error::EmptyMatrix));
        assert!(matches!(
            DistanceMatrix::try_new(&CHAIN[..15], 4, 4),
            Err(Error::DimensionMismatch {
                buffer: "distances",
                ..
            })
        ));
    }

    #[test]
    fn test_default_unreachable_is_node_count() {
        assert_eq!(default_unreachable(7), Ok(7));
        assert!(matches!(
            default_unreachable(usize::MAX),
            Err(Error::InvalidInput(_))
        ));
    }
}
