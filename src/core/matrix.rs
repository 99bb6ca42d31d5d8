//! Dense link-matrix views
//!
//! A link matrix is a flat, row-major N×N buffer where a nonzero entry at
//! (i, j) means there is a directed edge i → j. Row i therefore lists the
//! outgoing edges of node i; the transposed matrix lists incoming edges.

use crate::core::error::{Error, Result};

/// Borrowed, read-only view over a dense row-major link matrix
#[derive(Debug, Clone, Copy)]
pub struct LinkMatrix<'a> {
    entries: &'a [i32],
    n: usize,
}

impl<'a> LinkMatrix<'a> {
    /// Wrap a buffer without checking its length.
    ///
    /// Out-of-range rows panic on slice indexing rather than reading past
    /// the buffer.
    pub fn new(entries: &'a [i32], n: usize) -> Self {
        debug_assert_eq!(entries.len(), n * n, "link matrix must be N×N");
        Self { entries, n }
    }

    /// Wrap a buffer, rejecting empty or non-square input
    pub fn try_new(entries: &'a [i32], n: usize, buffer: &'static str) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyMatrix);
        }
        check_len(buffer, entries.len(), n)?;
        Ok(Self { entries, n })
    }

    /// Number of nodes (N)
    pub fn size(&self) -> usize {
        self.n
    }

    /// Whether the directed edge `from → to` exists
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.entries[from * self.n + to] != 0
    }

    /// Row `p` of the matrix
    #[inline]
    pub fn row(&self, p: usize) -> &'a [i32] {
        let start = p * self.n;
        &self.entries[start..start + self.n]
    }

    /// Direct successors of `p`, in ascending column order
    pub fn neighbors(&self, p: usize) -> Vec<usize> {
        self.row(p)
            .iter()
            .enumerate()
            .filter(|(_, &entry)| entry != 0)
            .map(|(j, _)| j)
            .collect()
    }

    /// Number of nonzero entries
    pub fn edge_count(&self) -> usize {
        self.entries.iter().filter(|&&entry| entry != 0).count()
    }

    /// Check that `other` is the transpose of `self` under the nonzero-is-edge
    /// reading. Returns the first disagreeing (row, col) of `self`.
    pub fn check_transpose(&self, other: &LinkMatrix<'_>) -> Result<()> {
        if self.n != other.n {
            return Err(Error::DimensionMismatch {
                buffer: "reverse",
                expected: self.n * self.n,
                actual: other.n * other.n,
            });
        }
        for row in 0..self.n {
            for col in 0..self.n {
                if self.has_edge(row, col) != other.has_edge(col, row) {
                    return Err(Error::NotTranspose { row, col });
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn check_len(buffer: &'static str, actual: usize, n: usize) -> Result<()> {
    let expected = n
        .checked_mul(n)
        .ok_or_else(|| Error::InvalidInput(format!("matrix dimension {n} overflows")))?;
    if actual != expected {
        return Err(Error::DimensionMismatch {
            buffer,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Transpose a dense row-major N×N matrix.
///
/// Callers use this to build the reverse matrix once; the searcher itself
/// always takes both views as input.
pub fn transpose(matrix: &[i32], n: usize) -> Vec<i32> {
    let mut out = vec![0; matrix.len()];
    for i in 0..n {
        for j in 0..n {
            out[j * n + i] = matrix[i * n + j];
        }
    }
    out
}
