//! Bidirectional BFS between one source and one destination
//!
//! Two breadth-first searches run against each other: one grows from the
//! source over the forward matrix, the other grows from the destination
//! over the reverse (transposed) matrix. Each round the side that has
//! discovered fewer nodes advances by one full level, and the search stops
//! as soon as the two discovered sets share a node. For a path of length d
//! this visits on the order of 2·b^(d/2) nodes instead of b^d.
//!
//! Because each side only ever advances whole levels and the search halts
//! at the first overlap, every common node sits on a shortest path. The
//! meeting node is the smallest common index, which makes the reconstructed
//! path deterministic even though only its length is guaranteed canonical.

use crate::core::frontier::{next_level, DiscoveryMap};
use crate::core::matrix::LinkMatrix;

/// Searcher over a forward link matrix and its transpose
#[derive(Debug, Clone, Copy)]
pub struct BidirectionalSearch<'a> {
    forward: LinkMatrix<'a>,
    reverse: LinkMatrix<'a>,
}

/// Both half-searches at the moment they met
#[derive(Debug)]
struct Meeting {
    middle: usize,
    from_source: DiscoveryMap,
    from_target: DiscoveryMap,
}

impl<'a> BidirectionalSearch<'a> {
    /// `reverse` must be the transpose of `forward`; this is not checked
    /// here (see [`LinkMatrix::check_transpose`]).
    pub fn new(forward: LinkMatrix<'a>, reverse: LinkMatrix<'a>) -> Self {
        debug_assert_eq!(forward.size(), reverse.size());
        Self { forward, reverse }
    }

    pub fn size(&self) -> usize {
        self.forward.size()
    }

    /// Edge count of a shortest directed path `point_a → point_b`, or
    /// `None` if `point_b` is unreachable from `point_a`.
    pub fn distance(&self, point_a: usize, point_b: usize) -> Option<usize> {
        if point_a == point_b {
            return Some(0);
        }
        let meeting = self.meet(point_a, point_b)?;
        let steps_a = meeting.from_source.depth_of(meeting.middle)?;
        let steps_b = meeting.from_target.depth_of(meeting.middle)?;
        Some(steps_a + steps_b)
    }

    /// Distance with the unreachable case mapped to `unreachable`
    pub fn distance_or(&self, point_a: usize, point_b: usize, unreachable: i32) -> i32 {
        match self.distance(point_a, point_b) {
            // A simple path has at most N - 1 edges, so it fits whenever N does.
            Some(d) => i32::try_from(d).unwrap_or(unreachable),
            None => unreachable,
        }
    }

    /// Nodes of a shortest path, `point_a` first and `point_b` last
    pub fn shortest_path(&self, point_a: usize, point_b: usize) -> Option<Vec<usize>> {
        if point_a == point_b {
            return Some(vec![point_a]);
        }
        let meeting = self.meet(point_a, point_b)?;

        // Source half comes out middle-first; flip it so it starts at point_a.
        let mut path = meeting.from_source.walk_to_root(meeting.middle);
        path.reverse();
        // Target half starts at the middle, which is already in place.
        path.extend(
            meeting
                .from_target
                .walk_to_root(meeting.middle)
                .into_iter()
                .skip(1),
        );
        Some(path)
    }

    /// Run both half-searches until they overlap or one side runs dry
    fn meet(&self, point_a: usize, point_b: usize) -> Option<Meeting> {
        let mut from_source = DiscoveryMap::rooted_at(point_a);
        let mut from_target = DiscoveryMap::rooted_at(point_b);
        let mut last_a = vec![point_a];
        let mut last_b = vec![point_b];

        while !last_a.is_empty() && !last_b.is_empty() {
            if let Some(middle) = from_source.first_common(&from_target) {
                return Some(Meeting {
                    middle,
                    from_source,
                    from_target,
                });
            }
            if from_source.len() <= from_target.len() {
                last_a = next_level(&mut from_source, &last_a, &self.forward);
            } else {
                last_b = next_level(&mut from_target, &last_b, &self.reverse);
            }
        }

        // One side stopped growing before the two sets touched.
        None
    }
}
