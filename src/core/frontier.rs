//! Single-direction BFS state: the discovery map and frontier expansion

use std::collections::BTreeMap;

use crate::core::matrix::LinkMatrix;

/// How each visited node was first reached during one BFS.
///
/// Keys are kept in ascending node order. The search root maps to `None`;
/// every other node maps to the node it was discovered from. An entry is
/// written once and never changes.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryMap {
    predecessors: BTreeMap<usize, Option<usize>>,
}

impl DiscoveryMap {
    /// A map containing only `root`
    pub fn rooted_at(root: usize) -> Self {
        let mut predecessors = BTreeMap::new();
        predecessors.insert(root, None);
        Self { predecessors }
    }

    /// Number of discovered nodes, root included
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    pub fn contains(&self, node: usize) -> bool {
        self.predecessors.contains_key(&node)
    }

    /// Predecessor of `node`; `Some(None)` for the root, `None` if undiscovered
    pub fn predecessor(&self, node: usize) -> Option<Option<usize>> {
        self.predecessors.get(&node).copied()
    }

    /// Discovered nodes in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.predecessors.keys().copied()
    }

    /// Record `node` as reached from `from` unless it is already known.
    /// Returns whether the node was new.
    fn discover(&mut self, node: usize, from: usize) -> bool {
        if self.predecessors.contains_key(&node) {
            return false;
        }
        self.predecessors.insert(node, Some(from));
        true
    }

    /// Smallest node discovered by both maps, if any
    pub fn first_common(&self, other: &DiscoveryMap) -> Option<usize> {
        // The intersection is a subset of the smaller map, so the first hit
        // while scanning it in order is the smallest common node.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.nodes().find(|&node| large.contains(node))
    }

    /// Nodes from `node` back to the root, `node` first and the root last.
    /// Empty if `node` was never discovered.
    pub fn walk_to_root(&self, node: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = Some(node);
        while let Some(c) = current {
            match self.predecessors.get(&c) {
                Some(&pred) => {
                    chain.push(c);
                    current = pred;
                }
                None => break,
            }
        }
        chain
    }

    /// Edges between `node` and the root
    pub fn depth_of(&self, node: usize) -> Option<usize> {
        let chain = self.walk_to_root(node);
        chain.len().checked_sub(1)
    }
}

/// Expand one BFS level.
///
/// Every neighbor of every node in `previous` (frontier order, then ascending
/// neighbor order) that `map` has not seen yet is recorded with its
/// discoverer and appended to the returned frontier. The first discoverer
/// wins. An empty result means the direction is exhausted.
pub fn next_level(
    map: &mut DiscoveryMap,
    previous: &[usize],
    adjacency: &LinkMatrix<'_>,
) -> Vec<usize> {
    let mut level = Vec::new();
    for &u in previous {
        for v in adjacency.neighbors(u) {
            if map.discover(v, u) {
                level.push(v);
            }
        }
    }
    level
}
