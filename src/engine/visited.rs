//! Visitation state
//!
//! Flags only ever go from `false` to `true` during one traversal.
//! [`VisitedSet`] is the plain form returned to callers; [`SharedVisited`]
//! is the lock-free form the unsynchronized parallel DFS reads and writes
//! from several threads. The lock-protected DFS uses
//! [`NodeLocks<bool>`](super::locks::NodeLocks) instead.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::graph::NodeId;

/// Per-node visited flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    flags: Vec<bool>,
}

impl VisitedSet {
    /// All nodes unvisited.
    pub fn new(node_count: usize) -> Self {
        Self {
            flags: vec![false; node_count],
        }
    }

    /// Whether `node` was visited.
    #[inline]
    pub fn is_visited(
        &self,
        node: NodeId,
    ) -> bool {
        self.flags[node.0]
    }

    /// Mark `node`; returns `true` if it was not visited before.
    #[inline]
    pub fn mark(
        &mut self,
        node: NodeId,
    ) -> bool {
        !std::mem::replace(&mut self.flags[node.0], true)
    }

    /// Number of visited nodes.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&v| v).count()
    }

    /// Visited nodes in increasing order.
    pub fn visited_nodes(&self) -> Vec<NodeId> {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Number of nodes tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no nodes are tracked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// The raw flags, indexed by node.
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}

impl From<Vec<bool>> for VisitedSet {
    fn from(flags: Vec<bool>) -> Self {
        Self { flags }
    }
}

/// Visited flags read and written without a lock.
///
/// All accesses are `Relaxed`: a reader may see a stale `false` for a node
/// another thread has just marked. Callers must tolerate that.
#[derive(Debug)]
pub struct SharedVisited {
    flags: Vec<AtomicBool>,
}

impl SharedVisited {
    /// All nodes unvisited.
    pub fn new(node_count: usize) -> Self {
        Self {
            flags: (0..node_count).map(|_| AtomicBool::new(false)).collect(),
        }
    }

    #[inline]
    pub fn is_visited(
        &self,
        node: NodeId,
    ) -> bool {
        self.flags[node.0].load(Ordering::Relaxed)
    }

    #[inline]
    pub fn mark(
        &self,
        node: NodeId,
    ) {
        self.flags[node.0].store(true, Ordering::Relaxed);
    }

    /// Freeze into a plain [`VisitedSet`].
    pub fn into_visited_set(self) -> VisitedSet {
        VisitedSet {
            flags: self.flags.into_iter().map(AtomicBool::into_inner).collect(),
        }
    }
}
