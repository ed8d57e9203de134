//! Node identifiers
//!
//! Nodes of a dense graph are numbered `0..node_count`; `NodeId` wraps that
//! index so it cannot be confused with a weight or a cost.

use std::fmt;

/// Index of a node in a [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId with the given index.
    ///
    /// # Examples
    ///
    /// ```
    /// use pargraph::graph::NodeId;
    ///
    /// let id = NodeId::new(42);
    /// assert_eq!(id.index(), 42);
    /// ```
    #[inline]
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the row/column index of this node.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}
