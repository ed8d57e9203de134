//! Dense adjacency-matrix graph
//!
//! The graph is built once (usually by [`loader`]) and never mutated
//! afterwards, so a `&Graph` can be shared by every thread of a traversal
//! without locking.
//!
//! # Weights
//!
//! `weight(u, v) == 0` means "no edge". Any positive value is the weight of
//! the directed edge `u -> v`. Zero-weight edges cannot be represented.

pub mod error;
pub mod generate;
pub mod loader;
pub mod node_id;

pub use error::{GraphError, GraphResult};
pub use generate::{random_graph, write_graph};
pub use loader::{load_graph, parse_graph};
pub use node_id::NodeId;

/// Edge weight. `0` is reserved for "no edge".
pub type Weight = u32;

/// A square adjacency matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    weights: Vec<Weight>,
}

impl Graph {
    /// Build a graph from matrix rows.
    ///
    /// Fails with [`GraphError::NotSquare`] if any row's length differs from
    /// the number of rows.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> GraphResult<Self> {
        let node_count = rows.len();
        let mut weights = Vec::with_capacity(node_count * node_count);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != node_count {
                return Err(GraphError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: node_count,
                });
            }
            weights.extend(entries);
        }
        Ok(Self {
            node_count,
            weights,
        })
    }

    /// Build a graph with `node_count` nodes from a list of `(from, to, weight)`
    /// edges. Later duplicates overwrite earlier ones.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is `>= node_count`.
    pub fn from_edges(
        node_count: usize,
        edges: &[(usize, usize, Weight)],
    ) -> Self {
        let mut weights = vec![0; node_count * node_count];
        for &(from, to, weight) in edges {
            assert!(
                from < node_count && to < node_count,
                "edge ({}, {}) outside a {}-node graph",
                from,
                to,
                node_count
            );
            weights[from * node_count + to] = weight;
        }
        Self {
            node_count,
            weights,
        }
    }

    /// Number of nodes (rows of the matrix).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Weight of `from -> to`, `0` when there is no edge.
    #[inline]
    pub fn weight(
        &self,
        from: NodeId,
        to: NodeId,
    ) -> Weight {
        self.weights[from.0 * self.node_count + to.0]
    }

    /// True iff `weight(from, to) > 0`.
    #[inline]
    pub fn edge_exists(
        &self,
        from: NodeId,
        to: NodeId,
    ) -> bool {
        self.weight(from, to) > 0
    }

    /// The matrix row of `from`.
    #[inline]
    pub fn row(
        &self,
        from: NodeId,
    ) -> &[Weight] {
        let start = from.0 * self.node_count;
        &self.weights[start..start + self.node_count]
    }

    /// Out-neighbors of `from` with their weights, in increasing node order.
    pub fn neighbors(
        &self,
        from: NodeId,
    ) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.row(from)
            .iter()
            .enumerate()
            .filter(|(_, &w)| w > 0)
            .map(|(to, &w)| (NodeId(to), w))
    }

    /// All node ids in increasing order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count).map(NodeId)
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }

    /// Whether `node` is a valid index for this graph.
    #[inline]
    pub fn contains(
        &self,
        node: NodeId,
    ) -> bool {
        node.0 < self.node_count
    }
}

#[cfg(test)]
mod tests;
