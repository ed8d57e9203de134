//! Engine error types

use thiserror::Error;

use crate::graph::NodeId;

/// Errors returned by traversal, relaxation and path reconstruction.
///
/// A failed call never leaves usable state behind.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Source or destination is not a node of the graph
    #[error("{node} is out of range for a graph with {node_count} nodes")]
    IndexOutOfRange { node: NodeId, node_count: usize },

    /// The destination was never reached from the source
    #[error("No path from {from} to {to}")]
    NoPathFound { from: NodeId, to: NodeId },

    /// A thread team needs at least one member
    #[error("Thread count must be at least 1")]
    InvalidThreadCount,

    /// The worker threads could not be started
    #[error("Failed to build thread team: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Fail fast when `node` is outside `0..node_count`.
#[inline]
pub(crate) fn check_node(
    node: NodeId,
    node_count: usize,
) -> EngineResult<()> {
    if node.0 < node_count {
        Ok(())
    } else {
        Err(EngineError::IndexOutOfRange { node, node_count })
    }
}
