//! Path reconstruction from parent pointers

use super::error::{check_node, EngineError, EngineResult};
use crate::graph::NodeId;

/// Walk `parents` back from `destination` to `source` and return the path
/// in source-to-destination order.
///
/// Fails with [`EngineError::NoPathFound`] if the walk hits a node without a
/// parent, or takes more steps than there are nodes (the parent array then
/// contains a cycle that never reaches `source`).
pub fn reconstruct_path(
    source: NodeId,
    destination: NodeId,
    parents: &[Option<NodeId>],
) -> EngineResult<Vec<NodeId>> {
    let node_count = parents.len();
    check_node(source, node_count)?;
    check_node(destination, node_count)?;

    let no_path = || EngineError::NoPathFound {
        from: source,
        to: destination,
    };

    let mut path = vec![destination];
    let mut current = destination;
    while current != source {
        if path.len() > node_count {
            return Err(no_path());
        }
        current = parents[current.0].ok_or_else(no_path)?;
        check_node(current, node_count)?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}
