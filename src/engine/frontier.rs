//! Shared worklist
//!
//! A LIFO stack of pending nodes behind a single coarse lock. Pushes from a
//! thread team happen in one critical section per member, so a member's
//! whole buffer lands contiguously.
//!
//! The stack is not deduplicated: a node may be pending several times.
//! Visitation or cost state decides whether popping it does any work.

use parking_lot::Mutex;

use crate::graph::NodeId;

/// Order-agnostic stack of node ids shared by a thread team.
#[derive(Debug, Default)]
pub struct Frontier {
    stack: Mutex<Vec<NodeId>>,
}

impl Frontier {
    /// Create a frontier holding only `seed`.
    pub fn seeded(seed: NodeId) -> Self {
        Self {
            stack: Mutex::new(vec![seed]),
        }
    }

    /// Push one node.
    #[inline]
    pub fn push(
        &self,
        node: NodeId,
    ) {
        self.stack.lock().push(node);
    }

    /// Append a batch of nodes in one critical section.
    pub fn extend<I>(
        &self,
        nodes: I,
    ) where
        I: IntoIterator<Item = NodeId>,
    {
        let mut nodes = nodes.into_iter().peekable();
        if nodes.peek().is_none() {
            return;
        }
        self.stack.lock().extend(nodes);
    }

    /// Pop the most recently pushed node.
    #[inline]
    pub fn pop(&self) -> Option<NodeId> {
        self.stack.lock().pop()
    }

    /// Number of pending entries (duplicates included).
    pub fn len(&self) -> usize {
        self.stack.lock().len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.stack.lock().is_empty()
    }
}
