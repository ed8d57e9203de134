//! Per-node locks
//!
//! One `parking_lot::Mutex` per node. Every access takes exactly one lock
//! and releases it before the next, so two node locks are never held at the
//! same time and lock ordering never comes into play.

use parking_lot::Mutex;

use crate::graph::NodeId;

/// An indexed array of independent locks, one per node.
///
/// Created together with the per-call traversal state and dropped with it.
#[derive(Debug)]
pub struct NodeLocks<T> {
    slots: Vec<Mutex<T>>,
}

impl<T: Clone> NodeLocks<T> {
    /// Create `node_count` locks, each guarding a copy of `init`.
    pub fn new(
        node_count: usize,
        init: T,
    ) -> Self {
        Self {
            slots: (0..node_count).map(|_| Mutex::new(init.clone())).collect(),
        }
    }
}

impl<T: Copy> NodeLocks<T> {
    /// Read `node`'s value in one critical section.
    #[inline]
    pub fn read(
        &self,
        node: NodeId,
    ) -> T {
        *self.slots[node.0].lock()
    }

    /// Overwrite `node`'s value in one critical section.
    #[inline]
    pub fn write(
        &self,
        node: NodeId,
        value: T,
    ) {
        *self.slots[node.0].lock() = value;
    }
}

impl<T> NodeLocks<T> {
    /// Run `f` on `node`'s value while holding its lock.
    #[inline]
    pub fn with<R>(
        &self,
        node: NodeId,
        f: impl FnOnce(&mut T) -> R,
    ) -> R {
        f(&mut self.slots[node.0].lock())
    }

    /// Number of locks.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no locks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Consume the locks and return the guarded values in node order.
    pub fn into_inner(self) -> Vec<T> {
        self.slots.into_iter().map(Mutex::into_inner).collect()
    }
}
