//! Traversal and shortest-path engine
//!
//! Every entry point takes a shared `&Graph` and a source node, validates the
//! source, allocates fresh state, runs to exhaustion of its worklist and
//! returns owned results. Nothing is shared between calls.
//!
//! # Synchronization
//!
//! The parallel variants use two independent lock domains:
//!
//! - [`Frontier`](frontier::Frontier): one coarse lock around the shared
//!   worklist;
//! - [`NodeLocks`](locks::NodeLocks): one lock per node around its visited
//!   flag or its cost/parent pair.
//!
//! A thread never holds more than one lock at a time, and every hold covers a
//! single read or write.
//!
//! # Entry points
//!
//! - [`traverse`] / [`dfs_sequential`], [`dfs_parallel`], [`dfs_parallel_locked`]
//! - [`shortest_paths`] / [`shortest_paths_sequential`], [`shortest_paths_parallel`]
//! - [`reconstruct_path`]

pub mod dfs;
pub mod error;
pub mod frontier;
pub mod locks;
pub mod path;
pub mod relax;
pub mod team;
pub mod visited;

pub use dfs::{
    dfs_parallel, dfs_parallel_locked, dfs_sequential, traverse, traverse_with_stats, DfsStats,
    Traversal,
};
pub use error::{EngineError, EngineResult};
pub use path::reconstruct_path;
pub use relax::{
    shortest_paths, shortest_paths_parallel, shortest_paths_sequential,
    shortest_paths_with_stats, Cost, RelaxMode, RelaxStats, Relaxation, ShortestPaths,
};
pub use visited::VisitedSet;
