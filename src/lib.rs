//! pargraph - parallel traversal and shortest paths on dense graphs
//!
//! A graph is a square adjacency matrix of non-negative weights (`0` means
//! "no edge"). On top of it the crate offers:
//!
//! - depth-first traversal: sequential, parallel with unsynchronized
//!   visited flags, and parallel with one lock per node;
//! - single-source shortest paths by label-correcting relaxation over a
//!   LIFO worklist, sequential or parallel;
//! - path reconstruction from parent pointers;
//! - a benchmark harness timing every variant over a sweep of team sizes.
//!
//! # Example
//!
//! ```
//! use pargraph::engine::{dfs_parallel_locked, shortest_paths_sequential};
//! use pargraph::graph::{Graph, NodeId};
//!
//! let graph = Graph::from_edges(3, &[(0, 1, 4), (0, 2, 1), (2, 1, 2)]);
//!
//! let visited = dfs_parallel_locked(&graph, NodeId(0), 2)?;
//! assert_eq!(visited.count(), 3);
//!
//! let paths = shortest_paths_sequential(&graph, NodeId(0))?;
//! assert_eq!(paths.cost(NodeId(1)), Some(3));
//! assert_eq!(paths.path_to(NodeId(1))?, vec![NodeId(0), NodeId(2), NodeId(1)]);
//! # Ok::<(), pargraph::engine::EngineError>(())
//! ```

#![doc(html_root_url = "https://docs.rs/pargraph")]
#![warn(rust_2018_idioms)]

pub mod bench;
pub mod engine;
pub mod graph;
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use engine::{EngineError, ShortestPaths, VisitedSet};
pub use graph::{Graph, GraphError, NodeId};

use std::path::Path;

use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "pargraph";

/// Load a graph file and run the benchmark suite, writing to `sink`.
pub fn bench_file(
    path: &Path,
    config: &util::config::BenchConfig,
    sink: &mut dyn bench::ReportSink,
) -> Result<Vec<bench::BenchRecord>> {
    debug!("Benchmarking {}", path.display());
    let graph = graph::load_graph(path)
        .with_context(|| format!("Failed to load graph: {}", path.display()))?;
    bench::run_suite(&graph, config, sink)
}
