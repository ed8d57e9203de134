//! Depth-first traversal
//!
//! All three variants share one outer loop: pop the most recent node from
//! the worklist, skip it if already visited, otherwise mark it and push its
//! unvisited neighbors. The worklist is LIFO, so the visiting order is
//! depth-first.
//!
//! The parallel variants split each neighbor scan over a [`ThreadTeam`].
//! They differ only in how the visited flags are accessed:
//!
//! | Variant | Flag access | Duplicate pushes |
//! |---------|-------------|------------------|
//! | [`dfs_sequential`] | plain | never |
//! | [`dfs_parallel`] | relaxed atomics, no lock | possible, harmless |
//! | [`dfs_parallel_locked`] | one node lock per access | only across pops |

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::error::{check_node, EngineResult};
use super::frontier::Frontier;
use super::locks::NodeLocks;
use super::team::ThreadTeam;
use super::visited::{SharedVisited, VisitedSet};
use crate::graph::{Graph, NodeId};

/// Thread-local scan buffer; most rows of a dense graph slice fit inline.
type ScanBuffer = SmallVec<[NodeId; 32]>;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Single-threaded DFS.
    Sequential,
    /// Parallel scan with unsynchronized visited reads.
    Parallel { threads: usize },
    /// Parallel scan with a lock per visited flag.
    ParallelLocked { threads: usize },
}

impl Traversal {
    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Traversal::Sequential => "Sequential DFS",
            Traversal::Parallel { .. } => "Parallel DFS",
            Traversal::ParallelLocked { .. } => "Parallel locked DFS",
        }
    }

    /// Team size, `1` for the sequential variant.
    pub fn threads(&self) -> usize {
        match *self {
            Traversal::Sequential => 1,
            Traversal::Parallel { threads } | Traversal::ParallelLocked { threads } => threads,
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Traversal::Sequential => write!(f, "{}", self.label()),
            _ => write!(f, "{} [{} threads]", self.label(), self.threads()),
        }
    }
}

/// Work counters for one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DfsStats {
    /// Nodes popped and expanded (marked visited by this pop).
    pub expanded: usize,
    /// Entries pushed onto the worklist, duplicates included.
    pub pushed: usize,
}

/// Run the selected traversal from `source`.
pub fn traverse(
    graph: &Graph,
    source: NodeId,
    variant: Traversal,
) -> EngineResult<VisitedSet> {
    traverse_with_stats(graph, source, variant).map(|(visited, _)| visited)
}

/// Like [`traverse`], also returning the work counters.
pub fn traverse_with_stats(
    graph: &Graph,
    source: NodeId,
    variant: Traversal,
) -> EngineResult<(VisitedSet, DfsStats)> {
    check_node(source, graph.node_count())?;
    let result = match variant {
        Traversal::Sequential => Ok(sequential(graph, source)),
        Traversal::Parallel { threads } => parallel(graph, source, &ThreadTeam::new(threads)?),
        Traversal::ParallelLocked { threads } => {
            parallel_locked(graph, source, &ThreadTeam::new(threads)?)
        }
    }?;
    debug!(
        "{} from {}: visited {}/{} nodes, expanded {}, pushed {}",
        variant,
        source,
        result.0.count(),
        graph.node_count(),
        result.1.expanded,
        result.1.pushed
    );
    Ok(result)
}

/// Sequential DFS from `source`.
pub fn dfs_sequential(
    graph: &Graph,
    source: NodeId,
) -> EngineResult<VisitedSet> {
    traverse(graph, source, Traversal::Sequential)
}

/// Parallel DFS whose neighbor scan reads visited flags without locking.
///
/// Two members can both see a neighbor as unvisited and both push it. The
/// outer loop's visited check drops the second copy before expansion, so
/// every reachable node is still visited exactly once; only extra pushes
/// are wasted.
pub fn dfs_parallel(
    graph: &Graph,
    source: NodeId,
    threads: usize,
) -> EngineResult<VisitedSet> {
    traverse(graph, source, Traversal::Parallel { threads })
}

/// Parallel DFS that takes a node's lock for every visited-flag access.
///
/// Each node is expanded at most once.
pub fn dfs_parallel_locked(
    graph: &Graph,
    source: NodeId,
    threads: usize,
) -> EngineResult<VisitedSet> {
    traverse(graph, source, Traversal::ParallelLocked { threads })
}

fn sequential(
    graph: &Graph,
    source: NodeId,
) -> (VisitedSet, DfsStats) {
    let mut visited = VisitedSet::new(graph.node_count());
    let mut stack = vec![source];
    let mut stats = DfsStats::default();

    while let Some(node) = stack.pop() {
        if !visited.mark(node) {
            continue;
        }
        trace!("expand {}", node);
        stats.expanded += 1;
        for (next, _) in graph.neighbors(node) {
            if !visited.is_visited(next) {
                stack.push(next);
                stats.pushed += 1;
            }
        }
    }

    (visited, stats)
}

fn parallel(
    graph: &Graph,
    source: NodeId,
    team: &ThreadTeam,
) -> EngineResult<(VisitedSet, DfsStats)> {
    let node_count = graph.node_count();
    let visited = SharedVisited::new(node_count);
    let frontier = Frontier::seeded(source);
    let pushed = AtomicUsize::new(0);
    let mut expanded = 0;

    while let Some(node) = frontier.pop() {
        if visited.is_visited(node) {
            continue;
        }
        visited.mark(node);
        expanded += 1;
        trace!("expand {}", node);

        let row = graph.row(node);
        team.for_each_slice(node_count, |slice| {
            let mut local = ScanBuffer::new();
            for next in slice {
                if row[next] > 0 && !visited.is_visited(NodeId(next)) {
                    local.push(NodeId(next));
                }
            }
            pushed.fetch_add(local.len(), Ordering::Relaxed);
            frontier.extend(local);
        });
    }

    let stats = DfsStats {
        expanded,
        pushed: pushed.into_inner(),
    };
    Ok((visited.into_visited_set(), stats))
}

fn parallel_locked(
    graph: &Graph,
    source: NodeId,
    team: &ThreadTeam,
) -> EngineResult<(VisitedSet, DfsStats)> {
    let node_count = graph.node_count();
    let locks = NodeLocks::new(node_count, false);
    let frontier = Frontier::seeded(source);
    let pushed = AtomicUsize::new(0);
    let mut expanded = 0;

    while let Some(node) = frontier.pop() {
        // Check and set are two critical sections on the same lock.
        if locks.read(node) {
            continue;
        }
        locks.write(node, true);
        expanded += 1;
        trace!("expand {}", node);

        let row = graph.row(node);
        team.for_each_slice(node_count, |slice| {
            let mut local = ScanBuffer::new();
            for next in slice {
                if row[next] > 0 && !locks.read(NodeId(next)) {
                    local.push(NodeId(next));
                }
            }
            pushed.fetch_add(local.len(), Ordering::Relaxed);
            frontier.extend(local);
        });
    }

    let stats = DfsStats {
        expanded,
        pushed: pushed.into_inner(),
    };
    Ok((VisitedSet::from(locks.into_inner()), stats))
}
