//! Label-correcting single-source shortest paths
//!
//! This is not a priority-queue Dijkstra. A LIFO worklist is seeded with the
//! source; popping `current` relaxes every edge `current -> next`, and any
//! `next` whose cost improves is pushed again, even if it is already
//! pending. Nodes can therefore be re-relaxed many times and the worst case
//! is exponential in the number of nodes, unlike the `O(V^2)` of a heap
//! based label-setting method on a dense matrix. It is correct for
//! non-negative weights and always terminates, since costs only decrease and
//! are bounded below by zero.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, trace};

use super::error::{check_node, EngineResult};
use super::frontier::Frontier;
use super::locks::NodeLocks;
use super::path::reconstruct_path;
use super::team::ThreadTeam;
use crate::graph::{Graph, NodeId};

/// Accumulated path cost.
pub type Cost = u64;

/// How the parallel relaxation updates a neighbor's cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxMode {
    /// Read the neighbor's cost in one critical section and write it in a
    /// second one. Another member may relax the same node in between, so an
    /// improvement can be overwritten by a worse cost. Best-effort.
    ReadThenWrite,
    /// Compare and write inside a single critical section. Never loses an
    /// improvement; agrees with the sequential costs.
    Locked,
}

/// Which shortest-path computation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// Single-threaded relaxation.
    Sequential,
    /// Neighbor scans split over a thread team.
    Parallel { threads: usize, mode: RelaxMode },
}

impl Relaxation {
    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Relaxation::Sequential => "Sequential relaxation",
            Relaxation::Parallel {
                mode: RelaxMode::ReadThenWrite,
                ..
            } => "Parallel relaxation",
            Relaxation::Parallel {
                mode: RelaxMode::Locked,
                ..
            } => "Parallel locked relaxation",
        }
    }

    /// Team size, `1` for the sequential variant.
    pub fn threads(&self) -> usize {
        match *self {
            Relaxation::Sequential => 1,
            Relaxation::Parallel { threads, .. } => threads,
        }
    }
}

impl fmt::Display for Relaxation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Relaxation::Sequential => write!(f, "{}", self.label()),
            _ => write!(f, "{} [{} threads]", self.label(), self.threads()),
        }
    }
}

/// Work counters for one relaxation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelaxStats {
    /// Worklist entries popped.
    pub pops: usize,
    /// Successful cost updates (each one pushes a node).
    pub relaxations: usize,
}

/// Cost and parent of one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Label {
    cost: Option<Cost>,
    parent: Option<NodeId>,
}

impl Label {
    fn reached(
        cost: Cost,
        parent: NodeId,
    ) -> Self {
        Self {
            cost: Some(cost),
            parent: Some(parent),
        }
    }
}

#[inline]
fn improves(
    candidate: Cost,
    current: Option<Cost>,
) -> bool {
    current.map_or(true, |cost| candidate < cost)
}

/// Costs and parent pointers from one source.
///
/// `cost(v)` is `None` exactly when `parent(v)` is `None`: the node was
/// never reached. The source is its own parent with cost `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: NodeId,
    costs: Vec<Option<Cost>>,
    parents: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    fn from_labels(
        source: NodeId,
        labels: Vec<Label>,
    ) -> Self {
        let (costs, parents) = labels.into_iter().map(|l| (l.cost, l.parent)).unzip();
        Self {
            source,
            costs,
            parents,
        }
    }

    /// The node the costs are measured from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Cost of the best path found to `node`, `None` if unreached.
    #[inline]
    pub fn cost(
        &self,
        node: NodeId,
    ) -> Option<Cost> {
        self.costs[node.0]
    }

    /// Predecessor of `node` on the best path found.
    #[inline]
    pub fn parent(
        &self,
        node: NodeId,
    ) -> Option<NodeId> {
        self.parents[node.0]
    }

    /// Whether `node` was reached.
    #[inline]
    pub fn is_reached(
        &self,
        node: NodeId,
    ) -> bool {
        self.costs[node.0].is_some()
    }

    /// Number of reached nodes, the source included.
    pub fn reached_count(&self) -> usize {
        self.costs.iter().filter(|c| c.is_some()).count()
    }

    pub fn costs(&self) -> &[Option<Cost>] {
        &self.costs
    }

    pub fn parents(&self) -> &[Option<NodeId>] {
        &self.parents
    }

    /// Costs with `-1` for unreached nodes.
    pub fn raw_costs(&self) -> Vec<i64> {
        self.costs
            .iter()
            .map(|c| c.map_or(-1, |c| i64::try_from(c).unwrap_or(i64::MAX)))
            .collect()
    }

    /// Parents with `-1` for unreached nodes.
    pub fn raw_parents(&self) -> Vec<i64> {
        self.parents
            .iter()
            .map(|p| p.map_or(-1, |p| p.0 as i64))
            .collect()
    }

    /// Nodes on the best path from the source to `destination`.
    pub fn path_to(
        &self,
        destination: NodeId,
    ) -> EngineResult<Vec<NodeId>> {
        reconstruct_path(self.source, destination, &self.parents)
    }
}

/// Run the selected shortest-path computation from `source`.
pub fn shortest_paths(
    graph: &Graph,
    source: NodeId,
    variant: Relaxation,
) -> EngineResult<ShortestPaths> {
    shortest_paths_with_stats(graph, source, variant).map(|(paths, _)| paths)
}

/// Like [`shortest_paths`], also returning the work counters.
pub fn shortest_paths_with_stats(
    graph: &Graph,
    source: NodeId,
    variant: Relaxation,
) -> EngineResult<(ShortestPaths, RelaxStats)> {
    check_node(source, graph.node_count())?;
    let (paths, stats) = match variant {
        Relaxation::Sequential => sequential(graph, source),
        Relaxation::Parallel { threads, mode } => {
            parallel(graph, source, &ThreadTeam::new(threads)?, mode)
        }
    };
    debug!(
        "{} from {}: reached {}/{} nodes, {} pops, {} relaxations",
        variant,
        source,
        paths.reached_count(),
        graph.node_count(),
        stats.pops,
        stats.relaxations
    );
    Ok((paths, stats))
}

/// Sequential label-correcting relaxation from `source`.
pub fn shortest_paths_sequential(
    graph: &Graph,
    source: NodeId,
) -> EngineResult<ShortestPaths> {
    shortest_paths(graph, source, Relaxation::Sequential)
}

/// Parallel label-correcting relaxation from `source`.
///
/// With [`RelaxMode::ReadThenWrite`] the result is best-effort: costs can
/// end up higher than optimal when two updates to one node interleave.
pub fn shortest_paths_parallel(
    graph: &Graph,
    source: NodeId,
    threads: usize,
    mode: RelaxMode,
) -> EngineResult<ShortestPaths> {
    shortest_paths(graph, source, Relaxation::Parallel { threads, mode })
}

fn sequential(
    graph: &Graph,
    source: NodeId,
) -> (ShortestPaths, RelaxStats) {
    let mut labels = vec![Label::default(); graph.node_count()];
    labels[source.0] = Label::reached(0, source);
    let mut stack = vec![source];
    let mut stats = RelaxStats::default();

    while let Some(current) = stack.pop() {
        stats.pops += 1;
        let Some(base) = labels[current.0].cost else {
            continue;
        };
        for (next, weight) in graph.neighbors(current) {
            let candidate = base + Cost::from(weight);
            if improves(candidate, labels[next.0].cost) {
                trace!("relax {} -> {} = {}", current, next, candidate);
                labels[next.0] = Label::reached(candidate, current);
                stack.push(next);
                stats.relaxations += 1;
            }
        }
    }

    (ShortestPaths::from_labels(source, labels), stats)
}

fn parallel(
    graph: &Graph,
    source: NodeId,
    team: &ThreadTeam,
    mode: RelaxMode,
) -> (ShortestPaths, RelaxStats) {
    let node_count = graph.node_count();
    let labels = NodeLocks::new(node_count, Label::default());
    labels.write(source, Label::reached(0, source));
    let frontier = Frontier::seeded(source);
    let relaxations = AtomicUsize::new(0);
    let mut pops = 0;

    while let Some(current) = frontier.pop() {
        pops += 1;
        let row = graph.row(current);
        team.for_each_slice(node_count, |slice| {
            for next in slice {
                let weight = row[next];
                if weight == 0 {
                    continue;
                }
                let next = NodeId(next);
                let Some(base) = labels.read(current).cost else {
                    continue;
                };
                let candidate = base + Cost::from(weight);

                let written = match mode {
                    RelaxMode::ReadThenWrite => {
                        if improves(candidate, labels.read(next).cost) {
                            labels.write(next, Label::reached(candidate, current));
                            true
                        } else {
                            false
                        }
                    }
                    RelaxMode::Locked => labels.with(next, |label| {
                        if improves(candidate, label.cost) {
                            *label = Label::reached(candidate, current);
                            true
                        } else {
                            false
                        }
                    }),
                };

                if written {
                    relaxations.fetch_add(1, Ordering::Relaxed);
                    frontier.push(next);
                }
            }
        });
    }

    let stats = RelaxStats {
        pops,
        relaxations: relaxations.into_inner(),
    };
    (ShortestPaths::from_labels(source, labels.into_inner()), stats)
}
