//! Property tests using proptest
//!
//! Random dense graphs; every parallel variant is checked against the
//! sequential one.

use pargraph::engine::{
    dfs_parallel, dfs_parallel_locked, dfs_sequential, shortest_paths_parallel,
    shortest_paths_sequential, RelaxMode,
};
use pargraph::graph::{Graph, NodeId};
use proptest::prelude::*;

/// Strategy for a graph with 1..20 nodes, about a quarter of entries set,
/// plus a valid source node.
fn graph_and_source() -> impl Strategy<Value = (Graph, NodeId)> {
    (1usize..20).prop_flat_map(|n| {
        let weight = prop_oneof![3 => Just(0u32), 1 => 1u32..20];
        (
            prop::collection::vec(weight, n * n),
            0..n,
        )
            .prop_map(move |(weights, source)| {
                let rows = weights.chunks(n).map(|row| row.to_vec()).collect();
                (Graph::from_rows(rows).unwrap(), NodeId(source))
            })
    })
}

/// Nodes reachable from `source`, computed independently of the engine.
fn reachable(
    graph: &Graph,
    source: NodeId,
) -> Vec<bool> {
    let mut seen = vec![false; graph.node_count()];
    let mut stack = vec![source];
    seen[source.0] = true;
    while let Some(node) = stack.pop() {
        for (next, _) in graph.neighbors(node) {
            if !seen[next.0] {
                seen[next.0] = true;
                stack.push(next);
            }
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn traversals_visit_reachable_set(
        (graph, source) in graph_and_source(),
        threads in 1usize..6,
    ) {
        let expected = reachable(&graph, source);
        let sequential = dfs_sequential(&graph, source).unwrap();
        prop_assert_eq!(sequential.as_slice(), expected.as_slice());
        let parallel = dfs_parallel(&graph, source, threads).unwrap();
        prop_assert_eq!(parallel.as_slice(), expected.as_slice());
        let locked = dfs_parallel_locked(&graph, source, threads).unwrap();
        prop_assert_eq!(locked.as_slice(), expected.as_slice());
    }

    #[test]
    fn traversal_is_idempotent(
        (graph, source) in graph_and_source(),
        threads in 1usize..6,
    ) {
        let first = dfs_parallel(&graph, source, threads).unwrap();
        let second = dfs_parallel(&graph, source, threads).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn locked_relaxation_matches_sequential(
        (graph, source) in graph_and_source(),
        threads in 1usize..6,
    ) {
        let expected = shortest_paths_sequential(&graph, source).unwrap();
        let locked = shortest_paths_parallel(&graph, source, threads, RelaxMode::Locked).unwrap();
        prop_assert_eq!(locked.costs(), expected.costs());
    }

    #[test]
    fn relaxation_reaches_reachable_set(
        (graph, source) in graph_and_source(),
        threads in 1usize..6,
    ) {
        let expected = reachable(&graph, source);
        let best_effort =
            shortest_paths_parallel(&graph, source, threads, RelaxMode::ReadThenWrite).unwrap();
        for node in graph.nodes() {
            prop_assert_eq!(best_effort.is_reached(node), expected[node.0]);
        }
    }

    #[test]
    fn reconstructed_paths_sum_to_cost((graph, source) in graph_and_source()) {
        let paths = shortest_paths_sequential(&graph, source).unwrap();
        for node in graph.nodes() {
            match paths.cost(node) {
                Some(cost) => {
                    let path = paths.path_to(node).unwrap();
                    prop_assert_eq!(path.first().copied(), Some(source));
                    prop_assert_eq!(path.last().copied(), Some(node));
                    let total: u64 = path
                        .windows(2)
                        .map(|pair| u64::from(graph.weight(pair[0], pair[1])))
                        .sum();
                    prop_assert_eq!(total, cost);
                }
                None => prop_assert!(paths.path_to(node).is_err()),
            }
        }
    }
}
