//! Engine integration tests
//!
//! The documented scenarios, driven through the public API only.

use pargraph::engine::{
    dfs_parallel, dfs_parallel_locked, dfs_sequential, reconstruct_path, shortest_paths,
    shortest_paths_parallel, shortest_paths_sequential, EngineError, RelaxMode, Relaxation,
};
use pargraph::graph::{parse_graph, Graph, NodeId};

const SCENARIO: &str = "\
0 4 1 0 0
0 0 0 1 0
0 2 0 5 0
0 0 0 0 3
0 0 0 0 0
";

fn scenario() -> Graph {
    parse_graph(SCENARIO).unwrap()
}

#[test]
fn test_scenario_costs_and_parents() {
    let graph = scenario();
    let variants = [
        Relaxation::Sequential,
        Relaxation::Parallel {
            threads: 4,
            mode: RelaxMode::ReadThenWrite,
        },
        Relaxation::Parallel {
            threads: 4,
            mode: RelaxMode::Locked,
        },
    ];
    for variant in variants {
        let paths = shortest_paths(&graph, NodeId(0), variant).unwrap();
        assert_eq!(paths.raw_costs(), vec![0, 3, 1, 4, 7]);
        assert_eq!(paths.raw_parents(), vec![0, 2, 0, 1, 3]);
        assert_eq!(paths.source(), NodeId(0));
    }
}

#[test]
fn test_scenario_path_to_last_node() {
    let paths = shortest_paths_sequential(&scenario(), NodeId(0)).unwrap();
    let path = paths.path_to(NodeId(4)).unwrap();
    assert_eq!(
        path,
        vec![NodeId(0), NodeId(2), NodeId(1), NodeId(3), NodeId(4)]
    );

    // Same walk through the free function on the raw parent array
    assert_eq!(
        reconstruct_path(NodeId(0), NodeId(4), paths.parents()).unwrap(),
        path
    );
}

#[test]
fn test_disconnected_scenario() {
    let graph = parse_graph("0 5 0\n0 0 0\n0 0 0\n").unwrap();
    let paths = shortest_paths_parallel(&graph, NodeId(0), 2, RelaxMode::Locked).unwrap();
    assert_eq!(paths.raw_costs(), vec![0, 5, -1]);
    assert!(matches!(
        paths.path_to(NodeId(2)),
        Err(EngineError::NoPathFound { .. })
    ));

    for visited in [
        dfs_sequential(&graph, NodeId(0)).unwrap(),
        dfs_parallel(&graph, NodeId(0), 2).unwrap(),
        dfs_parallel_locked(&graph, NodeId(0), 2).unwrap(),
    ] {
        assert_eq!(visited.as_slice(), &[true, true, false]);
    }
}

#[test]
fn test_single_node() {
    let graph = parse_graph("0\n").unwrap();
    assert_eq!(dfs_sequential(&graph, NodeId(0)).unwrap().count(), 1);
    assert_eq!(dfs_parallel(&graph, NodeId(0), 4).unwrap().count(), 1);
    let paths = shortest_paths_sequential(&graph, NodeId(0)).unwrap();
    assert_eq!(paths.raw_costs(), vec![0]);
}

#[test]
fn test_graph_shared_across_threads() {
    let graph = scenario();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let graph = &graph;
                s.spawn(move || dfs_parallel_locked(graph, NodeId(i), 2).unwrap().count())
            })
            .collect();
        let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![5, 3, 4, 2]);
    });
}

#[test]
fn test_errors_fail_fast() {
    let graph = scenario();
    assert!(matches!(
        dfs_sequential(&graph, NodeId(99)),
        Err(EngineError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        shortest_paths_parallel(&graph, NodeId(5), 2, RelaxMode::ReadThenWrite),
        Err(EngineError::IndexOutOfRange { .. })
    ));
    let paths = shortest_paths_sequential(&graph, NodeId(0)).unwrap();
    assert!(matches!(
        paths.path_to(NodeId(5)),
        Err(EngineError::IndexOutOfRange { .. })
    ));
}
