//! Loader integration tests
//!
//! Reads matrices from real files on disk.

use std::fs;

use pargraph::graph::{load_graph, random_graph, write_graph, GraphError, NodeId};

#[test]
fn test_load_graph_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "0 4 1 0 0\n0 0 0 1 0\n0 2 0 5 0\n0 0 0 0 3\n0 0 0 0 0\n").unwrap();

    let graph = load_graph(&path).unwrap();
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.weight(NodeId(3), NodeId(4)), 3);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    match load_graph(&path) {
        Err(GraphError::FileNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "0 1\n1 one\n").unwrap();
    let err = load_graph(&path).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_non_square_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ragged.txt");
    fs::write(&path, "0 1 1\n1 0 1\n").unwrap();
    assert!(matches!(
        load_graph(&path),
        Err(GraphError::NotSquare { .. })
    ));
}

#[test]
fn test_generated_file_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gen.txt");
    let graph = random_graph(32, 0.2, 15, 99);
    let mut file = fs::File::create(&path).unwrap();
    write_graph(&graph, &mut file).unwrap();
    drop(file);

    assert_eq!(load_graph(&path).unwrap(), graph);
}
