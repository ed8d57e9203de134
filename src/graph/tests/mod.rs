//! Graph module unit tests
//!
//! Matrix construction, edge lookup, loader parsing and generation.

use crate::graph::{parse_graph, random_graph, write_graph, Graph, GraphError, NodeId};

#[cfg(test)]
mod node_id_tests {
    use super::*;

    #[test]
    fn test_node_id_new() {
        let id = NodeId::new(3);
        assert_eq!(id.index(), 3);
        assert_eq!(id, NodeId(3));
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(format!("{}", NodeId(42)), "NodeId(42)");
    }

    #[test]
    fn test_node_id_conversions() {
        let id: NodeId = 7usize.into();
        let back: usize = id.into();
        assert_eq!(back, 7);
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    #[test]
    fn test_from_rows_square() {
        let graph = Graph::from_rows(vec![vec![0, 2], vec![0, 0]]).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert!(graph.edge_exists(NodeId(0), NodeId(1)));
        assert!(!graph.edge_exists(NodeId(1), NodeId(0)));
        assert_eq!(graph.weight(NodeId(0), NodeId(1)), 2);
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = Graph::from_rows(vec![vec![0, 1], vec![0]]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        ));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::from_rows(Vec::new()).unwrap();
        assert!(graph.is_empty());
        assert!(!graph.contains(NodeId(0)));
    }

    #[test]
    fn test_from_edges() {
        let graph = Graph::from_edges(3, &[(0, 1, 5), (1, 2, 1)]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(NodeId(0), NodeId(1)), 5);
        assert_eq!(graph.weight(NodeId(2), NodeId(0)), 0);
    }

    #[test]
    #[should_panic]
    fn test_from_edges_out_of_range() {
        Graph::from_edges(2, &[(0, 2, 1)]);
    }

    #[test]
    fn test_neighbors_in_order() {
        let graph = Graph::from_edges(4, &[(0, 3, 1), (0, 1, 7), (0, 2, 2)]);
        let neighbors: Vec<_> = graph.neighbors(NodeId(0)).collect();
        assert_eq!(
            neighbors,
            vec![(NodeId(1), 7), (NodeId(2), 2), (NodeId(3), 1)]
        );
        assert_eq!(graph.neighbors(NodeId(1)).count(), 0);
    }

    #[test]
    fn test_row() {
        let graph = Graph::from_edges(3, &[(1, 0, 4), (1, 2, 9)]);
        assert_eq!(graph.row(NodeId(1)), &[4, 0, 9]);
    }
}

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn test_parse_graph() {
        let graph = parse_graph("0 4 1\n0 0 0\n0 2 0\n").unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.weight(NodeId(0), NodeId(1)), 4);
        assert_eq!(graph.weight(NodeId(2), NodeId(1)), 2);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let graph = parse_graph("\n0 1\n\n  \n1 0\n\n").unwrap();
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_parse_extra_whitespace() {
        let graph = parse_graph("  0\t3 \n 0   0").unwrap();
        assert_eq!(graph.weight(NodeId(0), NodeId(1)), 3);
    }

    #[test]
    fn test_parse_malformed_token() {
        let err = parse_graph("0 1\n0 x\n").unwrap_err();
        match err {
            GraphError::MalformedInput { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_weight() {
        let err = parse_graph("0 -3\n0 0\n").unwrap_err();
        assert!(matches!(err, GraphError::NegativeWeight { row: 0, col: 1 }));
    }

    #[test]
    fn test_parse_overflowing_weight() {
        let err = parse_graph("0 99999999999\n0 0\n").unwrap_err();
        assert!(matches!(err, GraphError::MalformedInput { .. }));
    }

    #[test]
    fn test_parse_ragged_rows() {
        let err = parse_graph("0 1 2\n0 0\n0 0 0\n").unwrap_err();
        assert!(matches!(err, GraphError::NotSquare { row: 1, .. }));
    }

    #[test]
    fn test_parse_empty_input() {
        let graph = parse_graph("").unwrap();
        assert_eq!(graph.node_count(), 0);
    }
}

#[cfg(test)]
mod generate_tests {
    use super::*;

    #[test]
    fn test_random_graph_is_deterministic() {
        let a = random_graph(20, 0.3, 9, 7);
        let b = random_graph(20, 0.3, 9, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_graph_weights_in_range() {
        let graph = random_graph(15, 0.5, 4, 1);
        for node in graph.nodes() {
            assert_eq!(graph.weight(node, node), 0);
            for (_, w) in graph.neighbors(node) {
                assert!((1..=4).contains(&w));
            }
        }
    }

    #[test]
    fn test_random_graph_density_bounds() {
        assert_eq!(random_graph(10, 0.0, 5, 3).edge_count(), 0);
        assert_eq!(random_graph(10, 1.0, 5, 3).edge_count(), 90);
    }

    #[test]
    fn test_write_then_parse() {
        let graph = random_graph(8, 0.4, 20, 11);
        let mut buf = Vec::new();
        write_graph(&graph, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert_eq!(parse_graph(&text).unwrap(), graph);
    }
}
