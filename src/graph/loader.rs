//! Text matrix loader
//!
//! One matrix row per line, whitespace-separated non-negative integers.
//! Blank lines are ignored, so a trailing newline does not add a row.
//!
//! ```text
//! 0 4 1
//! 0 0 0
//! 0 2 0
//! ```

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::{Graph, GraphError, GraphResult, Weight};

/// Read and validate a graph from `path`.
pub fn load_graph(path: &Path) -> GraphResult<Graph> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GraphError::FileNotFound(path.to_path_buf()),
        _ => GraphError::Io(e),
    })?;
    let graph = parse_graph(&content)?;
    debug!(
        "Loaded {} ({} nodes, {} edges)",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parse a graph from matrix text.
pub fn parse_graph(content: &str) -> GraphResult<Graph> {
    let mut rows: Vec<Vec<Weight>> = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = rows.len();
        let entries = line
            .split_whitespace()
            .enumerate()
            .map(|(col, token)| parse_weight(token, line_idx + 1, row, col))
            .collect::<GraphResult<Vec<_>>>()?;
        rows.push(entries);
    }

    Graph::from_rows(rows)
}

fn parse_weight(
    token: &str,
    line: usize,
    row: usize,
    col: usize,
) -> GraphResult<Weight> {
    let malformed = || GraphError::MalformedInput {
        line,
        token: token.to_string(),
    };
    let value: i64 = token.parse().map_err(|_| malformed())?;
    if value < 0 {
        return Err(GraphError::NegativeWeight { row, col });
    }
    Weight::try_from(value).map_err(|_| malformed())
}
