//! Random dense graphs for benchmarks and tests

use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Graph, Weight};

/// Generate a graph where each off-diagonal edge exists with probability
/// `density` and carries a weight in `1..=max_weight`.
///
/// The same `seed` always yields the same graph.
pub fn random_graph(
    node_count: usize,
    density: f64,
    max_weight: Weight,
    seed: u64,
) -> Graph {
    let density = density.clamp(0.0, 1.0);
    let max_weight = max_weight.max(1);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut weights = vec![0; node_count * node_count];
    for from in 0..node_count {
        for to in 0..node_count {
            if from != to && rng.random_bool(density) {
                weights[from * node_count + to] = rng.random_range(1..=max_weight);
            }
        }
    }

    Graph {
        node_count,
        weights,
    }
}

/// Write `graph` in the loader's text format.
pub fn write_graph<W: Write>(
    graph: &Graph,
    out: &mut W,
) -> io::Result<()> {
    for node in graph.nodes() {
        let line = graph
            .row(node)
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
