//! Benchmark harness
//!
//! Runs every selected engine variant on one graph, sweeping the configured
//! team sizes, and hands each timing to a [`ReportSink`]. Each repetition
//! runs the sequential variants once, then every parallel variant per team
//! size.

pub mod report;

pub use report::{CollectReport, JsonReport, ReportSink, TextReport};

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::engine::{shortest_paths, traverse, EngineResult, RelaxMode, Relaxation, Traversal};
use crate::graph::{Graph, NodeId};
use crate::util::config::BenchConfig;
use crate::util::timer::measure;

/// One engine configuration to time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Traversal(Traversal),
    Relaxation(Relaxation),
}

impl Variant {
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Traversal(t) => t.label(),
            Variant::Relaxation(r) => r.label(),
        }
    }

    pub fn threads(&self) -> usize {
        match self {
            Variant::Traversal(t) => t.threads(),
            Variant::Relaxation(r) => r.threads(),
        }
    }

    pub fn is_parallel(&self) -> bool {
        !matches!(
            self,
            Variant::Traversal(Traversal::Sequential) | Variant::Relaxation(Relaxation::Sequential)
        )
    }

    /// Run once from `source`; returns the number of nodes visited or reached.
    pub fn run(
        &self,
        graph: &Graph,
        source: NodeId,
    ) -> EngineResult<usize> {
        match *self {
            Variant::Traversal(t) => traverse(graph, source, t).map(|v| v.count()),
            Variant::Relaxation(r) => shortest_paths(graph, source, r).map(|p| p.reached_count()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Variant::Traversal(t) => fmt::Display::fmt(t, f),
            Variant::Relaxation(r) => fmt::Display::fmt(r, f),
        }
    }
}

/// Size of the graph under test, reported once per suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
}

impl GraphSummary {
    pub fn of(graph: &Graph) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        }
    }
}

/// One timed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRecord {
    /// 1-based repetition number
    pub execution: usize,
    pub variant: Variant,
    pub elapsed: Duration,
    /// Nodes visited (traversals) or reached (relaxations)
    pub reached: usize,
}

/// Variants one repetition runs at team size `threads`, in report order.
pub fn parallel_variants(
    config: &BenchConfig,
    threads: usize,
) -> Vec<Variant> {
    let selection = &config.variants;
    let mut variants = Vec::new();
    if selection.dfs_parallel {
        variants.push(Variant::Traversal(Traversal::Parallel { threads }));
    }
    if selection.dfs_parallel_locked {
        variants.push(Variant::Traversal(Traversal::ParallelLocked { threads }));
    }
    if selection.relax_parallel {
        variants.push(Variant::Relaxation(Relaxation::Parallel {
            threads,
            mode: RelaxMode::ReadThenWrite,
        }));
    }
    if selection.relax_parallel_locked {
        variants.push(Variant::Relaxation(Relaxation::Parallel {
            threads,
            mode: RelaxMode::Locked,
        }));
    }
    variants
}

/// Sequential variants one repetition runs first.
pub fn sequential_variants(config: &BenchConfig) -> Vec<Variant> {
    let mut variants = Vec::new();
    if config.variants.dfs {
        variants.push(Variant::Traversal(Traversal::Sequential));
    }
    if config.variants.relax {
        variants.push(Variant::Relaxation(Relaxation::Sequential));
    }
    variants
}

/// Time one variant and report it.
pub fn run_variant(
    graph: &Graph,
    source: NodeId,
    variant: Variant,
    execution: usize,
    sink: &mut dyn ReportSink,
) -> Result<BenchRecord> {
    let (reached, elapsed) = measure(|| variant.run(graph, source));
    let reached = reached.with_context(|| format!("{} failed", variant))?;
    let record = BenchRecord {
        execution,
        variant,
        elapsed,
        reached,
    };
    info!(
        "{}: {:?} ({} nodes reached)",
        record.variant, record.elapsed, record.reached
    );
    sink.record(&record).context("Failed to write report")?;
    Ok(record)
}

/// Run the configured suite on `graph` and report to `sink`.
pub fn run_suite(
    graph: &Graph,
    config: &BenchConfig,
    sink: &mut dyn ReportSink,
) -> Result<Vec<BenchRecord>> {
    config.validate()?;
    let source = NodeId(config.source);
    let mut records = Vec::new();

    sink.begin(&GraphSummary::of(graph))
        .context("Failed to write report")?;

    for execution in 1..=config.repetitions {
        sink.begin_execution(execution)
            .context("Failed to write report")?;

        for variant in sequential_variants(config) {
            records.push(run_variant(graph, source, variant, execution, sink)?);
        }

        for &threads in &config.thread_counts {
            let variants = parallel_variants(config, threads);
            if variants.is_empty() {
                continue;
            }
            sink.begin_threads(threads)
                .context("Failed to write report")?;
            for variant in variants {
                records.push(run_variant(graph, source, variant, execution, sink)?);
            }
        }
    }

    sink.finish().context("Failed to write report")?;
    Ok(records)
}
