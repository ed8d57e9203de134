//! Report sinks for the benchmark harness

use std::io::{self, Write};

use serde_json::json;

use super::{BenchRecord, GraphSummary};
use crate::util::timer::as_millis;

/// Receives the harness output.
///
/// Only [`ReportSink::record`] is required; the other hooks mark the
/// structure of the run.
pub trait ReportSink {
    /// Called once before anything runs.
    fn begin(
        &mut self,
        _graph: &GraphSummary,
    ) -> io::Result<()> {
        Ok(())
    }

    /// Called at the start of each repetition.
    fn begin_execution(
        &mut self,
        _execution: usize,
    ) -> io::Result<()> {
        Ok(())
    }

    /// Called before the parallel variants of one team size.
    fn begin_threads(
        &mut self,
        _threads: usize,
    ) -> io::Result<()> {
        Ok(())
    }

    /// Called after every timed run.
    fn record(
        &mut self,
        record: &BenchRecord,
    ) -> io::Result<()>;

    /// Called once after the last run.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Human-readable report.
///
/// ```text
/// Number of nodes: 5
///
///     Execution 1
/// Sequential DFS: 0ms
/// Using 2 threads...
/// Parallel DFS: 1ms
/// ```
#[derive(Debug)]
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn begin(
        &mut self,
        graph: &GraphSummary,
    ) -> io::Result<()> {
        writeln!(self.out, "Number of nodes: {}", graph.nodes)?;
        writeln!(self.out)
    }

    fn begin_execution(
        &mut self,
        execution: usize,
    ) -> io::Result<()> {
        writeln!(self.out, "\tExecution {}", execution)
    }

    fn begin_threads(
        &mut self,
        threads: usize,
    ) -> io::Result<()> {
        writeln!(self.out, "Using {} threads...", threads)
    }

    fn record(
        &mut self,
        record: &BenchRecord,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "{}: {}ms",
            record.variant.label(),
            as_millis(record.elapsed)
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// One JSON object per line for every record.
#[derive(Debug)]
pub struct JsonReport<W: Write> {
    out: W,
    graph: Option<GraphSummary>,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out, graph: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn begin(
        &mut self,
        graph: &GraphSummary,
    ) -> io::Result<()> {
        self.graph = Some(*graph);
        Ok(())
    }

    fn record(
        &mut self,
        record: &BenchRecord,
    ) -> io::Result<()> {
        let line = json!({
            "execution": record.execution,
            "variant": record.variant.label(),
            "threads": record.variant.threads(),
            "elapsed_ms": record.elapsed.as_secs_f64() * 1000.0,
            "reached": record.reached,
            "nodes": self.graph.map(|g| g.nodes),
        });
        serde_json::to_writer(&mut self.out, &line)?;
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub graph: Option<GraphSummary>,
    pub executions: Vec<usize>,
    pub thread_groups: Vec<usize>,
    pub records: Vec<BenchRecord>,
    pub finished: bool,
}

impl CollectReport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for CollectReport {
    fn begin(
        &mut self,
        graph: &GraphSummary,
    ) -> io::Result<()> {
        self.graph = Some(*graph);
        Ok(())
    }

    fn begin_execution(
        &mut self,
        execution: usize,
    ) -> io::Result<()> {
        self.executions.push(execution);
        Ok(())
    }

    fn begin_threads(
        &mut self,
        threads: usize,
    ) -> io::Result<()> {
        self.thread_groups.push(threads);
        Ok(())
    }

    fn record(
        &mut self,
        record: &BenchRecord,
    ) -> io::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}
