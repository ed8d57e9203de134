//! Benchmark harness integration tests

use std::fs;

use pargraph::bench::{CollectReport, TextReport};
use pargraph::bench_file;
use pargraph::graph::{random_graph, write_graph};
use pargraph::util::config::{load_config, BenchConfig};

#[test]
fn test_bench_file_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    let mut file = fs::File::create(&path).unwrap();
    write_graph(&random_graph(24, 0.2, 9, 4), &mut file).unwrap();
    drop(file);

    let config = BenchConfig {
        thread_counts: vec![1, 2],
        ..BenchConfig::default()
    };
    let mut report = TextReport::new(Vec::new());
    let records = bench_file(&path, &config, &mut report).unwrap();
    assert_eq!(records.len(), 10);

    let text = String::from_utf8(report.into_inner()).unwrap();
    assert!(text.starts_with("Number of nodes: 24\n"));
    assert!(text.contains("\tExecution 1\n"));
    assert!(text.contains("Using 2 threads...\n"));
    assert_eq!(text.matches("Parallel locked relaxation: ").count(), 2);
}

#[test]
fn test_bench_file_missing_graph() {
    let dir = tempfile::tempdir().unwrap();
    let err = bench_file(
        &dir.path().join("missing.txt"),
        &BenchConfig::default(),
        &mut CollectReport::new(),
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("does not exist"));
}

#[test]
fn test_config_file_drives_suite() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("pargraph.toml");
    fs::write(
        &config_path,
        "thread_counts = [3]\nrepetitions = 2\n\n[variants]\ndfs_parallel = false\nrelax_parallel = false\n",
    )
    .unwrap();
    let graph_path = dir.path().join("input.txt");
    fs::write(&graph_path, "0 1\n1 0\n").unwrap();

    let config = load_config(&config_path).unwrap();
    let mut sink = CollectReport::new();
    let records = bench_file(&graph_path, &config, &mut sink).unwrap();

    // 2 sequential + 2 parallel, twice
    assert_eq!(records.len(), 8);
    assert_eq!(sink.thread_groups, vec![3, 3]);
    assert!(records.iter().all(|r| r.reached == 2));
}
