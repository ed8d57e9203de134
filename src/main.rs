//! pargraph - CLI

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pargraph::bench::{JsonReport, ReportSink, TextReport};
use pargraph::engine::{shortest_paths, traverse, RelaxMode, Relaxation, Traversal};
use pargraph::graph::{load_graph, random_graph, write_graph, Graph, NodeId};
use pargraph::util::config::{load_config, BenchConfig, DEFAULT_CONFIG_FILE};
use pargraph::util::logger::{self, LogLevel};
use pargraph::{bench_file, NAME, VERSION};

/// Parallel DFS and label-correcting shortest paths on dense graphs
#[derive(Parser, Debug)]
#[command(name = "pargraph")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time every traversal and shortest-path variant on a graph file
    Bench {
        /// Adjacency matrix file
        #[arg(value_name = "FILE", default_value = "input.txt")]
        file: PathBuf,

        /// Config file (defaults to ./pargraph.toml when present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Team sizes to sweep, comma separated
        #[arg(short, long, value_delimiter = ',')]
        threads: Option<Vec<usize>>,

        /// Source node
        #[arg(short, long)]
        source: Option<usize>,

        /// Number of repetitions
        #[arg(short, long)]
        repetitions: Option<usize>,

        /// Emit one JSON object per run instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the nodes reachable from a source
    Traverse {
        #[arg(value_name = "FILE", default_value = "input.txt")]
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = TraversalKind::Sequential)]
        variant: TraversalKind,

        #[arg(short, long, default_value_t = 4)]
        threads: usize,

        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },

    /// Print costs and parents from a source (-1 = unreached)
    Paths {
        #[arg(value_name = "FILE", default_value = "input.txt")]
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = RelaxationKind::Sequential)]
        variant: RelaxationKind,

        #[arg(short, long, default_value_t = 4)]
        threads: usize,

        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },

    /// Print the cheapest path found from a source to a destination
    Path {
        #[arg(value_name = "FILE", default_value = "input.txt")]
        file: PathBuf,

        /// Destination node
        #[arg(long)]
        to: usize,

        #[arg(long, value_enum, default_value_t = RelaxationKind::Sequential)]
        variant: RelaxationKind,

        #[arg(short, long, default_value_t = 4)]
        threads: usize,

        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },

    /// Write a random adjacency matrix
    Generate {
        /// Number of nodes
        #[arg(value_name = "NODES")]
        nodes: usize,

        /// Probability of each edge
        #[arg(short, long, default_value_t = 0.1)]
        density: f64,

        /// Largest edge weight
        #[arg(short, long, default_value_t = 10)]
        max_weight: u32,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TraversalKind {
    Sequential,
    Parallel,
    Locked,
}

impl TraversalKind {
    fn with_threads(
        self,
        threads: usize,
    ) -> Traversal {
        match self {
            TraversalKind::Sequential => Traversal::Sequential,
            TraversalKind::Parallel => Traversal::Parallel { threads },
            TraversalKind::Locked => Traversal::ParallelLocked { threads },
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RelaxationKind {
    Sequential,
    Parallel,
    Locked,
}

impl RelaxationKind {
    fn with_threads(
        self,
        threads: usize,
    ) -> Relaxation {
        match self {
            RelaxationKind::Sequential => Relaxation::Sequential,
            RelaxationKind::Parallel => Relaxation::Parallel {
                threads,
                mode: RelaxMode::ReadThenWrite,
            },
            RelaxationKind::Locked => Relaxation::Parallel {
                threads,
                mode: RelaxMode::Locked,
            },
        }
    }
}

fn load(file: &Path) -> Result<Graph> {
    load_graph(file).with_context(|| format!("Failed to load graph: {}", file.display()))
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_config(
    config: Option<&Path>,
    threads: Option<Vec<usize>>,
    source: Option<usize>,
    repetitions: Option<usize>,
) -> Result<BenchConfig> {
    let path = config.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let mut config =
        load_config(path).with_context(|| format!("Failed to load config: {}", path.display()))?;
    if let Some(threads) = threads {
        config.thread_counts = threads;
    }
    if let Some(source) = source {
        config.source = source;
    }
    if let Some(repetitions) = repetitions {
        config.repetitions = repetitions;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };

    match args.command {
        Commands::Bench {
            file,
            config,
            threads,
            source,
            repetitions,
            json,
        } => {
            let config = bench_config(config.as_deref(), threads, source, repetitions)?;
            logger::init_with_level(if args.verbose {
                LogLevel::Debug
            } else {
                config.log_level
            });
            let stdout = io::stdout().lock();
            let mut sink: Box<dyn ReportSink> = if json {
                Box::new(JsonReport::new(stdout))
            } else {
                Box::new(TextReport::new(stdout))
            };
            bench_file(&file, &config, sink.as_mut())?;
        }
        Commands::Traverse {
            file,
            variant,
            threads,
            source,
        } => {
            logger::init_with_level(default_level);
            let graph = load(&file)?;
            let visited = traverse(&graph, NodeId(source), variant.with_threads(threads))?;
            println!(
                "Visited {} of {} nodes",
                visited.count(),
                graph.node_count()
            );
            println!("{}", join(visited.visited_nodes().iter().map(|n| n.index())));
        }
        Commands::Paths {
            file,
            variant,
            threads,
            source,
        } => {
            logger::init_with_level(default_level);
            let graph = load(&file)?;
            let paths = shortest_paths(&graph, NodeId(source), variant.with_threads(threads))?;
            println!("cost:   {}", join(paths.raw_costs()));
            println!("parent: {}", join(paths.raw_parents()));
        }
        Commands::Path {
            file,
            to,
            variant,
            threads,
            source,
        } => {
            logger::init_with_level(default_level);
            let graph = load(&file)?;
            let paths = shortest_paths(&graph, NodeId(source), variant.with_threads(threads))?;
            let path = paths.path_to(NodeId(to))?;
            println!("{}", join(path.iter().map(|n| n.index())));
            if let Some(cost) = paths.cost(NodeId(to)) {
                println!("cost: {}", cost);
            }
        }
        Commands::Generate {
            nodes,
            density,
            max_weight,
            seed,
            output,
        } => {
            logger::init_with_level(default_level);
            let graph = random_graph(nodes, density, max_weight, seed);
            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create: {}", path.display()))?;
                    let mut out = BufWriter::new(file);
                    write_graph(&graph, &mut out)?;
                    out.flush()?;
                }
                None => write_graph(&graph, &mut io::stdout().lock())?,
            }
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}
