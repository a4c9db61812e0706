//! `waypoint`: run a breadth-first path search and print the result.
//!
//! With no arguments, searches the reference graph from `A` to `F`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use waypoint_harness::bundle::SearchBundleV1;
use waypoint_harness::bundle_dir::{write_bundle_dir, BundleDirError};
use waypoint_harness::config::{ConfigError, RunConfig};
use waypoint_harness::contract::WorldError;
use waypoint_harness::policy::RunPolicy;
use waypoint_harness::runner::{run_search, RunError};
use waypoint_harness::worlds::{CustomGraph, ReferenceGraph};
use waypoint_kernel::graph::{AdjacencyGraph, GraphError};
use waypoint_kernel::proof::canon::CanonError;
use waypoint_search::{MissingNodePolicyV1, TerminationReasonV1};

#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(about = "Breadth-first shortest path search over a directed graph")]
struct Args {
    /// Run config file (graph, start, goal, policy).
    #[arg(long, value_name = "FILE", conflicts_with = "graph")]
    config: Option<PathBuf>,

    /// Graph file: a JSON object mapping each node to its neighbor list.
    #[arg(long, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// Start node (overrides the config file).
    #[arg(long)]
    start: Option<String>,

    /// Goal node (overrides the config file).
    #[arg(long)]
    goal: Option<String>,

    /// Stop after this many node expansions.
    #[arg(long, value_name = "N")]
    max_expansions: Option<u64>,

    /// Treat nodes missing from the graph as having no neighbors.
    #[arg(long)]
    lenient: bool,

    /// Print the canonical audit log after the result.
    #[arg(long)]
    audit: bool,

    /// Write the run's artifact bundle to this directory (must be absent or empty).
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read {}: {source}", path.display())]
    ReadGraph {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid graph {}: {source}", path.display())]
    Graph {
        path: PathBuf,
        #[source]
        source: GraphError,
    },
    #[error("--graph requires --start and --goal")]
    MissingEndpoints,
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("failed to serialize audit log: {0}")]
    Canon(#[from] CanonError),
    #[error("failed to write bundle: {0}")]
    BundleDir(#[from] BundleDirError),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_graph(path: &Path) -> Result<AdjacencyGraph<String>, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadGraph {
        path: path.to_path_buf(),
        source,
    })?;
    AdjacencyGraph::from_json_bytes(&bytes).map_err(|source| CliError::Graph {
        path: path.to_path_buf(),
        source,
    })
}

fn execute(args: &Args) -> Result<SearchBundleV1, CliError> {
    let mut policy = RunPolicy::default();

    let bundle = if let Some(path) = &args.config {
        let mut config = RunConfig::load(path)?;
        if let Some(start) = &args.start {
            config.start.clone_from(start);
        }
        if let Some(goal) = &args.goal {
            config.goal.clone_from(goal);
        }
        policy = config.run_policy()?;
        apply_flags(args, &mut policy);
        run_search(&config.to_world()?, &policy)?
    } else if let Some(path) = &args.graph {
        let (Some(start), Some(goal)) = (&args.start, &args.goal) else {
            return Err(CliError::MissingEndpoints);
        };
        let graph = read_graph(path)?;
        let world = CustomGraph::new("graph_file", graph, start.as_str(), goal.as_str())?;
        apply_flags(args, &mut policy);
        run_search(&world, &policy)?
    } else {
        let world = ReferenceGraph::with_endpoints(
            args.start.as_deref().unwrap_or("A"),
            args.goal.as_deref().unwrap_or("F"),
        );
        apply_flags(args, &mut policy);
        run_search(&world, &policy)?
    };

    if let Some(dir) = &args.out {
        write_bundle_dir(bundle.artifacts(), dir)?;
    }
    Ok(bundle)
}

fn apply_flags(args: &Args, policy: &mut RunPolicy) {
    if let Some(n) = args.max_expansions {
        *policy = policy.with_max_expansions(n);
    }
    if args.lenient {
        *policy = policy.with_missing_node(MissingNodePolicyV1::TreatAsEmpty);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let bundle = match execute(&args) {
        Ok(bundle) => bundle,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match bundle.path() {
        Some(path) => println!("Path found: {path}"),
        None => println!("No path to the goal could be found."),
    }
    if bundle.outcome() == TerminationReasonV1::ExpansionBudgetExceeded {
        tracing::warn!(
            max_expansions = ?bundle.audit().metadata.max_expansions,
            "expansion budget ran out before the goal was reached"
        );
    }

    if args.audit {
        match bundle.audit().to_canonical_json_bytes() {
            Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
            Err(e) => {
                eprintln!("error: {}", CliError::from(e));
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
