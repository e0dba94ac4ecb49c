//! Trellis CLI entry point

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trellis_analysis::DistanceParams;

mod commands;

use commands::{DistanceRequest, Selection};

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Structural metrics for directed graphs in edge-list files", long_about = None)]
#[command(after_help = "e.g. `trellis ./testdata -c -n -d -l \"14,45,5\"`")]
struct Cli {
    /// Count the total number of nodes
    #[arg(short = 'n', long)]
    count: bool,

    /// Find the maximal out-degree
    #[arg(short = 'd', long)]
    degree: bool,

    /// Find the number of connected components and the largest one
    #[arg(short = 'c', long)]
    components: bool,

    /// Find the shortest path between two nodes, given as
    /// "source,target,expected" (expected optional); without a value the
    /// parameters are looked up by graph name
    #[arg(short = 'l', long, value_name = "SPEC")]
    distance: Option<Option<String>>,

    /// Greedy-color the graph and report the number of colors used
    #[arg(short = 'k', long)]
    coloring: bool,

    /// Emit one JSON object per file instead of text lines
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Input file, or directory searched recursively for EX<digits>.txt files
    path: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "trellis={log_level},trellis_core={log_level},trellis_analysis={log_level}"
        )))
        // result lines own stdout; logs go to stderr
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Trellis v{}", env!("CARGO_PKG_VERSION"));

    let distance = match cli.distance {
        None => None,
        Some(None) => Some(DistanceRequest::Dataset),
        Some(Some(spec)) => Some(DistanceRequest::Explicit(DistanceParams::from_spec(&spec)?)),
    };
    let selection = Selection {
        count: cli.count,
        degree: cli.degree,
        components: cli.components,
        distance,
        coloring: cli.coloring,
        json: cli.json,
    };

    commands::run(cli.path, selection).await
}
