use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use buildmap_lib::{
    load_snapshot, route, Graph, NodeId, RouteRenderMode, RouteReport, RouteRequest,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Indoor venue routing utilities")]
struct Cli {
    /// Path to the venue snapshot JSON file.
    #[arg(long)]
    snapshot: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two node ids and print turn-by-turn steps.
    Route {
        /// Starting node id.
        #[arg(long)]
        from: NodeId,
        /// Destination node id.
        #[arg(long)]
        to: NodeId,
        /// Emit the full route as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Summarise the snapshot's floors, nodes, and connections.
    Inspect,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route { from, to, json } => handle_route(&cli.snapshot, from, to, json),
        Command::Inspect => handle_inspect(&cli.snapshot),
    }
}

fn handle_route(snapshot_path: &Path, from: NodeId, to: NodeId, json: bool) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)
        .with_context(|| format!("failed to load snapshot from {}", snapshot_path.display()))?;

    let computed = route(&snapshot, &RouteRequest::new(from, to))
        .with_context(|| format!("failed to compute a route from {from} to {to}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&computed)?);
        return Ok(());
    }

    let report = RouteReport::from_route(&computed).context("route produced no nodes")?;
    print!("{}", report.render(RouteRenderMode::PlainText));
    Ok(())
}

fn handle_inspect(snapshot_path: &Path) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)
        .with_context(|| format!("failed to load snapshot from {}", snapshot_path.display()))?;
    let graph = Graph::build(&snapshot.nodes);

    let floors: BTreeSet<_> = snapshot
        .nodes
        .iter()
        .filter(|node| !node.deleted)
        .map(|node| node.floor.id)
        .collect();

    println!("Venue: {} ({})", snapshot.name, snapshot.venue_id);
    println!("Floors: {}", floors.len());
    println!("Nodes: {}", graph.node_count());

    let mut nodes: Vec<_> = graph.nodes().collect();
    nodes.sort_by_key(|node| node.id);
    for node in nodes {
        let edges = graph.edges(node.id);
        if !edges.is_empty() {
            println!(
                "- {} ({}, floor {}) -> {} connections",
                node.name,
                node.id,
                node.floor.name,
                edges.len()
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
