use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use graphtrail_core::{
    AnalysisKind, AnalysisOptions, GraphSummary, Parsed, parse_description, render_edge_list,
    run_analysis,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "graphtrail",
    version,
    about = "Graph traversal analysis over free-form descriptions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one analysis over a graph description and print the report.
    Analyze(AnalyzeArgs),
    /// Parse a description and print the canonical edge list.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Graph description (adjacency mapping, edge list, or informal text).
    #[arg(long, conflicts_with = "file")]
    graph: Option<String>,

    /// Read the description from a file instead.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Analysis mode: path_analysis, eulerian_path, connectivity, or
    /// cycle_detection.
    #[arg(long, default_value = "connectivity")]
    analysis: String,

    /// Start node (path_analysis only).
    #[arg(long)]
    start: Option<String>,

    /// End node (path_analysis only).
    #[arg(long)]
    end: Option<String>,

    /// Cap on all-paths enumeration.
    #[arg(long, default_value_t = 10)]
    max_paths: usize,

    /// Emit the structured result as pretty JSON instead of the report.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Graph description (adjacency mapping, edge list, or informal text).
    #[arg(long, conflicts_with = "file")]
    graph: Option<String>,

    /// Read the description from a file instead.
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,graphtrail_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => analyze_command(args),
        Command::Inspect(args) => inspect_command(args),
    }
}

fn analyze_command(args: AnalyzeArgs) -> Result<()> {
    let description = read_description(args.graph, args.file)?;
    let options = AnalysisOptions::new().with_max_paths(args.max_paths);

    info!(analysis = %args.analysis, "running graph analysis");

    if args.json {
        let outcome = args
            .analysis
            .parse::<AnalysisKind>()
            .and_then(|kind| {
                graphtrail_core::analyze(
                    &description,
                    kind,
                    args.start.as_deref(),
                    args.end.as_deref(),
                    &options,
                )
            });
        match outcome {
            Ok(analysis) => println!("{}", serde_json::to_string_pretty(&analysis)?),
            Err(err) => println!("{}", serde_json::json!({ "error": err.to_string() })),
        }
        return Ok(());
    }

    let report = run_analysis(
        &description,
        &args.analysis,
        args.start.as_deref(),
        args.end.as_deref(),
        &options,
    );
    println!("{report}");
    Ok(())
}

fn inspect_command(args: InspectArgs) -> Result<()> {
    let description = read_description(args.graph, args.file)?;

    match parse_description(&description) {
        Ok(Parsed::Graph(graph)) => {
            let summary = GraphSummary::of(&graph);
            println!(
                "{} nodes, {} adjacency entries",
                summary.node_count, summary.edge_count
            );
            print!("{}", render_edge_list(&graph));
        }
        Ok(Parsed::Advisory(advisory)) => {
            println!(
                "grid-style description: {} color/ownership references, no explicit edges",
                advisory.references
            );
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn read_description(inline: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        (None, None) => anyhow::bail!("provide a description via --graph or --file"),
    }
}
