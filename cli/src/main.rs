//! Egress CLI: shortest exit routes from the command line
//!
//! Builds a graph from a scenario file (or the built-in floor plan) and runs
//! route queries against it.

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use egress::algo::{nearest_exit, resolve_group, shortest_route};
use egress::{EgressConfig, GraphStore, Reconstruction, RouteOutcome, Scenario, Weight};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "egress", version, about = "Egress exit routing CLI")]
struct Cli {
    /// Scenario file (.yaml, .yml or .json); defaults to the built-in floor plan
    #[arg(long, global = true, env = "EGRESS_SCENARIO")]
    scenario: Option<PathBuf>,

    /// Configuration file (.yaml, .yml or .json)
    #[arg(long, global = true, env = "EGRESS_CONFIG")]
    config: Option<PathBuf>,

    /// Block an edge before querying, as FROM:TO (repeatable)
    #[arg(long = "restrict", value_parser = parse_pair, global = true)]
    restrictions: Vec<(String, String)>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Strategy {
    /// Follow predecessors recorded during relaxation
    Predecessor,
    /// Re-derive the path from the distance table
    Backtrace,
}

impl From<Strategy> for Reconstruction {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Predecessor => Reconstruction::Predecessor,
            Strategy::Backtrace => Reconstruction::DistanceBacktrace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest route between two named vertices
    Route {
        /// Source vertex name
        from: String,

        /// Destination vertex name
        to: String,

        /// Path reconstruction strategy (overrides the config file)
        #[arg(long)]
        strategy: Option<Strategy>,
    },
    /// Route to the closest vertex of the first exit group
    Nearest {
        /// Source vertex name
        from: String,
    },
    /// Print the adjacency matrix with vertex names
    Matrix,
    /// List traversable edges with their weights
    Weights,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => EgressConfig::from_file(path)?,
        None => EgressConfig::default(),
    };

    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::from_file(path)?,
        None => Scenario::floor_plan(),
    };
    for (from, to) in &cli.restrictions {
        scenario.restrict(from.as_str(), to.as_str());
    }

    let store = scenario.build(&scenario.fit(&config.graph))?;
    let mut query = scenario.query_config(&config.query);

    match &cli.command {
        Commands::Route { from, to, strategy } => {
            if let Some(strategy) = strategy {
                query.strategy = (*strategy).into();
            }
            let outcome = shortest_route(&store, store.resolve(from)?, store.resolve(to)?, &query)?;
            print_outcome(&store, &outcome, &cli.format)
        }
        Commands::Nearest { from } => {
            let group = query
                .exit_groups
                .first()
                .ok_or_else(|| anyhow!("no exit group configured"))?;
            let exits = resolve_group(&store, group)?;
            let outcome = nearest_exit(&store, store.resolve(from)?, &exits, &query)?;
            print_outcome(&store, &outcome, &cli.format)
        }
        Commands::Matrix => print_matrix(&store, &cli.format),
        Commands::Weights => print_weights(&store, &cli.format),
    }
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once(':') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(format!("expected FROM:TO, got '{}'", s)),
    }
}

fn name_of(store: &GraphStore, idx: usize) -> &str {
    store.vertex(idx).map(|v| v.name()).unwrap_or("?")
}

fn print_outcome(
    store: &GraphStore,
    outcome: &RouteOutcome,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    let route = match outcome {
        RouteOutcome::Found(route) => route,
        RouteOutcome::Unreachable { source, destination } => {
            println!(
                "No route from {} to {}",
                name_of(store, *source),
                name_of(store, *destination)
            );
            return Ok(());
        }
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Step", "Vertex", "Position", "Distance"]);

    let mut travelled: Weight = 0;
    for (step, &idx) in route.path.iter().enumerate() {
        if step > 0 {
            travelled += store.weight(route.path[step - 1], idx)?;
        }
        let position = store
            .vertex(idx)
            .map(|v| v.position.to_string())
            .unwrap_or_default();
        table.add_row(vec![
            step.to_string(),
            name_of(store, idx).to_string(),
            position,
            travelled.to_string(),
        ]);
    }

    println!("{}", table);
    println!("Shortest distance: {}", route.distance);
    println!("Shortest Path: {}", route.label);
    Ok(())
}

fn print_matrix(store: &GraphStore, format: &OutputFormat) -> anyhow::Result<()> {
    let adjacency = store.adjacency_table();

    match format {
        OutputFormat::Json => {
            let rows: Vec<Vec<u8>> = adjacency.rows().map(|(_, row)| row).collect();
            let doc = serde_json::json!({
                "vertices": adjacency.names(),
                "adjacency": rows,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);

            let mut header = vec![String::new()];
            header.extend(adjacency.names().iter().map(|n| n.to_string()));
            table.set_header(header);

            for (name, row) in adjacency.rows() {
                let mut cells = vec![name.to_string()];
                cells.extend(row.iter().map(|c| c.to_string()));
                table.add_row(cells);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn print_weights(store: &GraphStore, format: &OutputFormat) -> anyhow::Result<()> {
    let edges = store.edges();

    match format {
        OutputFormat::Json => {
            let doc: Vec<_> = edges
                .iter()
                .map(|&(a, b, w)| {
                    serde_json::json!({
                        "from": name_of(store, a),
                        "to": name_of(store, b),
                        "weight": w,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["From", "To", "Weight"]);
            for &(a, b, w) in &edges {
                table.add_row(vec![
                    name_of(store, a).to_string(),
                    name_of(store, b).to_string(),
                    w.to_string(),
                ]);
            }
            println!("{}", table);
            println!("{} edge(s)", edges.len());
        }
    }
    Ok(())
}
