use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;

use topolink::canvas::MemoryCanvas;
use topolink::config_loader;
use topolink::scenario;
use topolink::topology::TopologyGraph;

/// Replay a topology editing scenario and print the resulting surface
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the scenario YAML file
    #[arg(short, long)]
    scenario: PathBuf,

    /// Path to an edge style configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the JSON snapshot here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Scenario file: {:?}", args.scenario);

    let config = config_loader::load_or_default(args.config.as_deref())?;
    let scenario = scenario::load_scenario(&args.scenario)?;

    let mut graph = TopologyGraph::new(MemoryCanvas::new(), config);
    scenario::replay(&scenario, &mut graph)?;

    let snapshot = serde_json::to_string_pretty(&graph.snapshot())
        .wrap_err("Failed to serialize topology snapshot")?;

    match &args.output {
        Some(path) => {
            fs::write(path, snapshot)
                .wrap_err_with(|| format!("Failed to write snapshot '{}'", path.display()))?;
            info!("Snapshot written to: {:?}", path);
        }
        None => println!("{}", snapshot),
    }

    Ok(())
}
