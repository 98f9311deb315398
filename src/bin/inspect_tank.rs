//! Inspect Tank
//!
//! Scores one tank plan read from a JSON file and prints the report.
//!
//! Input shape:
//!   { "catalog": { "organisms": [...], "hardscape": [...] },
//!     "items": [...], "config": {...}, "params": {...} }
//! `params` is optional; omitted fields keep their defaults.
//!
//! Run with: cargo run --features cli --bin inspect_tank -- scenario.json [--json]

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tank_scorer_rust::{
    EngineParams, InMemoryCatalog, JsonFormatter, MarkdownFormatter, TankConfiguration, TankItem,
    TankScorer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Score one tank plan and print the report
#[derive(Parser, Debug)]
#[command(name = "inspect_tank", version, long_about = None)]
struct Args {
    /// Path to the scenario JSON file
    path: PathBuf,

    /// Print the report as JSON instead of Markdown
    #[arg(long)]
    json: bool,
}

#[derive(Deserialize)]
struct ScenarioFile {
    catalog: InMemoryCatalog,
    items: Vec<TankItem>,
    config: TankConfiguration,
    #[serde(default)]
    params: EngineParams,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tank_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let path = args.path;

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
    let scenario: ScenarioFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse scenario file: {}", path.display()))?;
    scenario.params.validate()?;

    tracing::info!(
        "Loaded {} catalog record(s) and {} item(s) from {}",
        scenario.catalog.len(),
        scenario.items.len(),
        path.display()
    );

    let scorer = TankScorer::new(&scenario.catalog, scenario.params);
    let report = scorer.score(&scenario.items, &scenario.config);

    if args.json {
        println!("{}", JsonFormatter::format(&report)?);
    } else {
        print!("{}", MarkdownFormatter::format(&report));
    }

    Ok(())
}
