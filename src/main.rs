// src/main.rs
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use ohmlab::config::{load_config, LabConfig};
use ohmlab::{summarize_experiment, ChartRenderer, MeasurementTable, PngFileRenderer};
#[derive(Parser)]
#[command(name = "ohmlab")]
#[command(author, version, about = "Ohm's Law lab: record, plot and compare resistances", long_about = None)]
struct Cli {
    /// JSON trial file; the built-in demo trials are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory for the rendered V(I) charts
    #[arg(short, long, default_value = "charts")]
    out_dir: PathBuf,
    /// Output format for tables and summary
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Skip chart rendering
    #[arg(long)]
    no_plot: bool,
    /// Enable verbose output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}
fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => {
            info!("no trial file given, running demo trials");
            LabConfig::demo()
        }
    };
    let tables: Vec<MeasurementTable> = config.trials.iter().map(|t| t.table()).collect();
    if !cli.no_plot {
        let mut renderer = PngFileRenderer::new(&cli.out_dir);
        for (trial, table) in config.trials.iter().zip(&tables) {
            if let Err(err) = renderer.render(&trial.title, table, trial.color()) {
                warn!("could not plot {:?}: {err}", trial.title);
            }
        }
    }
    let summary = summarize_experiment(&tables).context("failed to evaluate trials")?;
    match cli.format {
        OutputFormat::Text => {
            for (trial, table) in config.trials.iter().zip(&tables) {
                println!("{}\n{table}\n", trial.title);
            }
            println!("{summary}");
        }
        OutputFormat::Json => {
            let trials: Vec<serde_json::Value> = config
                .trials
                .iter()
                .zip(&tables)
                .map(|(trial, table)| serde_json::json!({ "title": trial.title, "table": table }))
                .collect();
            let doc = serde_json::json!({ "trials": trials, "summary": summary });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}
