use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "weather-etl",
    version,
    about = "Fetch, analyze and accumulate weather data for one location"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the directory artifacts are written to
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one extract/transform/load pass (default)
    Run,
    /// Interactive setup of config.yaml
    Init,
    /// Validate config and test the weather API connection
    Check,
    /// Show the latest record, history size and recent runs
    Status,
    /// Print the latest analysis and export weather_analysis.csv
    Report,
}
