mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod store;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use datasources::OpenMeteoClient;
use logic::rules::AlertEngine;
use logic::WeatherPipeline;
use models::WeatherCategory;
use store::{
    DataStore, FORECAST_EXPORT_FILE, HISTORY_CAPACITY, HISTORY_CSV_FILE, HISTORY_FILE,
    LATEST_FILE, RUN_LOG_CAPACITY, RUN_LOG_FILE,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const RECENT_RUNS: usize = 5;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Init => {
            Config::setup_interactive(cli.config.as_ref()).context("Setup failed")?;
        }
        Commands::Run => {
            let config = Config::load(cli.config.as_ref()).context("Configuration error")?;
            let store = open_store(&config, cli.data_dir.as_ref())?;
            let pipeline = WeatherPipeline::new(&config, store)?;

            if !pipeline.run().await {
                eprintln!(
                    "Pipeline failed, see {}",
                    pipeline.store().path(RUN_LOG_FILE).display()
                );
                std::process::exit(1);
            }
        }
        Commands::Check => {
            let config = Config::load(cli.config.as_ref()).context("Configuration error")?;
            check(&config).await?;
        }
        Commands::Status => {
            let config = Config::load(cli.config.as_ref()).context("Configuration error")?;
            let store = open_store(&config, cli.data_dir.as_ref())?;
            status(&store);
        }
        Commands::Report => {
            let config = Config::load(cli.config.as_ref()).context("Configuration error")?;
            let store = open_store(&config, cli.data_dir.as_ref())?;
            report(&store)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn open_store(config: &Config, data_dir: Option<&PathBuf>) -> anyhow::Result<DataStore> {
    let dir = config
        .data_dir(data_dir)
        .context("Cannot resolve data directory")?;
    Ok(DataStore::open(dir)?)
}

async fn check(config: &Config) -> anyhow::Result<()> {
    let loc = &config.location;
    println!("Location:      {}, {}", loc.city, loc.country);
    println!("Coordinates:   {}, {}", loc.latitude, loc.longitude);
    println!("Timezone:      {}", loc.timezone);
    println!("API:           {}", config.openmeteo.base_url);
    println!("Forecast days: {}", config.openmeteo.forecast_days);

    println!("Alert rules:");
    for (id, name) in AlertEngine::new().list_rules() {
        println!("  {:<20} {}", id, name);
    }

    let client = OpenMeteoClient::new(&config.location, &config.openmeteo)?;
    match client.test_connection().await {
        Ok(true) => println!("Open-Meteo:    OK"),
        Ok(false) => {
            println!("Open-Meteo:    OFFLINE");
            std::process::exit(1);
        }
        Err(e) => {
            println!("Open-Meteo:    ERROR ({})", e);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn status(store: &DataStore) {
    println!("Data directory: {}", store.dir().display());

    match store.latest() {
        Some(latest) => {
            let recorded = latest
                .recorded_at
                .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            println!(
                "Latest record:  {}, {} at {} ({})",
                latest.location.city,
                latest.location.country,
                recorded,
                latest.data_quality.completeness
            );
        }
        None => println!("Latest record:  none ({} missing)", LATEST_FILE),
    }

    println!(
        "History:        {}/{} records ({}, {})",
        store.history().len(),
        HISTORY_CAPACITY,
        HISTORY_FILE,
        HISTORY_CSV_FILE
    );

    let runs = store.run_log();
    println!("Run log:        {}/{} entries", runs.len(), RUN_LOG_CAPACITY);
    for run in runs.iter().rev().take(RECENT_RUNS) {
        let outcome = if run.success { "ok" } else { "FAILED" };
        print!(
            "  {}  {:<6}  history={}",
            run.timestamp.format("%Y-%m-%d %H:%M:%S"),
            outcome,
            run.stats.history_records
        );
        if let Some(ref error) = run.error {
            print!("  {}", error);
        }
        println!();
    }
}

fn report(store: &DataStore) -> anyhow::Result<()> {
    let Some(latest) = store.latest() else {
        anyhow::bail!("No weather data recorded yet; run the pipeline first");
    };

    println!(
        "Weather report for {}, {}",
        latest.location.city, latest.location.country
    );
    println!();

    match latest.current_analysis {
        Some(ref current) => {
            println!("Current conditions");
            match current.temperature_celsius {
                Some(c) => println!(
                    "  Temperature:   {:.1}°C ({:.1}°F)",
                    c, current.temperature_fahrenheit
                ),
                None => println!("  Temperature:   n/a"),
            }
            if let Some(c) = current.feels_like_celsius {
                println!(
                    "  Feels like:    {:.1}°C ({:.1}°F)",
                    c, current.feels_like_fahrenheit
                );
            }
            let category = WeatherCategory::from_code(
                latest
                    .current_weather
                    .as_ref()
                    .and_then(|obs| obs.weather_code),
            );
            println!(
                "  Conditions:    {} ({})",
                current.weather_description, category
            );
            println!("  Humidity:      {}", current.humidity_level);
            println!("  Wind:          {}", current.wind_description);
            println!("  Comfort:       {}", current.comfort_index);
            println!("  Precipitation: {}", current.precipitation_status);
        }
        None => println!("Current conditions unavailable"),
    }
    println!();

    match latest.forecast_analysis {
        Some(ref forecast) => {
            let range = &forecast.temperature_range;
            let precip = &forecast.precipitation_forecast;
            println!("Forecast ({} days)", latest.forecast_data.len());
            println!("  Trend:         {}", forecast.temperature_trend);
            println!(
                "  Range:         {}°C to {}°C (avg high {}°C, avg low {}°C)",
                range.lowest, range.highest, range.average_high, range.average_low
            );
            println!(
                "  Precipitation: {}mm over {} rainy days (max {}mm)",
                precip.total_expected, precip.rainy_days, precip.heaviest_day
            );
            println!("  Summary:       {}", forecast.weather_summary);
            println!();
            println!("Alerts");
            for alert in &forecast.alerts {
                println!("  - {}", alert);
            }
        }
        None => println!("Forecast analysis unavailable"),
    }

    if !latest.forecast_data.is_empty() {
        let rows = store.export_forecast(&latest)?;
        println!();
        println!(
            "Exported {} forecast days to {}",
            rows,
            store.path(FORECAST_EXPORT_FILE).display()
        );
    }

    Ok(())
}
