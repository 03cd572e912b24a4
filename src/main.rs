mod api;
mod calendar;
mod config;
mod models;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use calendar::{render, Calendar, SuitabilityThresholds};
use models::forecast::ForecastResponse;

/// US state and territory codes accepted by the geocoder query
const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "AS", "CA", "CO", "CT", "DE", "DC", "FL", "GA",
    "GU", "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA",
    "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC",
    "ND", "MP", "OH", "OK", "OR", "PA", "PR", "RI", "SC", "SD", "TN", "TX",
    "TT", "UT", "VT", "VA", "VI", "WA", "WV", "WI", "WY",
];

#[derive(Parser)]
#[command(
    name = "pickleball-weather",
    about = "Find times in the 5-day weather forecast that are suitable for outdoor pickleball"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the forecast for a city and print the suitability calendar
    Forecast {
        /// City name (falls back to the configured home city)
        city: Option<String>,
        /// Two-letter US state code (US locations only)
        #[arg(short, long)]
        state: Option<String>,
        #[command(flatten)]
        overrides: ThresholdArgs,
        /// Print one line per time window instead of the grid
        #[arg(long)]
        detailed: bool,
        /// Save the raw forecast body to a file for later replay
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Re-run classification over a saved forecast body (no network call)
    Replay {
        /// Path written by `forecast --save`
        path: PathBuf,
        #[command(flatten)]
        overrides: ThresholdArgs,
        /// Print one line per time window instead of the grid
        #[arg(long)]
        detailed: bool,
    },
    /// Show the active suitability thresholds
    Thresholds,
}

#[derive(Args)]
struct ThresholdArgs {
    /// Lowest temperature (°F) you will play in
    #[arg(long)]
    min_temp: Option<i32>,
    /// Highest temperature (°F) you will play in
    #[arg(long)]
    max_temp: Option<i32>,
    /// Highest wind speed (mph) you are okay with
    #[arg(long)]
    max_wind: Option<u32>,
    /// Highest chance of precipitation (%) you are okay with
    #[arg(long)]
    max_precip: Option<u32>,
}

impl ThresholdArgs {
    /// Apply command-line overrides on top of the configured thresholds
    fn resolve(&self, base: &SuitabilityThresholds) -> Result<SuitabilityThresholds> {
        let thresholds = SuitabilityThresholds {
            min_temp: self.min_temp.unwrap_or(base.min_temp),
            max_temp: self.max_temp.unwrap_or(base.max_temp),
            max_wind_speed: self.max_wind.unwrap_or(base.max_wind_speed),
            max_precip_chance: self.max_precip.unwrap_or(base.max_precip_chance),
        };
        thresholds.validate()?;
        Ok(thresholds)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pickleball_weather=info".into()),
        )
        .init();

    // Load .env if present (override system env vars)
    dotenvy::dotenv_override().ok();

    let cli = Cli::parse();
    let config = config::Config::load()?;

    match cli.command {
        Commands::Forecast { city, state, overrides, detailed, save } => {
            let thresholds = overrides.resolve(&config.thresholds)?;
            let city = city
                .or_else(|| config.city.clone())
                .context("No city given and none configured in pickleball.toml")?;
            let state = match state.or_else(|| config.state.clone()) {
                Some(code) => Some(normalize_state(&code)?),
                None => None,
            };

            let client = api::client::WeatherClient::new()?;
            let location = client.geocode(&city, state.as_deref()).await?;
            let (forecast, body) = client.fetch_forecast(&location).await?;

            if let Some(path) = save {
                std::fs::write(&path, &body)
                    .with_context(|| format!("Failed to save forecast to {}", path.display()))?;
                info!("Saved raw forecast to {}", path.display());
            }

            let calendar = Calendar::build(forecast.records()?);
            println!(
                "\nSuitable times to play outdoor pickleball in {}\n",
                location.display_name()
            );
            print_calendar(&calendar, &thresholds, detailed);
        }
        Commands::Replay { path, overrides, detailed } => {
            let thresholds = overrides.resolve(&config.thresholds)?;
            let data = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read saved forecast {}", path.display()))?;
            let forecast: ForecastResponse =
                serde_json::from_str(&data).context("Failed to parse saved forecast")?;

            let calendar = Calendar::build(forecast.records()?);
            println!("\nReplaying saved forecast {}\n", path.display());
            print_calendar(&calendar, &thresholds, detailed);
        }
        Commands::Thresholds => {
            let t = &config.thresholds;
            println!("\nActive suitability thresholds (pickleball.toml):");
            println!("   Temperature range: {}°F - {}°F", t.min_temp, t.max_temp);
            println!("   Max wind speed:    {} mph", t.max_wind_speed);
            println!("   Max precipitation: {}%", t.max_precip_chance);
        }
    }

    Ok(())
}

/// Uppercase and validate a US state/territory code
fn normalize_state(code: &str) -> Result<String> {
    let code = code.to_uppercase();
    if !US_STATES.contains(&code.as_str()) {
        bail!("Unknown US state code: {}", code);
    }
    Ok(code)
}

fn print_calendar(calendar: &Calendar, thresholds: &SuitabilityThresholds, detailed: bool) {
    if calendar.is_empty() {
        println!("No daytime forecast data available. Try again later.");
        return;
    }

    if detailed {
        render::print_detailed(calendar, thresholds);
    } else {
        render::print_table(&render::table(calendar, thresholds));
    }
    println!("\n{}", render::LEGEND);
}
