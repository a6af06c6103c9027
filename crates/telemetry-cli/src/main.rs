//! Vehicle Telemetry - Main Entry Point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use telemetry_cli::{commands, init_logging, AppConfig};
use tracing::debug;
use trip_statistics::{Interval, UnitOptions};

#[derive(Parser, Debug)]
#[command(name = "vehicle-telemetry", version)]
#[command(about = "Normalize vehicle statistics and HVAC payloads")]
struct Args {
    /// Config file (default: ./vehicle-telemetry.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reshape a statistics payload into uniform per-period records
    Stats {
        /// day, isoweek, month, year; anything else only tags units
        #[arg(short, long, default_value = "day")]
        interval: Interval,

        /// Convert to imperial units
        #[arg(long)]
        imperial: bool,

        /// With --imperial, report fuel in L/100mi instead of MPG
        #[arg(long)]
        use_liters: bool,

        /// JSON file holding the raw payload
        file: PathBuf,
    },

    /// Show an HVAC status payload
    Hvac {
        /// Payload uses the legacy PascalCase shape
        #[arg(long)]
        legacy: bool,

        /// Print JSON instead of a dictionary literal
        #[arg(long)]
        json: bool,

        /// JSON file holding the raw payload
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    init_logging(&config.logging)?;
    debug!("Loaded configuration: {:?}", config);

    let output = match args.command {
        Command::Stats {
            interval,
            imperial,
            use_liters,
            file,
        } => {
            let units = UnitOptions {
                imperial: imperial || config.units.imperial,
                use_liters: use_liters || config.units.use_liters,
            };
            let raw = commands::read_payload(&file)?;
            commands::format_statistics(&raw, interval, units)
                .with_context(|| format!("formatting {}", file.display()))?
        }
        Command::Hvac { legacy, json, file } => {
            let raw = commands::read_payload(&file)?;
            commands::describe_hvac(&raw, legacy, json)
                .with_context(|| format!("reading HVAC status from {}", file.display()))?
        }
    };

    println!("{}", output);
    Ok(())
}
