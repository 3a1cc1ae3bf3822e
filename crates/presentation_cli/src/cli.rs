//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Weather Texter
#[derive(Debug, Parser)]
#[command(name = "weather-texter")]
#[command(author, version, about = "Text a friend how much nicer the weather is here", long_about = None)]
pub struct Cli {
    /// Compose and print the message without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Minimal output for cron jobs (errors, and the message on dry runs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Seed for reproducible messages
    #[arg(long, value_name = "U64")]
    pub seed: Option<u64>,

    /// Configuration file (TOML); defaults to ./weather-texter.toml when present
    #[arg(short, long, value_name = "PATH", env = "WEATHER_TEXTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
