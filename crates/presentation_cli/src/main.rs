//! Weather Texter CLI
//!
//! Fetches the weather for two places, composes a playful comparison and
//! texts it to a friend. Meant to be run once a day from cron.

#![allow(clippy::print_stdout)]

mod cli;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use application::{ComparisonService, RngSource, RunMode, SmsPort};
use chrono::Local;
use clap::Parser;
use infrastructure::{
    AppConfig, ConfigError, DisabledSmsAdapter, RunSettings, TwilioSmsAdapter, WeatherAdapter,
    default_filter, init_tracing,
};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::output::OutputOptions;

/// Exit code for configuration problems found before the run starts
const EXIT_CONFIG: u8 = 2;

fn config_failure(error: &ConfigError) -> anyhow::Result<ExitCode> {
    output::config_error(&mut io::stdout().lock(), error)?;
    Ok(ExitCode::from(EXIT_CONFIG))
}

/// Wire adapters into the service and pick the run mode
fn build_service(
    config: &AppConfig,
    settings: RunSettings,
) -> anyhow::Result<(ComparisonService, RunMode)> {
    let weather = Arc::new(WeatherAdapter::new(config.weather.clone())?);

    let (sms, mode) = match settings.delivery {
        Some(delivery) => {
            let adapter: Arc<dyn SmsPort> = Arc::new(TwilioSmsAdapter::new(delivery.twilio_config())?);
            (
                adapter,
                RunMode::Send {
                    recipient: delivery.recipient,
                },
            )
        },
        None => {
            let adapter: Arc<dyn SmsPort> = Arc::new(DisabledSmsAdapter);
            (adapter, RunMode::DryRun)
        },
    };

    let service = ComparisonService::new(weather, sms, settings.home, settings.away);
    Ok((service, mode))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return config_failure(&e),
    };

    init_tracing(config.logging.format, default_filter(cli.verbose))?;
    debug!(?cli, "Starting");

    let settings = match config.validate(!cli.dry_run) {
        Ok(settings) => settings,
        Err(e) => return config_failure(&e),
    };

    let options = OutputOptions {
        quiet: cli.quiet,
        dry_run: cli.dry_run,
    };
    let mut stdout = io::stdout().lock();
    if !options.quiet {
        output::banner(&mut stdout, Local::now())?;
        stdout.flush()?;
    }

    let (service, mode) = build_service(&config, settings)?;
    info!(
        home = %service.home(),
        away = %service.away(),
        provider = %config.weather.provider,
        dry_run = mode.is_dry_run(),
        "Running comparison"
    );

    let mut rng = match cli.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_os(),
    };
    let report = service.run(&mode, &mut rng).await;

    output::report(&mut stdout, &report, options, Local::now())?;
    stdout.flush()?;

    Ok(ExitCode::from(u8::try_from(report.exit_code()).unwrap_or(1)))
}
