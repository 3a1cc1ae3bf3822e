//! User-facing output
//!
//! Everything here writes to a caller-supplied writer (stdout in the
//! binary). Logs go through `tracing` to stderr instead.

use std::io::{self, Write};

use application::{RunFailure, RunReport};
use chrono::{DateTime, Local};
use domain::WeatherReading;
use infrastructure::ConfigError;

const RULE_WIDTH: usize = 60;

/// How much to print
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub quiet: bool,
    pub dry_run: bool,
}

/// Start banner, printed before fetching
pub fn banner(out: &mut impl Write, now: DateTime<Local>) -> io::Result<()> {
    writeln!(
        out,
        "🤖 Weather Comparison Bot - {}",
        now.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out)?;
    writeln!(out, "📡 Fetching weather data...")
}

/// One summary line per location
fn reading_line(reading: &WeatherReading) -> String {
    let symbol = reading.unit().symbol();
    let mut line = format!(
        "   {}: {}",
        reading.location().short_name(),
        reading.format_temperature()
    );

    let mut extras = Vec::new();
    if let Some(high) = reading.high() {
        extras.push(format!("high {}{symbol}", high.round()));
    }
    if let Some(feels_like) = reading.rounded_feels_like() {
        extras.push(format!("feels like {feels_like}{symbol}"));
    }
    if !extras.is_empty() {
        line.push_str(&format!(" ({})", extras.join(", ")));
    }

    line.push_str(&format!(
        " - {} {}",
        reading.condition().emoji(),
        reading.description()
    ));
    line
}

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn failure_line(failure: &RunFailure) -> String {
    format!("{}: {}", failure.stage.failure_label(), failure.error)
}

/// Render the outcome of a run
pub fn report(
    out: &mut impl Write,
    report: &RunReport,
    options: OutputOptions,
    now: DateTime<Local>,
) -> io::Result<()> {
    if options.quiet {
        return quiet_report(out, report, options, now);
    }

    for reading in [&report.home, &report.away].into_iter().flatten() {
        writeln!(out, "{}", reading_line(reading))?;
    }
    if report.home.is_some() || report.away.is_some() {
        writeln!(out)?;
    }

    if let Some(message) = &report.message {
        rule(out)?;
        writeln!(out, "MESSAGE PREVIEW:")?;
        rule(out)?;
        writeln!(out, "{message}")?;
        rule(out)?;
        writeln!(
            out,
            "{} chars, {} SMS segment(s)",
            message.as_str().chars().count(),
            message.sms_segments()
        )?;
        writeln!(out)?;

        if options.dry_run {
            writeln!(out, "🧪 DRY RUN MODE - Message NOT actually sent")?;
        } else {
            writeln!(out, "📱 Sending message...")?;
        }
    }

    if let Some(delivery) = report.delivery.as_ref().filter(|d| d.success) {
        writeln!(out, "✅ Message sent successfully!")?;
        if let Some(sid) = &delivery.provider_message_id {
            writeln!(out, "   SID: {sid}")?;
        }
        writeln!(
            out,
            "   Status: {}",
            delivery.status.as_deref().unwrap_or("unknown")
        )?;
    }

    match &report.failure {
        Some(failure) => writeln!(out, "❌ {}", failure_line(failure)),
        None => writeln!(out, "\n✅ Complete!"),
    }
}

fn quiet_report(
    out: &mut impl Write,
    report: &RunReport,
    options: OutputOptions,
    now: DateTime<Local>,
) -> io::Result<()> {
    if let Some(failure) = &report.failure {
        return writeln!(
            out,
            "ERROR: {} at {}",
            failure_line(failure),
            now.format("%Y-%m-%d %H:%M:%S")
        );
    }

    match &report.message {
        Some(message) if options.dry_run => writeln!(out, "{message}"),
        _ => Ok(()),
    }
}

/// Explain a configuration problem
pub fn config_error(out: &mut impl Write, error: &ConfigError) -> io::Result<()> {
    match error {
        ConfigError::MissingCredentials(vars) => {
            writeln!(out, "❌ Missing Twilio credentials. Set environment variables:")?;
            writeln!(out, "   {vars}")?;
            writeln!(out, "   (or run with --dry-run to preview without sending)")
        },
        other => writeln!(out, "❌ {other}"),
    }
}
