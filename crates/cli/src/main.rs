mod console;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};

use stocksim_inventory::RandomDemand;
use stocksim_observability::LogFormat;
use stocksim_simulation::{CsvExporter, RunReport, SimulationConfig, run, run_with_observer};

use crate::console::{ConsoleProgress, print_summary};

#[derive(Parser, Debug)]
#[command(name = "stocksim", version, about = "Simulate daily inventory usage and restocking")]
struct Cli {
    /// TOML file with days, seed, output directory and items.
    #[arg(long, env = "STOCKSIM_CONFIG")]
    config: Option<PathBuf>,

    /// Days to simulate (overrides the config file).
    #[arg(long, allow_hyphen_values = true)]
    days: Option<i64>,

    /// Seed for reproducible demand (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for CSV logs and the summary (overrides the config file).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip writing CSV and JSON files.
    #[arg(long)]
    no_export: bool,

    /// Log line format.
    #[arg(long, value_enum, env = "STOCKSIM_LOG_FORMAT", default_value_t = LogFormatArg::Pretty)]
    log_format: LogFormatArg,

    /// Only print the final summary.
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    /// One JSON object per line.
    Json,
    /// Human-readable, single line per event.
    #[value(alias = "text")]
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

impl Cli {
    fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(days) = self.days {
            config.days = days;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    stocksim_observability::init(cli.log_format.into());

    let config = cli.resolve_config()?;
    let mut roster = config.build_roster().context("invalid item configuration")?;
    let days = config.day_count();

    let mut demand = match config.seed {
        Some(seed) => RandomDemand::seeded(seed),
        None => RandomDemand::from_entropy(),
    };

    tracing::info!(days, items = roster.len(), seed = ?config.seed, "starting inventory simulation");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let started_at = Utc::now();
    if cli.quiet {
        run(days, &mut roster, &mut demand);
    } else {
        writeln!(out, "\nStarting inventory simulation...\n")?;
        let mut progress = ConsoleProgress::new(&mut out);
        run_with_observer(days, &mut roster, &mut demand, &mut progress);
        progress.finish().context("writing progress")?;
    }
    let report = RunReport::from_roster(&roster, days, config.seed, started_at, Utc::now());

    if !cli.no_export {
        let exporter = CsvExporter::new(&config.output_dir);
        let mut written = exporter
            .export_roster(&roster)
            .with_context(|| format!("exporting to {}", exporter.dir().display()))?;
        written.push(exporter.export_combined(&report)?);
        written.push(exporter.export_summary(&report)?);

        if !cli.quiet {
            for path in &written {
                writeln!(out, "Saved: {}", path.display())?;
            }
        }
    }

    print_summary(&mut out, &report)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "stocksim",
            "--days",
            "7",
            "--seed",
            "3",
            "--output-dir",
            "out",
            "--log-format",
            "json",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.day_count(), 7);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.items.len(), 2);
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
    }

    #[test]
    fn negative_days_parse_and_clamp() {
        let cli = Cli::try_parse_from(["stocksim", "--days", "-3"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap().day_count(), 0);
    }

    #[test]
    fn log_format_values_are_checked_by_clap() {
        let cli = Cli::try_parse_from(["stocksim", "--log-format", "text"]).unwrap();
        assert_eq!(cli.log_format, LogFormatArg::Pretty);

        let err = Cli::try_parse_from(["stocksim", "--log-format", "xml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn defaults_match_salon_run() {
        let cli = Cli::try_parse_from(["stocksim"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.day_count(), 30);
        assert!(!cli.no_export);
        assert!(!cli.quiet);
    }
}
