//! Summit CLI - runs a boundary search over a sequence of numbers.
//!
//! ```text
//! main() -> Cli::parse() -> load config -> init_tracing() -> run()
//!                                                              |
//!                               VALUES | stdin -> Samples<f64> v
//!                                          Report::build(settings) -> text | JSON
//! ```
//!
//! Exit status: 0 on success, 1 on invalid input (arguments or stdin) or IO
//! failure, 2 when `--strategy both` finds the strategies disagreeing.

mod input;
mod logging;
mod report;

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;

use summit_config::{SearchSettings, SummitConfig};
use summit_core::{NoTrace, PreconditionPolicy, ProbeTrace, RunMode, Samples, TracingProbe};

use crate::report::Report;

const EXIT_INVALID: u8 = 1;
const EXIT_DISAGREE: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "summit",
    version,
    about = "Locate where a sequence stops rising, by linear scan or binary search"
)]
struct Cli {
    /// linear, binary, or both
    #[arg(long, value_name = "STRATEGY", value_parser = parse_run_mode)]
    strategy: Option<RunMode>,

    /// Reject input that is not single-peaked before running the binary search
    #[arg(long)]
    verify: bool,

    /// Log every binary-search probe at debug level
    #[arg(long)]
    trace: bool,

    /// Config file to use instead of ~/.summit/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Sequence values; read from stdin when omitted
    #[arg(allow_negative_numbers = true, value_name = "VALUES")]
    values: Vec<f64>,
}

fn parse_run_mode(raw: &str) -> Result<RunMode, String> {
    RunMode::parse(raw)
        .ok_or_else(|| format!("unknown strategy {raw:?} (expected linear, binary, or both)"))
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go to stdout with status 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(EXIT_INVALID);
        }
    };

    let (config, config_warning) = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(EXIT_INVALID);
        }
    };

    let trace_requested = cli.trace || config.search.as_ref().is_some_and(|search| search.trace);
    logging::init_tracing(config.log_filter(), trace_requested);
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    match run(&cli, &config) {
        Ok(report) if report.disagrees() => ExitCode::from(EXIT_DISAGREE),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "run failed");
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_INVALID)
        }
    }
}

/// An explicit `--config` must load. The default location may be missing or
/// broken; that only produces a warning, logged once tracing is up.
fn load_config(explicit: Option<&Path>) -> Result<(SummitConfig, Option<String>)> {
    if let Some(path) = explicit {
        let config = SummitConfig::load_from(path)?
            .with_context(|| format!("config file {} does not exist", path.display()))?;
        return Ok((config, None));
    }

    match SummitConfig::load() {
        Ok(config) => Ok((config.unwrap_or_default(), None)),
        Err(err) => Ok((
            SummitConfig::default(),
            Some(format!("{err:#}; using defaults")),
        )),
    }
}

fn run(cli: &Cli, config: &SummitConfig) -> Result<Report> {
    let settings = apply_flags(config.resolve(), cli);
    tracing::debug!(?settings, "resolved search settings");

    let samples = if cli.values.is_empty() {
        input::read_samples(io::stdin().lock()).context("failed to read sequence from stdin")?
    } else {
        Samples::new(cli.values.clone())?
    };

    let mut tracing_probe = TracingProbe;
    let mut no_trace = NoTrace;
    let trace: &mut dyn ProbeTrace<f64> = if settings.trace {
        &mut tracing_probe
    } else {
        &mut no_trace
    };

    let report = Report::build(&samples, settings, trace)?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &report).context("failed to write report")?;
        writeln!(stdout)?;
    } else {
        stdout
            .write_all(report.render_text().as_bytes())
            .context("failed to write report")?;
    }

    Ok(report)
}

/// Command-line flags override config and environment.
fn apply_flags(mut settings: SearchSettings, cli: &Cli) -> SearchSettings {
    if let Some(mode) = cli.strategy {
        settings.mode = mode;
    }
    if cli.verify {
        settings.policy = PreconditionPolicy::Verify;
    }
    if cli.trace {
        settings.trace = true;
    }
    settings
}
