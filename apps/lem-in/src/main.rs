//! CLI entrypoint for lem-in
//!
//! Wires the parser, planner, scheduler and writers together.  Any failure
//! prints a single `ERROR: ...` line and exits non-zero.

mod cli;

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use lem_core::{LemError, MoveLog, SolverConfig};
use lem_io::{load_farm, write_output, CsvMoveWriter, MoveLogObserver};
use lem_sim::{check_move_log, NoopObserver, Solver, SolverBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            println!("ERROR: {}", usage_error(&e));
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("ERROR: {}", diagnostic(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref(), &cli.overrides())?;

    let farm = load_farm(&cli.file)
        .with_context(|| format!("invalid data format in {}", cli.file.display()))?;
    info!(
        ants = farm.ants,
        rooms = farm.colony.room_count(),
        tunnels = farm.colony.tunnel_count(),
        "farm loaded"
    );

    let solver = SolverBuilder::new(farm.colony.clone(), farm.ants.into())
        .config(config)
        .build()?;
    info!(
        routes = solver.plan.routes.len(),
        turns = solver.plan.makespan,
        "plan ready"
    );

    let log = match &cli.csv {
        Some(path) => run_with_csv(&solver, path)?,
        None => solver.run(&mut NoopObserver)?,
    };

    if cli.verify {
        check_move_log(&solver.colony, &solver.plan, &log)?;
        info!(turns = log.makespan(), "move log verified");
    }

    let mut out = BufWriter::new(io::stdout().lock());
    write_output(&mut out, &farm, &log)?;
    out.flush()?;
    Ok(())
}

/// Run the schedule while streaming every turn to a CSV file.
fn run_with_csv(solver: &Solver, path: &Path) -> Result<MoveLog> {
    let writer = CsvMoveWriter::create(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    let mut observer = MoveLogObserver::new(writer, &solver.colony);
    let log = solver.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).with_context(|| format!("cannot write {}", path.display()));
    }
    info!(path = %path.display(), moves = log.move_count(), "csv written");
    Ok(log)
}

/// One-line rendering of an error chain.
///
/// Several error types already quote their source in their own message, so
/// a cause whose text the previous message contains is skipped.
fn diagnostic(error: &anyhow::Error) -> String {
    let mut out = String::new();
    let mut previous = String::new();
    for cause in error.chain() {
        let message = cause.to_string();
        if previous.contains(&message) {
            continue;
        }
        if !out.is_empty() {
            out.push_str(": ");
        }
        out.push_str(&message);
        previous = message;
    }
    out
}

/// clap's report folded onto one line, usage text dropped.
fn usage_error(error: &clap::Error) -> String {
    let text = error.to_string();
    let joined = text
        .lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("Usage:"))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    joined.trim_start_matches("error: ").to_owned()
}

/// File settings first, then command-line flags on top.
fn resolve_config(path: Option<&Path>, overrides: &SolverConfig) -> Result<SolverConfig> {
    let base = match path {
        Some(path) => load_config(path)?,
        None => SolverConfig::default(),
    };
    Ok(base.merged_with(overrides))
}

fn load_config(path: &Path) -> Result<SolverConfig> {
    let text = fs::read_to_string(path)
        .map_err(LemError::from)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let config = toml::from_str(&text)
        .map_err(|e| LemError::Config(e.to_string()))
        .with_context(|| format!("in {}", path.display()))?;
    Ok(config)
}
