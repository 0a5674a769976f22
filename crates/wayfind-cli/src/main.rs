//! `wayfind`: plan a path over a CSV occupancy grid.
//!
//! Coordinates on the command line are `(x, y)` with `x` the column.
//! The exit code is the plan status code (`0` ok, `2` no path, `3`
//! blocked endpoint, `4` out of bounds, `5` map error); a map that fails
//! to load exits with `1`.

mod args;
mod report;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wayfind_core::{Cell, Point};
use wayfind_grid::load_occupancy_csv;
use wayfind_search::{outcome_status, plan};

use crate::args::Args;
use crate::report::{JsonReport, TextReport};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<ExitCode> {
    let grid = load_occupancy_csv(&args.csv)
        .with_context(|| format!("failed to load map {}", args.csv.display()))?;
    info!(rows = grid.rows(), cols = grid.cols(), "map loaded");

    let config = args.search_config();
    if !config.heuristic_is_admissible() {
        warn!(
            heuristic = %config.heuristic,
            "heuristic overestimates with diagonal moves; paths may not be optimal"
        );
    }

    let start = Cell::from(Point::new(args.start[0], args.start[1]));
    let goal = Cell::from(Point::new(args.goal[0], args.goal[1]));
    let outcome = plan(&grid, start, goal, &config);
    let code = outcome_status(&outcome).code();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let report = JsonReport::new(&outcome, args.print_path);
        serde_json::to_writer(&mut out, &report).context("failed to write JSON report")?;
        writeln!(out)?;
    } else {
        let report = TextReport {
            outcome: &outcome,
            print_path: args.print_path,
            explain: args.explain,
        };
        let stderr = std::io::stderr();
        report.write(&mut out, &mut stderr.lock())?;
    }
    out.flush()?;

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
