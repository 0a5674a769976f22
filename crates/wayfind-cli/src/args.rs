//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use wayfind_search::{Heuristic, SearchConfig, DEFAULT_BLOCK_THRESHOLD};

/// Plan a path over a CSV occupancy grid with A*.
#[derive(Parser, Debug)]
#[command(name = "wayfind", author, version, about, long_about = None)]
pub struct Args {
    /// Occupancy table: comma-separated integers in [0, 100], one row per line
    #[arg(long, value_name = "FILE")]
    pub csv: PathBuf,

    /// Start position as column and row
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
    pub start: Vec<i32>,

    /// Goal position as column and row
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
    pub goal: Vec<i32>,

    /// 1 for 8-connected movement, 0 for 4-connected
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub diag: u8,

    /// Heuristic: manhattan, euclidean or octile
    #[arg(long, default_value_t = Heuristic::Octile)]
    pub heuristic: Heuristic,

    /// Occupancy at or above which a cell is impassable
    #[arg(long, default_value_t = DEFAULT_BLOCK_THRESHOLD, allow_negative_numbers = true)]
    pub block: i32,

    /// Print a single JSON object instead of text
    #[arg(long)]
    pub json: bool,

    /// Print search statistics, or the reason for failure
    #[arg(long)]
    pub explain: bool,

    /// Print the path, one "x y" pair per line
    #[arg(long)]
    pub print_path: bool,

    /// Log at debug level to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Search configuration selected by the flags.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            allow_diagonal: self.diag != 0,
            heuristic: self.heuristic,
            block_threshold: self.block,
        }
    }
}
