//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;
use lem_core::SolverConfig;

/// CLI arguments for lem-in
#[derive(Parser, Debug)]
#[command(name = "lem-in")]
#[command(version, about = "Move every ant from ##start to ##end in as few turns as possible")]
#[command(long_about = r#"
Reads a farm description (ant count, rooms, links), picks the set of
non-overlapping routes that empties the start room fastest, and prints the
input followed by one line of moves per turn.

Search bounds are taken from, in priority order:
1. --max-subset-size / --max-route-len
2. --config <path>     TOML file with the same keys
3. unbounded (exact search)

Example:
  lem-in farm.txt
  lem-in --max-subset-size 4 --csv moves.csv farm.txt
  lem-in -vv --verify farm.txt
"#)]
pub struct Cli {
    /// Farm description file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// TOML file with `max_subset_size` / `max_route_len`
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Largest number of routes to combine
    #[arg(long, value_name = "N")]
    pub max_subset_size: Option<usize>,

    /// Longest route to consider, in tunnels
    #[arg(long, value_name = "N")]
    pub max_route_len: Option<usize>,

    /// Also write the moves as `turn,ant,room` rows to this file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Replay the schedule against the movement rules before printing
    #[arg(long)]
    pub verify: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Bounds given on the command line; unset flags stay `None`.
    pub fn overrides(&self) -> SolverConfig {
        SolverConfig {
            max_subset_size: self.max_subset_size,
            max_route_len:   self.max_route_len,
        }
    }
}
