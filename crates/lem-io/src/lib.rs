//! `lem-io`: reading farms and writing move logs.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`parser`]   | `Farm`, `parse_farm`, `load_farm`, `load_farm_reader`      |
//! | [`format`]   | `L<ant>-<room>` text output                                |
//! | [`csv`]      | `CsvMoveWriter`: `turn,ant,room` rows                      |
//! | [`observer`] | `MoveLogObserver`: streams turns to any [`MoveWriter`]     |
//! | [`error`]    | `FarmError`, `OutputError`                                 |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lem_io::{load_farm, CsvMoveWriter, MoveLogObserver};
//!
//! let farm = load_farm(Path::new("farm.txt"))?;
//! let solver = SolverBuilder::new(farm.colony.clone(), farm.ants.into()).build()?;
//! let mut obs = MoveLogObserver::new(CsvMoveWriter::create(Path::new("moves.csv"))?, &farm.colony);
//! let log = solver.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod observer;
pub mod parser;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvMoveWriter;
pub use error::{FarmError, FarmResult, OutputError, OutputResult};
pub use format::{render_turn, write_moves, write_output};
pub use observer::{turn_rows, write_log, MoveLogObserver};
pub use parser::{load_farm, load_farm_reader, parse_farm, Farm};
pub use row::MoveRow;
pub use writer::MoveWriter;
