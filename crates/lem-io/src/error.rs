//! Error types for lem-io.

use lem_colony::ColonyError;
use thiserror::Error;

/// Errors raised while reading a farm description.
///
/// Every variant tied to a specific input line carries its 1-based number.
#[derive(Debug, Error)]
pub enum FarmError {
    #[error("no ant count found")]
    MissingAntCount,

    #[error("line {line}: invalid number of ants {value:?}")]
    InvalidAntCount { line: usize, value: String },

    #[error("line {line}: expected `name x y`, found {text:?}")]
    MalformedRoom { line: usize, text: String },

    #[error("line {line}: room name {name:?} may not start with 'L' or '#' or contain '-'")]
    ForbiddenRoomName { line: usize, name: String },

    #[error("line {line}: coordinate {value:?} is not an integer")]
    InvalidCoordinate { line: usize, value: String },

    #[error("line {line}: duplicate room {name:?}")]
    DuplicateRoom { line: usize, name: String },

    #[error("line {line}: room {name:?} reuses coordinates ({x}, {y}) of {other:?}")]
    DuplicateCoordinates {
        line:  usize,
        name:  String,
        other: String,
        x:     i64,
        y:     i64,
    },

    #[error("line {line}: second {role} room {name:?}")]
    DuplicateTerminal {
        line: usize,
        role: &'static str,
        name: String,
    },

    #[error("line {line}: ##{role} is not followed by a room")]
    DanglingCommand { line: usize, role: &'static str },

    #[error("line {line}: expected `a-b`, found {text:?}")]
    MalformedLink { line: usize, text: String },

    #[error("no links between rooms")]
    NoLinks,

    #[error("line {line}: {source}")]
    Link {
        line:   usize,
        #[source]
        source: ColonyError,
    },

    #[error("invalid colony: {0}")]
    Colony(#[from] ColonyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, FarmError>`.
pub type FarmResult<T> = Result<T, FarmError>;

/// Errors that can occur when writing move output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
