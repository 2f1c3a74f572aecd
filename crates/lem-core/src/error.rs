//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `LemError` via `From` or wrap it as one variant.  Prefer whichever keeps
//! error sites clean.

use thiserror::Error;

/// Errors shared by every `lem-*` crate.
#[derive(Debug, Error)]
pub enum LemError {
    #[error("invalid number of ants: {0} (must be at least 1)")]
    InvalidAntCount(u64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `lem-core` operations.
pub type LemResult<T> = Result<T, LemError>;

/// Validate a requested ant count and narrow it to the id width.
pub fn check_ant_count(ants: u64) -> LemResult<u32> {
    match u32::try_from(ants) {
        Ok(n) if n >= 1 && n < u32::MAX => Ok(n),
        _ => Err(LemError::InvalidAntCount(ants)),
    }
}
