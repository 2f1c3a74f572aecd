//! Colony construction errors.

use thiserror::Error;

/// Errors produced while building a [`Colony`][crate::Colony].
///
/// All of them are detected before any solving begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColonyError {
    #[error("duplicate room {0:?}")]
    DuplicateRoom(String),

    #[error("link {a}-{b} refers to unknown room {room:?}")]
    UnknownRoom { a: String, b: String, room: String },

    #[error("room {0:?} is linked to itself")]
    SelfLoop(String),

    #[error("no start room")]
    MissingEntry,

    #[error("no end room")]
    MissingExit,

    #[error("{role} room {room:?} does not exist")]
    UnknownTerminal { role: &'static str, room: String },

    #[error("start and end are the same room {0:?}")]
    EntryIsExit(String),
}

pub type ColonyResult<T> = Result<T, ColonyError>;
