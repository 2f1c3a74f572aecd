//! Plain data row types written by output backends.

use serde::Serialize;

/// One ant entering one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    /// 1-based turn number.
    pub turn: usize,
    pub ant:  u32,
    pub room: String,
}
