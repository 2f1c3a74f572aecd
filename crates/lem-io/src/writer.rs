//! The `MoveWriter` trait implemented by move-log backends.

use crate::{MoveRow, OutputResult};

/// A sink for move rows.
pub trait MoveWriter {
    /// Write the moves of one turn.
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()>;

    /// Flush the underlying output.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
