//! `MoveLogObserver<W>`: bridges `SchedulerObserver` to a `MoveWriter`.

use lem_colony::Colony;
use lem_core::{MoveLog, Turn};
use lem_sim::SchedulerObserver;

use crate::writer::MoveWriter;
use crate::{MoveRow, OutputError, OutputResult};

/// A [`SchedulerObserver`] that streams each turn to a [`MoveWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct MoveLogObserver<'c, W: MoveWriter> {
    writer:     W,
    colony:     &'c Colony,
    last_error: Option<OutputError>,
}

impl<'c, W: MoveWriter> MoveLogObserver<'c, W> {
    /// Create an observer backed by `writer`; `colony` supplies room names.
    pub fn new(writer: W, colony: &'c Colony) -> Self {
        Self {
            writer,
            colony,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: MoveWriter> SchedulerObserver for MoveLogObserver<'_, W> {
    fn on_turn_end(&mut self, turn: usize, moves: &Turn) {
        let rows = turn_rows(self.colony, turn, moves);
        let result = self.writer.write_moves(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _log: &MoveLog) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Rows for turn number `turn`.
pub fn turn_rows(colony: &Colony, turn: usize, moves: &Turn) -> Vec<MoveRow> {
    moves
        .iter()
        .map(|m| MoveRow {
            turn,
            ant:  m.ant.0,
            room: colony.room_name(m.room).to_owned(),
        })
        .collect()
}

/// Write a completed log to `writer` and finish it.
pub fn write_log<W: MoveWriter>(writer: &mut W, colony: &Colony, log: &MoveLog) -> OutputResult<()> {
    for (i, turn) in log.iter().enumerate() {
        writer.write_moves(&turn_rows(colony, i + 1, turn))?;
    }
    writer.finish()
}
