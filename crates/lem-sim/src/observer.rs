//! Scheduler observer trait for progress reporting and data collection.

use lem_core::{MoveLog, Turn};

/// Callbacks invoked by [`MovementScheduler::run`][crate::MovementScheduler::run]
/// at turn boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Turn numbers are 1-based, matching the
/// printed output.
///
/// # Example: move counter
///
/// ```rust,ignore
/// struct Busiest { turn: usize, moves: usize }
///
/// impl SchedulerObserver for Busiest {
///     fn on_turn_end(&mut self, turn: usize, moves: &Turn) {
///         if moves.len() > self.moves {
///             (self.turn, self.moves) = (turn, moves.len());
///         }
///     }
/// }
/// ```
pub trait SchedulerObserver {
    /// Called before any ant moves in `turn`.
    fn on_turn_start(&mut self, _turn: usize) {}

    /// Called with the completed turn, moves sorted by ant id.
    fn on_turn_end(&mut self, _turn: usize, _moves: &Turn) {}

    /// Called once after the last ant reached the exit.
    fn on_run_end(&mut self, _log: &MoveLog) {}
}

/// A [`SchedulerObserver`] that does nothing.
pub struct NoopObserver;

impl SchedulerObserver for NoopObserver {}
