use lem_core::LemError;
use lem_plan::PlanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] LemError),

    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),

    #[error("no ant could move on turn {turn} with {unfinished} ants still on their way")]
    Stalled { turn: usize, unfinished: usize },

    #[error("move log violates the movement rules at turn {turn}: {detail}")]
    Violation { turn: usize, detail: String },
}

pub type SimResult<T> = Result<T, SimError>;
