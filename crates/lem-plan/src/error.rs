use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("no route from {entry:?} to {exit:?}")]
    NoRoute { entry: String, exit: String },

    #[error("invalid number of ants: {0}")]
    InvalidAntCount(u32),
}

pub type PlanResult<T> = Result<T, PlanError>;
