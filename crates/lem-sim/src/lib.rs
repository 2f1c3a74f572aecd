//! `lem-sim`: turn loop that walks planned ants to the exit.
//!
//! # Turn loop
//!
//! ```text
//! until every ant has reached the exit:
//!   ① Order   : stable-sort the ant queue by descending route position,
//!                so ants further along move first.
//!   ② Move    : each ant steps to the next room on its route unless the
//!                tunnel was already crossed this turn, or the room (other
//!                than the exit) was already entered this turn.
//!   ③ Report  : the turn's moves, sorted by ant id, go to the log and
//!                the observer.
//! ```
//!
//! A turn in which no ant can move while ants remain is reported as
//! [`SimError::Stalled`].  With an interior-disjoint route set this cannot
//! happen: the leading ant of every route always advances.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lem_sim::{NoopObserver, SolverBuilder};
//!
//! let solver = SolverBuilder::new(colony, 10).config(config).build()?;
//! let log = solver.run(&mut NoopObserver)?;
//! assert_eq!(log.makespan(), solver.plan.makespan);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod state;
pub mod verify;


pub use builder::{Solver, SolverBuilder};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SchedulerObserver};
pub use scheduler::MovementScheduler;
pub use state::AntState;
pub use verify::check_move_log;
