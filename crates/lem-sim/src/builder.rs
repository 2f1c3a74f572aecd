//! Fluent builder for constructing a [`Solver`].

use lem_colony::{Colony, DepthFirstEnumerator, PathEnumerator};
use lem_core::error::check_ant_count;
use lem_core::{MoveLog, SolverConfig};
use lem_plan::{Plan, Planner};

use crate::{MovementScheduler, SchedulerObserver, SimResult};

// ── Solver ────────────────────────────────────────────────────────────────────

/// A planned colony, ready to schedule.
///
/// Create via [`SolverBuilder`].
#[derive(Debug, Clone)]
pub struct Solver {
    pub colony: Colony,
    pub ants:   u32,
    pub plan:   Plan,
}

impl Solver {
    /// A fresh scheduler over this solver's plan.
    pub fn scheduler(&self) -> MovementScheduler<'_> {
        MovementScheduler::for_plan(&self.colony, &self.plan)
    }

    /// Schedule every ant to the exit and return the move log.
    pub fn run<O: SchedulerObserver>(&self, observer: &mut O) -> SimResult<MoveLog> {
        self.scheduler().run(observer)
    }
}

// ── SolverBuilder ─────────────────────────────────────────────────────────────

/// Fluent builder for [`Solver`].
///
/// # Required inputs
///
/// - [`Colony`]: a validated graph from [`lem_colony::ColonyBuilder`]
/// - ant count: as read from the input, checked in [`build`](Self::build)
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                          |
/// |--------------------|----------------------------------|
/// | `.config(c)`       | `SolverConfig::default()`        |
/// | `.enumerator(e)`   | `DepthFirstEnumerator::new()`    |
///
/// # Example
///
/// ```rust,ignore
/// let solver = SolverBuilder::new(colony, 4)
///     .config(SolverConfig { max_subset_size: Some(3), ..Default::default() })
///     .build()?;
/// let log = solver.run(&mut NoopObserver)?;
/// ```
pub struct SolverBuilder<E: PathEnumerator = DepthFirstEnumerator> {
    colony:     Colony,
    ants:       u64,
    config:     SolverConfig,
    enumerator: E,
}

impl SolverBuilder<DepthFirstEnumerator> {
    pub fn new(colony: Colony, ants: u64) -> Self {
        Self {
            colony,
            ants,
            config:     SolverConfig::default(),
            enumerator: DepthFirstEnumerator::new(),
        }
    }
}

impl<E: PathEnumerator> SolverBuilder<E> {
    /// Search bounds for enumeration and selection.
    pub fn config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the candidate route source.
    pub fn enumerator<E2: PathEnumerator>(self, enumerator: E2) -> SolverBuilder<E2> {
        SolverBuilder {
            colony: self.colony,
            ants:   self.ants,
            config: self.config,
            enumerator,
        }
    }

    /// Check the ant count and run the planning stages.
    ///
    /// # Errors
    /// - [`SimError::Core`][crate::SimError::Core] for an ant count of zero or
    ///   one that does not fit the id width.
    /// - [`SimError::Plan`][crate::SimError::Plan] if the entry cannot reach
    ///   the exit.
    pub fn build(self) -> SimResult<Solver> {
        let ants = check_ant_count(self.ants)?;
        let plan = Planner::new(self.enumerator, self.config).plan(&self.colony, ants)?;
        Ok(Solver {
            colony: self.colony,
            ants,
            plan,
        })
    }
}
