//! Enumerate → select → allocate, as one call.

use lem_colony::{Colony, DepthFirstEnumerator, PathEnumerator};
use lem_core::SolverConfig;
use tracing::info;

use crate::allocator::{assign_identities, Assignment};
use crate::selector::{PathSelector, RouteSet};
use crate::PlanResult;

/// Output of the planning stages: which routes run, which ants walk each
/// one, and the predicted number of turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub routes:     RouteSet,
    pub assignment: Assignment,
    /// `max (length + ants − 1)` over routes carrying ants.
    pub makespan:   usize,
    /// Number of candidate routes the enumerator produced.
    pub candidates: usize,
}

/// Runs the planning stages over a colony.
///
/// # Type parameter
///
/// `E` must implement [`PathEnumerator`] (e.g. [`DepthFirstEnumerator`]).
/// Swap it at compile time for a different candidate source.
#[derive(Debug, Clone)]
pub struct Planner<E: PathEnumerator> {
    pub enumerator: E,
    pub selector:   PathSelector,
}

impl Planner<DepthFirstEnumerator> {
    /// Exhaustive enumeration bounded only by `config.max_route_len`.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(DepthFirstEnumerator::new(), config.clone())
    }
}

impl<E: PathEnumerator> Planner<E> {
    /// The enumerator is [`configured`](PathEnumerator::configured) with
    /// `config` before use.
    pub fn new(enumerator: E, config: SolverConfig) -> Self {
        Self {
            enumerator: enumerator.configured(&config),
            selector: PathSelector::new(config),
        }
    }

    /// Plan the movement of `ants` ants through `colony`.
    pub fn plan(&self, colony: &Colony, ants: u32) -> PlanResult<Plan> {
        let candidates = self.enumerator.enumerate(colony);
        let candidate_count = candidates.len();

        let selection = self.selector.select(colony, candidates, ants)?;
        let assignment = assign_identities(&selection.counts);

        info!(
            candidates = candidate_count,
            routes = selection.routes.len(),
            ants,
            makespan = selection.makespan,
            "plan ready"
        );

        Ok(Plan {
            routes:     selection.routes,
            assignment,
            makespan:   selection.makespan,
            candidates: candidate_count,
        })
    }
}
