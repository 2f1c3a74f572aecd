//! Per-ant movement state.

use lem_colony::Route;
use lem_core::{AntId, RoomId, RouteId};
use lem_plan::Assignment;

/// Where one ant is along its assigned route.
///
/// An ant is **waiting** while `position` is below the route length (position
/// 0 is the entry) and **finished** once it has stepped into the exit.
/// Finished ants never move again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntState {
    pub ant:      AntId,
    pub route:    RouteId,
    /// Index into the route's room sequence.
    pub position: usize,
    pub finished: bool,
}

impl AntState {
    /// An ant standing in the entry, about to walk `route`.
    #[inline]
    pub fn waiting(ant: AntId, route: RouteId) -> Self {
        Self {
            ant,
            route,
            position: 0,
            finished: false,
        }
    }

    /// Room currently occupied, given the ant's own route.
    pub fn room(&self, route: &Route) -> RoomId {
        route.room(self.position)
    }
}

/// One waiting ant per id in `assignment`, sorted by ant id.
pub fn initial_states(assignment: &Assignment) -> Vec<AntState> {
    let mut ants: Vec<AntState> = assignment
        .iter()
        .flat_map(|(route, ids)| ids.iter().map(move |&ant| AntState::waiting(ant, route)))
        .collect();
    ants.sort_unstable_by_key(|a| a.ant);
    ants
}
