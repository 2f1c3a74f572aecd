//! Route enumeration trait and default depth-first implementation.
//!
//! # Pluggability
//!
//! The planner calls enumeration via the [`PathEnumerator`] trait, so callers
//! can substitute a filtered or precomputed candidate list without touching
//! the selector.  The default [`DepthFirstEnumerator`] produces every simple
//! route.
//!
//! # Order
//!
//! Routes are produced in depth-first discovery order over the colony's
//! canonical neighbour order.  The selector's tie-break depends on this
//! order, so implementations must be deterministic.

use lem_core::{BitSet, RoomId, SolverConfig, TunnelId};
use tracing::debug;

use crate::{Colony, Route};

// ── PathEnumerator trait ──────────────────────────────────────────────────────

/// Source of candidate routes from entry to exit.
pub trait PathEnumerator {
    /// All candidate routes, in a deterministic order.  Empty if the entry
    /// and exit are disconnected.
    fn enumerate(&self, colony: &Colony) -> Vec<Route>;

    /// Apply the search bounds of `config`.  The default ignores them.
    fn configured(self, _config: &SolverConfig) -> Self
    where
        Self: Sized,
    {
        self
    }
}

// ── DepthFirstEnumerator ──────────────────────────────────────────────────────

/// Exhaustive simple-route enumeration.
///
/// Walks an explicit stack of `(room, neighbour cursor)` frames with a visited
/// bitset sized to the room count, so depth is bounded by the room count and
/// no recursion is involved.  Neighbours equal to the entry are never
/// stepped into.  Reaching the exit records a route and backtracks.
///
/// `max_len` optionally skips routes longer than the given number of
/// tunnels; the default is unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstEnumerator {
    pub max_len: Option<usize>,
}

impl DepthFirstEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_len(max_len: Option<usize>) -> Self {
        Self { max_len }
    }
}

impl PathEnumerator for DepthFirstEnumerator {
    /// An explicit `max_len` wins over `config.max_route_len`.
    fn configured(self, config: &SolverConfig) -> Self {
        Self { max_len: self.max_len.or(config.max_route_len) }
    }

    fn enumerate(&self, colony: &Colony) -> Vec<Route> {
        let routes = depth_first(colony, self.max_len.unwrap_or(usize::MAX));
        debug!(
            routes = routes.len(),
            rooms = colony.room_count(),
            tunnels = colony.tunnel_count(),
            "enumerated simple routes"
        );
        routes
    }
}

// ── Depth-first internals ─────────────────────────────────────────────────────

fn depth_first(colony: &Colony, max_len: usize) -> Vec<Route> {
    let entry = colony.entry();
    let exit  = colony.exit();
    let room_count = colony.room_count();

    let mut routes = Vec::new();
    if max_len == 0 {
        return routes;
    }

    let mut visited = BitSet::with_capacity(room_count);
    visited.insert(entry.index());

    // path[d] is the room at depth d; cursor[d] the next neighbour slot of
    // path[d] to try; tunnels[d] the tunnel from path[d] to path[d + 1].
    let mut path:    Vec<RoomId>   = vec![entry];
    let mut cursor:  Vec<usize>    = vec![0];
    let mut tunnels: Vec<TunnelId> = Vec::new();

    while let Some(&room) = path.last() {
        let depth = path.len() - 1;
        let neighbors = colony.neighbors(room);
        let slot = cursor[depth];

        if slot == neighbors.len() {
            // Exhausted: backtrack.
            visited.remove(room.index());
            path.pop();
            cursor.pop();
            tunnels.pop();
            continue;
        }
        cursor[depth] += 1;

        let next = neighbors[slot];
        if next == entry || visited.contains(next.index()) {
            continue;
        }
        let tunnel = colony.neighbor_tunnels(room)[slot];

        // A route through `next` has at least `path.len()` tunnels.
        if path.len() > max_len {
            continue;
        }

        if next == exit {
            let mut rooms = path.clone();
            rooms.push(exit);
            let mut steps = tunnels.clone();
            steps.push(tunnel);
            routes.push(Route::new(rooms, steps, room_count));
            continue;
        }

        visited.insert(next.index());
        path.push(next);
        cursor.push(0);
        tunnels.push(tunnel);
    }

    routes
}
