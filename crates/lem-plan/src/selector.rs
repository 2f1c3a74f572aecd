//! Route-set selection by exact combinatorial search.
//!
//! # Search order
//!
//! 1. Candidates are stable-sorted by length, so equal-length routes keep
//!    their enumeration order.
//! 2. Subset sizes are tried from 1 upward, never past the degree of the
//!    entry or the exit, and the search stops at the first size with no
//!    interior-disjoint combination.  Within a size, combinations are
//!    visited in lexicographic order of sorted index by a depth-first
//!    branch-and-bound:
//!    - a route whose interior intersects the rooms already claimed by the
//!      partial combination is skipped (bitset AND);
//!    - once the best possible makespan of any completion (assuming the
//!      remaining routes are as short as the next candidate) cannot beat the
//!      incumbent, the rest of that branch is cut, since later candidates are
//!      only longer.
//! 3. Each complete combination is scored with the greedy split of
//!    [`split_counts`](crate::split_counts).  Only a strictly smaller
//!    makespan replaces the incumbent, so ties keep the first combination
//!    found.

use lem_colony::{Colony, Route};
use lem_core::{BitSet, RouteId, SolverConfig};
use tracing::{debug, trace};

use crate::allocator::{makespan, optimal_makespan, split_counts};
use crate::{PlanError, PlanResult};

// ── RouteSet ──────────────────────────────────────────────────────────────────

/// Routes chosen to run concurrently.  No two share an interior room.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Wrap `routes`, checking that their interiors are pairwise disjoint.
    ///
    /// Returns `None` if any two routes share an interior room.
    pub fn new(routes: Vec<Route>) -> Option<Self> {
        let disjoint = routes
            .iter()
            .enumerate()
            .all(|(i, a)| routes[i + 1..].iter().all(|b| a.is_disjoint(b)));
        disjoint.then_some(Self { routes })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, id: RouteId) -> &Route {
        &self.routes[id.index()]
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, r)| (RouteId::from_index(i), r))
    }

    pub fn lengths(&self) -> Vec<usize> {
        self.routes.iter().map(Route::length).collect()
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// The selector's verdict: routes in evaluation order, the ant count for
/// each, and the resulting number of turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub routes:   RouteSet,
    pub counts:   Vec<u32>,
    pub makespan: usize,
}

// ── PathSelector ──────────────────────────────────────────────────────────────

/// Picks the interior-disjoint route subset with the smallest makespan.
#[derive(Debug, Clone, Default)]
pub struct PathSelector {
    config: SolverConfig,
}

impl PathSelector {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Choose routes for `ants` ants among `candidates`.
    ///
    /// `colony` is only consulted for room count and diagnostics.
    ///
    /// # Errors
    /// - [`PlanError::InvalidAntCount`] if `ants == 0`.
    /// - [`PlanError::NoRoute`] if `candidates` is empty.
    pub fn select(
        &self,
        colony:     &Colony,
        candidates: Vec<Route>,
        ants:       u32,
    ) -> PlanResult<Selection> {
        if ants == 0 {
            return Err(PlanError::InvalidAntCount(ants));
        }
        if candidates.is_empty() {
            return Err(PlanError::NoRoute {
                entry: colony.room_name(colony.entry()).to_owned(),
                exit:  colony.room_name(colony.exit()).to_owned(),
            });
        }

        let mut sorted = candidates;
        sorted.sort_by_key(Route::length); // stable

        // Disjoint routes leave the entry and reach the exit by distinct tunnels.
        let fan = colony.degree(colony.entry()).min(colony.degree(colony.exit()));
        let limit = self.config.subset_limit(sorted.len(), ants).min(fan.max(1));
        debug!(candidates = sorted.len(), limit, ants, "selecting route set");

        let mut search = Search {
            routes:    &sorted,
            lengths:   sorted.iter().map(Route::length).collect(),
            ants,
            size:      0,
            chosen:    Vec::with_capacity(limit),
            best:      None,
            evaluated: 0,
            pruned:    0,
        };
        let empty = BitSet::with_capacity(colony.room_count());
        for size in 1..=limit {
            search.size = size;
            if !search.descend(0, &empty) {
                trace!(size, "no disjoint combination of this size");
                break;
            }
        }

        let Search { best, evaluated, pruned, .. } = search;
        // Size 1 always scores the first candidate, so `best` is set.
        let Some(best) = best else {
            return Err(PlanError::NoRoute {
                entry: colony.room_name(colony.entry()).to_owned(),
                exit:  colony.room_name(colony.exit()).to_owned(),
            });
        };
        debug!(
            makespan = best.makespan,
            routes = best.indices.len(),
            evaluated,
            pruned,
            "route set selected"
        );

        let routes = best.indices.iter().map(|&i| sorted[i].clone()).collect();
        Ok(Selection {
            routes:   RouteSet { routes },
            counts:   best.counts,
            makespan: best.makespan,
        })
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

struct Best {
    indices:  Vec<usize>,
    counts:   Vec<u32>,
    makespan: usize,
}

struct Search<'a> {
    routes:    &'a [Route],
    lengths:   Vec<usize>,
    ants:      u32,
    /// Exact subset size being searched.
    size:      usize,
    chosen:    Vec<usize>,
    best:      Option<Best>,
    evaluated: u64,
    pruned:    u64,
}

impl Search<'_> {
    /// Returns `false` only if no interior-disjoint combination of `size`
    /// routes extends the current partial one.  A bound cut counts as `true`.
    fn descend(&mut self, start: usize, claimed: &BitSet) -> bool {
        if self.chosen.len() == self.size {
            self.evaluate();
            return true;
        }
        let needed = self.size - self.chosen.len();
        let last_start = self.routes.len() - needed;

        let routes = self.routes;
        let mut open = false;
        for i in start..=last_start {
            if self.cannot_improve(i, needed) {
                self.pruned += 1;
                open = true;
                break;
            }
            let route = &routes[i];
            if !route.interior().is_disjoint(claimed) {
                self.pruned += 1;
                continue;
            }
            let mut next = claimed.clone();
            next.union_with(route.interior());
            self.chosen.push(i);
            open |= self.descend(i + 1, &next);
            self.chosen.pop();
        }
        open
    }

    /// `true` if no completion using candidate `i` and later can beat the
    /// incumbent.
    fn cannot_improve(&self, i: usize, needed: usize) -> bool {
        let Some(best) = &self.best else {
            return false;
        };
        let optimistic = self
            .chosen
            .iter()
            .map(|&c| self.lengths[c])
            .chain(std::iter::repeat_n(self.lengths[i], needed));
        optimal_makespan(optimistic, self.ants).is_some_and(|lb| lb >= best.makespan)
    }

    fn evaluate(&mut self) {
        self.evaluated += 1;
        let lengths: Vec<usize> = self.chosen.iter().map(|&i| self.lengths[i]).collect();
        let counts = split_counts(&lengths, self.ants);
        let turns = makespan(&lengths, &counts);
        trace!(combo = ?self.chosen, turns, "combination scored");

        if self.best.as_ref().is_none_or(|b| turns < b.makespan) {
            self.best = Some(Best {
                indices:  self.chosen.clone(),
                counts,
                makespan: turns,
            });
        }
    }
}
