//! Ant allocation: how many ants per route, and which ones.
//!
//! # Counts
//!
//! Ants are handed out one at a time to the route with the smallest
//! projected finish `length + count`.  Each increment therefore lands where
//! it raises the eventual maximum the least, which makes the greedy split
//! optimal for the completion-time objective.  Ties go to the route with
//! fewer ants so far, then to the earlier route.
//!
//! # Identities
//!
//! Once counts are fixed, ids `1..=N` are dealt in round-robin layers across
//! the routes that still have capacity, in route-set order.  Turn 1 thus
//! launches one ant on every route, and ids grow roughly in finishing order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use lem_core::{AntId, RouteId};

// ── Counts ────────────────────────────────────────────────────────────────────

/// Greedy split of `ants` ants over routes of the given lengths.
///
/// Returns one count per route, in input order, summing to `ants`.
pub fn split_counts(lengths: &[usize], ants: u32) -> Vec<u32> {
    let mut counts = vec![0u32; lengths.len()];
    if lengths.is_empty() {
        return counts;
    }

    // Min-heap keyed by (projected finish, ants so far, route index).
    // Reverse makes BinaryHeap (max) behave as min-heap; the trailing index
    // keeps tie-breaking deterministic.
    let mut heap: BinaryHeap<Reverse<(usize, u32, usize)>> = lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| Reverse((len, 0, i)))
        .collect();

    for _ in 0..ants {
        let Some(Reverse((finish, count, i))) = heap.pop() else {
            break;
        };
        counts[i] = count + 1;
        heap.push(Reverse((finish + 1, count + 1, i)));
    }
    counts
}

/// Turns needed to drain routes of `lengths` carrying `counts` ants.
///
/// Routes with no ants do not contribute.  Returns 0 if no route carries
/// an ant.
pub fn makespan(lengths: &[usize], counts: &[u32]) -> usize {
    lengths
        .iter()
        .zip(counts)
        .filter(|&(_, &c)| c > 0)
        .map(|(&len, &c)| len + c as usize - 1)
        .max()
        .unwrap_or(0)
}

/// Smallest achievable makespan for `ants` ants over routes of `lengths`,
/// ignoring which split achieves it.
///
/// This is the least `T` with `Σ max(0, T − lengthᵢ + 1) ≥ ants`.  The
/// selector uses it as a lower bound; tests use it to cross-check the greedy
/// split.  Returns `None` for an empty route list or zero ants.
pub fn optimal_makespan<I>(lengths: I, ants: u32) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
    I::IntoIter: Clone,
{
    let lengths = lengths.into_iter();
    let shortest = lengths.clone().min()?;
    if ants == 0 {
        return None;
    }
    let capacity = |t: usize| -> usize {
        lengths.clone().map(|len| (t + 1).saturating_sub(len)).sum()
    };

    // Everything on the shortest route is always feasible.
    let (mut lo, mut hi) = (shortest, shortest + ants as usize - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if capacity(mid) >= ants as usize {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Some(lo)
}

// ── Identities ────────────────────────────────────────────────────────────────

/// Ant ids assigned to each route of a route set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    per_route: Vec<Vec<AntId>>,
}

impl Assignment {
    /// Ants on `route`, in launch order.
    pub fn ants_on(&self, route: RouteId) -> &[AntId] {
        &self.per_route[route.index()]
    }

    /// `(route, ants)` pairs in route-set order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteId, &[AntId])> + '_ {
        self.per_route
            .iter()
            .enumerate()
            .map(|(i, ants)| (RouteId::from_index(i), ants.as_slice()))
    }

    pub fn route_count(&self) -> usize {
        self.per_route.len()
    }

    pub fn ant_count(&self) -> usize {
        self.per_route.iter().map(Vec::len).sum()
    }

    pub fn counts(&self) -> Vec<u32> {
        self.per_route.iter().map(|a| a.len() as u32).collect()
    }

    /// Route carrying `ant`, if it was assigned.
    pub fn route_of(&self, ant: AntId) -> Option<RouteId> {
        self.iter()
            .find(|(_, ants)| ants.contains(&ant))
            .map(|(route, _)| route)
    }
}

/// Deal ids `1..=Σcounts` across routes in round-robin layers.
pub fn assign_identities(counts: &[u32]) -> Assignment {
    let mut remaining = counts.to_vec();
    let mut per_route: Vec<Vec<AntId>> = counts
        .iter()
        .map(|&c| Vec::with_capacity(c as usize))
        .collect();

    let mut next = 1u32;
    loop {
        let mut dealt = false;
        for (ants, left) in per_route.iter_mut().zip(remaining.iter_mut()) {
            if *left > 0 {
                ants.push(AntId(next));
                next += 1;
                *left -= 1;
                dealt = true;
            }
        }
        if !dealt {
            break;
        }
    }
    Assignment { per_route }
}
