//! Solver configuration.
//!
//! The defaults give an exact search: every simple route is enumerated and
//! every subset size is considered.  Both bounds exist as performance
//! safeguards for unusually large colonies; they narrow exploration but never
//! change how a candidate is scored.

/// Search bounds for the planning stages.
///
/// Typically built from command-line flags, optionally layered over a TOML
/// file loaded by the application crate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SolverConfig {
    /// Largest number of routes the selector combines.  `None` = no cap;
    /// `Some(0)` is treated as 1.
    pub max_subset_size: Option<usize>,

    /// Longest route (in tunnels) the enumerator records.  `None` = no cap.
    pub max_route_len: Option<usize>,
}

impl SolverConfig {
    /// Largest subset size worth searching for `route_count` candidates and
    /// `ants` ants.
    ///
    /// A combination with more routes than ants always leaves a route empty,
    /// so it can only tie with a smaller combination that is searched first.
    pub fn subset_limit(&self, route_count: usize, ants: u32) -> usize {
        let hard = route_count.min(ants as usize);
        match self.max_subset_size {
            Some(cap) => hard.min(cap.max(1)),
            None => hard,
        }
    }

    /// Overlay `other`'s explicitly set fields onto `self`.
    pub fn merged_with(mut self, other: &SolverConfig) -> SolverConfig {
        if other.max_subset_size.is_some() {
            self.max_subset_size = other.max_subset_size;
        }
        if other.max_route_len.is_some() {
            self.max_route_len = other.max_route_len;
        }
        self
    }
}
