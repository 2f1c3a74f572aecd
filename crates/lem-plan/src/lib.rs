//! `lem-plan`: choose routes and split ants across them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`selector`]  | `RouteSet`, `Selection`, `PathSelector`                    |
//! | [`allocator`] | `split_counts`, `assign_identities`, `Assignment`          |
//! | [`planner`]   | `Planner<E>`: enumerate → select → allocate                |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                               |
//!
//! # Completion-time model
//!
//! Routes r₁..rₖ carrying a₁..aₖ ants finish after
//!
//! ```text
//! max over aᵢ > 0 of  length(rᵢ) + aᵢ − 1
//! ```
//!
//! turns: route i launches one ant per turn starting at turn 1, and its last
//! ant leaves on turn aᵢ.  Selector and allocator optimise the same number.

pub mod allocator;
pub mod error;
pub mod planner;
pub mod selector;


pub use allocator::{assign_identities, makespan, optimal_makespan, split_counts, Assignment};
pub use error::{PlanError, PlanResult};
pub use planner::{Plan, Planner};
pub use selector::{PathSelector, RouteSet, Selection};
