//! `lem-colony`: colony graph, routes, and route enumeration.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`colony`]    | `Colony` (CSR adjacency + name table), `ColonyBuilder`     |
//! | [`route`]     | `Route`: rooms, tunnels, interior bitset                   |
//! | [`enumerate`] | `PathEnumerator` trait, `DepthFirstEnumerator`             |
//! | [`error`]     | `ColonyError`, `ColonyResult<T>`                           |
//!
//! # Determinism
//!
//! Neighbour order is the order in which links were first added to the
//! builder.  Room and tunnel ids are dense and assigned in insertion order.
//! Nothing downstream iterates a hash map, so identical input always yields
//! identical routes in identical order.

pub mod colony;
pub mod enumerate;
pub mod error;
pub mod route;

#[cfg(test)]
mod tests;

pub use colony::{Colony, ColonyBuilder};
pub use enumerate::{DepthFirstEnumerator, PathEnumerator};
pub use error::{ColonyError, ColonyResult};
pub use route::Route;
