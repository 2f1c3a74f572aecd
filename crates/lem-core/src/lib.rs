//! `lem-core`: foundational types for the lem-in route planner.
//!
//! This crate is a dependency of every other `lem-*` crate.  It intentionally
//! has no `lem-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RoomId`, `TunnelId`, `AntId`, `RouteId`              |
//! | [`bitset`]      | `BitSet`: fixed-size dense index set                  |
//! | [`config`]      | `SolverConfig` search bounds                          |
//! | [`moves`]       | `Move`, `Turn`, `MoveLog`                             |
//! | [`error`]       | `LemError`, `LemResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod bitset;
pub mod config;
pub mod error;
pub mod ids;
pub mod moves;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bitset::BitSet;
pub use config::SolverConfig;
pub use error::{LemError, LemResult};
pub use ids::{AntId, RoomId, RouteId, TunnelId};
pub use moves::{Move, MoveLog, Turn};
