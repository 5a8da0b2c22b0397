//! `evac-core`: foundational types for the bottleneck evacuation automaton.
//!
//! This crate is a dependency of every other `evac-*` crate.  It has no
//! `evac-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `GridPos`, Euclidean / Chebyshev distance, Moore offsets |
//! | [`strategy`]    | `Strategy` enum (Patient, Impatient, Neutral)         |
//! | [`time`]        | `Tick`, `Phase`                                       |
//! | [`config`]      | `EvacConfig`, model parameters and run settings       |
//! | [`rng`]         | `SimRng` (seeded, passed explicitly)                  |
//! | [`error`]       | `EvacError`, `EvacResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod strategy;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EvacConfig;
pub use error::{EvacError, EvacResult};
pub use geo::GridPos;
pub use ids::AgentId;
pub use rng::SimRng;
pub use strategy::Strategy;
pub use time::{Phase, Tick};
