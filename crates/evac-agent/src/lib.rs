//! `evac-agent`: pedestrian state and the active-agent set.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`agent`]   | `Agent`: position, strategy double buffer, route, deterrents |
//! | [`store`]   | `AgentStore` (insertion-ordered active set), `PositionIndex` |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                       |
//! |-----------|--------------------------------------------------------------|
//! | `fx-hash` | `FxHashMap` for deterrents and the position index.           |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `Agent`.                |

pub mod agent;
pub mod store;


pub use agent::{Agent, INITIAL_DETERRENT};
pub use store::{AgentStore, PosMap, PositionIndex};
