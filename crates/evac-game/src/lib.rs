//! `evac-game`: the per-agent strategy game.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`table`]      | Interaction table, `delta_u`, PP/II congestion costs        |
//! | [`cost`]       | `StrategyCosts`: per-strategy sums and the tie-break        |
//! | [`context`]    | `GameContext<'a>`: frozen phase snapshot, neighbour lookup  |
//! | [`model`]      | `StrategyModel` trait, `Decision`                           |
//! | [`congestion`] | `CongestionGame`: the cost-minimising model                 |
//! | [`fixed`]      | `FixedStrategy`: keeps every agent's current strategy       |
//!
//! # Phase contract
//!
//! The strategy phase in `evac-sim` works as follows:
//!
//! 1. Refresh every agent's distance to the exit and congestion index.
//! 2. Build one `GameContext` over the frozen store and ask the model for a
//!    `Decision` per agent.  Models read `strategy` (never
//!    `pending_strategy`) of neighbours, so evaluation order does not matter.
//! 3. Write the decisions into the pending slots and commit them together.
//!
//! Because models only read, `StrategyModel` is `Send + Sync` and step 2 may
//! run on a thread pool.

pub mod congestion;
pub mod context;
pub mod cost;
pub mod fixed;
pub mod model;
pub mod table;


pub use congestion::CongestionGame;
pub use context::GameContext;
pub use cost::StrategyCosts;
pub use fixed::FixedStrategy;
pub use model::{Decision, StrategyModel};
