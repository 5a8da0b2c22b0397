//! `evac-sim`: phase loop orchestrator for the bottleneck evacuation
//! automaton.
//!
//! # Two-phase loop
//!
//! ```text
//! tick 0, 2, 4, …  Strategy  ① refresh distance-to-exit and t_i
//!                            ② rebuild the position index
//!                            ③ StrategyModel::decide per agent
//!                               (parallel with the `parallel` feature)
//!                            ④ commit all decisions, record StrategyShare
//! tick 1, 3, 5, …  Movement  ① sample one target per agent
//!                            ② resolve contention by capacity and class
//!                            ③ apply moves, remove and reward exiting agents
//!                            ④ diffuse the dynamic field
//! ```
//!
//! A step with no agents is a no-op.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the strategy decisions on Rayon's thread pool.     |
//! | `fx-hash`  | FxHash for the per-phase position index.                |
//! | `serde`    | Derives on `StrategyShare` and the re-exported types.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evac_core::EvacConfig;
//! use evac_game::CongestionGame;
//! use evac_sim::{NoopObserver, PopulationWeights, SimBuilder};
//!
//! let mut sim = SimBuilder::new(EvacConfig::default(), CongestionGame)
//!     .populate(PopulationWeights::new(0.03, 0.03, 0.03))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{} strategy steps", sim.history().len());
//! ```

pub mod builder;
pub mod error;
pub mod history;
pub mod observer;
pub mod population;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use history::{StrategyHistory, StrategyShare};
pub use observer::{NoopObserver, PhaseSummary, SimObserver};
pub use population::PopulationWeights;
pub use sim::{ClearedCell, Sim};
