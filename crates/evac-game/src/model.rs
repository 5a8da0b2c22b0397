//! The `StrategyModel` trait.

use evac_agent::Agent;
use evac_core::{AgentId, Strategy};

use crate::{GameContext, StrategyCosts};

/// The outcome of one agent's evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decision {
    pub agent:    AgentId,
    pub strategy: Strategy,
    /// The sums the choice was based on, for models that compute them.
    pub costs:    Option<StrategyCosts>,
}

/// Pluggable strategy selection.
///
/// Implementations must only read from the context: the simulation may
/// evaluate agents in any order, or in parallel with the `parallel` feature
/// of `evac-sim`, and commits the results in store order afterwards.
pub trait StrategyModel: Send + Sync + 'static {
    /// Pick the strategy `agent` should play next.
    fn decide(&self, agent: &Agent, ctx: &GameContext<'_>) -> Decision;
}
