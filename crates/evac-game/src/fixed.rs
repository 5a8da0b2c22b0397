//! A model that never changes anyone's mind.

use evac_agent::Agent;

use crate::{Decision, GameContext, StrategyModel};

/// Keeps every agent on its current strategy.  Useful for isolating the
/// movement phase, or for populations whose strategies are edited by hand.
pub struct FixedStrategy;

impl StrategyModel for FixedStrategy {
    fn decide(&self, agent: &Agent, _ctx: &GameContext<'_>) -> Decision {
        Decision { agent: agent.id, strategy: agent.strategy, costs: None }
    }
}
