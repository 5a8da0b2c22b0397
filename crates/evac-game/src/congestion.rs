//! The cost-minimising congestion game.

use evac_agent::Agent;

use crate::{Decision, GameContext, StrategyCosts, StrategyModel};

/// Each agent sums, over its Moore neighbours, the cost of playing each
/// strategy against the neighbour's current one, and picks the cheapest.
/// An agent with no neighbours sees three zero sums and stays patient.
pub struct CongestionGame;

impl CongestionGame {
    /// The three cost sums for `agent`.
    pub fn costs(agent: &Agent, ctx: &GameContext<'_>) -> StrategyCosts {
        let mut costs = StrategyCosts::default();
        for other in ctx.neighbors(agent) {
            costs.add_neighbor(agent.congestion, other.strategy, other.congestion, ctx.congestion_cost);
        }
        costs
    }
}

impl StrategyModel for CongestionGame {
    fn decide(&self, agent: &Agent, ctx: &GameContext<'_>) -> Decision {
        let costs = Self::costs(agent, ctx);
        Decision { agent: agent.id, strategy: costs.cheapest(), costs: Some(costs) }
    }
}
