//! Read-only phase snapshot passed to every strategy model.

use evac_agent::{Agent, AgentStore, PositionIndex};
use evac_core::Tick;

/// A frozen view of the active agents for one strategy phase.
///
/// Built once per phase by `evac-sim` after congestion indices have been
/// refreshed, and shared immutably by every decision in that phase.
pub struct GameContext<'a> {
    pub tick:            Tick,
    /// `c`, the cost of congestion.
    pub congestion_cost: f64,
    pub agents:          &'a AgentStore,
    /// Position → agent map built from `agents` for this phase.
    pub index:           &'a PositionIndex,
}

impl<'a> GameContext<'a> {
    #[inline]
    pub fn new(tick: Tick, congestion_cost: f64, agents: &'a AgentStore, index: &'a PositionIndex) -> Self {
        Self { tick, congestion_cost, agents, index }
    }

    /// Every other agent within Chebyshev distance 1 of `agent`.
    pub fn neighbors(&self, agent: &Agent) -> impl Iterator<Item = &'a Agent> + '_ {
        let agents = self.agents;
        agent
            .pos()
            .moore_ring()
            .filter_map(move |p| self.index.get(&p))
            .filter_map(move |id| agents.get(*id))
    }
}
