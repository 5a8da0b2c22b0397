//! Plain data row types written by output backends.

use evac_agent::Agent;
use evac_core::{Strategy, Tick};
use evac_sim::StrategyShare;

/// Strategy counts after one strategy phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyShareRow {
    pub step:      u64,
    pub tick:      u64,
    pub agents:    u64,
    pub patient:   u64,
    pub impatient: u64,
    pub neutral:   u64,
}

impl From<&StrategyShare> for StrategyShareRow {
    fn from(s: &StrategyShare) -> Self {
        Self {
            step:      s.step,
            tick:      s.tick.0,
            agents:    s.agents as u64,
            patient:   s.patient as u64,
            impatient: s.impatient as u64,
            neutral:   s.neutral as u64,
        }
    }
}

/// One agent's cell and strategy at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        i32,
    pub y:        i32,
    pub strategy: Strategy,
}

impl AgentSnapshotRow {
    pub fn new(tick: Tick, agent: &Agent) -> Self {
        let pos = agent.pos();
        Self { agent_id: agent.id.0, tick: tick.0, x: pos.x, y: pos.y, strategy: agent.strategy }
    }
}

/// An agent leaving through the exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitRow {
    pub agent_id:  u32,
    pub tick:      u64,
    /// Cells visited, start cell included.
    pub route_len: u64,
}

impl ExitRow {
    pub fn new(tick: Tick, agent: &Agent) -> Self {
        Self { agent_id: agent.id.0, tick: tick.0, route_len: agent.route().len() as u64 }
    }
}
