//! What happened during one movement phase.

use evac_agent::Agent;
use evac_core::{AgentId, GridPos};

/// A granted step onto an ordinary cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GrantedMove {
    pub agent: AgentId,
    pub from:  GridPos,
    pub to:    GridPos,
}

/// Summary of one movement phase.
#[derive(Debug, Default)]
pub struct MovementReport {
    /// Granted moves onto ordinary cells, in application order.
    pub moves:     Vec<GrantedMove>,
    /// Agents granted the exit, as they were when they left.
    pub exited:    Vec<Agent>,
    /// Agents whose every candidate had zero weight.
    pub stalled:   Vec<AgentId>,
    /// Targets that had more contenders than capacity.
    pub contested: Vec<GridPos>,
    /// Agents that requested a contested target and were not served.
    pub losers:    Vec<AgentId>,
}

impl MovementReport {
    /// Number of agents that changed position or left.
    pub fn movers(&self) -> usize {
        self.moves.len() + self.exited.len()
    }
}
