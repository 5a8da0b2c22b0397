//! A single pedestrian.

use evac_core::{AgentId, GridPos, Strategy};

use crate::store::PosMap;

/// Deterrent recorded the first time an agent stands on a cell.
pub const INITIAL_DETERRENT: f64 = 0.001;

/// One pedestrian.
///
/// # Strategy double buffer
///
/// The game writes `pending_strategy` for every agent while reading the
/// `strategy` of neighbours; [`Agent::commit_strategy`] promotes the pending
/// value once the whole phase has been evaluated.
///
/// # Route and deterrents
///
/// `route` starts with the placement cell and grows by one entry per granted
/// move, so its last entry is always the current position.  Each cell on the
/// route carries a deterrent: [`INITIAL_DETERRENT`] on the first visit, halved
/// on each revisit.  Movement weights toward visited cells are multiplied by
/// it, which keeps agents from oscillating.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:               AgentId,
    pub strategy:         Strategy,
    pub pending_strategy: Strategy,
    /// Euclidean distance to the exit, refreshed at the start of every
    /// strategy phase.
    pub distance_to_exit: f64,
    /// `t_i`: agents strictly closer to the exit, divided by exit capacity.
    pub congestion:       f64,
    pos:                  GridPos,
    route:                Vec<GridPos>,
    deterrents:           PosMap<f64>,
}

impl Agent {
    pub fn new(id: AgentId, pos: GridPos, strategy: Strategy) -> Self {
        let mut deterrents = PosMap::default();
        deterrents.insert(pos, INITIAL_DETERRENT);
        Self {
            id,
            strategy,
            pending_strategy: strategy,
            distance_to_exit: 0.0,
            congestion: 0.0,
            pos,
            route: vec![pos],
            deterrents,
        }
    }

    #[inline]
    pub fn pos(&self) -> GridPos {
        self.pos
    }

    /// Every cell stood on, in order, starting with the placement cell.
    #[inline]
    pub fn route(&self) -> &[GridPos] {
        &self.route
    }

    /// Step onto `pos`: append it to the route and update its deterrent.
    pub fn move_to(&mut self, pos: GridPos) {
        self.pos = pos;
        self.route.push(pos);
        self.deterrents
            .entry(pos)
            .and_modify(|d| *d /= 2.0)
            .or_insert(INITIAL_DETERRENT);
    }

    /// Deterrent for `pos`, or `None` if the agent has never stood there.
    #[inline]
    pub fn deterrent(&self, pos: GridPos) -> Option<f64> {
        self.deterrents.get(&pos).copied()
    }

    #[inline]
    pub fn has_visited(&self, pos: GridPos) -> bool {
        self.deterrents.contains_key(&pos)
    }

    #[inline]
    pub fn commit_strategy(&mut self) {
        self.strategy = self.pending_strategy;
    }

    /// Advance the strategy in effect to the next one in the
    /// Patient → Impatient → Neutral cycle.  The pending slot follows, so a
    /// commit without a game evaluation keeps the edit.
    pub fn cycle_strategy(&mut self) -> Strategy {
        self.strategy = self.strategy.cycled();
        self.pending_strategy = self.strategy;
        self.strategy
    }

    pub fn update_distance_to_exit(&mut self, exit: GridPos) {
        self.distance_to_exit = self.pos.distance(exit);
    }
}
