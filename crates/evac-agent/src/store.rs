//! The active-agent set.
//!
//! # Ordering
//!
//! Agents are kept in insertion order and every phase visits them in that
//! order.  Removal preserves the order of the survivors, so the sequence of
//! RNG draws for a run depends only on the seed and the edits made to it.
//!
//! IDs come from a monotone counter and are never reused, even after the
//! agent has left through the exit.

use evac_core::{AgentId, GridPos, Strategy};

use crate::Agent;

/// Map keyed by grid position.  FxHash with the `fx-hash` feature.
#[cfg(feature = "fx-hash")]
pub type PosMap<V> = rustc_hash::FxHashMap<GridPos, V>;

/// Map keyed by grid position.  FxHash with the `fx-hash` feature.
#[cfg(not(feature = "fx-hash"))]
pub type PosMap<V> = std::collections::HashMap<GridPos, V>;

/// Position → agent lookup, rebuilt from the store at the start of each
/// phase.
pub type PositionIndex = PosMap<AgentId>;

#[derive(Default)]
pub struct AgentStore {
    agents:  Vec<Agent>,
    next_id: u32,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Create an agent at `pos` and return its fresh ID.
    ///
    /// The store does not check the grid; callers make sure the cell is free.
    pub fn insert(&mut self, pos: GridPos, strategy: Strategy) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.agents.push(Agent::new(id, pos, strategy));
        id
    }

    /// IDs are handed out in increasing order and removal keeps order, so
    /// the vector is always sorted by ID.
    fn slot(&self, id: AgentId) -> Option<usize> {
        self.agents.binary_search_by_key(&id, |a| a.id).ok()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.slot(id).map(|i| &self.agents[i])
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.slot(id).map(move |i| &mut self.agents[i])
    }

    /// Remove and return the agent, keeping the order of the rest.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        self.slot(id).map(|i| self.agents.remove(i))
    }

    /// The agent standing on `pos`, if any.
    pub fn agent_at(&self, pos: GridPos) -> Option<&Agent> {
        self.agents.iter().find(|a| a.pos() == pos)
    }

    pub fn agent_at_mut(&mut self, pos: GridPos) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.pos() == pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.iter_mut()
    }

    /// Agents as a slice, in visiting order.
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(|a| a.id)
    }

    /// Build a fresh position → agent map.
    pub fn position_index(&self) -> PositionIndex {
        let mut index = PositionIndex::default();
        index.reserve(self.agents.len());
        for a in &self.agents {
            index.insert(a.pos(), a.id);
        }
        index
    }

    /// Refresh every agent's distance to `exit` and its congestion index
    /// `t_i = |{j : d_j < d_i}| / exit_capacity`.
    pub fn update_congestion(&mut self, exit: GridPos, exit_capacity: u32) {
        for a in &mut self.agents {
            a.update_distance_to_exit(exit);
        }
        let mut sorted: Vec<f64> = self.agents.iter().map(|a| a.distance_to_exit).collect();
        sorted.sort_by(f64::total_cmp);
        let capacity = exit_capacity.max(1) as f64;
        for a in &mut self.agents {
            let closer = sorted.partition_point(|d| *d < a.distance_to_exit);
            a.congestion = closer as f64 / capacity;
        }
    }

    /// Promote every pending strategy.
    pub fn commit_strategies(&mut self) {
        for a in &mut self.agents {
            a.commit_strategy();
        }
    }

    /// Count of agents currently playing each strategy, as
    /// `(patient, impatient, neutral)`.
    pub fn strategy_counts(&self) -> (usize, usize, usize) {
        self.agents.iter().fold((0, 0, 0), |(p, i, n), a| match a.strategy {
            Strategy::Patient   => (p + 1, i, n),
            Strategy::Impatient => (p, i + 1, n),
            Strategy::Neutral   => (p, i, n + 1),
        })
    }
}
