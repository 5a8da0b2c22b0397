//! Grouping of move requests and class-priority winner selection.

use evac_agent::PosMap;
use evac_core::{AgentId, GridPos, SimRng, Strategy};

/// One agent's sampled target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub agent:    AgentId,
    pub strategy: Strategy,
    pub target:   GridPos,
}

/// Every request for one target, in request order.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentionGroup {
    pub target:     GridPos,
    pub contenders: Vec<(AgentId, Strategy)>,
}

impl ContentionGroup {
    /// Group `requests` by target.  Groups appear in order of their first
    /// request.
    pub fn group(requests: &[MoveRequest]) -> Vec<ContentionGroup> {
        let mut slot: PosMap<usize> = PosMap::default();
        let mut groups: Vec<ContentionGroup> = Vec::new();
        for r in requests {
            let i = *slot.entry(r.target).or_insert_with(|| {
                groups.push(ContentionGroup { target: r.target, contenders: Vec::new() });
                groups.len() - 1
            });
            groups[i].contenders.push((r.agent, r.strategy));
        }
        groups
    }

    #[inline]
    pub fn is_contested(&self, capacity: usize) -> bool {
        self.contenders.len() > capacity
    }

    /// Split the contenders into `(winners, losers)`.
    ///
    /// With room for everyone all are granted in request order.  Otherwise
    /// places go to Impatient agents first, then Patient, then Neutral; within
    /// a class each place goes to a uniformly drawn remaining member.
    pub fn select(&self, capacity: usize, rng: &mut SimRng) -> (Vec<AgentId>, Vec<AgentId>) {
        if !self.is_contested(capacity) {
            return (self.contenders.iter().map(|(a, _)| *a).collect(), Vec::new());
        }

        let mut winners = Vec::with_capacity(capacity);
        let mut losers = Vec::new();
        for class in [Strategy::Impatient, Strategy::Patient, Strategy::Neutral] {
            let mut pool: Vec<AgentId> = self
                .contenders
                .iter()
                .filter(|(_, s)| *s == class)
                .map(|(a, _)| *a)
                .collect();
            while winners.len() < capacity {
                let Some(i) = rng.choose_index(pool.len()) else { break };
                winners.push(pool.swap_remove(i));
            }
            losers.extend(pool);
        }
        (winners, losers)
    }
}
