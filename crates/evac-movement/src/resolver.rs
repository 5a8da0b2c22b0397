//! The movement phase driver.

use tracing::debug;

use evac_agent::{Agent, AgentStore};
use evac_core::{AgentId, EvacConfig, GridPos, SimRng};
use evac_grid::FloorFieldGrid;

use crate::{
    ContentionGroup, GrantedMove, MoveCandidates, MoveRequest, MovementError, MovementReport,
    MovementResult,
};

/// Runs one movement phase over a grid and an agent store.
///
/// Stateless: every parameter is read from the [`EvacConfig`] passed to
/// [`run_phase`](Self::run_phase), so edits made between phases take effect
/// on the next one.
#[derive(Default)]
pub struct MovementResolver;

impl MovementResolver {
    pub fn new() -> Self {
        Self
    }

    /// Sample, resolve, and apply one round of moves.
    pub fn run_phase(
        &self,
        grid:   &mut FloorFieldGrid,
        agents: &mut AgentStore,
        config: &EvacConfig,
        rng:    &mut SimRng,
    ) -> MovementResult<MovementReport> {
        let mut report = MovementReport::default();

        // ── Sample against the phase-start occupancy ──────────────────────
        let mut requests = Vec::with_capacity(agents.len());
        for agent in agents.iter() {
            let candidates = MoveCandidates::for_agent(agent, grid, config);
            match candidates.sample(rng) {
                Some(target) => requests.push(MoveRequest {
                    agent:    agent.id,
                    strategy: agent.strategy,
                    target,
                }),
                None => {
                    debug!(agent = %agent.id, pos = %agent.pos(), "no free cell to move to");
                    report.stalled.push(agent.id);
                }
            }
        }

        // ── Resolve and apply per target ──────────────────────────────────
        for group in ContentionGroup::group(&requests) {
            let capacity = self.capacity(grid, config, group.target);
            if group.is_contested(capacity) {
                report.contested.push(group.target);
            }
            let (winners, losers) = group.select(capacity, rng);
            if !losers.is_empty() {
                debug!(cell = %group.target, winners = winners.len(), losers = losers.len(), "contested target");
            }
            report.losers.extend(losers);

            for id in winners {
                if grid.is_exit(group.target) {
                    let agent = self.grant_exit(grid, agents, config, id)?;
                    report.exited.push(agent);
                } else {
                    let granted = self.grant_move(grid, agents, id, group.target)?;
                    report.moves.push(granted);
                }
            }
        }

        Ok(report)
    }

    /// Places available on `target` this phase.
    pub fn capacity(&self, grid: &FloorFieldGrid, config: &EvacConfig, target: GridPos) -> usize {
        if grid.is_exit(target) { config.exit_capacity as usize } else { 1 }
    }

    fn grant_move(
        &self,
        grid:   &mut FloorFieldGrid,
        agents: &mut AgentStore,
        id:     AgentId,
        to:     GridPos,
    ) -> MovementResult<GrantedMove> {
        let agent = agents.get_mut(id).ok_or(MovementError::AgentVanished(id))?;
        let from = agent.pos();
        agent.move_to(to);
        grid.set_occupied(from, false)?;
        grid.set_occupied(to, true)?;
        debug!(agent = %id, %from, %to, "moved");
        Ok(GrantedMove { agent: id, from, to })
    }

    /// Remove `id` through the exit and reward its route.
    ///
    /// Route entry `k` (1-based, oldest first) of an `n`-entry route receives
    /// `df_increase · k / n`, committed immediately, so cells near the exit
    /// end of the trail are reinforced most.
    fn grant_exit(
        &self,
        grid:   &mut FloorFieldGrid,
        agents: &mut AgentStore,
        config: &EvacConfig,
        id:     AgentId,
    ) -> MovementResult<Agent> {
        let agent = agents.remove(id).ok_or(MovementError::AgentVanished(id))?;
        grid.set_occupied(agent.pos(), false)?;

        let len = agent.route().len() as f64;
        for (rank, pos) in agent.route().iter().enumerate() {
            let amount = config.df_increase * (rank + 1) as f64 / len;
            grid.change_dynamic_field(*pos, amount)?;
            grid.commit_dynamic_field(*pos)?;
        }
        debug!(agent = %id, from = %agent.pos(), route_len = agent.route().len(), "left through the exit");
        Ok(agent)
    }
}
