//! The `Sim` struct, its phase loop, and the edit surface.

use tracing::{debug, info, warn};

use evac_agent::{Agent, AgentStore, PositionIndex};
use evac_core::{AgentId, EvacConfig, GridPos, Phase, SimRng, Strategy, Tick};
use evac_game::{Decision, GameContext, StrategyModel};
use evac_grid::FloorFieldGrid;
use evac_movement::MovementResolver;

use crate::{
    PhaseSummary, PopulationWeights, SimError, SimObserver, SimResult, StrategyHistory,
    StrategyShare,
};

/// What [`Sim::clear_cell`] removed.
#[derive(Debug)]
pub enum ClearedCell {
    Wall,
    Agent(Agent),
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// One call to [`step`](Self::step) runs one phase; phases alternate
/// Strategy → Movement starting from tick 0:
///
/// 1. **Strategy**: refresh distances and congestion indices, build the
///    position index, ask the model for a decision per agent (optionally in
///    parallel with the `parallel` feature), commit all decisions, record a
///    [`StrategyShare`].
/// 2. **Movement**: sample, resolve, and apply moves via
///    [`MovementResolver`], then diffuse the dynamic field once.
///
/// Stepping with no active agents does nothing: the tick does not advance
/// and the phase does not flip.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  Edits (`place_agent`,
/// `add_wall`, …) are only possible between steps since `step` takes
/// `&mut self`.
pub struct Sim<M: StrategyModel> {
    config:   EvacConfig,
    grid:     FloorFieldGrid,
    agents:   AgentStore,
    history:  StrategyHistory,
    model:    M,
    resolver: MovementResolver,
    rng:      SimRng,
    tick:     Tick,
}

impl<M: StrategyModel> Sim<M> {
    pub(crate) fn new(config: EvacConfig, grid: FloorFieldGrid, model: M) -> Self {
        Self {
            rng: SimRng::new(config.seed),
            config,
            grid,
            agents: AgentStore::new(),
            history: StrategyHistory::new(),
            model,
            resolver: MovementResolver::new(),
            tick: Tick::ZERO,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn grid(&self) -> &FloorFieldGrid {
        &self.grid
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn agent_at(&self, pos: GridPos) -> Option<&Agent> {
        self.agents.agent_at(pos)
    }

    pub fn history(&self) -> &StrategyHistory {
        &self.history
    }

    /// Number of phases executed so far.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The phase the next non-empty step will run.
    pub fn next_phase(&self) -> Phase {
        self.tick.phase()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn config(&self) -> &EvacConfig {
        &self.config
    }

    /// Mutable access to the model parameters.  Changes take effect at the
    /// next phase.  `width`, `height`, and `exit` describe the grid the sim
    /// was built with and are not re-read; use [`set_exit`](Self::set_exit)
    /// to move the exit.
    pub fn config_mut(&mut self) -> &mut EvacConfig {
        &mut self.config
    }

    // ── Edits ─────────────────────────────────────────────────────────────

    /// Move the exit and recompute the static field.
    pub fn set_exit(&mut self, pos: GridPos) -> SimResult<()> {
        if !self.grid.in_bounds(pos) {
            return Err(SimError::OutOfBounds(pos));
        }
        if self.agents.agent_at(pos).is_some() {
            return Err(SimError::CellOccupied(pos));
        }
        self.grid.set_exit(pos)?;
        self.config.exit = pos;
        Ok(())
    }

    /// Put a new agent on a free, non-exit cell.
    pub fn place_agent(&mut self, pos: GridPos, strategy: Strategy) -> SimResult<AgentId> {
        let Some(cell) = self.grid.cell(pos) else {
            return Err(SimError::OutOfBounds(pos));
        };
        if cell.is_wall {
            return Err(SimError::CellIsWall(pos));
        }
        if cell.occupied {
            return Err(SimError::CellOccupied(pos));
        }
        if self.grid.is_exit(pos) {
            return Err(SimError::CellIsExit(pos));
        }
        self.grid.set_occupied(pos, true)?;
        let id = self.agents.insert(pos, strategy);
        debug!(agent = %id, %pos, %strategy, "placed agent");
        Ok(id)
    }

    /// Remove the agent standing on `pos`.
    pub fn remove_agent_at(&mut self, pos: GridPos) -> SimResult<Agent> {
        let id = self.agents.agent_at(pos).map(|a| a.id).ok_or(SimError::NoAgentAt(pos))?;
        let agent = self.agents.remove(id).ok_or(SimError::NoAgentAt(pos))?;
        self.grid.set_occupied(pos, false)?;
        Ok(agent)
    }

    /// Advance the strategy of the agent on `pos` along
    /// Patient → Impatient → Neutral → Patient.
    pub fn cycle_strategy_at(&mut self, pos: GridPos) -> SimResult<Strategy> {
        let agent = self.agents.agent_at_mut(pos).ok_or(SimError::NoAgentAt(pos))?;
        Ok(agent.cycle_strategy())
    }

    pub fn add_wall(&mut self, pos: GridPos) -> SimResult<()> {
        Ok(self.grid.add_wall(pos)?)
    }

    pub fn remove_wall(&mut self, pos: GridPos) -> SimResult<()> {
        Ok(self.grid.remove_wall(pos)?)
    }

    /// Remove whatever stands on `pos`: an interior wall or an agent.
    pub fn clear_cell(&mut self, pos: GridPos) -> SimResult<ClearedCell> {
        if self.agents.agent_at(pos).is_some() {
            return self.remove_agent_at(pos).map(ClearedCell::Agent);
        }
        match self.grid.cell(pos) {
            None => Err(SimError::OutOfBounds(pos)),
            Some(c) if c.is_wall && !c.is_border => {
                self.grid.remove_wall(pos)?;
                Ok(ClearedCell::Wall)
            }
            Some(_) => Err(SimError::NothingToClear(pos)),
        }
    }

    /// Fill free cells at random.
    ///
    /// Every free cell other than the exit, visited column by column, gets a
    /// Patient, Impatient, or Neutral agent with the given probabilities, or
    /// stays empty.  Returns the number of agents placed.
    pub fn populate(&mut self, weights: PopulationWeights) -> SimResult<usize> {
        weights.validate()?;
        let mut placed = 0;
        for x in 0..self.grid.width() as i32 {
            for y in 0..self.grid.height() as i32 {
                let pos = GridPos::new(x, y);
                if self.grid.is_exit(pos) || !self.grid.is_free(pos) {
                    continue;
                }
                if let Some(strategy) = weights.draw(&mut self.rng) {
                    self.place_agent(pos, strategy)?;
                    placed += 1;
                }
            }
        }
        info!(placed, total = self.agents.len(), "populated grid");
        Ok(placed)
    }

    // ── Phase advance ─────────────────────────────────────────────────────

    /// Run exactly one phase.  Returns `None` (and changes nothing) when
    /// there are no active agents.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<PhaseSummary>> {
        if self.agents.is_empty() {
            return Ok(None);
        }
        let now = self.tick;
        let phase = now.phase();
        observer.on_phase_start(now, phase);

        let summary = match phase {
            Phase::Strategy => self.strategy_phase(now, observer),
            Phase::Movement => self.movement_phase(now, observer)?,
        };
        observer.on_phase_end(now, phase, &summary);

        let interval = self.config.output_interval_phases;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.grid, &self.agents);
        }

        self.tick = now + 1;
        Ok(Some(summary))
    }

    /// Step until no agents remain or `config.max_phases` ticks have run.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while !self.agents.is_empty() && self.tick.0 < self.config.max_phases {
            self.step(observer)?;
        }
        if !self.agents.is_empty() {
            warn!(tick = %self.tick, remaining = self.agents.len(), "phase limit reached before evacuation finished");
        } else {
            info!(tick = %self.tick, "evacuation complete");
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run up to `n` phases (ignores `max_phases`).  Stops early once the
    /// grid is empty.  Returns the number of phases executed.
    pub fn run_phases<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        let mut executed = 0;
        for _ in 0..n {
            if self.step(observer)?.is_none() {
                break;
            }
            executed += 1;
        }
        Ok(executed)
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn strategy_phase<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> PhaseSummary {
        self.agents.update_congestion(self.grid.exit(), self.config.exit_capacity);
        let index = self.agents.position_index();
        let decisions = self.decide_all(now, &index);

        let mut switched = 0;
        for (agent, decision) in self.agents.iter_mut().zip(&decisions) {
            debug_assert_eq!(agent.id, decision.agent);
            if let Some(c) = decision.costs {
                debug!(
                    agent = %agent.id,
                    pos = %agent.pos(),
                    chose = %decision.strategy,
                    patient = c.patient,
                    impatient = c.impatient,
                    neutral = c.neutral,
                    "strategy decision"
                );
            }
            if decision.strategy != agent.strategy {
                switched += 1;
            }
            agent.pending_strategy = decision.strategy;
        }
        self.agents.commit_strategies();

        let (patient, impatient, neutral) = self.agents.strategy_counts();
        let share = StrategyShare {
            step: self.history.len() as u64 + 1,
            tick: now,
            agents: self.agents.len(),
            patient,
            impatient,
            neutral,
        };
        self.history.push(share);
        observer.on_strategy_update(&share);
        info!(
            tick = %now,
            step = share.step,
            agents = share.agents,
            patient = share.patient_fraction(),
            impatient = share.impatient_fraction(),
            neutral = share.neutral_fraction(),
            switched,
            "strategy phase"
        );
        PhaseSummary::Strategy { share, switched }
    }

    /// Evaluate the model for every agent, in store order.
    fn decide_all(&self, now: Tick, index: &PositionIndex) -> Vec<Decision> {
        let ctx = GameContext::new(now, self.config.congestion_cost, &self.agents, index);
        let model = &self.model;

        #[cfg(not(feature = "parallel"))]
        {
            self.agents.iter().map(|a| model.decide(a, &ctx)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.agents.as_slice().par_iter().map(|a| model.decide(a, &ctx)).collect()
        }
    }

    fn movement_phase<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<PhaseSummary> {
        let report = self.resolver.run_phase(&mut self.grid, &mut self.agents, &self.config, &mut self.rng)?;
        self.grid.diffuse(self.config.df_diffuse_rate);

        for agent in &report.exited {
            observer.on_agent_exit(now, agent);
        }
        info!(
            tick = %now,
            moved = report.moves.len(),
            exited = report.exited.len(),
            stalled = report.stalled.len(),
            contested = report.contested.len(),
            remaining = self.agents.len(),
            "movement phase"
        );
        Ok(PhaseSummary::Movement {
            moved:     report.moves.len(),
            exited:    report.exited.len(),
            stalled:   report.stalled.len(),
            contested: report.contested.len(),
            remaining: self.agents.len(),
        })
    }
}
