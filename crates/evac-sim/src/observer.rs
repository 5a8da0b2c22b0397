//! Simulation observer trait for progress reporting and data collection.

use evac_agent::{Agent, AgentStore};
use evac_core::{Phase, Tick};
use evac_grid::FloorFieldGrid;

use crate::StrategyShare;

/// What one phase did, handed to [`SimObserver::on_phase_end`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PhaseSummary {
    Strategy {
        share:    StrategyShare,
        /// Agents whose committed strategy differs from the previous one.
        switched: usize,
    },
    Movement {
        moved:     usize,
        exited:    usize,
        stalled:   usize,
        contested: usize,
        /// Active agents left after the phase.
        remaining: usize,
    },
}

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and the run loops.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: exit counter
///
/// ```rust,ignore
/// struct ExitCounter(usize);
///
/// impl SimObserver for ExitCounter {
///     fn on_agent_exit(&mut self, _tick: Tick, _agent: &Agent) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a phase runs.  Not called for no-op steps.
    fn on_phase_start(&mut self, _tick: Tick, _phase: Phase) {}

    /// Called after a phase has been applied.
    fn on_phase_end(&mut self, _tick: Tick, _phase: Phase, _summary: &PhaseSummary) {}

    /// Called after each strategy phase with the committed strategy counts.
    fn on_strategy_update(&mut self, _share: &StrategyShare) {}

    /// Called for every agent that left through the exit, with its final
    /// state (position before leaving, full route).
    fn on_agent_exit(&mut self, _tick: Tick, _agent: &Agent) {}

    /// Called every `config.output_interval_phases` ticks with read-only
    /// access to the grid and the active agents.
    fn on_snapshot(&mut self, _tick: Tick, _grid: &FloorFieldGrid, _agents: &AgentStore) {}

    /// Called once when [`Sim::run`][crate::Sim::run] finishes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
