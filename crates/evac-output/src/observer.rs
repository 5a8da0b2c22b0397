//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use evac_agent::{Agent, AgentStore};
use evac_core::Tick;
use evac_grid::FloorFieldGrid;
use evac_sim::{SimObserver, StrategyShare};

use crate::row::{AgentSnapshotRow, ExitRow, StrategyShareRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes strategy shares, agent snapshots, and exit
/// records to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_strategy_update(&mut self, share: &StrategyShare) {
        let result = self.writer.write_share(&StrategyShareRow::from(share));
        self.store_err(result);
    }

    fn on_agent_exit(&mut self, tick: Tick, agent: &Agent) {
        let result = self.writer.write_exit(&ExitRow::new(tick, agent));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, _grid: &FloorFieldGrid, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> =
            agents.iter().map(|a| AgentSnapshotRow::new(tick, a)).collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
