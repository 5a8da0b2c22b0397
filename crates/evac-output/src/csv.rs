//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `strategy_shares.csv`
//! - `agent_snapshots.csv`
//! - `exits.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, ExitRow, OutputResult, StrategyShareRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    shares:    Writer<File>,
    snapshots: Writer<File>,
    exits:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut shares = Writer::from_path(dir.join("strategy_shares.csv"))?;
        shares.write_record(["step", "tick", "agents", "patient", "impatient", "neutral"])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "tick", "x", "y", "strategy"])?;

        let mut exits = Writer::from_path(dir.join("exits.csv"))?;
        exits.write_record(["agent_id", "tick", "route_len"])?;

        Ok(Self { shares, snapshots, exits, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_share(&mut self, row: &StrategyShareRow) -> OutputResult<()> {
        self.shares.write_record(&[
            row.step.to_string(),
            row.tick.to_string(),
            row.agents.to_string(),
            row.patient.to_string(),
            row.impatient.to_string(),
            row.neutral.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.strategy.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_exit(&mut self, row: &ExitRow) -> OutputResult<()> {
        self.exits.write_record(&[
            row.agent_id.to_string(),
            row.tick.to_string(),
            row.route_len.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.shares.flush()?;
        self.snapshots.flush()?;
        self.exits.flush()?;
        Ok(())
    }
}
