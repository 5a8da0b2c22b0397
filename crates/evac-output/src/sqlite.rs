//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `strategy_shares`, `agent_snapshots`, and `exits`.

use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, ExitRow, OutputResult, StrategyShareRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS strategy_shares (
                 step      INTEGER PRIMARY KEY,
                 tick      INTEGER NOT NULL,
                 agents    INTEGER NOT NULL,
                 patient   INTEGER NOT NULL,
                 impatient INTEGER NOT NULL,
                 neutral   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 agent_id INTEGER NOT NULL,
                 tick     INTEGER NOT NULL,
                 x        INTEGER NOT NULL,
                 y        INTEGER NOT NULL,
                 strategy TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS exits (
                 agent_id  INTEGER PRIMARY KEY,
                 tick      INTEGER NOT NULL,
                 route_len INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_share(&mut self, row: &StrategyShareRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO strategy_shares (step, tick, agents, patient, impatient, neutral) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![row.step, row.tick, row.agents, row.patient, row.impatient, row.neutral],
        )?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots (agent_id, tick, x, y, strategy) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.tick,
                    row.x,
                    row.y,
                    row.strategy.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_exit(&mut self, row: &ExitRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO exits (agent_id, tick, route_len) VALUES (?1, ?2, ?3)",
            rusqlite::params![row.agent_id, row.tick, row.route_len],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
