//! Integration tests for evac-output.

use evac_core::Strategy;

use crate::row::{AgentSnapshotRow, ExitRow, StrategyShareRow};

fn share_row(step: u64) -> StrategyShareRow {
    StrategyShareRow { step, tick: (step - 1) * 2, agents: 10, patient: 5, impatient: 3, neutral: 2 }
}

fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
    AgentSnapshotRow { agent_id, tick, x: agent_id as i32 + 1, y: 3, strategy: Strategy::Impatient }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("strategy_shares.csv").exists());
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("exits.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("exits.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir, "strategy_shares.csv"), ["step", "tick", "agents", "patient", "impatient", "neutral"]);
        assert_eq!(headers(&dir, "agent_snapshots.csv"), ["agent_id", "tick", "x", "y", "strategy"]);
        assert_eq!(headers(&dir, "exits.csv"), ["agent_id", "tick", "route_len"]);
    }

    #[test]
    fn csv_share_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_share(&share_row(1)).unwrap();
        w.write_share(&share_row(2)).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "strategy_shares.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "2"); // step
        assert_eq!(&rows[1][1], "2"); // tick
        assert_eq!(&rows[1][3], "5"); // patient
    }

    #[test]
    fn csv_snapshot_rows_use_strategy_names() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 4), snap_row(1, 4)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "agent_snapshots.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][2], "2");
        assert_eq!(&rows[1][4], "impatient");
    }

    #[test]
    fn csv_exit_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_exit(&ExitRow { agent_id: 7, tick: 13, route_len: 6 }).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "exits.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][1], "13");
        assert_eq!(&rows[0][2], "6");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        use evac_core::{EvacConfig, GridPos};
        use evac_game::CongestionGame;
        use evac_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = EvacConfig {
            seed:                   3,
            max_phases:             2_000,
            output_interval_phases: 2,
            ..EvacConfig::with_interior(5, 5, GridPos::new(4, 4))
        };
        let mut sim = SimBuilder::new(config, CongestionGame)
            .agent(GridPos::new(1, 1), Strategy::Patient)
            .agent(GridPos::new(3, 1), Strategy::Impatient)
            .agent(GridPos::new(1, 4), Strategy::Neutral)
            .build()
            .unwrap();

        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert!(sim.agents().is_empty());

        let shares = records(&dir, "strategy_shares.csv");
        assert_eq!(shares.len(), sim.history().len());
        assert_eq!(&shares[0][2], "3");

        let exits = records(&dir, "exits.csv");
        assert_eq!(exits.len(), 3);

        // The first snapshot is taken at tick 0, before anyone can leave.
        let snaps = records(&dir, "agent_snapshots.csv");
        let at_zero = snaps.iter().filter(|r| &r[1] == "0").count();
        assert_eq!(at_zero, 3);
        assert!(snaps.iter().all(|r| r[1].parse::<u64>().unwrap() % 2 == 0));
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn count(dir: &TempDir, table: &str) -> i64 {
        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 1), snap_row(1, 1), snap_row(2, 1)]).unwrap();
        w.finish().unwrap();
        assert_eq!(count(&dir, "agent_snapshots"), 3);
    }

    #[test]
    fn sqlite_strategy_stored_as_text() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(4, 0)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (x, strategy): (i64, String) = conn
            .query_row("SELECT x, strategy FROM agent_snapshots WHERE agent_id = 4", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })
            .unwrap();
        assert_eq!(x, 5);
        assert_eq!(strategy, "impatient");
    }

    #[test]
    fn sqlite_shares_and_exits() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_share(&share_row(1)).unwrap();
        w.write_share(&share_row(2)).unwrap();
        w.write_exit(&ExitRow { agent_id: 9, tick: 21, route_len: 11 }).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        assert_eq!(count(&dir, "strategy_shares"), 2);
        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, len): (i64, i64) = conn
            .query_row("SELECT tick, route_len FROM exits WHERE agent_id = 9", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })
            .unwrap();
        assert_eq!(tick, 21);
        assert_eq!(len, 11);
    }

    #[test]
    fn sqlite_duplicate_exit_is_an_error() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let row = ExitRow { agent_id: 1, tick: 1, route_len: 2 };
        w.write_exit(&row).unwrap();
        assert!(matches!(w.write_exit(&row), Err(crate::OutputError::Sqlite(_))));
    }
}

// ── Observer tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use evac_core::Tick;
    use evac_sim::SimObserver;

    use super::*;
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, SimOutputObserver};

    /// Fails every exit write, records everything else.
    #[derive(Default)]
    struct Flaky {
        shares:   Vec<StrategyShareRow>,
        finishes: usize,
    }

    impl OutputWriter for Flaky {
        fn write_share(&mut self, row: &StrategyShareRow) -> OutputResult<()> {
            self.shares.push(*row);
            Ok(())
        }

        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_exit(&mut self, row: &ExitRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other(format!("exit {}", row.agent_id))))
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = SimOutputObserver::new(Flaky::default());
        let a = evac_agent::Agent::new(evac_core::AgentId(1), evac_core::GridPos::new(1, 1), Strategy::Patient);
        let b = evac_agent::Agent::new(evac_core::AgentId(2), evac_core::GridPos::new(2, 1), Strategy::Patient);
        obs.on_agent_exit(Tick(1), &a);
        obs.on_agent_exit(Tick(3), &b);

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("exit 1"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn shares_forwarded_and_finish_called() {
        let mut obs = SimOutputObserver::new(Flaky::default());
        let share = evac_sim::StrategyShare {
            step: 1, tick: Tick(0), agents: 4, patient: 1, impatient: 2, neutral: 1,
        };
        obs.on_strategy_update(&share);
        obs.on_sim_end(Tick(0));
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.shares, vec![StrategyShareRow { step: 1, tick: 0, agents: 4, patient: 1, impatient: 2, neutral: 1 }]);
        assert_eq!(w.finishes, 1);
    }
}
