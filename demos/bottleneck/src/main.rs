//! bottleneck: a room emptying through a two-wide exit in the far corner.
//!
//! Usage: `bottleneck [config.json]`.  Without an argument the default
//! 25×25 room is used.  Agents are scattered with a 3 % chance per cell for
//! each strategy, the game runs until the room is empty (or the phase limit
//! is hit), and the results land in `output/bottleneck/`.
//!
//! Set `RUST_LOG=debug` to see every decision and move.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use evac_agent::{Agent, AgentStore};
use evac_core::{EvacConfig, Tick};
use evac_game::CongestionGame;
use evac_grid::FloorFieldGrid;
use evac_output::{CsvWriter, OutputWriter, SimOutputObserver};
use evac_sim::{PopulationWeights, SimBuilder, SimObserver, StrategyShare};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/bottleneck";
const WEIGHTS:    PopulationWeights = PopulationWeights { patient: 0.03, impatient: 0.03, neutral: 0.03 };

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    share_rows:    usize,
    snapshot_rows: usize,
    exit_rows:     usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, share_rows: 0, snapshot_rows: 0, exit_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_strategy_update(&mut self, share: &StrategyShare) {
        self.share_rows += 1;
        self.inner.on_strategy_update(share);
    }

    fn on_agent_exit(&mut self, tick: Tick, agent: &Agent) {
        self.exit_rows += 1;
        self.inner.on_agent_exit(tick, agent);
    }

    fn on_snapshot(&mut self, tick: Tick, grid: &FloorFieldGrid, agents: &AgentStore) {
        self.snapshot_rows += agents.len();
        self.inner.on_snapshot(tick, grid, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

fn load_config() -> Result<EvacConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(EvacConfig::default());
    };
    let file = File::open(&path).with_context(|| format!("opening {path}"))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Config and scenario.
    let config = load_config()?;
    info!(
        width = config.width,
        height = config.height,
        exit = %config.exit,
        exit_capacity = config.exit_capacity,
        congestion_cost = config.congestion_cost,
        seed = config.seed,
        "scenario"
    );

    let mut sim = SimBuilder::new(config, CongestionGame).populate(WEIGHTS).build()?;
    let initial = sim.agents().len();
    let (p, i, n) = sim.agents().strategy_counts();
    info!(agents = initial, patient = p, impatient = i, neutral = n, "room populated");

    // 2. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output incomplete");
    }

    // 4. Summary.
    info!(
        seconds = elapsed.as_secs_f64(),
        phases = sim.tick().0,
        evacuated = initial - sim.agents().len(),
        remaining = sim.agents().len(),
        "simulation complete"
    );
    info!(
        strategy_shares = obs.share_rows,
        agent_snapshots = obs.snapshot_rows,
        exits = obs.exit_rows,
        dir = OUTPUT_DIR,
        "rows written"
    );

    println!("{:<6} {:<8} {:>9} {:>9} {:>9}", "Step", "Agents", "Patient", "Impatient", "Neutral");
    println!("{}", "-".repeat(45));
    for share in sim.history().iter().step_by(10) {
        println!(
            "{:<6} {:<8} {:>9.3} {:>9.3} {:>9.3}",
            share.step,
            share.agents,
            share.patient_fraction(),
            share.impatient_fraction(),
            share.neutral_fraction(),
        );
    }

    Ok(())
}
