//! Fluent builder for constructing a [`Sim`].

use evac_core::{EvacConfig, GridPos, Strategy};
use evac_game::StrategyModel;
use evac_grid::FloorFieldGrid;

use crate::{PopulationWeights, Sim, SimResult};

/// Fluent builder for [`Sim<M>`].
///
/// # Required inputs
///
/// - [`EvacConfig`]: grid size, exit, model parameters, seed, …
/// - `M: StrategyModel`: usually [`evac_game::CongestionGame`]
///
/// # Optional inputs
///
/// | Method            | Default           |
/// |-------------------|-------------------|
/// | `.wall(p)`        | no interior walls |
/// | `.agent(p, s)`    | no agents         |
/// | `.populate(w)`    | no random fill    |
///
/// Walls are laid first, then explicit agents, then the random fill, so the
/// fill never lands on a cell claimed by an earlier step.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(EvacConfig::default(), CongestionGame)
///     .wall(GridPos::new(12, 20))
///     .agent(GridPos::new(3, 3), Strategy::Impatient)
///     .populate(PopulationWeights::new(0.03, 0.03, 0.03))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<M: StrategyModel> {
    config:   EvacConfig,
    model:    M,
    walls:    Vec<GridPos>,
    agents:   Vec<(GridPos, Strategy)>,
    populate: Option<PopulationWeights>,
}

impl<M: StrategyModel> SimBuilder<M> {
    pub fn new(config: EvacConfig, model: M) -> Self {
        Self { config, model, walls: Vec::new(), agents: Vec::new(), populate: None }
    }

    pub fn wall(mut self, pos: GridPos) -> Self {
        self.walls.push(pos);
        self
    }

    pub fn walls(mut self, walls: impl IntoIterator<Item = GridPos>) -> Self {
        self.walls.extend(walls);
        self
    }

    pub fn agent(mut self, pos: GridPos, strategy: Strategy) -> Self {
        self.agents.push((pos, strategy));
        self
    }

    pub fn agents(mut self, agents: impl IntoIterator<Item = (GridPos, Strategy)>) -> Self {
        self.agents.extend(agents);
        self
    }

    /// Fill the remaining free cells at random after walls and explicit
    /// agents have been placed.
    pub fn populate(mut self, weights: PopulationWeights) -> Self {
        self.populate = Some(weights);
        self
    }

    /// Validate the configuration, build the grid, and apply the layout.
    /// Any refused wall or agent placement fails the build.
    pub fn build(self) -> SimResult<Sim<M>> {
        self.config.validate()?;
        let grid = FloorFieldGrid::from_config(&self.config)?;
        let mut sim = Sim::new(self.config, grid, self.model);

        for pos in self.walls {
            sim.add_wall(pos)?;
        }
        for (pos, strategy) in self.agents {
            sim.place_agent(pos, strategy)?;
        }
        if let Some(weights) = self.populate {
            sim.populate(weights)?;
        }
        Ok(sim)
    }
}
