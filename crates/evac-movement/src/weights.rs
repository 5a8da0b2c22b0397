//! Movement weights.
//!
//! For each cell in the 3×3 block around an agent (its own cell included):
//!
//! ```text
//! w = exp(df · df_strength · df_mult) · exp(sf · sf_strength · sf_mult) · (1 − occupied)
//! ```
//!
//! multiplied by the agent's deterrent when the cell is on its route.
//! `df_mult` is [`DF_MULTIPLIER`] for Neutral agents and `sf_mult` is
//! [`SF_MULTIPLIER`] for Impatient agents; both are 1 otherwise.  The agent's
//! own cell is occupied by the agent, so its weight is always 0.
//!
//! With the default strengths the exponents reach 500, past what `f64` can
//! hold, so weights are computed relative to the largest exponent among the
//! free candidates.  The ratios, and therefore the sampling distribution,
//! are unchanged.

use evac_agent::Agent;
use evac_core::{EvacConfig, GridPos, SimRng, Strategy};
use evac_grid::FloorFieldGrid;

/// Dynamic-field amplification for Neutral agents.
pub const DF_MULTIPLIER: f64 = 10.0;

/// Static-field amplification for Impatient agents.
pub const SF_MULTIPLIER: f64 = 10.0;

/// The in-bounds 3×3 block around one agent with relative weights.
#[derive(Clone, Debug)]
pub struct MoveCandidates {
    pub cells:   Vec<GridPos>,
    pub weights: Vec<f64>,
}

impl MoveCandidates {
    /// Compute the candidates and weights for `agent`.
    pub fn for_agent(agent: &Agent, grid: &FloorFieldGrid, config: &EvacConfig) -> Self {
        let (df_mult, sf_mult) = match agent.strategy {
            Strategy::Neutral   => (DF_MULTIPLIER, 1.0),
            Strategy::Impatient => (1.0, SF_MULTIPLIER),
            Strategy::Patient   => (1.0, 1.0),
        };

        // Exponent per candidate; `None` for occupied cells.
        let mut cells = Vec::with_capacity(9);
        let mut exponents = Vec::with_capacity(9);
        for pos in agent.pos().moore_block() {
            let Some(cell) = grid.cell(pos) else { continue };
            cells.push(pos);
            exponents.push((!cell.occupied).then(|| {
                cell.dynamic_field * config.df_strength * df_mult
                    + cell.static_field * config.sf_strength * sf_mult
            }));
        }

        let max = exponents.iter().flatten().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights = cells
            .iter()
            .zip(&exponents)
            .map(|(pos, e)| match e {
                Some(e) => (e - max).exp() * agent.deterrent(*pos).unwrap_or(1.0),
                None => 0.0,
            })
            .collect();

        Self { cells, weights }
    }

    /// Sum of the relative weights.  Zero means the agent cannot move.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Normalised probabilities, or `None` when the total is zero.
    pub fn probabilities(&self) -> Option<Vec<f64>> {
        let total = self.total();
        (total > 0.0 && total.is_finite()).then(|| self.weights.iter().map(|w| w / total).collect())
    }

    /// Draw one target.  `None` when no candidate has positive weight.
    pub fn sample(&self, rng: &mut SimRng) -> Option<GridPos> {
        rng.weighted_index(&self.weights).map(|i| self.cells[i])
    }
}
