//! Weighted random population of the grid.

use evac_core::{SimRng, Strategy};

use crate::{SimError, SimResult};

/// Per-cell probabilities of placing each kind of agent.  Whatever is left
/// of 1 after the three weights is the chance of leaving the cell empty.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopulationWeights {
    pub patient:   f64,
    pub impatient: f64,
    pub neutral:   f64,
}

impl PopulationWeights {
    pub fn new(patient: f64, impatient: f64, neutral: f64) -> Self {
        Self { patient, impatient, neutral }
    }

    /// Chance that a cell receives an agent of any kind.
    pub fn occupancy(&self) -> f64 {
        self.patient + self.impatient + self.neutral
    }

    pub fn validate(&self) -> SimResult<()> {
        let all = [self.patient, self.impatient, self.neutral];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SimError::InvalidWeights(format!("weights must be non-negative: {self:?}")));
        }
        if self.occupancy() > 1.0 + 1e-12 {
            return Err(SimError::InvalidWeights(format!(
                "weights sum to {} which exceeds 1",
                self.occupancy()
            )));
        }
        Ok(())
    }

    /// Draw the occupant for one cell: a strategy, or `None` for empty.
    pub fn draw(&self, rng: &mut SimRng) -> Option<Strategy> {
        let empty = (1.0 - self.occupancy()).max(0.0);
        match rng.weighted_index(&[self.patient, self.impatient, self.neutral, empty])? {
            0 => Some(Strategy::Patient),
            1 => Some(Strategy::Impatient),
            2 => Some(Strategy::Neutral),
            _ => None,
        }
    }
}
