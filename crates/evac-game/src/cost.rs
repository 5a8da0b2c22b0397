//! Per-strategy cost sums.

use evac_core::Strategy;

use crate::table;

/// Accumulated cost of each candidate strategy against an agent's
/// neighbourhood.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StrategyCosts {
    pub patient:   f64,
    pub impatient: f64,
    pub neutral:   f64,
}

impl StrategyCosts {
    /// Add the costs of playing each strategy against one neighbour.
    pub fn add_neighbor(&mut self, t_own: f64, other: Strategy, t_other: f64, c: f64) {
        self.patient   += table::cost(Strategy::Patient, other, t_own, t_other, c);
        self.impatient += table::cost(Strategy::Impatient, other, t_own, t_other, c);
        self.neutral   += table::cost(Strategy::Neutral, other, t_own, t_other, c);
    }

    #[inline]
    pub fn get(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Patient   => self.patient,
            Strategy::Impatient => self.impatient,
            Strategy::Neutral   => self.neutral,
        }
    }

    /// The strategy with the lowest cost.  Ties go to Patient, then Neutral,
    /// then Impatient.
    pub fn cheapest(&self) -> Strategy {
        let lowest = self.patient.min(self.impatient).min(self.neutral);
        if self.patient == lowest {
            Strategy::Patient
        } else if self.neutral == lowest {
            Strategy::Neutral
        } else {
            Strategy::Impatient
        }
    }
}
