//! Strategy time series.

use evac_core::Tick;

/// Strategy counts among the active agents right after one strategy phase
/// has been committed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyShare {
    /// 1-based index of the strategy phase.
    pub step:      u64,
    pub tick:      Tick,
    pub agents:    usize,
    pub patient:   usize,
    pub impatient: usize,
    pub neutral:   usize,
}

impl StrategyShare {
    fn fraction(&self, n: usize) -> f64 {
        if self.agents == 0 { 0.0 } else { n as f64 / self.agents as f64 }
    }

    pub fn patient_fraction(&self) -> f64 {
        self.fraction(self.patient)
    }

    pub fn impatient_fraction(&self) -> f64 {
        self.fraction(self.impatient)
    }

    pub fn neutral_fraction(&self) -> f64 {
        self.fraction(self.neutral)
    }
}

/// Every `StrategyShare` recorded so far, oldest first.
#[derive(Clone, Debug, Default)]
pub struct StrategyHistory {
    shares: Vec<StrategyShare>,
}

impl StrategyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, share: StrategyShare) {
        self.shares.push(share);
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn last(&self) -> Option<&StrategyShare> {
        self.shares.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategyShare> {
        self.shares.iter()
    }

    pub fn as_slice(&self) -> &[StrategyShare] {
        &self.shares
    }

    /// Patient fraction per step, ready for plotting.
    pub fn patient_series(&self) -> Vec<f64> {
        self.shares.iter().map(StrategyShare::patient_fraction).collect()
    }

    pub fn impatient_series(&self) -> Vec<f64> {
        self.shares.iter().map(StrategyShare::impatient_fraction).collect()
    }

    pub fn neutral_series(&self) -> Vec<f64> {
        self.shares.iter().map(StrategyShare::neutral_fraction).collect()
    }
}
