//! Behavioural strategy shared by the game, movement, and output crates.

/// How an agent currently behaves.
///
/// The strategy drives both halves of a macro-step: the interaction costs in
/// the strategy game and the field multipliers in the movement weights.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Waits its turn; rewarded by mutual patience under congestion.
    #[default]
    Patient,
    /// Pushes for the exit; amplified static-field attraction.
    Impatient,
    /// Follows the crowd; amplified dynamic-field attraction.
    Neutral,
}

impl Strategy {
    /// All strategies in editor cycling order.
    pub const ALL: [Strategy; 3] = [Strategy::Patient, Strategy::Impatient, Strategy::Neutral];

    /// Next strategy in the Patient → Impatient → Neutral → Patient cycle.
    pub fn cycled(self) -> Strategy {
        match self {
            Strategy::Patient   => Strategy::Impatient,
            Strategy::Impatient => Strategy::Neutral,
            Strategy::Neutral   => Strategy::Patient,
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Patient   => "patient",
            Strategy::Impatient => "impatient",
            Strategy::Neutral   => "neutral",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
