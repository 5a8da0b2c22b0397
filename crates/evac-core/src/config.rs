//! Model parameters and run settings.

use crate::{EvacError, EvacResult, GridPos};

/// Top-level simulation configuration.
///
/// Every field is public: the parameters the movement and game phases read
/// (`congestion_cost`, field strengths, diffusion rate, reward increment,
/// exit capacity) may be changed between phases through
/// `Sim::config_mut`.  The exit position is the exception: moving it
/// requires recomputing the static field, so go through `Sim::set_exit`.
///
/// Typically loaded from a JSON file by the application crate (feature
/// `serde`) and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvacConfig {
    /// Grid width in cells, including the left and right border walls.
    pub width: u32,

    /// Grid height in cells, including the top and bottom border walls.
    pub height: u32,

    /// The exit cell.  Must lie strictly inside the border ring.
    pub exit: GridPos,

    /// How many agents the exit admits per movement phase.
    pub exit_capacity: u32,

    /// `c`, the cost of congestion in the strategy game.
    pub congestion_cost: f64,

    /// Maximum dynamic-field mass a cell sheds per diffusion pass.
    pub df_diffuse_rate: f64,

    /// Dynamic-field reward spread along the route of an agent that exits.
    pub df_increase: f64,

    /// Weight of the dynamic field in the movement probabilities.
    pub df_strength: f64,

    /// Weight of the static field in the movement probabilities.
    pub sf_strength: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Upper bound on phases executed by `Sim::run`.  Two phases make one
    /// macro-step.
    pub max_phases: u64,

    /// Fire the snapshot observer hook every N phases.  0 disables snapshots.
    pub output_interval_phases: u64,
}

impl Default for EvacConfig {
    /// A 25×25 room (27×27 with walls) with a two-wide exit in the far corner.
    fn default() -> Self {
        Self {
            width:                  27,
            height:                 27,
            exit:                   GridPos::new(25, 25),
            exit_capacity:          2,
            congestion_cost:        2.0,
            df_diffuse_rate:        0.4,
            df_increase:            1.0,
            df_strength:            50.0,
            sf_strength:            50.0,
            seed:                   42,
            max_phases:             10_000,
            output_interval_phases: 2,
        }
    }
}

impl EvacConfig {
    /// Configuration for a room whose *walkable* interior is
    /// `interior_width × interior_height`, with `exit` given in interior
    /// coordinates.  The border ring is added around it.
    pub fn with_interior(interior_width: u32, interior_height: u32, exit: GridPos) -> Self {
        Self {
            width:  interior_width + 2,
            height: interior_height + 2,
            exit:   exit.offset(1, 1),
            ..Self::default()
        }
    }

    /// `true` if `pos` lies inside the grid rectangle (border included).
    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// `true` if `pos` lies strictly inside the border ring.
    #[inline]
    pub fn is_interior(&self, pos: GridPos) -> bool {
        pos.x >= 1
            && pos.y >= 1
            && (pos.x as u32) + 1 < self.width
            && (pos.y as u32) + 1 < self.height
    }

    /// Check every parameter, reporting the first problem found.
    pub fn validate(&self) -> EvacResult<()> {
        if self.width < 3 || self.height < 3 {
            return Err(EvacError::Config(format!(
                "grid {}x{} is too small; the border ring needs at least 3x3",
                self.width, self.height
            )));
        }
        if !self.is_interior(self.exit) {
            return Err(EvacError::Config(format!(
                "exit {} must lie inside the border ring",
                self.exit
            )));
        }
        if self.exit_capacity == 0 {
            return Err(EvacError::Config("exit_capacity must be at least 1".into()));
        }
        let non_negative = [
            ("congestion_cost", self.congestion_cost),
            ("df_diffuse_rate", self.df_diffuse_rate),
            ("df_increase", self.df_increase),
            ("df_strength", self.df_strength),
            ("sf_strength", self.sf_strength),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(EvacError::Config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
