//! A single grid cell.

use evac_core::GridPos;

/// One square of the floor.
///
/// The dynamic field is double-buffered: [`Cell::change_dynamic_field`] only
/// accumulates into `pending_dynamic_delta`, and [`Cell::commit_dynamic_field`]
/// folds the delta in and clamps the result to `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos:                   GridPos,
    pub static_field:          f64,
    pub dynamic_field:         f64,
    pub pending_dynamic_delta: f64,
    pub occupied:              bool,
    pub is_wall:               bool,
    pub is_border:             bool,
}

impl Cell {
    /// An open, unoccupied cell with zero dynamic field.
    pub fn open(pos: GridPos, static_field: f64) -> Self {
        Self {
            pos,
            static_field,
            dynamic_field: 0.0,
            pending_dynamic_delta: 0.0,
            occupied: false,
            is_wall: false,
            is_border: false,
        }
    }

    /// A permanent wall on the outer ring.
    pub fn border(pos: GridPos, static_field: f64) -> Self {
        Self { occupied: true, is_wall: true, is_border: true, ..Self::open(pos, static_field) }
    }

    #[inline]
    pub fn change_dynamic_field(&mut self, amount: f64) {
        self.pending_dynamic_delta += amount;
    }

    #[inline]
    pub fn commit_dynamic_field(&mut self) {
        self.dynamic_field = (self.dynamic_field + self.pending_dynamic_delta).clamp(0.0, 1.0);
        self.pending_dynamic_delta = 0.0;
    }

    /// `true` when an agent could stand here (not a wall, nobody present).
    #[inline]
    pub fn is_free(&self) -> bool {
        !self.occupied
    }

    /// `1.0` if the cell is free, `0.0` otherwise.  The movement weight is
    /// multiplied by this.
    #[inline]
    pub fn vacancy(&self) -> f64 {
        if self.occupied { 0.0 } else { 1.0 }
    }

    pub(crate) fn make_wall(&mut self) {
        self.is_wall = true;
        self.occupied = true;
    }

    pub(crate) fn clear_wall(&mut self) {
        self.is_wall = false;
        self.occupied = false;
    }
}
