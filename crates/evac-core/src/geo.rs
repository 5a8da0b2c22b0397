//! Grid coordinate type and neighbourhood helpers.
//!
//! `GridPos` uses signed coordinates so that `pos + offset` never wraps when
//! probing the ring around a border cell; callers filter the results against
//! the grid bounds.

use std::fmt;

/// The eight Moore-neighbourhood offsets, in a fixed column-major order
/// (`dx` outer, `dy` inner).  The order is part of the reproducibility
/// contract: weighted sampling enumerates candidates in this order.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// An integer cell coordinate.  `(0, 0)` is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in cell units.
    pub fn distance(self, other: GridPos) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }

    /// Chebyshev (king-move) distance.
    #[inline]
    pub fn chebyshev(self, other: GridPos) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// `true` if `other` is one of the eight cells surrounding `self`.
    /// A cell is not its own neighbour.
    #[inline]
    pub fn is_moore_neighbor(self, other: GridPos) -> bool {
        self != other && self.chebyshev(other) <= 1
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> GridPos {
        GridPos::new(self.x + dx, self.y + dy)
    }

    /// The eight surrounding positions, unfiltered (may lie outside the grid).
    pub fn moore_ring(self) -> impl Iterator<Item = GridPos> {
        MOORE_OFFSETS.into_iter().map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// The 3×3 block centred on `self`, including `self`, in the same
    /// column-major order as [`MOORE_OFFSETS`].
    pub fn moore_block(self) -> impl Iterator<Item = GridPos> {
        (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| self.offset(dx, dy)))
    }
}

impl From<(i32, i32)> for GridPos {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        GridPos::new(x, y)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
