//! The floor-field grid.
//!
//! # Fields
//!
//! * **Static field**: `1 − |cell − exit| / |(0,0) − (W−1,H−1)|`.  Fixed for
//!   a given exit; recomputed only by [`FloorFieldGrid::set_exit`].  An exit
//!   away from a corner can push values below 0 on the far side of the
//!   room.  They are kept as computed.
//! * **Dynamic field**: a trail in `[0, 1]`, deposited by agents that reach
//!   the exit and spread by [`FloorFieldGrid::diffuse`] after each movement
//!   phase.
//!
//! # Layout
//!
//! `cells[y * width + x]`.  The outer ring is always border wall.

use evac_core::{EvacConfig, GridPos};

use crate::{Cell, GridError, GridResult};

pub struct FloorFieldGrid {
    width:    u32,
    height:   u32,
    exit:     GridPos,
    /// Euclidean length of the grid diagonal; the static-field normaliser.
    diagonal: f64,
    cells:    Vec<Cell>,
}

impl FloorFieldGrid {
    /// Build a `width × height` grid (border ring included) with the exit at
    /// `exit`.
    pub fn new(width: u32, height: u32, exit: GridPos) -> GridResult<Self> {
        if width < 3 || height < 3 {
            return Err(GridError::TooSmall { width, height });
        }
        let diagonal = GridPos::new(0, 0).distance(GridPos::new(width as i32 - 1, height as i32 - 1));
        let mut grid = FloorFieldGrid {
            width,
            height,
            exit,
            diagonal,
            cells: Vec::with_capacity((width * height) as usize),
        };
        if !grid.is_interior(exit) {
            return Err(GridError::ExitNotInterior(exit));
        }

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let pos = GridPos::new(x, y);
                let sf = grid.static_field_for(pos);
                let cell = if grid.is_interior(pos) { Cell::open(pos, sf) } else { Cell::border(pos, sf) };
                grid.cells.push(cell);
            }
        }
        Ok(grid)
    }

    /// Build the grid described by `config` (dimensions and exit).
    pub fn from_config(config: &EvacConfig) -> GridResult<Self> {
        Self::new(config.width, config.height, config.exit)
    }

    // ── Dimensions and lookup ─────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn exit(&self) -> GridPos {
        self.exit
    }

    #[inline]
    pub fn is_exit(&self, pos: GridPos) -> bool {
        pos == self.exit
    }

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// `true` if `pos` lies strictly inside the border ring.
    #[inline]
    pub fn is_interior(&self, pos: GridPos) -> bool {
        pos.x >= 1 && pos.y >= 1 && (pos.x as u32) + 1 < self.width && (pos.y as u32) + 1 < self.height
    }

    #[inline]
    fn index(&self, pos: GridPos) -> Option<usize> {
        self.in_bounds(pos).then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn cell(&self, pos: GridPos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, pos: GridPos) -> GridResult<&mut Cell> {
        match self.index(pos) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(GridError::OutOfBounds(pos)),
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In-bounds Moore neighbours of `pos` (walls included), in
    /// `MOORE_OFFSETS` order.
    pub fn moore_neighbors(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        pos.moore_ring().filter(move |p| self.in_bounds(*p))
    }

    // ── Fields ────────────────────────────────────────────────────────────

    fn static_field_for(&self, pos: GridPos) -> f64 {
        1.0 - pos.distance(self.exit) / self.diagonal
    }

    pub fn static_field(&self, pos: GridPos) -> Option<f64> {
        self.cell(pos).map(|c| c.static_field)
    }

    pub fn dynamic_field(&self, pos: GridPos) -> Option<f64> {
        self.cell(pos).map(|c| c.dynamic_field)
    }

    /// Sum of the committed dynamic field over every cell.
    pub fn total_dynamic_field(&self) -> f64 {
        self.cells.iter().map(|c| c.dynamic_field).sum()
    }

    /// Accumulate `amount` into the pending delta of `pos`.  The committed
    /// value is untouched until [`commit_dynamic_field`](Self::commit_dynamic_field).
    pub fn change_dynamic_field(&mut self, pos: GridPos, amount: f64) -> GridResult<()> {
        self.cell_mut(pos)?.change_dynamic_field(amount);
        Ok(())
    }

    pub fn commit_dynamic_field(&mut self, pos: GridPos) -> GridResult<()> {
        self.cell_mut(pos)?.commit_dynamic_field();
        Ok(())
    }

    /// One diffusion pass.
    ///
    /// Every non-wall cell sheds `min(rate, df)` of its committed value,
    /// split equally among its in-bounds Moore neighbours (walls receive
    /// their share too, which is how mass leaks out of the room).  All
    /// transfers are accumulated before any cell is committed.
    pub fn diffuse(&mut self, rate: f64) {
        for i in 0..self.cells.len() {
            let cell = &self.cells[i];
            if cell.is_wall {
                continue;
            }
            let amount = rate.min(cell.dynamic_field);
            if amount <= 0.0 {
                continue;
            }
            let pos = cell.pos;
            let neighbors: Vec<usize> = self.moore_neighbors(pos).filter_map(|p| self.index(p)).collect();
            let share = amount / neighbors.len() as f64;
            self.cells[i].change_dynamic_field(-amount);
            for n in neighbors {
                self.cells[n].change_dynamic_field(share);
            }
        }
        for cell in &mut self.cells {
            cell.commit_dynamic_field();
        }
    }

    // ── Exit ──────────────────────────────────────────────────────────────

    /// Move the exit to `pos` and recompute every static field.
    pub fn set_exit(&mut self, pos: GridPos) -> GridResult<()> {
        if !self.is_interior(pos) {
            return Err(GridError::ExitNotInterior(pos));
        }
        if self.cell(pos).is_some_and(|c| c.is_wall) {
            return Err(GridError::IsWall(pos));
        }
        self.exit = pos;
        for i in 0..self.cells.len() {
            let sf = self.static_field_for(self.cells[i].pos);
            self.cells[i].static_field = sf;
        }
        Ok(())
    }

    // ── Walls and occupancy ───────────────────────────────────────────────

    /// Turn a free, non-exit cell into a wall.
    pub fn add_wall(&mut self, pos: GridPos) -> GridResult<()> {
        if self.is_exit(pos) {
            return Err(GridError::IsExit(pos));
        }
        let cell = self.cell_mut(pos)?;
        if cell.occupied {
            return Err(GridError::Occupied(pos));
        }
        cell.make_wall();
        Ok(())
    }

    /// Remove an interior wall.  Border walls are permanent.
    pub fn remove_wall(&mut self, pos: GridPos) -> GridResult<()> {
        let cell = self.cell_mut(pos)?;
        if cell.is_border {
            return Err(GridError::BorderWall(pos));
        }
        if !cell.is_wall {
            return Err(GridError::NotAWall(pos));
        }
        cell.clear_wall();
        Ok(())
    }

    #[inline]
    pub fn is_wall(&self, pos: GridPos) -> bool {
        self.cell(pos).is_some_and(|c| c.is_wall)
    }

    /// `true` if `pos` is in bounds and nothing (agent or wall) stands there.
    #[inline]
    pub fn is_free(&self, pos: GridPos) -> bool {
        self.cell(pos).is_some_and(Cell::is_free)
    }

    /// Mark an agent as present or absent.  Walls stay occupied.
    pub fn set_occupied(&mut self, pos: GridPos, occupied: bool) -> GridResult<()> {
        let cell = self.cell_mut(pos)?;
        if cell.is_wall {
            return Err(GridError::IsWall(pos));
        }
        cell.occupied = occupied;
        Ok(())
    }
}
