//! `evac-grid`: the floor-field cell grid.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`cell`]  | `Cell`: static/dynamic field values, wall and occupancy flags |
//! | [`grid`]  | `FloorFieldGrid`: construction, diffusion, walls, exit        |
//! | [`error`] | `GridError`, `GridResult<T>`                                  |
//!
//! # Coordinates
//!
//! Dimensions include the outer ring of border walls, so a room with a
//! 25×25 walkable interior is a 27×27 grid.  Cells are stored row-major.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Cell`.       |

pub mod cell;
pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use cell::Cell;
pub use error::{GridError, GridResult};
pub use grid::FloorFieldGrid;
