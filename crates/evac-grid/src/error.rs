//! Grid error type.

use thiserror::Error;

use evac_core::GridPos;

/// Errors produced by `evac-grid`.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid {width}x{height} is too small; at least 3x3 is needed for the border ring")]
    TooSmall { width: u32, height: u32 },

    #[error("exit {0} must lie inside the border ring")]
    ExitNotInterior(GridPos),

    #[error("position {0} lies outside the grid")]
    OutOfBounds(GridPos),

    #[error("cell {0} is occupied")]
    Occupied(GridPos),

    #[error("cell {0} is the exit")]
    IsExit(GridPos),

    #[error("cell {0} is a wall")]
    IsWall(GridPos),

    #[error("cell {0} is part of the border and cannot be removed")]
    BorderWall(GridPos),

    #[error("cell {0} is not a wall")]
    NotAWall(GridPos),
}

pub type GridResult<T> = Result<T, GridError>;
