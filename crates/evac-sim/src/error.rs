use evac_core::{EvacError, GridPos};
use evac_grid::GridError;
use evac_movement::MovementError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] EvacError),

    #[error("position {0} lies outside the grid")]
    OutOfBounds(GridPos),

    #[error("cell {0} is already occupied")]
    CellOccupied(GridPos),

    #[error("cell {0} is a wall")]
    CellIsWall(GridPos),

    #[error("cell {0} is the exit")]
    CellIsExit(GridPos),

    #[error("no agent at {0}")]
    NoAgentAt(GridPos),

    #[error("cell {0} holds neither an agent nor a removable wall")]
    NothingToClear(GridPos),

    #[error("invalid population weights: {0}")]
    InvalidWeights(String),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("movement phase failed: {0}")]
    Movement(#[from] MovementError),
}

pub type SimResult<T> = Result<T, SimError>;
