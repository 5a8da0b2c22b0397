use evac_core::AgentId;
use evac_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovementError {
    #[error("agent {0} disappeared from the store during the movement phase")]
    AgentVanished(AgentId),

    #[error("grid update failed: {0}")]
    Grid(#[from] GridError),
}

pub type MovementResult<T> = Result<T, MovementError>;
