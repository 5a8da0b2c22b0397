//! Framework error type.
//!
//! Sub-crates define their own error enums (`GridError`, `SimError`, …) and
//! wrap `EvacError` as one variant where they need it.

use thiserror::Error;

use crate::{AgentId, GridPos};

/// The top-level error type for `evac-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EvacError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("position {0} lies outside the grid")]
    OutOfBounds(GridPos),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `evac-*` crates.
pub type EvacResult<T> = Result<T, EvacError>;
