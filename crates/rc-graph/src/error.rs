//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `rc-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("location {0:?} not found in graph")]
    NotFound(String),

    #[error("invalid duration {duration} for route {start:?} -> {end:?}: must be >= 0")]
    InvalidWeight { start: String, end: String, duration: f64 },

    #[error("route from {0:?} to itself")]
    SelfLoop(String),

    #[error("route table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
