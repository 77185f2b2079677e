//! Scenario-subsystem error type.

use thiserror::Error;

use rc_core::CoreError;
use rc_graph::GraphError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("need {required} distinct routes for disruption events, graph has {available}")]
    InsufficientEdges { required: usize, available: usize },

    #[error("cannot place {blockages} blockages on {affected} affected routes")]
    TooManyBlockages { blockages: usize, affected: usize },

    #[error("distribution error: {0}")]
    Distribution(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
