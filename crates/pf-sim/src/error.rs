//! Error types for simulation operations.

use pf_models::ModelError;
use thiserror::Error;

/// Errors encountered while configuring a simulation or sweep.
///
/// Everything here is a static configuration problem caught before the
/// first integration step. Numeric divergence during stepping is not an
/// error; non-finite values simply appear in the trajectory.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("State dimension mismatch: model expects {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Sweep axis out of range: axis {axis} for dimension {dim}")]
    AxisOutOfRange { axis: usize, dim: usize },

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

pub type SimResult<T> = Result<T, SimError>;
