//! Error types for model construction.

use thiserror::Error;

/// Errors raised while constructing a dynamical system.
///
/// Right-hand side evaluation itself never fails; only static
/// configuration is checked, and it is checked before any integration.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid dimension: n={n}, need at least {min}")]
    InvalidDimension { n: usize, min: usize },

    #[error("Unknown system: {name}")]
    UnknownSystem { name: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
