//! Dynamical system definitions for phaseflow.
//!
//! Each module implements one classical chaotic/oscillatory attractor
//! family behind the shared [`DynamicalSystem`] trait:
//! - Lorenz (3D)
//! - Lorenz-96 (N-dimensional ring, N >= 4)
//! - Aizawa (3D)
//! - Brusselator (2D)
//! - Thomas cyclically symmetric attractor (3D)
//! - Repressilator (3D genetic oscillator)
//!
//! All right-hand sides are pure and total: divergence to NaN/Inf is a
//! valid outcome, never an error. Construction-time parameter validation
//! (the Lorenz-96 minimum dimension) is the only failure mode.

pub mod aizawa;
pub mod brusselator;
pub mod catalog;
pub mod error;
pub mod lorenz;
pub mod lorenz96;
pub mod repressilator;
pub mod thomas;
pub mod traits;

// Re-exports for public API
pub use aizawa::Aizawa;
pub use brusselator::Brusselator;
pub use catalog::SystemKind;
pub use error::{ModelError, ModelResult};
pub use lorenz::Lorenz;
pub use lorenz96::Lorenz96;
pub use repressilator::Repressilator;
pub use thomas::Thomas;
pub use traits::DynamicalSystem;
