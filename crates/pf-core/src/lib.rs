//! pf-core: stable foundation for phaseflow.
//!
//! Contains the shared numeric helpers: the `Real` scalar alias,
//! comparison tolerances, uniform sample-grid generation and the cyclic
//! index wraparound used by ring-coupled models.

pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
