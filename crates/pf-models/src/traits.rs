//! DynamicalSystem trait for pluggable attractor families.

use nalgebra::DVector;

/// Trait for autonomous ODE systems `x_dot = f(t, x)`.
///
/// Implementations must be pure: `rhs` reads the state and the model's
/// immutable parameters and nothing else, so two calls with the same
/// inputs return the same derivative. Divergent states (NaN/Inf) are
/// passed through arithmetic untouched.
///
/// `Send + Sync` is required so one model instance can be shared across
/// sweep worker threads.
pub trait DynamicalSystem: Send + Sync {
    /// State dimension D.
    fn dim(&self) -> usize;

    /// Short identifier for logs and exports.
    fn name(&self) -> &'static str;

    /// Compute the derivative dx/dt = f(t, x).
    ///
    /// `x.len()` must equal `dim()`; the returned vector has the same
    /// length.
    fn rhs(&self, t: f64, x: &DVector<f64>) -> DVector<f64>;

    /// Default initial state, as used by the reference simulations.
    fn default_state(&self) -> DVector<f64>;

    /// Default (t_end, n_points) span used when the caller does not
    /// specify one.
    fn default_span(&self) -> (f64, usize);
}
