//! Fixed-step trajectory simulation for phaseflow.
//!
//! Provides:
//! - `Integrator` trait with classical RK4 and forward Euler steppers
//! - `integrate`: one trajectory with uniformly spaced samples over [0, t_end]
//! - `run_sweep` / `run_sweep_parallel`: grids of offset initial conditions
//!
//! Divergence is not a failure mode: NaN/Inf states propagate through the
//! stepping scheme and land in the returned trajectory untouched.

pub mod error;
pub mod integrator;
pub mod sim;
pub mod sweep;
pub mod trajectory;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, RK4};
pub use sim::{integrate, IntegratorKind, SimOptions};
pub use sweep::{run_sweep, run_sweep_parallel, SweepGrid, SweepResult};
pub use trajectory::Trajectory;
