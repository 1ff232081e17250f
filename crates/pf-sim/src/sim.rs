//! Single-trajectory integration driver.

use nalgebra::DVector;
use pf_core::sample_times;
use pf_models::DynamicalSystem;
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator, RK4};
use crate::trajectory::Trajectory;

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorKind {
    /// 4th-order Runge-Kutta (default, most accurate, 4 rhs calls per step).
    #[default]
    RK4,
    /// Forward Euler (1st-order, faster, 1 rhs call per step).
    ForwardEuler,
}

/// Options for a single trajectory run.
#[derive(Clone, Copy, Debug)]
pub struct SimOptions {
    /// Final simulation time; samples span [0, t_end]
    pub t_end: f64,
    /// Number of uniformly spaced samples (>= 2)
    pub n_points: usize,
    /// Integrator type (default: RK4)
    pub integrator: IntegratorKind,
}

impl SimOptions {
    pub fn new(t_end: f64, n_points: usize) -> Self {
        Self {
            t_end,
            n_points,
            integrator: IntegratorKind::default(),
        }
    }

    fn validate(&self) -> SimResult<()> {
        if !(self.t_end > 0.0 && self.t_end.is_finite()) {
            return Err(SimError::InvalidArg {
                what: "t_end must be positive and finite",
            });
        }
        if self.n_points < 2 {
            return Err(SimError::InvalidArg {
                what: "n_points must be at least 2",
            });
        }
        Ok(())
    }
}

impl Default for SimOptions {
    fn default() -> Self {
        Self::new(50.0, 5000)
    }
}

/// Integrate one trajectory of `model` from `state0`.
///
/// Fixed step h = t_end / (n_points - 1); the state is recorded at every
/// step, so the samples land exactly on the uniform grid with no
/// interpolation. A single unconditional forward pass: no retries, no
/// value inspection, no clamping. Diverged (NaN/Inf) states propagate
/// into the result.
pub fn integrate(
    model: &dyn DynamicalSystem,
    state0: &DVector<f64>,
    opts: &SimOptions,
) -> SimResult<Trajectory> {
    opts.validate()?;
    if state0.len() != model.dim() {
        return Err(SimError::DimensionMismatch {
            expected: model.dim(),
            got: state0.len(),
        });
    }

    debug!(
        system = model.name(),
        t_end = opts.t_end,
        n_points = opts.n_points,
        "integrating trajectory"
    );

    let times = sample_times(opts.t_end, opts.n_points);
    let h = opts.t_end / (opts.n_points - 1) as f64;

    let mut states = Vec::with_capacity(opts.n_points);
    let mut x = state0.clone();
    states.push(x.clone());

    for i in 1..opts.n_points {
        let t = times[i - 1];
        x = match opts.integrator {
            IntegratorKind::RK4 => RK4.step(model, t, &x, h),
            IntegratorKind::ForwardEuler => ForwardEuler.step(model, t, &x, h),
        };
        states.push(x.clone());
    }

    Ok(Trajectory { times, states })
}
