//! Fixed-step time integrators.

use nalgebra::DVector;
use pf_models::DynamicalSystem;

/// Trait for single-step explicit integrators.
pub trait Integrator {
    /// Advance the state from `t` to `t + dt`.
    fn step(
        &self,
        model: &dyn DynamicalSystem,
        t: f64,
        x: &DVector<f64>,
        dt: f64,
    ) -> DVector<f64>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug)]
pub struct RK4;

impl Integrator for RK4 {
    fn step(
        &self,
        model: &dyn DynamicalSystem,
        t: f64,
        x: &DVector<f64>,
        dt: f64,
    ) -> DVector<f64> {
        let k1 = model.rhs(t, x);

        let x2 = x + &k1 * (0.5 * dt);
        let k2 = model.rhs(t + 0.5 * dt, &x2);

        let x3 = x + &k2 * (0.5 * dt);
        let k3 = model.rhs(t + 0.5 * dt, &x3);

        let x4 = x + &k3 * dt;
        let k4 = model.rhs(t + dt, &x4);

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = k1 + &k2 * 2.0 + &k3 * 2.0 + k4;
        x + k_sum * (dt / 6.0)
    }
}

/// Forward Euler (explicit, 1st order, fast for testing).
/// Calls rhs() once per step instead of 4 times (RK4).
#[derive(Clone, Copy, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step(
        &self,
        model: &dyn DynamicalSystem,
        t: f64,
        x: &DVector<f64>,
        dt: f64,
    ) -> DVector<f64> {
        let xdot = model.rhs(t, x);
        x + xdot * dt
    }
}
