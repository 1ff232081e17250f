//! Contract tests for the fixed-step integration driver: sample shape,
//! determinism, accuracy against a closed-form solution, and divergence
//! pass-through.

use nalgebra::{dvector, DVector};
use pf_core::{nearly_equal, Tolerances};
use pf_models::{Brusselator, DynamicalSystem, Lorenz};
use pf_sim::{integrate, IntegratorKind, SimOptions};
use proptest::prelude::*;

/// dx/dt = -rate * x, solution x(t) = x0 * exp(-rate * t).
struct LinearDecay {
    rate: f64,
}

impl DynamicalSystem for LinearDecay {
    fn dim(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "linear-decay"
    }

    fn rhs(&self, _t: f64, x: &DVector<f64>) -> DVector<f64> {
        dvector![-self.rate * x[0]]
    }

    fn default_state(&self) -> DVector<f64> {
        dvector![1.0]
    }

    fn default_span(&self) -> (f64, usize) {
        (5.0, 501)
    }
}

/// dx/dt = x^2 from x0 = 1 blows up at t = 1.
struct FiniteTimeBlowup;

impl DynamicalSystem for FiniteTimeBlowup {
    fn dim(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "blowup"
    }

    fn rhs(&self, _t: f64, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0] * x[0]]
    }

    fn default_state(&self) -> DVector<f64> {
        dvector![1.0]
    }

    fn default_span(&self) -> (f64, usize) {
        (2.0, 201)
    }
}

#[test]
fn trajectory_shape_matches_request() {
    let sys = Lorenz::default();
    let opts = SimOptions::new(50.0, 5000);
    let traj = integrate(&sys, &sys.default_state(), &opts).unwrap();

    assert_eq!(traj.times.len(), 5000);
    assert_eq!(traj.states.len(), 5000);
    assert_eq!(traj.times[0], 0.0);
    assert_eq!(traj.times[4999], 50.0);
    for w in traj.times.windows(2) {
        assert!(w[1] > w[0], "times must be strictly increasing");
    }
    for s in &traj.states {
        assert_eq!(s.len(), 3);
    }
}

#[test]
fn identical_inputs_give_bit_identical_trajectories() {
    let sys = Lorenz::default();
    let opts = SimOptions::new(10.0, 1000);
    let a = integrate(&sys, &sys.default_state(), &opts).unwrap();
    let b = integrate(&sys, &sys.default_state(), &opts).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rk4_tracks_exponential_decay() {
    let sys = LinearDecay { rate: 1.0 };
    let (t_end, n_points) = sys.default_span();
    let opts = SimOptions::new(t_end, n_points);
    let traj = integrate(&sys, &sys.default_state(), &opts).unwrap();

    // RK4 at h = 0.01 tracks the analytic solution far tighter than this.
    let tol = Tolerances {
        abs: 1e-8,
        rel: 1e-8,
    };
    for (t, s) in traj.times.iter().zip(&traj.states) {
        let exact = (-t).exp();
        assert!(
            nearly_equal(s[0], exact, tol),
            "t={t}: got {}, exact {exact}",
            s[0]
        );
    }
}

#[test]
fn euler_is_less_accurate_than_rk4() {
    let sys = LinearDecay { rate: 1.0 };
    let rk4 = integrate(
        &sys,
        &sys.default_state(),
        &SimOptions::new(5.0, 101),
    )
    .unwrap();
    let euler = integrate(
        &sys,
        &sys.default_state(),
        &SimOptions {
            integrator: IntegratorKind::ForwardEuler,
            ..SimOptions::new(5.0, 101)
        },
    )
    .unwrap();

    let exact = (-5.0f64).exp();
    let rk4_err = (rk4.last_state().unwrap()[0] - exact).abs();
    let euler_err = (euler.last_state().unwrap()[0] - exact).abs();
    assert!(rk4_err < euler_err);
    assert!(rk4_err < 1e-6);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn trajectory_shape_holds_for_arbitrary_spans(
        t_end in 0.1f64..50.0,
        n_points in 2usize..400,
    ) {
        let sys = Brusselator::default();
        let traj = integrate(
            &sys,
            &sys.default_state(),
            &SimOptions::new(t_end, n_points),
        )
        .unwrap();

        prop_assert_eq!(traj.times.len(), n_points);
        prop_assert_eq!(traj.states.len(), n_points);
        prop_assert_eq!(traj.times[0], 0.0);
        prop_assert_eq!(traj.times[n_points - 1], t_end);
        for w in traj.times.windows(2) {
            prop_assert!(w[1] > w[0]);
        }
    }
}

#[test]
fn divergence_passes_through_without_error() {
    let sys = FiniteTimeBlowup;
    let (t_end, n_points) = sys.default_span();
    let opts = SimOptions::new(t_end, n_points);
    let traj = integrate(&sys, &sys.default_state(), &opts).unwrap();

    // The run completes with the full sample count; the blowup shows up
    // as non-finite values in the data, not as an error.
    assert_eq!(traj.n_points(), n_points);
    assert!(traj.has_diverged());
}
