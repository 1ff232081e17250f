//! Brusselator chemical oscillator.
//!
//! dx = a + x^2 * y - b * x - x
//! dy = b * x - x^2 * y

use crate::traits::DynamicalSystem;
use nalgebra::{dvector, DVector};

/// Brusselator system. Oscillatory for b > 1 + a^2.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brusselator {
    pub a: f64,
    pub b: f64,
}

impl Default for Brusselator {
    fn default() -> Self {
        Self { a: 1.0, b: 1.0 }
    }
}

impl Brusselator {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

impl DynamicalSystem for Brusselator {
    fn dim(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "brusselator"
    }

    fn rhs(&self, _t: f64, x: &DVector<f64>) -> DVector<f64> {
        let (xv, yv) = (x[0], x[1]);
        dvector![
            self.a + xv * xv * yv - self.b * xv - xv,
            self.b * xv - xv * xv * yv,
        ]
    }

    fn default_state(&self) -> DVector<f64> {
        dvector![1.0, 1.0]
    }

    fn default_span(&self) -> (f64, usize) {
        (50.0, 5000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{nearly_equal, Tolerances};

    #[test]
    fn analytic_fixed_point() {
        // (x, y) = (a, b/a) zeroes both equations.
        let tol = Tolerances::default();
        let sys = Brusselator::new(1.0, 3.0);
        let dx = sys.rhs(0.0, &dvector![1.0, 3.0]);
        assert!(nearly_equal(dx[0], 0.0, tol));
        assert!(nearly_equal(dx[1], 0.0, tol));

        let sys = Brusselator::new(2.0, 5.0);
        let dx = sys.rhs(0.0, &dvector![2.0, 2.5]);
        assert!(nearly_equal(dx[0], 0.0, tol));
        assert!(nearly_equal(dx[1], 0.0, tol));
    }

    #[test]
    fn rhs_matches_hand_computation() {
        let sys = Brusselator::new(1.0, 3.0);
        let dx = sys.rhs(0.0, &dvector![0.5, 1.0]);
        // a + x^2 y - b x - x = 1 + 0.25 - 1.5 - 0.5
        assert!((dx[0] - (-0.75)).abs() < 1e-12);
        // b x - x^2 y = 1.5 - 0.25
        assert!((dx[1] - 1.25).abs() < 1e-12);
    }
}
