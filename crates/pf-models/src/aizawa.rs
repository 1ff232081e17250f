//! Aizawa attractor.
//!
//! dx = (z - b) * x - d * y
//! dy = d * x + (z - b) * y
//! dz = c + a * z - z^3 / 3 - x^2 + f * z * x^3
//!
//! The source this was ported from labeled the system "Brusselator" in its
//! docstring while implementing the Aizawa equations; the equations are
//! authoritative.

use crate::traits::DynamicalSystem;
use nalgebra::{dvector, DVector};

/// Aizawa system parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aizawa {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    /// Present in the original parameter set but not used by the equations.
    pub e: f64,
    pub f: f64,
}

impl Default for Aizawa {
    fn default() -> Self {
        Self {
            a: 0.92,
            b: 0.7,
            c: 0.67,
            d: 3.5,
            e: 0.25,
            f: 0.1,
        }
    }
}

impl Aizawa {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }
}

impl DynamicalSystem for Aizawa {
    fn dim(&self) -> usize {
        3
    }

    fn name(&self) -> &'static str {
        "aizawa"
    }

    fn rhs(&self, _t: f64, x: &DVector<f64>) -> DVector<f64> {
        let (xv, yv, zv) = (x[0], x[1], x[2]);
        dvector![
            (zv - self.b) * xv - self.d * yv,
            self.d * xv + (zv - self.b) * yv,
            self.c + self.a * zv - zv * zv * zv / 3.0 - xv * xv
                + self.f * zv * xv * xv * xv,
        ]
    }

    fn default_state(&self) -> DVector<f64> {
        dvector![0.1, 0.0, 0.0]
    }

    fn default_span(&self) -> (f64, usize) {
        (50.0, 2000)
    }
}
