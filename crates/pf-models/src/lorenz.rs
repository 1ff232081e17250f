//! Lorenz attractor.
//!
//! dx = sigma * (y - x)
//! dy = x * (rho - z) - y
//! dz = x * y - beta * z

use crate::traits::DynamicalSystem;
use nalgebra::{dvector, DVector};

/// Lorenz system with the classic chaotic parameter set as default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lorenz {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for Lorenz {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl Lorenz {
    pub fn new(sigma: f64, rho: f64, beta: f64) -> Self {
        Self { sigma, rho, beta }
    }
}

impl DynamicalSystem for Lorenz {
    fn dim(&self) -> usize {
        3
    }

    fn name(&self) -> &'static str {
        "lorenz"
    }

    fn rhs(&self, _t: f64, x: &DVector<f64>) -> DVector<f64> {
        let (xv, yv, zv) = (x[0], x[1], x[2]);
        dvector![
            self.sigma * (yv - xv),
            xv * (self.rho - zv) - yv,
            xv * yv - self.beta * zv,
        ]
    }

    fn default_state(&self) -> DVector<f64> {
        dvector![1.0, 1.0, 1.0]
    }

    fn default_span(&self) -> (f64, usize) {
        (50.0, 5000)
    }
}
