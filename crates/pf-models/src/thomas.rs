//! Thomas' cyclically symmetric attractor, shifted to a center offset.
//!
//! dx = sin(y - cy) - b * (x - cx)
//! dy = sin(z - cz) - b * (y - cy)
//! dz = sin(x - cx) - b * (z - cz)
//!
//! The center (cx, cy, cz) = (2, 2, 2) is fixed. Initial conditions are
//! given as offsets from the center; the center is added internally.

use crate::traits::DynamicalSystem;
use nalgebra::{dvector, DVector};

/// Center offset applied to every axis.
pub const CENTER: f64 = 2.0;

/// Thomas system. Chaotic near b = 0.208186.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thomas {
    pub b: f64,
}

impl Default for Thomas {
    fn default() -> Self {
        Self { b: 0.208186 }
    }
}

impl Thomas {
    pub fn new(b: f64) -> Self {
        Self { b }
    }

    /// Build an absolute initial state from offsets relative to the center.
    pub fn state_from_offsets(&self, dx: f64, dy: f64, dz: f64) -> DVector<f64> {
        dvector![dx + CENTER, dy + CENTER, dz + CENTER]
    }
}

impl DynamicalSystem for Thomas {
    fn dim(&self) -> usize {
        3
    }

    fn name(&self) -> &'static str {
        "thomas"
    }

    fn rhs(&self, _t: f64, x: &DVector<f64>) -> DVector<f64> {
        let (xv, yv, zv) = (x[0], x[1], x[2]);
        dvector![
            (yv - CENTER).sin() - self.b * (xv - CENTER),
            (zv - CENTER).sin() - self.b * (yv - CENTER),
            (xv - CENTER).sin() - self.b * (zv - CENTER),
        ]
    }

    fn default_state(&self) -> DVector<f64> {
        self.state_from_offsets(0.1, 0.0, 0.0)
    }

    fn default_span(&self) -> (f64, usize) {
        (500.0, 50000)
    }
}
