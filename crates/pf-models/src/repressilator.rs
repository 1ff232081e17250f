//! Repressilator: three-gene oscillatory repression cycle.
//!
//! dA = alpha / (1 + C^n) - A
//! dB = alpha / (1 + A^n) - B
//! dC = alpha / (1 + B^n) - C

use crate::traits::DynamicalSystem;
use nalgebra::{dvector, DVector};

/// Repressilator parameters: transcription rate and Hill coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repressilator {
    pub alpha: f64,
    pub n: f64,
}

impl Default for Repressilator {
    fn default() -> Self {
        Self { alpha: 1.0, n: 2.0 }
    }
}

impl Repressilator {
    pub fn new(alpha: f64, n: f64) -> Self {
        Self { alpha, n }
    }
}

impl DynamicalSystem for Repressilator {
    fn dim(&self) -> usize {
        3
    }

    fn name(&self) -> &'static str {
        "repressilator"
    }

    fn rhs(&self, _t: f64, x: &DVector<f64>) -> DVector<f64> {
        let (a, b, c) = (x[0], x[1], x[2]);
        dvector![
            self.alpha / (1.0 + c.powf(self.n)) - a,
            self.alpha / (1.0 + a.powf(self.n)) - b,
            self.alpha / (1.0 + b.powf(self.n)) - c,
        ]
    }

    fn default_state(&self) -> DVector<f64> {
        dvector![0.1, 0.1, 0.1]
    }

    fn default_span(&self) -> (f64, usize) {
        (100.0, 5000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_state_has_symmetric_derivative() {
        let sys = Repressilator::new(20.0, 2.0);
        let dx = sys.rhs(0.0, &dvector![0.5, 0.5, 0.5]);
        assert!((dx[0] - dx[1]).abs() < 1e-12);
        assert!((dx[1] - dx[2]).abs() < 1e-12);
    }

    #[test]
    fn rhs_matches_hand_computation() {
        let sys = Repressilator::new(20.0, 2.0);
        let dx = sys.rhs(0.0, &dvector![1.0, 2.0, 3.0]);
        assert!((dx[0] - (20.0 / 10.0 - 1.0)).abs() < 1e-12); // alpha/(1+9) - 1
        assert!((dx[1] - (20.0 / 2.0 - 2.0)).abs() < 1e-12); // alpha/(1+1) - 2
        assert!((dx[2] - (20.0 / 5.0 - 3.0)).abs() < 1e-12); // alpha/(1+4) - 3
    }

    #[test]
    fn production_saturates_at_high_repressor() {
        let sys = Repressilator::new(20.0, 2.0);
        let dx = sys.rhs(0.0, &dvector![0.0, 0.0, 1e6]);
        // dA -> -A = 0 when C is huge; dB sees A=0 so full production.
        assert!(dx[0].abs() < 1e-6);
        assert!((dx[1] - 20.0).abs() < 1e-9);
    }
}
