//! Lorenz-96 model: N coupled variables on a ring.
//!
//! dx_i = (x_{i+1} - x_{i-2}) * x_{i-1} - x_i + F
//!
//! Species indices are 1-based and wrap cyclically modulo N. N >= 4 is
//! required; with fewer species the three distinct neighbors collide.

use crate::error::{ModelError, ModelResult};
use crate::traits::DynamicalSystem;
use nalgebra::DVector;
use pf_core::wrap_index;

/// Minimum ring size for a well-defined neighbor scheme.
pub const MIN_DIMENSION: usize = 4;

/// Lorenz-96 system with forcing F.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lorenz96 {
    n: usize,
    pub forcing: f64,
}

impl Lorenz96 {
    /// Create a Lorenz-96 ring of `n` species with forcing `f`.
    pub fn new(n: usize, forcing: f64) -> ModelResult<Self> {
        if n < MIN_DIMENSION {
            return Err(ModelError::InvalidDimension {
                n,
                min: MIN_DIMENSION,
            });
        }
        Ok(Self { n, forcing })
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl Default for Lorenz96 {
    /// The reference configuration: N=5, F=8 (chaotic regime).
    fn default() -> Self {
        Self {
            n: 5,
            forcing: 8.0,
        }
    }
}

impl DynamicalSystem for Lorenz96 {
    fn dim(&self) -> usize {
        self.n
    }

    fn name(&self) -> &'static str {
        "lorenz96"
    }

    fn rhs(&self, _t: f64, x: &DVector<f64>) -> DVector<f64> {
        let n = self.n;
        DVector::from_fn(n, |idx, _| {
            let i = idx + 1; // 1-based species index
            let ip1 = wrap_index(i, 1, n) - 1;
            let im1 = wrap_index(i, -1, n) - 1;
            let im2 = wrap_index(i, -2, n) - 1;
            (x[ip1] - x[im2]) * x[im1] - x[idx] + self.forcing
        })
    }

    fn default_state(&self) -> DVector<f64> {
        // Uniform equilibrium x_i = F with a small kick on the first
        // species to break the symmetry.
        let mut x0 = DVector::from_element(self.n, self.forcing);
        x0[0] += 0.01;
        x0
    }

    fn default_span(&self) -> (f64, usize) {
        // T=30 at dt=0.01: ceil(T/dt) + 1 samples.
        (30.0, 3001)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{nearly_equal, Tolerances};
    use proptest::prelude::*;

    #[test]
    fn rejects_small_rings() {
        assert!(matches!(
            Lorenz96::new(3, 8.0),
            Err(ModelError::InvalidDimension { n: 3, min: 4 })
        ));
        assert!(Lorenz96::new(4, 8.0).is_ok());
    }

    #[test]
    fn uniform_forcing_state_is_fixed_point() {
        let tol = Tolerances::default();
        for n in [4usize, 5, 10] {
            let sys = Lorenz96::new(n, 8.0).unwrap();
            let x = DVector::from_element(n, 8.0);
            let dx = sys.rhs(0.0, &x);
            for i in 0..n {
                assert!(nearly_equal(dx[i], 0.0, tol), "component {i} of N={n}");
            }
        }
    }

    #[test]
    fn rhs_matches_direct_expression_n5() {
        let sys = Lorenz96::new(5, 8.0).unwrap();
        let x = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let dx = sys.rhs(0.0, &x);
        // i=1 (idx 0): neighbors x2, x5, x4 -> (x2 - x4)*x5 - x1 + F
        assert!((dx[0] - ((2.0 - 4.0) * 5.0 - 1.0 + 8.0)).abs() < 1e-12);
        // i=5 (idx 4): neighbors x1, x4, x3 -> (x1 - x3)*x4 - x5 + F
        assert!((dx[4] - ((1.0 - 3.0) * 4.0 - 5.0 + 8.0)).abs() < 1e-12);
    }

    #[test]
    fn default_state_kicks_first_species() {
        let sys = Lorenz96::default();
        let x0 = sys.default_state();
        assert_eq!(x0.len(), 5);
        assert!((x0[0] - 8.01).abs() < 1e-12);
        assert!((x0[1] - 8.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn rhs_dimension_matches(n in 4usize..32) {
            let sys = Lorenz96::new(n, 8.0).unwrap();
            let x = DVector::from_element(n, 0.5);
            prop_assert_eq!(sys.rhs(0.0, &x).len(), n);
        }
    }
}
