/// Floating point type used throughout system
pub type Real = f64;

/// Absolute/relative tolerance pair for comparing sampled values.
///
/// The default is tight enough for fixed-point and closed-form checks on
/// O(1) states; accuracy tests over long spans widen it explicitly.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol`, absolute or relative.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Generate `n_points` uniformly spaced sample times over `[0, t_end]`.
///
/// The last entry is pinned to exactly `t_end` so accumulated rounding in
/// `i * h` never shifts the endpoint.
pub fn sample_times(t_end: Real, n_points: usize) -> Vec<Real> {
    if n_points <= 1 {
        return vec![0.0];
    }

    let h = t_end / (n_points - 1) as Real;
    let mut times = Vec::with_capacity(n_points);
    for i in 0..n_points {
        times.push(i as Real * h);
    }

    // Ensure exact endpoint
    times[n_points - 1] = t_end;
    times
}

/// Cyclic neighbor index for a ring of `n` species, 1-based.
///
/// Maps species `i` in `[1, n]` shifted by `offset` (which may be negative)
/// back into `[1, n]`. This is the Lorenz-96 wraparound scheme: the
/// neighbors of `i` are `wrap_index(i, 1, n)`, `wrap_index(i, -1, n)` and
/// `wrap_index(i, -2, n)`.
pub fn wrap_index(i: usize, offset: isize, n: usize) -> usize {
    debug_assert!(i >= 1 && i <= n);
    let shifted = (i as isize - 1 + offset).rem_euclid(n as isize);
    shifted as usize + 1
}
