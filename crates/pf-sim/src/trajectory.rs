//! Sampled trajectory record.

use nalgebra::DVector;

/// One fixed-step sampled trajectory.
///
/// `times` and `states` have equal length; `times[0] == 0` and the last
/// entry is exactly `t_end`. Immutable once produced by the integrator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    /// Sample times (strictly increasing, starting at 0)
    pub times: Vec<f64>,
    /// State snapshots, one per sample time
    pub states: Vec<DVector<f64>>,
}

impl Trajectory {
    /// Number of recorded samples.
    pub fn n_points(&self) -> usize {
        self.times.len()
    }

    /// State dimension, 0 for an empty trajectory.
    pub fn dim(&self) -> usize {
        self.states.first().map_or(0, |s| s.len())
    }

    /// Extract one state component as a time series.
    pub fn component(&self, axis: usize) -> Vec<f64> {
        self.states.iter().map(|s| s[axis]).collect()
    }

    /// Final sampled state.
    pub fn last_state(&self) -> Option<&DVector<f64>> {
        self.states.last()
    }

    /// True if any sample contains a non-finite value (divergence).
    pub fn has_diverged(&self) -> bool {
        self.states
            .iter()
            .any(|s| s.iter().any(|v| !v.is_finite()))
    }
}
