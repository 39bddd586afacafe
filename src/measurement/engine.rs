// src/measurement/engine.rs
use crate::core::StateVector;
use crate::probability::probabilities;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

/// Inverse-CDF lookup table over basis indices. (Internal visibility)
///
/// Built once per sampling call so that repeated shots cost a binary search
/// each instead of a fresh pass over all `2^n` probabilities.
pub(crate) struct CumulativeDistribution {
    /// `cumulative[k] = p_0 + ... + p_k`, non-decreasing, last entry exactly 1.0.
    cumulative: Vec<f64>,
}

impl CumulativeDistribution {
    /// Builds the table for a state already known to be normalized.
    ///
    /// Negative rounding artifacts are clamped to zero. From the last index
    /// with non-zero probability onward the cumulative value is forced to
    /// exactly 1.0, so a draw just below 1.0 can neither fall past the final
    /// boundary nor land on a trailing zero-probability outcome.
    pub(crate) fn from_state(state: &StateVector) -> Self {
        let probs = probabilities(state);
        let mut cumulative = Vec::with_capacity(probs.len());
        let mut running = 0.0;
        for p in &probs {
            running += p.max(0.0);
            cumulative.push(running);
        }
        let last_nonzero = probs.iter().rposition(|&p| p > 0.0).unwrap_or(probs.len() - 1);
        for c in &mut cumulative[last_nonzero..] {
            *c = 1.0;
        }
        Self { cumulative }
    }

    /// Smallest `k` with `u < cumulative[k]`, for `u` in `[0, 1)`.
    pub(crate) fn index_for(&self, u: f64) -> usize {
        let k = self.cumulative.partition_point(|&c| c <= u);
        k.min(self.cumulative.len() - 1)
    }

    /// Draws `u` uniformly from `[0, 1)` and maps it to a basis index.
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let u: f64 = StandardUniform.sample(rng);
        self.index_for(u)
    }
}
