// src/measurement/mod.rs

//! Simulated computational-basis measurement of a `StateVector`.
//!
//! [`Sampler`] is the entry point. Randomness is always supplied by the
//! caller, so a seeded generator makes every result reproducible. Sampling
//! refuses states that are not normalized; probability inspection does not.

mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::{MeasurementOutcome, SampleCounts};

use crate::core::{Result, StateVector, basis_label};
use crate::validation::validate_state;
use engine::CumulativeDistribution;
use rand::Rng;
use tracing::{debug, trace};

/// Draws measurement outcomes from state vectors.
///
/// Carries no state between calls. A state is sampled only if
/// `state.is_valid()` holds for the tolerance it was built with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sampler;

impl Sampler {
    /// Creates a new Sampler.
    pub fn new() -> Self {
        Self
    }

    /// Measures every qubit once and collapses the state.
    ///
    /// Draws `u` in `[0, 1)` and selects the smallest basis index `k` whose
    /// cumulative probability exceeds `u`.
    ///
    /// # Arguments
    /// * `state` - The state to measure. It is not modified.
    /// * `rng` - Source of the uniform draw.
    ///
    /// # Returns
    /// * `Ok(MeasurementOutcome)` with the measured label and collapsed state.
    /// * `Err(StateError::InvalidState)` if `!state.is_valid()` or the state
    ///   has non-finite amplitudes.
    pub fn measure_once<R: Rng + ?Sized>(&self, state: &StateVector, rng: &mut R) -> Result<MeasurementOutcome> {
        validate_state(state, None)?;
        let cdf = CumulativeDistribution::from_state(state);
        let k = cdf.sample(rng);

        let label = basis_label(k, state.num_qubits());
        let probability = state.amplitude_at(k)?.norm_sqr();
        trace!(index = k, label = %label, probability, "single-shot measurement");
        Ok(MeasurementOutcome::new(k, label, probability, state.collapse_to(k)?))
    }

    /// Repeats a measurement `shots` times on fresh copies of `state`.
    ///
    /// Shots are independent: each one samples the original distribution, so
    /// this models repeated preparation and measurement, not sequential
    /// measurement of one system. Only observed labels appear in the result
    /// and the counts sum to exactly `shots`. Zero shots yield empty counts.
    ///
    /// # Errors
    /// * `StateError::InvalidState` under the same condition as
    ///   [`Sampler::measure_once`].
    pub fn sample_counts<R: Rng + ?Sized>(&self, state: &StateVector, shots: usize, rng: &mut R) -> Result<SampleCounts> {
        let mut counts = SampleCounts::new();
        for label in self.sample_memory(state, shots, rng)? {
            counts.record(label);
        }
        debug!(shots, distinct = counts.len(), "sample_counts finished");
        Ok(counts)
    }

    /// The per-shot labels behind [`Sampler::sample_counts`], in draw order.
    ///
    /// # Errors
    /// * `StateError::InvalidState` under the same condition as
    ///   [`Sampler::measure_once`].
    pub fn sample_memory<R: Rng + ?Sized>(&self, state: &StateVector, shots: usize, rng: &mut R) -> Result<Vec<String>> {
        validate_state(state, None)?;
        debug!(shots, num_qubits = state.num_qubits(), "sampling state vector");

        let cdf = CumulativeDistribution::from_state(state);
        let num_qubits = state.num_qubits();
        Ok((0..shots)
            .map(|_| basis_label(cdf.sample(rng), num_qubits))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateError;
    use num_complex::Complex;
    use num_traits::{One, Zero};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn plus_state() -> StateVector {
        StateVector::from_real(&[FRAC_1_SQRT_2, FRAC_1_SQRT_2]).unwrap()
    }

    #[test]
    fn test_measure_once_collapses_to_label() -> Result<()> {
        let sampler = Sampler::new();
        let mut rng = StdRng::seed_from_u64(7);
        let state = StateVector::new(vec![
            Complex::new(0.5, 0.0),
            Complex::new(0.0, 0.5),
            Complex::new(-0.5, 0.0),
            Complex::new(0.0, -0.5),
        ])?;
        for _ in 0..50 {
            let outcome = sampler.measure_once(&state, &mut rng)?;
            let (index, _) = crate::core::parse_label(outcome.label())?;
            assert_eq!(index, outcome.index());
            for (i, c) in outcome.collapsed().amplitudes().iter().enumerate() {
                if i == index {
                    assert_eq!(*c, Complex::one());
                } else {
                    assert_eq!(*c, Complex::zero());
                }
            }
            assert!((outcome.probability() - 0.25).abs() < 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_basis_state_is_deterministic() -> Result<()> {
        let sampler = Sampler::new();
        let mut rng = StdRng::seed_from_u64(1);
        let state = StateVector::from_label("10")?;
        let counts = sampler.sample_counts(&state, 200, &mut rng)?;
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("10"), 200);
        assert_eq!(sampler.measure_once(&state, &mut rng)?.label(), "10");
        Ok(())
    }

    #[test]
    fn test_invalid_state_is_refused() -> Result<()> {
        let sampler = Sampler::new();
        let mut rng = StdRng::seed_from_u64(3);
        let state = StateVector::new(vec![Complex::new(0.5, 0.0), Complex::new(0.0, 3.0)])?;
        assert!(matches!(sampler.measure_once(&state, &mut rng), Err(StateError::InvalidState { .. })));
        assert!(matches!(sampler.sample_counts(&state, 10, &mut rng), Err(StateError::InvalidState { .. })));
        assert!(matches!(sampler.sample_memory(&state, 10, &mut rng), Err(StateError::InvalidState { .. })));
        Ok(())
    }

    #[test]
    fn test_zero_shots() -> Result<()> {
        let counts = Sampler::new().sample_counts(&plus_state(), 0, &mut StdRng::seed_from_u64(0))?;
        assert!(counts.is_empty());
        assert_eq!(counts.shots(), 0);
        Ok(())
    }

    #[test]
    fn test_precondition_follows_state_tolerance() -> Result<()> {
        let sampler = Sampler::new();
        let mut rng = StdRng::seed_from_u64(11);

        // norm^2 = 0.98: invalid at the default tolerance, so never sampled
        let strict = StateVector::from_real(&[0.7, 0.7])?;
        assert!(!strict.is_valid());
        assert!(matches!(sampler.measure_once(&strict, &mut rng), Err(StateError::InvalidState { .. })));
        assert!(matches!(sampler.sample_counts(&strict, 10, &mut rng), Err(StateError::InvalidState { .. })));

        // Same amplitudes built with a loose tolerance report valid and are sampled
        let loose = StateVector::with_tolerance(vec![Complex::new(0.7, 0.0), Complex::new(0.7, 0.0)], 0.05)?;
        assert!(loose.is_valid());
        assert!(sampler.measure_once(&loose, &mut rng).is_ok());
        assert_eq!(sampler.sample_counts(&loose, 10, &mut rng)?.shots(), 10);
        Ok(())
    }

    #[test]
    fn test_memory_matches_counts_for_same_seed() -> Result<()> {
        let sampler = Sampler::new();
        let state = StateVector::from_real(&[0.6, 0.0, 0.0, 0.8])?;
        let memory = sampler.sample_memory(&state, 500, &mut StdRng::seed_from_u64(42))?;
        let counts = sampler.sample_counts(&state, 500, &mut StdRng::seed_from_u64(42))?;
        assert_eq!(memory.len(), 500);
        for (label, count) in counts.iter() {
            assert_eq!(memory.iter().filter(|l| l.as_str() == label).count() as u64, count);
        }
        assert!(memory.iter().all(|l| l == "00" || l == "11"));
        Ok(())
    }
}
