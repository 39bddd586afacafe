// src/lib.rs

//! `qstate` - Quantum state vectors and their simulated measurement
//!
//! A small, self-contained component for building 1-n qubit state vectors,
//! checking their normalization, reading off Born-rule probabilities, drawing
//! single-shot and repeated measurement samples from a caller-supplied random
//! source, and comparing states up to a global phase.

pub mod core;
pub mod probability;
pub mod measurement;
pub mod equivalence;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{StateVector, StateError, Result, DEFAULT_TOLERANCE, basis_label};
pub use crate::probability::{probabilities, probabilities_as_labels, probability_of, marginal_probabilities};
pub use crate::measurement::{Sampler, MeasurementOutcome, SampleCounts};
pub use crate::equivalence::equivalent;
pub use crate::validation::{
    check_normalization,
    check_tolerance,
    validate_state,
};

// Example 1: Single qubit superposition
// Validity, probabilities and a seeded histogram for (|0> + |1>)/sqrt(2).
/// ```
/// use qstate::{StateVector, Sampler, StateError};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// let plus = StateVector::from_real(&[FRAC_1_SQRT_2, FRAC_1_SQRT_2])?;
/// assert!(plus.is_valid());
/// println!("State: {}", plus);
///
/// let probs = plus.probabilities_as_labels(false);
/// assert!((probs["0"] - 0.5).abs() < 1e-12);
/// assert!((probs["1"] - 0.5).abs() < 1e-12);
///
/// // Seeded generator: the same counts on every run
/// let mut rng = StdRng::seed_from_u64(2024);
/// let counts = Sampler::new().sample_counts(&plus, 1000, &mut rng)?;
/// println!("{}", counts);
/// assert_eq!(counts.get("0") + counts.get("1"), 1000);
/// # Ok::<(), StateError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Measurement collapse and global phase
// A single shot collapses to a basis state; i|1> is the same state as |1>.
/// ```
/// use qstate::{StateVector, Sampler, StateError, equivalent};
/// use num_complex::Complex;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let state = StateVector::new(vec![
///     Complex::new(0.6, 0.0),  // |0>
///     Complex::new(0.0, 0.8),  // |1> with relative phase i
/// ])?;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let outcome = Sampler::new().measure_once(&state, &mut rng)?;
/// let (label, collapsed) = outcome.into_parts();
/// assert!(label == "0" || label == "1");
/// assert!(equivalent(&collapsed, &StateVector::from_label(&label)?, None)?);
///
/// let one = StateVector::from_label("1")?;
/// let i_one = StateVector::new(vec![Complex::new(0.0, 0.0), Complex::new(0.0, 1.0)])?;
/// assert!(equivalent(&one, &i_one, None)?);
/// # Ok::<(), StateError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
