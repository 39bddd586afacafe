//! Example walking through single-qubit state vectors: validity checks,
//! probabilities, a single collapsing measurement and a shot histogram.

use num_complex::Complex;
use qstate::{Sampler, StateError, StateVector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::FRAC_1_SQRT_2;
use tracing::Level;

fn main() -> Result<(), StateError> {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();
    println!("--- qstate Example: Single Qubit States ---");

    // --- Validity ---
    // |c0|^2 + |c1|^2 = 0.25 + 9 = 9.25, so this vector is not a physical state
    let invalid = StateVector::new(vec![Complex::new(0.5, 0.0), Complex::new(0.0, 3.0)])?;
    println!("\n{} -> valid: {}", invalid, invalid.is_valid());

    let plus = StateVector::from_real(&[FRAC_1_SQRT_2, FRAC_1_SQRT_2])?;
    println!("{} -> valid: {}", plus, plus.is_valid());

    // --- Probabilities ---
    let minus = StateVector::from_real(&[FRAC_1_SQRT_2, -FRAC_1_SQRT_2])?;
    println!("\nProbabilities of {}:", minus);
    for (label, p) in minus.probabilities_as_labels(true) {
        println!("  P({}) = {:.4}", label, p);
    }
    println!("Same physical state as |+>? {}", minus.equiv(&plus)?);

    // --- One shot ---
    let sampler = Sampler::new();
    let mut rng = StdRng::seed_from_u64(2024);
    let outcome = sampler.measure_once(&plus, &mut rng)?;
    println!("\n{}", outcome);
    println!("State after measurement: {}", outcome.collapsed());

    // --- Many shots ---
    let counts = sampler.sample_counts(&plus, 1_000, &mut rng)?;
    println!("\n{}", counts);
    for (label, freq) in counts.frequencies() {
        println!("  f({}) = {:.3}", label, freq);
    }

    Ok(())
}
