//! Example comparing two-qubit states: a Bell state and a product state with
//! the same single-qubit marginals give very different joint histograms.

use qstate::{Sampler, StateError, StateVector, marginal_probabilities};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::FRAC_1_SQRT_2;
use tracing::Level;

fn main() -> Result<(), StateError> {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();
    println!("--- qstate Example: Two Qubit Sampling ---");

    let bell = StateVector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2])?;
    let product = StateVector::from_real(&[0.5, 0.5, 0.5, 0.5])?;

    let sampler = Sampler::new();
    let mut rng = StdRng::seed_from_u64(7);

    for (name, state) in [("Bell |Φ+⟩", &bell), ("|+⟩|+⟩", &product)] {
        println!("\n{}: {}", name, state);
        println!("  marginal q0: {:?}", marginal_probabilities(state, &[0])?);
        println!("  marginal q1: {:?}", marginal_probabilities(state, &[1])?);

        let counts = sampler.sample_counts(state, 4_000, &mut rng)?;
        print!("{}", counts);

        let memory = sampler.sample_memory(state, 10, &mut rng)?;
        println!("  first shots: {}", memory.join(" "));
    }

    println!("\nBell state equivalent to product state? {}", bell.equiv(&product)?);
    Ok(())
}
