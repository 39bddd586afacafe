// src/equivalence/mod.rs

//! Equality of state vectors up to a global phase.

use crate::core::{DEFAULT_TOLERANCE, Result, StateError, StateVector};
use crate::validation::check_tolerance;
use num_complex::Complex;
use num_traits::One;

/// Returns whether `b = e^(iθ) · a` for some real `θ`, element-wise within
/// `tolerance` (default `1e-8`).
///
/// The phase reference is the first index where `|a_i| > tolerance`: the unit
/// phase of `b_i · conj(a_i)` is applied to all of `a` before comparing. If `a`
/// has no significant amplitude, or `b` vanishes at the reference index, the
/// phase is taken as one and the comparison is direct.
///
/// # Errors
/// * `StateError::Dimension` if the qubit counts differ.
/// * `StateError::Argument` if `tolerance` is not finite and positive.
pub fn equivalent(a: &StateVector, b: &StateVector, tolerance: Option<f64>) -> Result<bool> {
    let tolerance = check_tolerance(tolerance.unwrap_or(DEFAULT_TOLERANCE))?;
    if a.num_qubits() != b.num_qubits() {
        return Err(StateError::Dimension {
            message: format!("cannot compare a {}-qubit state with a {}-qubit state", a.num_qubits(), b.num_qubits()),
        });
    }

    let phase = global_phase(a.amplitudes(), b.amplitudes(), tolerance);
    Ok(a
        .amplitudes()
        .iter()
        .zip(b.amplitudes())
        .all(|(&x, &y)| (phase * x - y).norm() <= tolerance))
}

/// Unit-magnitude factor aligning `a` to `b` at the first significant index of `a`.
fn global_phase(a: &[Complex<f64>], b: &[Complex<f64>], tolerance: f64) -> Complex<f64> {
    a.iter()
        .zip(b)
        .find(|(x, _)| x.norm() > tolerance)
        .map(|(x, y)| y * x.conj())
        .filter(|ratio| ratio.norm() > 0.0)
        .map(|ratio| ratio / ratio.norm())
        .unwrap_or_else(Complex::one)
}
