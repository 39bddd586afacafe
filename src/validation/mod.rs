// src/validation/mod.rs

//! Provides `Result`-returning checks on tolerances and `StateVector`s.
//!
//! `StateVector::is_valid` answers a question; the functions here enforce the
//! answer, and are what sampling uses as its precondition.

use crate::core::{DEFAULT_TOLERANCE, Result, StateError, StateVector};

/// Checks that a tolerance is finite and strictly positive, returning it.
///
/// # Errors
/// * `StateError::Argument` otherwise.
pub fn check_tolerance(tolerance: f64) -> Result<f64> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(tolerance)
    } else {
        Err(StateError::Argument {
            message: format!("tolerance must be finite and positive, got {}", tolerance),
        })
    }
}

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `1e-8`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(StateError::InvalidState)` if normalization fails.
/// * `Err(StateError::Argument)` if the tolerance is not positive.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = check_tolerance(tolerance.unwrap_or(DEFAULT_TOLERANCE))?;
    let norm_sqr = state.norm_sqr();
    // A NaN norm falls through to the error branch
    if (norm_sqr - 1.0).abs() <= effective_tolerance {
        Ok(())
    } else {
        Err(StateError::InvalidState { norm_sqr, tolerance: effective_tolerance })
    }
}

/// Checks every amplitude is finite.
pub fn check_finite(state: &StateVector) -> bool {
    state.amplitudes().iter().all(|c| c.re.is_finite() && c.im.is_finite())
}

/// Full precondition for sampling: finite amplitudes, normalized within
/// `tolerance` (or the state's own tolerance when `None`).
///
/// # Errors
/// * `StateError::InvalidState` if either check fails.
pub fn validate_state(state: &StateVector, tolerance: Option<f64>) -> Result<()> {
    let tolerance = tolerance.unwrap_or(state.tolerance());
    if !check_finite(state) {
        return Err(StateError::InvalidState { norm_sqr: state.norm_sqr(), tolerance });
    }
    check_normalization(state, Some(tolerance))
}
