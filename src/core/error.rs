//! Error handling logic

use thiserror::Error;

/// Errors raised by state vector construction, inspection and measurement.
///
/// Every error is detected at the offending call and returned synchronously.
/// None of them are transient: they indicate caller misuse, so nothing in the
/// crate retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Amplitude count is not a power of two, or two states (or a state and a
    /// label) disagree on the number of qubits.
    #[error("Dimension Error: {message}")]
    Dimension {
        /// Dimension failure message
        message: String,
    },

    /// An amplitude, basis or qubit index lies outside `[0, dim)`.
    #[error("Index Error: index {index} out of range for dimension {dim}")]
    Index {
        /// Offending index
        index: usize,
        /// Exclusive upper bound the index was checked against
        dim: usize,
    },

    /// Sampling was attempted on a state whose squared amplitudes do not sum
    /// to one within tolerance.
    #[error("Invalid State: Sum(|c_i|^2) = {norm_sqr} (deviation > {tolerance})")]
    InvalidState {
        /// Observed squared norm
        norm_sqr: f64,
        /// Tolerance the norm was checked against
        tolerance: f64,
    },

    /// Malformed call parameters (non-positive tolerance, bad label, ...).
    #[error("Argument Error: {message}")]
    Argument {
        /// Argument failure message
        message: String,
    },
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = StateError::Index { index: 4, dim: 4 };
        assert_eq!(e.to_string(), "Index Error: index 4 out of range for dimension 4");

        let e = StateError::Dimension { message: "length 3 is not a power of two".to_string() };
        assert!(e.to_string().starts_with("Dimension Error:"));

        let e = StateError::InvalidState { norm_sqr: 9.25, tolerance: 1e-8 };
        assert!(e.to_string().contains("9.25"));
    }
}
