// src/core/labels.rs

//! Basis-state labels.
//!
//! A label is the fixed-width binary representation of a basis index,
//! most-significant bit first: for two qubits index 1 is `"01"` and index 2 is
//! `"10"`. Qubit `q` is bit `q` of the index, so it is the `q`-th character
//! counted from the right of the label.

use super::constants::MAX_QUBITS;
use super::error::{Result, StateError};

/// Renders `index` as an `num_qubits`-wide, MSB-first binary label.
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Parses a label back into `(index, num_qubits)`.
///
/// # Errors
/// * `StateError::Argument` if the label is empty, wider than `MAX_QUBITS`,
///   or contains anything other than `0` and `1`.
pub fn parse_label(label: &str) -> Result<(usize, usize)> {
    if label.is_empty() {
        return Err(StateError::Argument { message: "basis label must not be empty".to_string() });
    }
    if label.len() > MAX_QUBITS {
        return Err(StateError::Argument {
            message: format!("basis label has {} qubits, at most {} are supported", label.len(), MAX_QUBITS),
        });
    }
    let mut index = 0usize;
    for ch in label.chars() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            other => {
                return Err(StateError::Argument {
                    message: format!("basis label '{}' contains invalid character '{}'", label, other),
                });
            }
        };
        index = (index << 1) | bit;
    }
    Ok((index, label.len()))
}

/// Parses a label and checks that it addresses a `num_qubits`-qubit state.
///
/// # Errors
/// * `StateError::Argument` for malformed labels (see [`parse_label`]).
/// * `StateError::Dimension` if the label width differs from `num_qubits`.
pub fn label_index(label: &str, num_qubits: usize) -> Result<usize> {
    let (index, width) = parse_label(label)?;
    if width != num_qubits {
        return Err(StateError::Dimension {
            message: format!("label '{}' has {} qubits, state has {}", label, width, num_qubits),
        });
    }
    Ok(index)
}
