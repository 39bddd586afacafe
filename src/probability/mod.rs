// src/probability/mod.rs

//! Born-rule measurement probabilities derived from a `StateVector`.
//!
//! Nothing here requires the state to be normalized: an unnormalized but
//! dimensionally valid vector yields probabilities that simply do not sum to
//! one. Sampling is where normalization is enforced.

use std::collections::BTreeMap;

use crate::core::{Result, StateError, StateVector, basis_label, label_index};

/// `p_i = |c_i|^2` for every basis index `i`, in index order.
pub fn probabilities(state: &StateVector) -> Vec<f64> {
    state.amplitudes().iter().map(|c| c.norm_sqr()).collect()
}

/// Probabilities keyed by MSB-first basis label.
///
/// Zero-probability entries are kept only when `include_zeros` is set. The map
/// iterates in label order, which is also basis index order.
pub fn probabilities_as_labels(state: &StateVector, include_zeros: bool) -> BTreeMap<String, f64> {
    let num_qubits = state.num_qubits();
    probabilities(state)
        .into_iter()
        .enumerate()
        .filter(|(_, p)| include_zeros || *p > 0.0)
        .map(|(i, p)| (basis_label(i, num_qubits), p))
        .collect()
}

/// Probability of the single basis state named by `label`.
///
/// # Errors
/// * `StateError::Argument` for a malformed label.
/// * `StateError::Dimension` if the label width differs from the qubit count.
pub fn probability_of(state: &StateVector, label: &str) -> Result<f64> {
    let index = label_index(label, state.num_qubits())?;
    Ok(state.amplitude_at(index)?.norm_sqr())
}

/// Probabilities of measuring only `qubits`, marginalising the rest.
///
/// Qubit `q` is bit `q` of the basis index (the `q`-th label character from
/// the right). Bit `j` of the returned index corresponds to `qubits[j]`, so
/// the result has `2^qubits.len()` entries.
///
/// # Errors
/// * `StateError::Argument` if `qubits` is empty or repeats a qubit.
/// * `StateError::Index` if a qubit is `>= num_qubits`.
pub fn marginal_probabilities(state: &StateVector, qubits: &[usize]) -> Result<Vec<f64>> {
    let num_qubits = state.num_qubits();
    if qubits.is_empty() {
        return Err(StateError::Argument { message: "qubit list must not be empty".to_string() });
    }
    let mut seen = vec![false; num_qubits];
    for &q in qubits {
        if q >= num_qubits {
            return Err(StateError::Index { index: q, dim: num_qubits });
        }
        if seen[q] {
            return Err(StateError::Argument { message: format!("qubit {} listed more than once", q) });
        }
        seen[q] = true;
    }

    let mut marginal = vec![0.0; 1 << qubits.len()];
    for (i, p) in probabilities(state).into_iter().enumerate() {
        let k = qubits
            .iter()
            .enumerate()
            .fold(0usize, |acc, (j, &q)| acc | (((i >> q) & 1) << j));
        marginal[k] += p;
    }
    Ok(marginal)
}
