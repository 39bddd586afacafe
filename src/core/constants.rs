//! Numerical defaults shared across the crate.

/// Default tolerance for normalization and equivalence checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Smallest state vector length accepted (one qubit).
pub const MIN_DIMENSION: usize = 2;

/// Largest qubit count a basis state or label may name. `2^30` amplitudes
/// already take 16 GiB; anything wider is refused before allocating.
pub const MAX_QUBITS: usize = 30;
