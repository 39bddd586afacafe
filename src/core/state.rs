// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use std::fmt;

use super::constants::{DEFAULT_TOLERANCE, MAX_QUBITS, MIN_DIMENSION};
use super::error::{Result, StateError};
use super::labels::{basis_label, parse_label};
use crate::validation::check_tolerance;

/// A complex amplitude vector over `n >= 1` qubits.
///
/// The length is always `2^n`; construction fails otherwise. Normalization is
/// *not* enforced: an unnormalized vector can be built and inspected, and
/// `is_valid` reports whether `Sum(|c_i|^2)` is one within tolerance.
///
/// Amplitudes never change after construction. Measurement produces a new
/// value through [`StateVector::collapse_to`].
///
/// Basis index `i` corresponds to the label `basis_label(i, n)`, most
/// significant bit first.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
    /// Tolerance supplied at construction; used by `is_valid` and `Display`.
    tolerance: f64,
}

impl StateVector {
    /// Builds a state vector with the default tolerance (`1e-8`).
    ///
    /// # Errors
    /// * `StateError::Dimension` if the length is not a power of two of at
    ///   least two (one qubit).
    pub fn new(amplitudes: Vec<Complex<f64>>) -> Result<Self> {
        Self::with_tolerance(amplitudes, DEFAULT_TOLERANCE)
    }

    /// Builds a state vector that checks its validity against `tolerance`.
    ///
    /// # Errors
    /// * `StateError::Argument` if `tolerance` is not finite and positive.
    /// * `StateError::Dimension` if the length is not a power of two of at
    ///   least two.
    pub fn with_tolerance(amplitudes: Vec<Complex<f64>>, tolerance: f64) -> Result<Self> {
        let tolerance = check_tolerance(tolerance)?;
        let dim = amplitudes.len();
        if dim < MIN_DIMENSION || !dim.is_power_of_two() {
            return Err(StateError::Dimension {
                message: format!("amplitude count {} is not a power of two >= {}", dim, MIN_DIMENSION),
            });
        }
        Ok(Self {
            num_qubits: dim.trailing_zeros() as usize,
            amplitudes,
            tolerance,
        })
    }

    /// Builds a state vector from real amplitudes.
    pub fn from_real(amplitudes: &[f64]) -> Result<Self> {
        Self::new(amplitudes.iter().map(|&re| Complex::new(re, 0.0)).collect())
    }

    /// The computational basis state `|index>` over `num_qubits` qubits.
    ///
    /// # Errors
    /// * `StateError::Argument` if `num_qubits` is zero or above `MAX_QUBITS`.
    /// * `StateError::Index` if `index >= 2^num_qubits`.
    pub fn basis_state(num_qubits: usize, index: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(StateError::Argument {
                message: format!("cannot build a basis state over {} qubits", num_qubits),
            });
        }
        let dim = 1usize << num_qubits;
        if index >= dim {
            return Err(StateError::Index { index, dim });
        }
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[index] = Complex::one();
        Self::new(amplitudes)
    }

    /// The basis state named by `label`, e.g. `"01"` for `|01>`.
    ///
    /// # Errors
    /// * `StateError::Argument` for a malformed label.
    pub fn from_label(label: &str) -> Result<Self> {
        let (index, num_qubits) = parse_label(label)?;
        Self::basis_state(num_qubits, index)
    }

    /// Returns true iff `|Sum(|c_i|^2) - 1| <= tolerance` for the tolerance
    /// given at construction.
    pub fn is_valid(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() <= self.tolerance
    }

    /// Like [`StateVector::is_valid`] with an explicit tolerance.
    ///
    /// # Errors
    /// * `StateError::Argument` if `tolerance` is not finite and positive.
    pub fn is_valid_within(&self, tolerance: f64) -> Result<bool> {
        let tolerance = check_tolerance(tolerance)?;
        Ok((self.norm_sqr() - 1.0).abs() <= tolerance)
    }

    /// Sum of squared amplitude magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Number of qubits `n`, where the vector has `2^n` amplitudes.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (`2^n`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Tolerance given at construction.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Provides read-only access to the amplitudes, in basis index order.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Amplitude of basis state `index`.
    ///
    /// # Errors
    /// * `StateError::Index` if `index >= 2^n`.
    pub fn amplitude_at(&self, index: usize) -> Result<Complex<f64>> {
        self.amplitudes
            .get(index)
            .copied()
            .ok_or(StateError::Index { index, dim: self.dim() })
    }

    /// Post-measurement state for outcome `index`: amplitude `1` at `index`,
    /// `0` elsewhere. The phase of the pre-collapse amplitude is discarded.
    ///
    /// # Errors
    /// * `StateError::Index` if `index >= 2^n`.
    pub fn collapse_to(&self, index: usize) -> Result<Self> {
        let dim = self.dim();
        if index >= dim {
            return Err(StateError::Index { index, dim });
        }
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[index] = Complex::one();
        Ok(Self {
            amplitudes,
            num_qubits: self.num_qubits,
            tolerance: self.tolerance,
        })
    }

    /// Measurement probability of every basis index. See
    /// [`crate::probability::probabilities`].
    pub fn probabilities(&self) -> Vec<f64> {
        crate::probability::probabilities(self)
    }

    /// Probabilities keyed by basis label. See
    /// [`crate::probability::probabilities_as_labels`].
    pub fn probabilities_as_labels(&self, include_zeros: bool) -> BTreeMap<String, f64> {
        crate::probability::probabilities_as_labels(self, include_zeros)
    }

    /// Whether `other` is the same physical state up to a global phase, using
    /// this vector's tolerance. See [`crate::equivalence::equivalent`].
    pub fn equiv(&self, other: &StateVector) -> Result<bool> {
        crate::equivalence::equivalent(self, other, Some(self.tolerance))
    }
}

impl fmt::Display for StateVector {
    /// Ket notation, e.g. `0.7071|0⟩ - 0.7071|1⟩`. Amplitudes with magnitude
    /// below the tolerance are omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, c) in self.amplitudes.iter().enumerate() {
            if c.norm() <= self.tolerance {
                continue;
            }
            let re_zero = c.re.abs() <= self.tolerance;
            let im_zero = c.im.abs() <= self.tolerance;
            let (negative, body) = if im_zero {
                (c.re < 0.0, format!("{:.4}", c.re.abs()))
            } else if re_zero {
                (c.im < 0.0, format!("{:.4}i", c.im.abs()))
            } else {
                (false, format!("({:.4}{:+.4}i)", c.re, c.im))
            };
            let sign = match (first, negative) {
                (true, true) => "-",
                (true, false) => "",
                (false, true) => " - ",
                (false, false) => " + ",
            };
            write!(f, "{}{}|{}⟩", sign, body, basis_label(i, self.num_qubits))?;
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_construct_requires_power_of_two() {
        for len in [0usize, 1, 3, 5, 6, 7, 12] {
            let amps = vec![Complex::new(0.0, 0.0); len];
            match StateVector::new(amps) {
                Err(StateError::Dimension { .. }) => {}
                other => panic!("length {} should fail with Dimension, got {:?}", len, other),
            }
        }
    }

    #[test]
    fn test_num_qubits() -> Result<()> {
        assert_eq!(StateVector::from_real(&[1.0, 0.0])?.num_qubits(), 1);
        assert_eq!(StateVector::from_real(&[1.0, 0.0, 0.0, 0.0])?.num_qubits(), 2);
        assert_eq!(StateVector::new(vec![Complex::zero(); 16])?.num_qubits(), 4);
        Ok(())
    }

    #[test]
    fn test_invalid_state_is_constructible() -> Result<()> {
        let sv = StateVector::new(vec![Complex::new(0.5, 0.0), Complex::new(0.0, 3.0)])?;
        assert!(!sv.is_valid());
        assert_relative_eq!(sv.norm_sqr(), 9.25);
        Ok(())
    }

    #[test]
    fn test_valid_state() -> Result<()> {
        let sv = StateVector::from_real(&[FRAC_1_SQRT_2, FRAC_1_SQRT_2])?;
        assert!(sv.is_valid());
        assert!(sv.is_valid_within(1e-12)?);
        Ok(())
    }

    #[test]
    fn test_tolerance_must_be_positive() {
        let amps = vec![Complex::one(), Complex::zero()];
        for tol in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                StateVector::with_tolerance(amps.clone(), tol),
                Err(StateError::Argument { .. })
            ));
        }
    }

    #[test]
    fn test_loose_tolerance_accepts_near_normalized() -> Result<()> {
        let amps = vec![Complex::new(0.7, 0.0), Complex::new(0.7, 0.0)]; // 0.98
        assert!(!StateVector::new(amps.clone())?.is_valid());
        assert!(StateVector::with_tolerance(amps, 0.05)?.is_valid());
        Ok(())
    }

    #[test]
    fn test_amplitude_at_bounds() -> Result<()> {
        let sv = StateVector::from_real(&[0.6, 0.8])?;
        assert_eq!(sv.amplitude_at(1)?, Complex::new(0.8, 0.0));
        assert_eq!(sv.amplitude_at(2), Err(StateError::Index { index: 2, dim: 2 }));
        Ok(())
    }

    #[test]
    fn test_collapse_discards_phase() -> Result<()> {
        let sv = StateVector::new(vec![
            Complex::new(0.5, 0.0),
            Complex::new(0.0, 0.5),
            Complex::new(-0.5, 0.0),
            Complex::new(0.0, -0.5),
        ])?;
        let collapsed = sv.collapse_to(3)?;
        assert_eq!(collapsed.amplitudes(), &[Complex::zero(), Complex::zero(), Complex::zero(), Complex::one()]);
        assert_eq!(collapsed.num_qubits(), 2);
        assert!(collapsed.is_valid());
        // Source is untouched
        assert_eq!(sv.amplitude_at(3)?, Complex::new(0.0, -0.5));
        assert!(matches!(sv.collapse_to(4), Err(StateError::Index { .. })));
        Ok(())
    }

    #[test]
    fn test_basis_state_and_label() -> Result<()> {
        let sv = StateVector::from_label("01")?;
        assert_eq!(sv.num_qubits(), 2);
        assert_eq!(sv.amplitude_at(1)?, Complex::one());
        assert_eq!(sv, StateVector::basis_state(2, 1)?);
        assert!(matches!(StateVector::basis_state(1, 2), Err(StateError::Index { .. })));
        assert!(matches!(StateVector::basis_state(0, 0), Err(StateError::Argument { .. })));
        Ok(())
    }

    #[test]
    fn test_oversized_basis_state_is_refused() -> Result<()> {
        assert!(matches!(StateVector::basis_state(MAX_QUBITS + 1, 0), Err(StateError::Argument { .. })));
        assert!(matches!(StateVector::basis_state(63, 0), Err(StateError::Argument { .. })));
        assert!(matches!(StateVector::from_label(&"0".repeat(62)), Err(StateError::Argument { .. })));
        assert!(matches!(StateVector::from_label(&"1".repeat(MAX_QUBITS + 1)), Err(StateError::Argument { .. })));
        assert_eq!(StateVector::from_label("0000")?.num_qubits(), 4);
        Ok(())
    }

    #[test]
    fn test_display_ket_notation() -> Result<()> {
        let minus = StateVector::from_real(&[FRAC_1_SQRT_2, -FRAC_1_SQRT_2])?;
        assert_eq!(minus.to_string(), "0.7071|0⟩ - 0.7071|1⟩");

        let odd = StateVector::new(vec![Complex::new(0.5, 0.0), Complex::new(0.0, 3.0)])?;
        assert_eq!(odd.to_string(), "0.5000|0⟩ + 3.0000i|1⟩");

        let mixed = StateVector::new(vec![Complex::zero(), Complex::new(-0.5, 0.5), Complex::zero(), Complex::zero()])?;
        assert_eq!(mixed.to_string(), "(-0.5000+0.5000i)|01⟩");

        let zero = StateVector::new(vec![Complex::zero(); 2])?;
        assert_eq!(zero.to_string(), "0");
        Ok(())
    }

    #[test]
    fn test_repeated_queries_are_stable() -> Result<()> {
        let sv = StateVector::from_real(&[0.6, 0.8])?;
        let first = (sv.is_valid(), sv.probabilities());
        for _ in 0..5 {
            assert_eq!((sv.is_valid(), sv.probabilities()), first);
        }
        Ok(())
    }
}
