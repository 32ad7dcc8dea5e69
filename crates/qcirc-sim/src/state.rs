//! Amplitude vectors and the probability distribution derived from them.

use std::collections::BTreeMap;
use std::fmt;

use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{SimError, SimResult};

/// Capabilities every state representation provides.
pub trait QuantumState: fmt::Debug + Send {
    /// Reset to |0...0⟩ on `num_qubits` qubits.
    fn set_to_ground_state(&mut self, num_qubits: usize);

    /// The current amplitude vector.
    fn vector(&self) -> &Array1<Complex64>;

    /// Replace the amplitude vector. The length is not checked.
    fn replace_vector(&mut self, vector: Array1<Complex64>);

    /// Weight of each basis index, in index order, summing to 1.
    fn probabilities(&self) -> SimResult<Array1<f64>>;

    /// Width implied by the vector length.
    fn num_qubits(&self) -> usize {
        let len = self.vector().len();
        if len == 0 { 0 } else { len.ilog2() as usize }
    }

    /// Weight of each basis string, keyed big-endian.
    fn probability_distribution(&self) -> SimResult<BTreeMap<String, f64>> {
        let width = self.num_qubits();
        Ok(self
            .probabilities()?
            .iter()
            .enumerate()
            .map(|(index, &p)| (basis_label(index, width), p))
            .collect())
    }
}

/// Zero-padded binary label of a basis index; qubit 0 is the leftmost bit.
pub fn basis_label(index: usize, width: usize) -> String {
    format!("{index:0width$b}")
}

fn ket_zero() -> Array1<Complex64> {
    Array1::from(vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)])
}

fn kron_vec(a: &Array1<Complex64>, b: &Array1<Complex64>) -> Array1<Complex64> {
    a.iter()
        .flat_map(|&x| b.iter().map(move |&y| x * y))
        .collect()
}

/// A state held as a dense vector of 2^n amplitudes.
///
/// Each instance owns its vector; cloning copies it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicalState {
    amplitudes: Array1<Complex64>,
}

impl ClassicalState {
    /// An empty state; call [`QuantumState::set_to_ground_state`] before use.
    pub fn new() -> Self {
        Self {
            amplitudes: Array1::zeros(0),
        }
    }

    /// A state already reset to |0...0⟩.
    pub fn ground(num_qubits: usize) -> Self {
        let mut state = Self::new();
        state.set_to_ground_state(num_qubits);
        state
    }

    /// A state holding the given amplitudes.
    pub fn from_amplitudes(amplitudes: Array1<Complex64>) -> Self {
        Self { amplitudes }
    }
}

impl Default for ClassicalState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantumState for ClassicalState {
    fn set_to_ground_state(&mut self, num_qubits: usize) {
        // |0⟩ ⊗ |0⟩ ⊗ ... seeded by qubit 0. Zero qubits leaves the scalar 1.
        let mut state = Array1::from(vec![Complex64::new(1.0, 0.0)]);
        for position in 0..num_qubits {
            state = if position == 0 {
                ket_zero()
            } else {
                kron_vec(&state, &ket_zero())
            };
        }
        self.amplitudes = state;
    }

    fn vector(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    fn replace_vector(&mut self, vector: Array1<Complex64>) {
        self.amplitudes = vector;
    }

    fn probabilities(&self) -> SimResult<Array1<f64>> {
        // Normalised by the sum of magnitudes, not of squared magnitudes.
        let magnitudes = self.amplitudes.mapv(|a| a.norm());
        let total = magnitudes.sum();
        if !(total > 0.0 && total.is_finite()) {
            return Err(SimError::ZeroNorm);
        }
        Ok(magnitudes / total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_ground_state() {
        for n in 1..=5 {
            let state = ClassicalState::ground(n);
            assert_eq!(state.vector().len(), 1 << n);
            assert_eq!(state.vector()[0], c(1.0, 0.0));
            assert!(state.vector().iter().skip(1).all(|a| *a == c(0.0, 0.0)));
            assert_eq!(state.num_qubits(), n);
        }
    }

    #[test]
    fn test_reset_discards_previous_vector() {
        let mut state =
            ClassicalState::from_amplitudes(Array1::from(vec![c(0.0, 0.0), c(1.0, 0.0)]));
        state.set_to_ground_state(2);
        assert_eq!(state, ClassicalState::ground(2));
    }

    #[test]
    fn test_instances_do_not_share_storage() {
        let mut a = ClassicalState::ground(1);
        let b = ClassicalState::ground(1);
        a.replace_vector(Array1::from(vec![c(0.0, 0.0), c(1.0, 0.0)]));
        assert_eq!(b.vector()[0], c(1.0, 0.0));
        assert_eq!(a.vector()[1], c(1.0, 0.0));
    }

    #[test]
    fn test_probabilities_normalise_by_magnitude_sum() {
        let s = 1.0 / 2.0_f64.sqrt();
        // |a| = [s, s, 0, 0] → [0.5, 0.5, 0, 0]
        let state = ClassicalState::from_amplitudes(Array1::from(vec![
            c(s, 0.0),
            c(0.0, -s),
            c(0.0, 0.0),
            c(0.0, 0.0),
        ]));
        let p = state.probabilities().unwrap();
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert!((p[1] - 0.5).abs() < 1e-12);

        // Magnitudes 3 and 1 weigh 0.75 / 0.25, not 0.9 / 0.1.
        let skewed =
            ClassicalState::from_amplitudes(Array1::from(vec![c(3.0, 0.0), c(1.0, 0.0)]));
        let p = skewed.probabilities().unwrap();
        assert!((p[0] - 0.75).abs() < 1e-12);
        assert!((p[1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_has_no_distribution() {
        let state = ClassicalState::from_amplitudes(Array1::zeros(4));
        assert!(matches!(state.probabilities(), Err(SimError::ZeroNorm)));
    }

    #[test]
    fn test_distribution_keys_are_big_endian() {
        let mut v: Array1<Complex64> = Array1::zeros(8);
        v[1] = c(1.0, 0.0);
        let state = ClassicalState::from_amplitudes(v);
        let dist = state.probability_distribution().unwrap();
        assert_eq!(dist.len(), 8);
        assert_eq!(dist["001"], 1.0);
        assert_eq!(dist["100"], 0.0);
    }

    #[test]
    fn test_basis_label() {
        assert_eq!(basis_label(0, 3), "000");
        assert_eq!(basis_label(4, 3), "100");
        assert_eq!(basis_label(5, 8), "00000101");
    }
}
