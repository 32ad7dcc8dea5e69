//! Calculation strategies: applying an operator to a state.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{SimError, SimResult};
use crate::state::QuantumState;

/// A strategy for evolving a state by an operator.
pub trait Calculator: Send + Sync {
    /// Registry name of this strategy.
    fn name(&self) -> &str;

    /// Replace the state's vector with its evolution under `operator`.
    fn calculate_state(
        &self,
        operator: &Array2<Complex64>,
        state: &mut dyn QuantumState,
    ) -> SimResult<()>;
}

/// Dense row-vector × matrix product.
///
/// The amplitude vector sits on the left: `ψ' = ψ · M`. Nothing is
/// renormalised, so any drift in magnitude carries through to later steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseCalculator;

impl DenseCalculator {
    /// Registry name.
    pub const NAME: &'static str = "dense";
}

impl Calculator for DenseCalculator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn calculate_state(
        &self,
        operator: &Array2<Complex64>,
        state: &mut dyn QuantumState,
    ) -> SimResult<()> {
        let len = state.vector().len();
        let (rows, cols) = operator.dim();
        if rows != len || cols != len {
            return Err(SimError::DimensionMismatch {
                expected: len,
                got: rows.max(cols),
            });
        }
        let evolved = state.vector().dot(operator);
        state.replace_vector(evolved);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ClassicalState;
    use ndarray::{Array1, array};

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_vector_is_on_the_left() {
        // ψ·M picks rows of M, M·ψ would pick columns.
        let m = array![[c(1.0, 0.0), c(2.0, 0.0)], [c(3.0, 0.0), c(4.0, 0.0)]];
        let mut state =
            ClassicalState::from_amplitudes(Array1::from(vec![c(0.0, 0.0), c(1.0, 0.0)]));
        DenseCalculator.calculate_state(&m, &mut state).unwrap();
        assert_eq!(state.vector()[0], c(3.0, 0.0));
        assert_eq!(state.vector()[1], c(4.0, 0.0));
    }

    #[test]
    fn test_no_renormalisation() {
        let m = array![[c(2.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(2.0, 0.0)]];
        let mut state = ClassicalState::ground(1);
        DenseCalculator.calculate_state(&m, &mut state).unwrap();
        assert_eq!(state.vector()[0], c(2.0, 0.0));
    }

    #[test]
    fn test_dimension_mismatch_leaves_state_alone() {
        let m: Array2<Complex64> = Array2::eye(4);
        let mut state = ClassicalState::ground(1);
        let before = state.clone();
        assert!(matches!(
            DenseCalculator.calculate_state(&m, &mut state),
            Err(SimError::DimensionMismatch { expected: 2, got: 4 })
        ));
        assert_eq!(state, before);
    }
}
