//! Full-system operator construction.
//!
//! A gate on qubit `k` of an `n`-qubit system is embedded as
//!
//!   F₀ ⊗ F₁ ⊗ … ⊗ Fₙ₋₁
//!
//! where `Fₖ` is the 2×2 gate matrix and every other factor is the identity.
//! Qubit 0 is the leftmost (most significant) factor. The product is folded
//! left to right, seeded directly by position 0.
//!
//! A controlled gate is the sum of two such products:
//!
//!   CU = (|0⟩⟨0| on control, I on target) + (|1⟩⟨1| on control, U on target)

use ndarray::linalg::kron;
use ndarray::{Array2, array};
use num_complex::Complex64;
use tracing::trace;

use qcirc_ir::{GateKind, GateParams, IrError, QubitId, ResolvedOperation};

use crate::error::SimResult;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// The 2×2 identity.
pub fn identity() -> Array2<Complex64> {
    Array2::eye(2)
}

/// Projector onto |0⟩.
pub fn projector_zero() -> Array2<Complex64> {
    array![[ONE, ZERO], [ZERO, ZERO]]
}

/// Projector onto |1⟩.
pub fn projector_one() -> Array2<Complex64> {
    array![[ZERO, ZERO], [ZERO, ONE]]
}

/// The 2×2 U(θ, φ, λ) matrix.
pub fn single_qubit_matrix(params: &GateParams) -> Array2<Complex64> {
    let [[a, b], [c, d]] = params.matrix_entries();
    array![[a, b], [c, d]]
}

/// Builds 2^n × 2^n operators for a fixed system width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorBuilder {
    total_qubits: usize,
}

impl OperatorBuilder {
    /// Create a builder for a system of `total_qubits` qubits.
    pub fn new(total_qubits: usize) -> Self {
        Self { total_qubits }
    }

    /// Width of the system.
    pub fn total_qubits(&self) -> usize {
        self.total_qubits
    }

    /// Side length of every operator this builder produces.
    pub fn dimension(&self) -> usize {
        1 << self.total_qubits
    }

    /// Build the operator for a validated program step.
    pub fn build(&self, operation: &ResolvedOperation) -> SimResult<Array2<Complex64>> {
        match *operation {
            ResolvedOperation::Single { params, target } => self.u3(&params, target),
            ResolvedOperation::Controlled {
                params,
                control,
                target,
            } => self.cu(&params, control, target),
        }
    }

    /// Single-qubit gate on `target`.
    pub fn u3(&self, params: &GateParams, target: QubitId) -> SimResult<Array2<Complex64>> {
        self.check(GateKind::U3, target)?;
        trace!("Building U3 on {} of {}", target, self.total_qubits);
        Ok(self.embed(&[(target, single_qubit_matrix(params))]))
    }

    /// Controlled gate applying `params` to `target` on the |1⟩ branch of `control`.
    pub fn cu(
        &self,
        params: &GateParams,
        control: QubitId,
        target: QubitId,
    ) -> SimResult<Array2<Complex64>> {
        self.check(GateKind::CU, control)?;
        self.check(GateKind::CU, target)?;
        if control == target {
            return Err(IrError::DuplicateQubit {
                qubit: control,
                gate: GateKind::CU.name().to_string(),
            }
            .into());
        }
        trace!(
            "Building CU {} -> {} of {}",
            control, target, self.total_qubits
        );

        let idle = self.embed(&[(control, projector_zero()), (target, identity())]);
        let active = self.embed(&[
            (control, projector_one()),
            (target, single_qubit_matrix(params)),
        ]);
        Ok(idle + &active)
    }

    /// Kronecker-expand per-qubit factors; unlisted positions get the identity.
    pub fn embed(&self, factors: &[(QubitId, Array2<Complex64>)]) -> Array2<Complex64> {
        let eye = identity();
        let mut matrix: Option<Array2<Complex64>> = None;
        for position in 0..self.total_qubits {
            let factor = factors
                .iter()
                .find(|(qubit, _)| qubit.index() == position)
                .map_or(&eye, |(_, m)| m);
            matrix = Some(match matrix {
                None => factor.clone(),
                Some(acc) => kron(&acc, factor),
            });
        }
        matrix.unwrap_or_else(|| Array2::eye(1))
    }

    fn check(&self, gate: GateKind, qubit: QubitId) -> SimResult<()> {
        if qubit.index() >= self.total_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.total_qubits,
                gate: gate.name().to_string(),
            }
            .into());
        }
        Ok(())
    }
}
