//! Program records and their validated form.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{GateKind, GateParams, RawParams};
use crate::qubit::QubitId;

/// One step of a program, as supplied by the user.
///
/// ```json
/// { "gate": "CU", "params": { "theta": 3.1415, "phi": 1.5708, "lambda": -3.1415 }, "control": 3, "target": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Gate name, one of [`GateKind`]'s names.
    pub gate: String,
    /// Gate angles.
    #[serde(default)]
    pub params: RawParams,
    /// Qubit the gate acts on. Required for every gate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<QubitId>,
    /// Control qubit. Required for two-qubit gates, ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<QubitId>,
}

impl Operation {
    /// A `U3` step on `target`.
    pub fn u3(params: GateParams, target: QubitId) -> Self {
        Self {
            gate: GateKind::U3.name().to_string(),
            params: params.into(),
            target: Some(target),
            control: None,
        }
    }

    /// A `CU` step applying `params` to `target` when `control` is set.
    pub fn cu(params: GateParams, control: QubitId, target: QubitId) -> Self {
        Self {
            gate: GateKind::CU.name().to_string(),
            params: params.into(),
            target: Some(target),
            control: Some(control),
        }
    }

    /// Validate this record against a circuit of `num_qubits` qubits.
    pub fn resolve(&self, num_qubits: usize) -> IrResult<ResolvedOperation> {
        let kind: GateKind = self.gate.parse()?;
        let params = GateParams::from_raw(&self.gate, &self.params)?;
        let target = self.require(self.target, "target")?;
        self.check_range(target, num_qubits)?;

        match kind {
            GateKind::U3 => Ok(ResolvedOperation::Single { params, target }),
            GateKind::CU => {
                let control = self.require(self.control, "control")?;
                self.check_range(control, num_qubits)?;
                if control == target {
                    return Err(IrError::DuplicateQubit {
                        qubit: control,
                        gate: self.gate.clone(),
                    });
                }
                Ok(ResolvedOperation::Controlled {
                    params,
                    control,
                    target,
                })
            }
        }
    }

    fn require(&self, qubit: Option<QubitId>, name: &'static str) -> IrResult<QubitId> {
        qubit.ok_or_else(|| IrError::MissingParameter {
            gate: self.gate.clone(),
            name,
        })
    }

    fn check_range(&self, qubit: QubitId, num_qubits: usize) -> IrResult<()> {
        if qubit.index() >= num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits,
                gate: self.gate.clone(),
            });
        }
        Ok(())
    }
}

/// An operation whose gate, angles and qubits have all been checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedOperation {
    /// Single-qubit gate.
    Single {
        /// Gate angles.
        params: GateParams,
        /// Qubit acted on.
        target: QubitId,
    },
    /// Controlled single-qubit gate.
    Controlled {
        /// Gate angles.
        params: GateParams,
        /// Qubit whose |1⟩ branch enables the gate.
        control: QubitId,
        /// Qubit acted on.
        target: QubitId,
    },
}

impl ResolvedOperation {
    /// The gate kind.
    pub fn kind(&self) -> GateKind {
        match self {
            ResolvedOperation::Single { .. } => GateKind::U3,
            ResolvedOperation::Controlled { .. } => GateKind::CU,
        }
    }

    /// The gate angles.
    pub fn params(&self) -> &GateParams {
        match self {
            ResolvedOperation::Single { params, .. }
            | ResolvedOperation::Controlled { params, .. } => params,
        }
    }

    /// The target qubit.
    pub fn target(&self) -> QubitId {
        match self {
            ResolvedOperation::Single { target, .. }
            | ResolvedOperation::Controlled { target, .. } => *target,
        }
    }
}
