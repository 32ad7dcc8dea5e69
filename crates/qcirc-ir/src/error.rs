//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while reading or validating a program.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate name is not one of the supported kinds.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// A required field of an operation is absent.
    #[error("Gate '{gate}' is missing required parameter '{name}'")]
    MissingParameter {
        /// Name of the gate being resolved.
        gate: String,
        /// Name of the missing field.
        name: &'static str,
    },

    /// Qubit index lies outside the circuit.
    #[error("Qubit {qubit} is out of range for a {num_qubits}-qubit circuit (gate: {gate})")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: usize,
        /// Name of the gate being resolved.
        gate: String,
    },

    /// Control and target refer to the same qubit.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate being resolved.
        gate: String,
    },

    /// A program step failed validation.
    #[error("Step {index}: {source}")]
    InvalidStep {
        /// Position of the step in the program.
        index: usize,
        /// The underlying validation error.
        #[source]
        source: Box<IrError>,
    },

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML decoding error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl IrError {
    /// The innermost error, looking through [`IrError::InvalidStep`] wrappers.
    pub fn root(&self) -> &IrError {
        match self {
            IrError::InvalidStep { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
