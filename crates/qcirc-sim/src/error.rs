//! Error types for the simulator crate.

use std::fmt;

use qcirc_ir::IrError;
use thiserror::Error;

/// The strategy tables a name can be looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// State representations.
    State,
    /// Calculation strategies.
    Calculator,
    /// Measurement strategies.
    Measurement,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::State => "state",
            EntityKind::Calculator => "calculator",
            EntityKind::Measurement => "measurement",
        })
    }
}

/// Errors produced while initialising, running or measuring a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A program step was rejected.
    #[error("Program error: {0}")]
    Ir(#[from] IrError),

    /// A required argument was absent or empty.
    #[error("Required argument '{0}' is missing")]
    MissingArgument(&'static str),

    /// No strategy is registered under the requested name.
    #[error("No {kind} registered with name '{name}'")]
    UnknownEntity {
        /// Table that was searched.
        kind: EntityKind,
        /// The name that failed to resolve.
        name: String,
    },

    /// `run` or `measure` was called before `initialize`.
    #[error("Circuit has not been initialized")]
    NotInitialized,

    /// The requested width exceeds the configured limit.
    #[error("Requested {requested} qubits but the circuit allows at most {max}")]
    TooManyQubits {
        /// Requested width.
        requested: usize,
        /// Configured limit.
        max: usize,
    },

    /// Operator and state vector sizes disagree.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Size implied by the circuit.
        expected: usize,
        /// Size actually found.
        got: usize,
    },

    /// Every amplitude is zero, so no distribution can be derived.
    #[error("State vector has zero norm")]
    ZeroNorm,

    /// The weighted draw could not be set up.
    #[error("Sampling failed: {0}")]
    Sampling(String),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
