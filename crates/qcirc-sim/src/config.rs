//! Circuit configuration.

use serde::{Deserialize, Serialize};

use crate::calculator::DenseCalculator;
use crate::measurement::SimulatedMeasurement;
use crate::registry::CLASSICAL_STATE;

/// Largest width accepted by default. Dense operators at this size take
/// 2^24 complex entries (256 MiB).
pub const DEFAULT_MAX_QUBITS: usize = 12;

/// Selects the strategies a [`Circuit`](crate::Circuit) uses and bounds its size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitConfig {
    /// Registry name of the state representation.
    pub state: String,
    /// Registry name of the calculation strategy.
    pub calculator: String,
    /// Registry name of the measurement strategy.
    pub measurement: String,
    /// Upper bound on `initialize`.
    pub max_qubits: usize,
    /// Seed for measurement sampling; entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl CircuitConfig {
    /// Set the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the qubit limit.
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the state representation.
    pub fn with_state(mut self, name: impl Into<String>) -> Self {
        self.state = name.into();
        self
    }

    /// Set the calculation strategy.
    pub fn with_calculator(mut self, name: impl Into<String>) -> Self {
        self.calculator = name.into();
        self
    }

    /// Set the measurement strategy.
    pub fn with_measurement(mut self, name: impl Into<String>) -> Self {
        self.measurement = name.into();
        self
    }
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            state: CLASSICAL_STATE.to_string(),
            calculator: DenseCalculator::NAME.to_string(),
            measurement: SimulatedMeasurement::NAME.to_string(),
            max_qubits: DEFAULT_MAX_QUBITS,
            seed: None,
        }
    }
}
