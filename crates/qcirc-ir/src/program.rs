//! Ordered gate programs and the documents that carry them.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::operation::{Operation, ResolvedOperation};

/// An ordered list of operations. Program order is evolution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program(Vec<Operation>);

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a step.
    pub fn push(&mut self, operation: Operation) -> &mut Self {
        self.0.push(operation);
        self
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.0.iter()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the program has no steps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve every step against `num_qubits`, stopping at the first failure.
    pub fn validate(&self, num_qubits: usize) -> IrResult<Vec<ResolvedOperation>> {
        self.iter()
            .enumerate()
            .map(|(index, op)| {
                op.resolve(num_qubits)
                    .map_err(|source| IrError::InvalidStep {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect()
    }
}

impl From<Vec<Operation>> for Program {
    fn from(ops: Vec<Operation>) -> Self {
        Self(ops)
    }
}

impl FromIterator<Operation> for Program {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A program document as stored on disk.
///
/// Every field is optional so that the consumer can report which required
/// argument is absent.
///
/// ```yaml
/// num_qubits: 2
/// shots: 1000
/// config:
///   seed: 7
/// program:
///   - { gate: U3, params: { theta: 1.5708, phi: 0, lambda: -3.1415 }, target: 0 }
///   - { gate: CU, params: { theta: 3.1415, phi: 1.5708, lambda: -3.1415 }, control: 0, target: 1 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramFile {
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Width of the circuit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_qubits: Option<usize>,
    /// Number of measurement shots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    /// Simulator settings, interpreted by the simulator crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    /// The gate program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<Program>,
}

impl ProgramFile {
    /// Parse a JSON document.
    pub fn from_json_str(source: &str) -> IrResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(source: &str) -> IrResult<Self> {
        Ok(serde_yaml_ng::from_str(source)?)
    }
}
