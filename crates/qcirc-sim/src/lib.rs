//! `qcirc-sim` — dense statevector simulation of gate programs.
//!
//! An n-qubit state is a vector of 2^n complex amplitudes. Each program step
//! is expanded into a full 2^n × 2^n operator by Kronecker products, applied
//! to the amplitude vector, and the final state is sampled shot by shot.
//!
//! The three pluggable parts (state representation, calculation strategy,
//! measurement strategy) are traits selected by name through a
//! [`StrategyRegistry`].
//!
//! # Quick start
//!
//! ```rust
//! use qcirc_ir::{GateParams, Operation, Program, QubitId};
//! use qcirc_sim::{Circuit, CircuitConfig, StrategyRegistry};
//!
//! let mut circuit = Circuit::from_config(
//!     &StrategyRegistry::with_builtins(),
//!     CircuitConfig::default().with_seed(7),
//! )
//! .unwrap();
//!
//! let mut state = circuit.initialize(2).unwrap();
//! let program: Program = vec![
//!     Operation::u3(GateParams::x(), QubitId(0)),
//!     Operation::cu(GateParams::x(), QubitId(0), QubitId(1)),
//! ]
//! .into();
//! circuit.run(state.as_mut(), &program).unwrap();
//!
//! let counts = circuit.measure(state.as_ref(), 100).unwrap();
//! assert_eq!(counts.total_shots(), 100);
//! ```
//!
//! # Memory
//!
//! | Qubits | Operator size |
//! |--------|---------------|
//! | 8 | ~1 MB |
//! | 10 | ~16 MB |
//! | 12 | ~256 MB |

pub mod calculator;
pub mod circuit;
pub mod config;
pub mod counts;
pub mod error;
pub mod measurement;
pub mod operator;
pub mod registry;
pub mod state;

pub use calculator::{Calculator, DenseCalculator};
pub use circuit::Circuit;
pub use config::{CircuitConfig, DEFAULT_MAX_QUBITS};
pub use counts::Counts;
pub use error::{EntityKind, SimError, SimResult};
pub use measurement::{Measurement, SimulatedMeasurement};
pub use operator::OperatorBuilder;
pub use registry::StrategyRegistry;
pub use state::{ClassicalState, QuantumState, basis_label};
