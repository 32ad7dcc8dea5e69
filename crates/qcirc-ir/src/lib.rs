//! qcirc Program Representation
//!
//! This crate defines the data that flows into the qcirc simulator: the
//! ordered list of gate operations a user submits, and the validation that
//! turns each raw record into something the operator builder can consume.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a qubit by its 0-based, big-endian index
//! - **Gates**: [`GateKind`] is the closed set of supported gates (`U3`, `CU`),
//!   parametrised by the three angles in [`GateParams`]
//! - **Operations**: [`Operation`] mirrors one program record; resolving it
//!   against a qubit count yields a [`ResolvedOperation`]
//! - **Programs**: [`Program`] is the ordered operation list, [`ProgramFile`]
//!   the on-disk document wrapping it
//!
//! # Example: CNOT from a bit flip
//!
//! ```rust
//! use qcirc_ir::{GateParams, Operation, Program, QubitId};
//!
//! let mut program = Program::new();
//! program.push(Operation::u3(GateParams::x(), QubitId(0)));
//! program.push(Operation::cu(GateParams::x(), QubitId(0), QubitId(1)));
//!
//! assert_eq!(program.len(), 2);
//! assert!(program.validate(2).is_ok());
//! assert!(program.validate(1).is_err());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `U3` | 1 | Universal single-qubit gate U(θ,φ,λ) |
//! | `CU` | 2 | Controlled U(θ,φ,λ) |

pub mod error;
pub mod gate;
pub mod operation;
pub mod program;
pub mod qubit;

pub use error::{IrError, IrResult};
pub use gate::{GateKind, GateParams, RawParams};
pub use operation::{Operation, ResolvedOperation};
pub use program::{Program, ProgramFile};
pub use qubit::QubitId;
