//! Gate kinds and their angle parameters.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use crate::error::{IrError, IrResult};

/// The closed set of gates a program may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Universal single-qubit gate U(θ, φ, λ).
    U3,
    /// Controlled U(θ, φ, λ) on a (control, target) pair.
    CU,
}

impl GateKind {
    /// All supported kinds.
    pub const ALL: [GateKind; 2] = [GateKind::U3, GateKind::CU];

    /// Name as it appears in program records.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::U3 => "U3",
            GateKind::CU => "CU",
        }
    }

    /// Number of qubits the gate acts on.
    #[inline]
    pub fn num_qubits(self) -> u32 {
        match self {
            GateKind::U3 => 1,
            GateKind::CU => 2,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateKind {
    type Err = IrError;

    fn from_str(s: &str) -> IrResult<Self> {
        GateKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| IrError::UnknownGate(s.to_string()))
    }
}

/// Angle parameters exactly as read from a program record.
///
/// Every angle is optional at this stage so that a missing one can be
/// reported by name instead of failing deserialization wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawParams {
    /// Polar angle θ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    /// Phase φ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phi: Option<f64>,
    /// Phase λ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lambda: Option<f64>,
}

impl From<GateParams> for RawParams {
    fn from(params: GateParams) -> Self {
        Self {
            theta: Some(params.theta),
            phi: Some(params.phi),
            lambda: Some(params.lambda),
        }
    }
}

/// The three angles of a U(θ, φ, λ) gate.
///
/// ```text
/// U(θ, φ, λ) = [[ cos(θ/2),          -e^{iλ} sin(θ/2)     ],
///               [ e^{iφ} sin(θ/2),   e^{i(λ+φ)} cos(θ/2)  ]]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateParams {
    /// Polar angle θ.
    pub theta: f64,
    /// Phase φ.
    pub phi: f64,
    /// Phase λ.
    pub lambda: f64,
}

impl GateParams {
    /// Create a parameter set from its three angles.
    pub fn new(theta: f64, phi: f64, lambda: f64) -> Self {
        Self { theta, phi, lambda }
    }

    /// Check that all three angles are present.
    pub fn from_raw(gate: &str, raw: &RawParams) -> IrResult<Self> {
        let require = |value: Option<f64>, name: &'static str| {
            value.ok_or_else(|| IrError::MissingParameter {
                gate: gate.to_string(),
                name,
            })
        };
        Ok(Self {
            theta: require(raw.theta, "theta")?,
            phi: require(raw.phi, "phi")?,
            lambda: require(raw.lambda, "lambda")?,
        })
    }

    /// Identity: U(0, 0, 0).
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Bit flip: U(π, π/2, −π).
    pub fn x() -> Self {
        Self::new(PI, FRAC_PI_2, -PI)
    }

    /// Hadamard: U(π/2, 0, −π).
    pub fn h() -> Self {
        Self::new(FRAC_PI_2, 0.0, -PI)
    }

    /// Angles whose matrix is the inverse of this one: U(−θ, −λ, −φ).
    pub fn inverse(&self) -> Self {
        Self::new(-self.theta, -self.lambda, -self.phi)
    }

    /// Row-major entries of the 2×2 gate matrix.
    pub fn matrix_entries(&self) -> [[Complex64; 2]; 2] {
        let cos = (self.theta / 2.0).cos();
        let sin = (self.theta / 2.0).sin();
        [
            [
                Complex64::new(cos, 0.0),
                -Complex64::from_polar(1.0, self.lambda) * sin,
            ],
            [
                Complex64::from_polar(1.0, self.phi) * sin,
                Complex64::from_polar(1.0, self.lambda + self.phi) * cos,
            ],
        ]
    }
}
