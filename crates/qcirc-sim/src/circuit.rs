//! The circuit orchestrator.
//!
//! A [`Circuit`] moves through three stages:
//!
//! 1. [`initialize`](Circuit::initialize) creates a ground state and fixes the width
//! 2. [`run`](Circuit::run) evolves that state through a program, step by step
//! 3. [`measure`](Circuit::measure) samples the final state
//!
//! Calling `initialize` again starts over with a fresh width.

use std::fmt;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument, trace};

use qcirc_ir::{IrError, Program};

use crate::calculator::Calculator;
use crate::config::CircuitConfig;
use crate::counts::Counts;
use crate::error::{SimError, SimResult};
use crate::measurement::Measurement;
use crate::operator::OperatorBuilder;
use crate::registry::{StateFactory, StrategyRegistry};
use crate::state::QuantumState;

/// Classical simulator of a gate circuit.
pub struct Circuit {
    config: CircuitConfig,
    state_factory: StateFactory,
    calculator: Box<dyn Calculator>,
    measurement: Box<dyn Measurement>,
    total_qubits: Option<usize>,
    rng: StdRng,
}

impl Circuit {
    /// Create a circuit with the built-in strategies and default settings.
    pub fn new() -> Self {
        Self::from_config(&StrategyRegistry::with_builtins(), CircuitConfig::default())
            .expect("built-in strategies are always registered")
    }

    /// Create a circuit whose strategies are looked up in `registry`.
    pub fn from_config(registry: &StrategyRegistry, config: CircuitConfig) -> SimResult<Self> {
        let state_factory = registry.state_factory(&config.state)?;
        let calculator = registry.create_calculator(&config.calculator)?;
        let measurement = registry.create_measurement(&config.measurement)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(
            "Circuit using state '{}', calculator '{}', measurement '{}'",
            config.state,
            calculator.name(),
            measurement.name()
        );
        Ok(Self {
            config,
            state_factory,
            calculator,
            measurement,
            total_qubits: None,
            rng,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    /// Width fixed by the last `initialize`, if any.
    pub fn total_qubits(&self) -> Option<usize> {
        self.total_qubits
    }

    /// Create a ground state on `num_qubits` qubits and fix the circuit width.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, num_qubits: usize) -> SimResult<Box<dyn QuantumState>> {
        if num_qubits == 0 {
            return Err(SimError::MissingArgument("num_qubits"));
        }
        if num_qubits > self.config.max_qubits {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: self.config.max_qubits,
            });
        }

        let mut state = (self.state_factory)();
        state.set_to_ground_state(num_qubits);
        self.total_qubits = Some(num_qubits);
        debug!("Initialized {} qubits", num_qubits);
        Ok(state)
    }

    /// Evolve `state` through `program` in order.
    ///
    /// Each step is validated and its operator built before the state is
    /// touched. On error the state holds the result of every step before the
    /// failing one.
    #[instrument(skip(self, state, program), fields(steps = program.len()))]
    pub fn run(&self, state: &mut dyn QuantumState, program: &Program) -> SimResult<()> {
        let total_qubits = self.total_qubits.ok_or(SimError::NotInitialized)?;
        let builder = OperatorBuilder::new(total_qubits);
        let len = state.vector().len();
        if len != builder.dimension() {
            return Err(SimError::DimensionMismatch {
                expected: builder.dimension(),
                got: len,
            });
        }

        let start = Instant::now();
        for (index, operation) in program.iter().enumerate() {
            let resolved = operation
                .resolve(total_qubits)
                .map_err(|source| IrError::InvalidStep {
                    index,
                    source: Box::new(source),
                })?;
            let operator = builder.build(&resolved)?;
            self.calculator.calculate_state(&operator, state)?;
            trace!("Step {}: applied {}", index, resolved.kind());
        }
        debug!("Program completed in {:?}", start.elapsed());
        Ok(())
    }

    /// Sample `state` `num_shots` times.
    #[instrument(skip(self, state))]
    pub fn measure(&mut self, state: &dyn QuantumState, num_shots: u32) -> SimResult<Counts> {
        if num_shots == 0 {
            return Err(SimError::MissingArgument("num_shots"));
        }
        let total_qubits = self.total_qubits.ok_or(SimError::NotInitialized)?;
        self.measurement
            .sample(state, total_qubits, num_shots, &mut self.rng)
    }

    /// Initialize, run and measure in one call.
    pub fn simulate(
        &mut self,
        num_qubits: usize,
        program: &Program,
        num_shots: u32,
    ) -> SimResult<(Box<dyn QuantumState>, Counts)> {
        let mut state = self.initialize(num_qubits)?;
        self.run(state.as_mut(), program)?;
        let counts = self.measure(state.as_ref(), num_shots)?;
        Ok((state, counts))
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circuit")
            .field("config", &self.config)
            .field("calculator", &self.calculator.name())
            .field("measurement", &self.measurement.name())
            .field("total_qubits", &self.total_qubits)
            .finish_non_exhaustive()
    }
}
