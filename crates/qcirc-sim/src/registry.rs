//! Named strategy tables.
//!
//! A [`StrategyRegistry`] maps names to constructors for the three pluggable
//! parts of a circuit: the state representation, the calculation strategy and
//! the measurement strategy. It is built once, handed to
//! [`Circuit::from_config`](crate::Circuit::from_config), and read-only after
//! that.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::calculator::{Calculator, DenseCalculator};
use crate::error::{EntityKind, SimError, SimResult};
use crate::measurement::{Measurement, SimulatedMeasurement};
use crate::state::{ClassicalState, QuantumState};

/// Constructor for a state representation.
pub type StateFactory = Arc<dyn Fn() -> Box<dyn QuantumState> + Send + Sync>;
/// Constructor for a calculation strategy.
pub type CalculatorFactory = Arc<dyn Fn() -> Box<dyn Calculator> + Send + Sync>;
/// Constructor for a measurement strategy.
pub type MeasurementFactory = Arc<dyn Fn() -> Box<dyn Measurement> + Send + Sync>;

/// Registry name of [`ClassicalState`].
pub const CLASSICAL_STATE: &str = "classical";

/// Name → constructor tables for states, calculators and measurements.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    states: FxHashMap<String, StateFactory>,
    calculators: FxHashMap<String, CalculatorFactory>,
    measurements: FxHashMap<String, MeasurementFactory>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in strategies.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_state(CLASSICAL_STATE, || Box::new(ClassicalState::new()));
        registry.register_calculator(DenseCalculator::NAME, || Box::new(DenseCalculator));
        registry.register_measurement(SimulatedMeasurement::NAME, || {
            Box::new(SimulatedMeasurement)
        });
        registry
    }

    /// Register a state constructor. An existing entry is replaced.
    pub fn register_state(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Box<dyn QuantumState> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering state: {}", name);
        self.states.insert(name, Arc::new(factory));
    }

    /// Register a calculation strategy constructor.
    pub fn register_calculator(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Box<dyn Calculator> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering calculator: {}", name);
        self.calculators.insert(name, Arc::new(factory));
    }

    /// Register a measurement strategy constructor.
    pub fn register_measurement(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Box<dyn Measurement> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering measurement: {}", name);
        self.measurements.insert(name, Arc::new(factory));
    }

    /// Look up a state constructor.
    pub fn state_factory(&self, name: &str) -> SimResult<StateFactory> {
        lookup(&self.states, EntityKind::State, name).cloned()
    }

    /// Instantiate a state by name.
    pub fn create_state(&self, name: &str) -> SimResult<Box<dyn QuantumState>> {
        lookup(&self.states, EntityKind::State, name).map(|factory| factory())
    }

    /// Instantiate a calculation strategy by name.
    pub fn create_calculator(&self, name: &str) -> SimResult<Box<dyn Calculator>> {
        lookup(&self.calculators, EntityKind::Calculator, name).map(|factory| factory())
    }

    /// Instantiate a measurement strategy by name.
    pub fn create_measurement(&self, name: &str) -> SimResult<Box<dyn Measurement>> {
        lookup(&self.measurements, EntityKind::Measurement, name).map(|factory| factory())
    }

    /// Registered state names, sorted.
    pub fn available_states(&self) -> Vec<String> {
        sorted_keys(&self.states)
    }

    /// Registered calculator names, sorted.
    pub fn available_calculators(&self) -> Vec<String> {
        sorted_keys(&self.calculators)
    }

    /// Registered measurement names, sorted.
    pub fn available_measurements(&self) -> Vec<String> {
        sorted_keys(&self.measurements)
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("states", &self.available_states())
            .field("calculators", &self.available_calculators())
            .field("measurements", &self.available_measurements())
            .finish()
    }
}

fn lookup<'a, F>(
    table: &'a FxHashMap<String, F>,
    kind: EntityKind,
    name: &str,
) -> SimResult<&'a F> {
    table.get(name).ok_or_else(|| SimError::UnknownEntity {
        kind,
        name: name.to_string(),
    })
}

fn sorted_keys<F>(table: &FxHashMap<String, F>) -> Vec<String> {
    let mut names: Vec<_> = table.keys().cloned().collect();
    names.sort();
    names
}
