//! Run command implementation.

use std::time::Instant;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use qcirc_sim::{Circuit, SimError, StrategyRegistry};

use super::common::{file_config, format_vector, load_program, print_results};

/// Command-line settings that take precedence over the program file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub shots: Option<u32>,
    pub seed: Option<u64>,
    pub state: Option<String>,
    pub calculator: Option<String>,
    pub measurement: Option<String>,
    pub max_qubits: Option<usize>,
}

/// Execute the run command.
pub fn execute(input: &str, overrides: &Overrides, show_state: bool, json: bool) -> Result<()> {
    let file = load_program(input)?;
    let mut config = file_config(&file)?;
    if let Some(seed) = overrides.seed {
        config = config.with_seed(seed);
    }
    if let Some(name) = &overrides.state {
        config = config.with_state(name.clone());
    }
    if let Some(name) = &overrides.calculator {
        config = config.with_calculator(name.clone());
    }
    if let Some(name) = &overrides.measurement {
        config = config.with_measurement(name.clone());
    }
    if let Some(max) = overrides.max_qubits {
        config = config.with_max_qubits(max);
    }

    let num_qubits = file
        .num_qubits
        .ok_or(SimError::MissingArgument("num_qubits"))?;
    let program = file
        .program
        .as_ref()
        .ok_or(SimError::MissingArgument("program"))?;
    let shots = overrides
        .shots
        .or(file.shots)
        .ok_or(SimError::MissingArgument("shots"))?;

    if !json {
        println!(
            "{} Running {} ({} qubits, {} steps, {} shots)",
            style("→").cyan().bold(),
            style(file.name.as_deref().unwrap_or(input)).green(),
            num_qubits,
            program.len(),
            shots
        );
    }

    let registry = StrategyRegistry::with_builtins();
    let mut circuit = Circuit::from_config(&registry, config)?;
    info!("{:?}", circuit);

    let start = Instant::now();
    let mut state = circuit.initialize(num_qubits)?;
    if show_state && !json {
        println!("  Initial state: {}", format_vector(state.as_ref()));
    }
    circuit
        .run(state.as_mut(), program)
        .with_context(|| format!("Failed to run {input}"))?;
    let counts = circuit.measure(state.as_ref(), shots)?;
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    if show_state {
        println!("  Final state:   {}", format_vector(state.as_ref()));
    }
    print_results(&counts, elapsed.as_millis());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn program_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_execute_bit_flip() {
        let file = program_file(
            r#"{ "num_qubits": 2, "shots": 20, "config": { "seed": 3 }, "program": [
                { "gate": "U3", "params": { "theta": 3.1415, "phi": 1.5708, "lambda": -3.1415 }, "target": 1 }
            ] }"#,
        );
        let path = file.path().to_str().unwrap();
        execute(path, &Overrides::default(), false, true).unwrap();
    }

    #[test]
    fn test_missing_shots_is_rejected() {
        let file = program_file(r#"{ "num_qubits": 1, "program": [] }"#);
        let err = execute(file.path().to_str().unwrap(), &Overrides::default(), false, true)
            .unwrap_err();
        assert!(err.to_string().contains("shots"));
    }

    #[test]
    fn test_shots_override_fills_gap() {
        let file = program_file(r#"{ "num_qubits": 1, "program": [] }"#);
        let overrides = Overrides {
            shots: Some(5),
            ..Overrides::default()
        };
        execute(file.path().to_str().unwrap(), &overrides, false, true).unwrap();
    }

    #[test]
    fn test_unknown_calculator_override() {
        let file = program_file(r#"{ "num_qubits": 1, "shots": 1, "program": [] }"#);
        let overrides = Overrides {
            calculator: Some("sparse".into()),
            ..Overrides::default()
        };
        assert!(execute(file.path().to_str().unwrap(), &overrides, false, true).is_err());
    }

    #[test]
    fn test_width_above_limit() {
        let file = program_file(r#"{ "num_qubits": 3, "shots": 1, "program": [] }"#);
        let overrides = Overrides {
            max_qubits: Some(2),
            ..Overrides::default()
        };
        assert!(execute(file.path().to_str().unwrap(), &overrides, false, true).is_err());
    }
}
