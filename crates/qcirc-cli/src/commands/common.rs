//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qcirc_ir::ProgramFile;
use qcirc_sim::{CircuitConfig, Counts, QuantumState};

/// Load a program document from a JSON or YAML file.
pub fn load_program(path: &str) -> Result<ProgramFile> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    let file = match ext.to_lowercase().as_str() {
        "yaml" | "yml" => ProgramFile::from_yaml_str(&source),
        _ => ProgramFile::from_json_str(&source),
    };
    file.with_context(|| format!("Failed to parse program: {path}"))
}

/// Read the `config` section of a program document, if any.
pub fn file_config(file: &ProgramFile) -> Result<CircuitConfig> {
    match &file.config {
        Some(value) => serde_json::from_value(value.clone()).context("Invalid config section"),
        None => Ok(CircuitConfig::default()),
    }
}

/// Render an amplitude vector as `[a0, a1, ...]`, trimming float noise.
pub fn format_vector(state: &dyn QuantumState) -> String {
    let entries: Vec<String> = state
        .vector()
        .iter()
        .map(|a| {
            let re = if a.re.abs() < 1e-12 { 0.0 } else { a.re };
            let im = if a.im.abs() < 1e-12 { 0.0 } else { a.im };
            if im == 0.0 {
                format!("{re:.4}")
            } else {
                format!("{re:.4}{im:+.4}i")
            }
        })
        .collect();
    format!("[{}]", entries.join(", "))
}

/// Print a measurement tally in a table format.
pub fn print_results(counts: &Counts, elapsed_ms: u128) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        counts.total_shots()
    );

    let sorted = counts.sorted();
    let total = counts.total_shots() as f64;

    for (bitstring, count) in sorted.iter().take(16) {
        let prob = **count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > 16 {
        println!("  ... and {} more outcomes", sorted.len() - 16);
    }

    println!("\n  Execution time: {} ms", style(elapsed_ms).yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use qcirc_sim::ClassicalState;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_program() {
        let file = write_temp(
            ".json",
            r#"{ "num_qubits": 1, "shots": 10, "program": [
                { "gate": "U3", "params": { "theta": 3.1415, "phi": 1.5708, "lambda": -3.1415 }, "target": 0 }
            ] }"#,
        );
        let program = load_program(file.path().to_str().unwrap()).unwrap();
        assert_eq!(program.num_qubits, Some(1));
        assert_eq!(program.program.unwrap().len(), 1);
    }

    #[test]
    fn test_load_yaml_program_with_config() {
        let file = write_temp(
            ".yaml",
            "num_qubits: 2\nconfig:\n  seed: 5\n  max_qubits: 4\nprogram: []\n",
        );
        let program = load_program(file.path().to_str().unwrap()).unwrap();
        let config = file_config(&program).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.max_qubits, 4);
        assert_eq!(config.calculator, "dense");
    }

    #[test]
    fn test_missing_file() {
        assert!(load_program("/nonexistent/program.json").is_err());
    }

    #[test]
    fn test_bad_config_section() {
        let file = ProgramFile {
            config: Some(serde_json::json!({ "max_qubits": "many" })),
            ..ProgramFile::default()
        };
        assert!(file_config(&file).is_err());
    }

    #[test]
    fn test_format_vector() {
        let state = ClassicalState::ground(1);
        assert_eq!(format_vector(&state), "[1.0000, 0.0000]");
    }
}
