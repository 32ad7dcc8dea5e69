//! Strategies command implementation.

use console::style;

use qcirc_ir::GateKind;
use qcirc_sim::{CircuitConfig, StrategyRegistry};

/// Execute the strategies command.
pub fn execute() {
    let registry = StrategyRegistry::with_builtins();
    let defaults = CircuitConfig::default();

    println!("{} Registered strategies:\n", style("qcirc").cyan().bold());
    print_table("States", &registry.available_states(), &defaults.state);
    print_table(
        "Calculators",
        &registry.available_calculators(),
        &defaults.calculator,
    );
    print_table(
        "Measurements",
        &registry.available_measurements(),
        &defaults.measurement,
    );

    let gates: Vec<_> = GateKind::ALL
        .iter()
        .map(|g| format!("{} ({}q)", g.name(), g.num_qubits()))
        .collect();
    println!("  {}", style("Gates").bold());
    println!("    {}", gates.join(", "));
}

fn print_table(title: &str, names: &[String], default: &str) {
    println!("  {}", style(title).bold());
    for name in names {
        if name == default {
            println!("    {} {}", style(name).green(), style("(default)").dim());
        } else {
            println!("    {name}");
        }
    }
    println!();
}
