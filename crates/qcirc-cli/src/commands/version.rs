//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - classical simulation of small quantum circuits",
        style("qcirc").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qcirc-ir   Gate program model");
    println!("  qcirc-sim  Statevector simulator");
    println!("  qcirc-cli  Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
