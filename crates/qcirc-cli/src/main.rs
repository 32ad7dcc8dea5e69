//! qcirc Command-Line Interface
//!
//! Runs gate programs on the dense statevector simulator.
//!
//! ```text
//! qcirc run -i programs/swap.json --shots 1000 --seed 7
//! qcirc strategies
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{run, strategies, version};

/// qcirc - classical simulation of small quantum circuits
#[derive(Parser)]
#[command(name = "qcirc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a program file and measure the final state
    Run {
        /// Program file (JSON or YAML)
        #[arg(short, long)]
        input: String,

        /// Number of shots (overrides the file)
        #[arg(short, long)]
        shots: Option<u32>,

        /// Sampling seed (overrides the file)
        #[arg(long, env = "QCIRC_SEED")]
        seed: Option<u64>,

        /// State representation
        #[arg(long)]
        state: Option<String>,

        /// Calculation strategy
        #[arg(long)]
        calculator: Option<String>,

        /// Measurement strategy
        #[arg(long)]
        measurement: Option<String>,

        /// Largest accepted circuit width
        #[arg(long)]
        max_qubits: Option<usize>,

        /// Print the initial and final amplitude vectors
        #[arg(long)]
        show_state: bool,

        /// Print the tally as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List registered states, calculators and measurements
    Strategies,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Run {
            input,
            shots,
            seed,
            state,
            calculator,
            measurement,
            max_qubits,
            show_state,
            json,
        } => run::execute(
            &input,
            &run::Overrides {
                shots,
                seed,
                state,
                calculator,
                measurement,
                max_qubits,
            },
            show_state,
            json,
        ),

        Commands::Strategies => {
            strategies::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
