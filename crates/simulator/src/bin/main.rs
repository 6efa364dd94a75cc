//! Gatesim CLI
//!
//! Reads a netlist description of a logic circuit and prints every output
//! transition the circuit produces, in simulated-time order.

use clap::Parser;
use gatesim_circuit::UnboundInputPolicy;
use gatesim_simulation::SimulationConfig;
use gatesim_simulator::{simulate_netlist, AppError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gatesim")]
#[command(about = "Discrete-event simulator for gate-level logic circuits")]
#[command(version)]
struct Cli {
    /// Netlist file describing the circuit
    file: PathBuf,

    /// Treat unwired input pins as errors instead of warnings
    #[arg(long)]
    strict_pins: bool,

    /// Jitter gate delays by up to ±5% to spread simultaneous events
    #[arg(long)]
    jitter: bool,

    /// Seed for the jitter generator
    #[arg(long, default_value = "12345")]
    seed: u64,

    /// Abort after this many events (guards zero-delay feedback loops)
    #[arg(long)]
    max_events: Option<u64>,

    /// Echo the parsed circuit declarations before simulating
    #[arg(long)]
    print_circuit: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let policy = if cli.strict_pins {
        UnboundInputPolicy::Strict
    } else {
        UnboundInputPolicy::Permissive
    };

    let mut config = SimulationConfig::new().with_seed(cli.seed);
    if cli.jitter {
        config = config.with_jitter();
    }
    if let Some(max_events) = cli.max_events {
        config = config.with_max_events(max_events);
    }

    let source = std::fs::read_to_string(&cli.file)?;

    match simulate_netlist(&source, policy, config) {
        Ok((circuit, report)) => {
            if cli.print_circuit {
                print!("{}", circuit.to_netlist());
            }
            report.print(&circuit);
            Ok(())
        }
        Err(AppError::InvalidCircuit { diagnostics }) => {
            for diagnostic in diagnostics.entries() {
                eprintln!("gatesim: {}", diagnostic);
            }
            Err(Box::new(AppError::InvalidCircuit { diagnostics }))
        }
        Err(err) => Err(Box::new(err)),
    }
}
