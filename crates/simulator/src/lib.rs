//! Command-line simulator glue.
//!
//! Ties the layers together the way the binary does: parse a netlist,
//! sanity-check the circuit, withhold simulation if the accumulated
//! diagnostics block it under the chosen policy, and otherwise run to
//! quiescence. Exposed as a library so the full pipeline is testable
//! without spawning the binary.

use gatesim_circuit::{parse_netlist, Circuit, Diagnostics, UnboundInputPolicy};
use gatesim_simulation::{SimulationConfig, SimulationError, SimulationReport, SimulationRunner};
use thiserror::Error;

/// Why a netlist did not produce a trace.
#[derive(Debug, Error)]
pub enum AppError {
    /// Construction or sanity diagnostics withhold simulation.
    ///
    /// The core never runs on a circuit whose checks failed; the recorded
    /// diagnostics are carried along for reporting.
    #[error("circuit has {} problem(s); simulation withheld", diagnostics.len())]
    InvalidCircuit {
        /// Everything recorded during construction and sanity checking.
        diagnostics: Diagnostics,
    },

    /// The run itself failed (internal consistency or event budget).
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Parse, sanity-check, and simulate a netlist source.
///
/// Returns the circuit together with the run report so callers can format
/// trace lines. Diagnostics that do not block under `policy` (unbound input
/// pins, when permissive) are logged but do not prevent the run.
pub fn simulate_netlist(
    source: &str,
    policy: UnboundInputPolicy,
    config: SimulationConfig,
) -> Result<(Circuit, SimulationReport), AppError> {
    let (circuit, mut diagnostics) = parse_netlist(source);
    diagnostics.extend(circuit.check_sanity());

    if diagnostics.blocks_simulation(policy) {
        return Err(AppError::InvalidCircuit { diagnostics });
    }

    tracing::debug!(
        gates = circuit.gate_count(),
        wires = circuit.wire_count(),
        "starting simulation"
    );
    let report = SimulationRunner::new(&circuit, config).run()?;
    Ok((circuit, report))
}
