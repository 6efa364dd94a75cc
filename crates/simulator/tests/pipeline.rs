//! Full-pipeline tests: netlist text in, trace lines out.

use gatesim_circuit::UnboundInputPolicy;
use gatesim_simulation::SimulationConfig;
use gatesim_simulator::{simulate_netlist, AppError};

fn trace_lines(source: &str) -> Vec<String> {
    let (circuit, report) = simulate_netlist(
        source,
        UnboundInputPolicy::Permissive,
        SimulationConfig::new(),
    )
    .expect("circuit should simulate");
    report
        .transitions
        .iter()
        .map(|t| t.line(&circuit))
        .collect()
}

#[test]
fn test_unwired_not_gate_produces_one_trace_line() {
    assert_eq!(
        trace_lines("gate a not 1.0\n"),
        vec!["At 1 gate a not 1 out changes to true"]
    );
}

#[test]
fn test_const_trace_names_its_true_pin() {
    assert_eq!(
        trace_lines("gate c const 0.5\n"),
        vec!["At 0.5 gate c const 0.5 true changes to true"]
    );
}

#[test]
fn test_const_not_scenario_prints_in_time_order() {
    assert_eq!(
        trace_lines(
            "gate c const 0.0\n\
             gate n not 1.0\n\
             wire c true n in 0.5\n"
        ),
        vec![
            "At 0 gate c const 0 true changes to true",
            "At 1 gate n not 1 out changes to true",
            "At 1.5 gate n not 1 out changes to false",
        ]
    );
}

#[test]
fn test_strict_policy_withholds_simulation_for_unwired_pins() {
    let err = simulate_netlist(
        "gate a not 1.0\n",
        UnboundInputPolicy::Strict,
        SimulationConfig::new(),
    )
    .unwrap_err();

    match err {
        AppError::InvalidCircuit { diagnostics } => {
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics.entries()[0].to_string(), "unused input pin: a in");
        }
        other => panic!("expected InvalidCircuit, got {:?}", other),
    }
}

#[test]
fn test_structural_errors_withhold_simulation_even_when_permissive() {
    let err = simulate_netlist(
        "gate a not 1.0\n\
         gate a not 2.0\n\
         wire a out a in 0.5\n",
        UnboundInputPolicy::Permissive,
        SimulationConfig::new(),
    )
    .unwrap_err();

    match err {
        AppError::InvalidCircuit { diagnostics } => {
            assert_eq!(diagnostics.entries()[0].to_string(), "redefinition: gate a");
        }
        other => panic!("expected InvalidCircuit, got {:?}", other),
    }
}

#[test]
fn test_round_trip_survives_the_full_pipeline() {
    let source = "gate c const 0.0\n\
                  gate n not 1.0\n\
                  wire c true n in 0.5\n";

    let (circuit, first) = simulate_netlist(
        source,
        UnboundInputPolicy::Permissive,
        SimulationConfig::new(),
    )
    .unwrap();

    let (recircuit, second) = simulate_netlist(
        &circuit.to_netlist(),
        UnboundInputPolicy::Permissive,
        SimulationConfig::new(),
    )
    .unwrap();

    // Re-serialized declarations drive an identical simulation.
    assert_eq!(circuit.to_netlist(), recircuit.to_netlist());
    assert_eq!(first.transitions, second.transitions);
    assert_eq!(first.events_processed, second.events_processed);
}
