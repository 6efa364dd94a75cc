//! Event payloads and the realized-transition record.

use gatesim_circuit::Circuit;
use gatesim_types::{GateId, OutputPin, WireId};
use std::time::Duration;

/// A scheduled future action.
///
/// Explicit tagged payloads, dispatched by the runner against the circuit
/// graph; events capture identifiers and values, never references into the
/// graph itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// This gate now presents this output value (subject to the
    /// suppress-if-already-published check at trigger time).
    OutputChange {
        /// The gate whose output changes.
        gate: GateId,
        /// The value decided when the change was scheduled.
        value: bool,
    },
    /// This wire now delivers this value to its destination pin.
    WireDelivery {
        /// The delivering wire.
        wire: WireId,
        /// The value in transit.
        value: bool,
    },
}

/// One realized output transition.
///
/// Recorded in strict time order, exactly when a gate's published value
/// actually flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Simulated time of the transition.
    pub time: Duration,
    /// The gate whose output changed.
    pub gate: GateId,
    /// The output pin that fired (`out`, or `true` for CONST gates).
    pub pin: OutputPin,
    /// The new published value.
    pub value: bool,
}

impl Transition {
    /// Format the trace line for this transition:
    /// `At <time> gate <name> <kind> <delay> <pin> changes to <value>`.
    pub fn line(&self, circuit: &Circuit) -> String {
        format!(
            "At {} {} {} changes to {}",
            self.time.as_secs_f64(),
            circuit.gate(self.gate),
            self.pin,
            self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatesim_circuit::CircuitBuilder;
    use gatesim_types::GateKind;

    #[test]
    fn test_trace_line_format() {
        let mut builder = CircuitBuilder::new();
        builder.add_gate("a", GateKind::Not, 1.0);
        let (circuit, _) = builder.finish();

        let transition = Transition {
            time: Duration::from_secs_f64(1.0),
            gate: circuit.gate_id("a").unwrap(),
            pin: OutputPin::Out,
            value: true,
        };
        assert_eq!(transition.line(&circuit), "At 1 gate a not 1 out changes to true");
    }
}
