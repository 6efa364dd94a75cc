//! The circuit graph and its builder.

use crate::{Diagnostic, Diagnostics};
use gatesim_types::{GateId, GateKind, InputPin, OutputPin, WireId};
use indexmap::IndexMap;
use std::fmt;
use std::time::Duration;

/// A logic gate in a built circuit.
///
/// Static description only: the gate's runtime logic values live in the
/// simulation layer, so the circuit stays read-only during a run.
#[derive(Debug, Clone)]
pub struct Gate {
    name: String,
    kind: GateKind,
    delay: Duration,
    outgoing: Vec<WireId>,
    bound_inputs: Vec<InputPin>,
}

impl Gate {
    /// The gate's unique, case-sensitive name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The gate's kind.
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// The gate's nominal propagation delay.
    ///
    /// This is the configured value; jitter, when enabled, perturbs only the
    /// scheduling offset and never this field.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// All wires leaving this gate, across all of its output pins.
    pub fn outgoing(&self) -> &[WireId] {
        &self.outgoing
    }

    /// Whether the given input pin has a wire bound to it.
    pub fn is_input_bound(&self, pin: InputPin) -> bool {
        self.bound_inputs.contains(&pin)
    }
}

impl fmt::Display for Gate {
    /// Reconstruct the declaration form: `gate <name> <kind> <delay>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gate {} {} {}",
            self.name,
            self.kind,
            self.delay.as_secs_f64()
        )
    }
}

/// A delayed, directed, single-bit connection between two gate pins.
#[derive(Debug, Clone)]
pub struct Wire {
    source: GateId,
    src_pin: OutputPin,
    destination: GateId,
    dst_pin: InputPin,
    delay: Duration,
}

impl Wire {
    /// The gate this wire leaves from.
    pub fn source(&self) -> GateId {
        self.source
    }

    /// The output pin this wire is attached to.
    pub fn src_pin(&self) -> OutputPin {
        self.src_pin
    }

    /// The gate this wire delivers to.
    pub fn destination(&self) -> GateId {
        self.destination
    }

    /// The input pin this wire is bound to.
    pub fn dst_pin(&self) -> InputPin {
        self.dst_pin
    }

    /// The wire's propagation delay, independent of any gate delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// An immutable circuit graph: gates addressable by name or index, plus the
/// wires connecting them.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    gates: IndexMap<String, Gate>,
    wires: Vec<Wire>,
}

impl Circuit {
    /// Look up a gate's id by name.
    pub fn gate_id(&self, name: &str) -> Option<GateId> {
        self.gates.get_index_of(name).map(|i| GateId(i as u32))
    }

    /// Get a gate by id.
    ///
    /// # Panics
    ///
    /// Panics if the id did not come from this circuit.
    pub fn gate(&self, id: GateId) -> &Gate {
        &self.gates[id.index()]
    }

    /// Get a wire by id.
    ///
    /// # Panics
    ///
    /// Panics if the id did not come from this circuit.
    pub fn wire(&self, id: WireId) -> &Wire {
        &self.wires[id.index()]
    }

    /// Iterate over all gates in declaration order.
    pub fn gates(&self) -> impl Iterator<Item = (GateId, &Gate)> {
        self.gates
            .values()
            .enumerate()
            .map(|(i, g)| (GateId(i as u32), g))
    }

    /// Iterate over all wires in declaration order.
    pub fn wires(&self) -> impl Iterator<Item = (WireId, &Wire)> {
        self.wires
            .iter()
            .enumerate()
            .map(|(i, w)| (WireId(i as u32), w))
    }

    /// Number of gates.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Number of wires.
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// The wires leaving a specific output pin of a gate.
    pub fn outgoing(&self, gate: GateId, pin: OutputPin) -> impl Iterator<Item = WireId> + '_ {
        self.gate(gate)
            .outgoing
            .iter()
            .copied()
            .filter(move |&w| self.wire(w).src_pin == pin)
    }

    /// Check that every gate's required input pins are bound.
    ///
    /// Reports, does not abort: each unbound pin becomes one diagnostic and
    /// the caller decides, via [`UnboundInputPolicy`](crate::UnboundInputPolicy),
    /// whether the set withholds simulation.
    pub fn check_sanity(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for gate in self.gates.values() {
            for &pin in gate.kind.input_pins() {
                if !gate.is_input_bound(pin) {
                    diagnostics.report(Diagnostic::UnboundInputPin {
                        gate: gate.name.clone(),
                        pin: pin.as_str().to_owned(),
                    });
                }
            }
        }
        diagnostics
    }

    /// Reconstruct one wire's declaration form:
    /// `wire <srcGate> <srcPin> <dstGate> <dstPin> <delay>`.
    pub fn wire_declaration(&self, id: WireId) -> String {
        let wire = self.wire(id);
        format!(
            "wire {} {} {} {} {}",
            self.gate(wire.source).name,
            wire.src_pin,
            self.gate(wire.destination).name,
            wire.dst_pin,
            wire.delay.as_secs_f64()
        )
    }

    /// Re-serialize the whole circuit as netlist declarations.
    ///
    /// The result parses back into a semantically equivalent circuit: same
    /// names, kinds, delays, and connections, independent of the formatting
    /// of the original source.
    pub fn to_netlist(&self) -> String {
        let mut out = String::new();
        for gate in self.gates.values() {
            out.push_str(&gate.to_string());
            out.push('\n');
        }
        for (id, _) in self.wires() {
            out.push_str(&self.wire_declaration(id));
            out.push('\n');
        }
        out
    }
}

/// Builder for [`Circuit`], accumulating diagnostics as it goes.
///
/// Construction continues past structural errors where it can, so one pass
/// surfaces every problem, but a broken gate or wire is never materialized
/// into the graph.
#[derive(Debug, Default)]
pub struct CircuitBuilder {
    gates: IndexMap<String, Gate>,
    wires: Vec<Wire>,
    diagnostics: Diagnostics,
}

impl CircuitBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a gate.
    ///
    /// Returns `None` (with a diagnostic recorded) if the name is already
    /// taken. A negative or non-finite delay is reported and clamped to zero;
    /// the gate is still constructed so later wire declarations against it
    /// can be checked, but the diagnostic withholds simulation.
    pub fn add_gate(&mut self, name: &str, kind: GateKind, delay_secs: f64) -> Option<GateId> {
        if self.gates.contains_key(name) {
            self.diagnostics.report(Diagnostic::DuplicateGate {
                name: name.to_owned(),
            });
            return None;
        }

        let delay = if delay_secs.is_finite() && delay_secs >= 0.0 {
            Duration::from_secs_f64(delay_secs)
        } else {
            self.diagnostics.report(Diagnostic::NegativeDelay {
                declaration: format!("gate {} {} {}", name, kind, delay_secs),
            });
            Duration::ZERO
        };

        let id = GateId(self.gates.len() as u32);
        self.gates.insert(
            name.to_owned(),
            Gate {
                name: name.to_owned(),
                kind,
                delay,
                outgoing: Vec::new(),
                bound_inputs: Vec::new(),
            },
        );
        Some(id)
    }

    /// Declare a wire from `src`'s output pin to `dst`'s input pin.
    ///
    /// Every check failure records a diagnostic and returns `None` without
    /// creating the wire: unknown gates, pins the gate kinds do not expose,
    /// and input pins that already have a wire. Each input pin accepts
    /// exactly one wire; output pins accept any number.
    pub fn connect(
        &mut self,
        src: &str,
        src_pin: &str,
        dst: &str,
        dst_pin: &str,
        delay_secs: f64,
    ) -> Option<WireId> {
        let declaration = || format!("wire {} {} {} {} {}", src, src_pin, dst, dst_pin, delay_secs);

        let Some(source) = self.gates.get_index_of(src).map(|i| GateId(i as u32)) else {
            self.diagnostics.report(Diagnostic::NoSuchSourceGate {
                declaration: declaration(),
            });
            return None;
        };
        let Some(destination) = self.gates.get_index_of(dst).map(|i| GateId(i as u32)) else {
            self.diagnostics.report(Diagnostic::NoSuchDestinationGate {
                declaration: declaration(),
            });
            return None;
        };

        let Some(src_pin) = self.gates[source.index()].kind.output_pin(src_pin) else {
            self.diagnostics.report(Diagnostic::IllegalOutputPin {
                gate: src.to_owned(),
                pin: src_pin.to_owned(),
            });
            return None;
        };
        let Some(dst_pin) = self.gates[destination.index()].kind.input_pin(dst_pin) else {
            self.diagnostics.report(Diagnostic::IllegalInputPin {
                gate: dst.to_owned(),
                pin: dst_pin.to_owned(),
            });
            return None;
        };

        if self.gates[destination.index()].is_input_bound(dst_pin) {
            self.diagnostics.report(Diagnostic::InputPinInUse {
                gate: dst.to_owned(),
                pin: dst_pin.as_str().to_owned(),
            });
            return None;
        }

        let delay = if delay_secs.is_finite() && delay_secs >= 0.0 {
            Duration::from_secs_f64(delay_secs)
        } else {
            self.diagnostics.report(Diagnostic::NegativeDelay {
                declaration: declaration(),
            });
            Duration::ZERO
        };

        let id = WireId(self.wires.len() as u32);
        self.wires.push(Wire {
            source,
            src_pin,
            destination,
            dst_pin,
            delay,
        });
        self.gates[source.index()].outgoing.push(id);
        self.gates[destination.index()].bound_inputs.push(dst_pin);
        Some(id)
    }

    /// Record a diagnostic produced outside the builder (e.g. by the parser).
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.report(diagnostic);
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Finish construction, yielding the circuit and everything reported.
    pub fn finish(self) -> (Circuit, Diagnostics) {
        (
            Circuit {
                gates: self.gates,
                wires: self.wires,
            },
            self.diagnostics,
        )
    }
}
