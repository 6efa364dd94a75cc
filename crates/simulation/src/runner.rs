//! The simulation driver.

use crate::event::{Event, Transition};
use crate::event_queue::EventQueue;
use crate::gates::GateRuntime;
use crate::SimulationConfig;
use gatesim_circuit::Circuit;
use gatesim_types::{GateId, GateKind, InputPin, OutputPin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use thiserror::Error;

/// Internal-consistency failures during a run.
///
/// These indicate a defect in graph construction, not user input: once
/// construction validation has passed they are unreachable, and the caller
/// should treat them as fatal rather than continue on an inconsistent model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A wire delivered a value to a CONST gate, which has no input pins.
    #[error("input should never change: gate {gate} const")]
    ConstInputChange {
        /// Name of the CONST gate.
        gate: String,
    },

    /// The configured event budget ran out before quiescence, which usually
    /// means a zero-delay feedback loop.
    #[error("event budget of {budget} exhausted at simulated time {at_secs}")]
    EventBudgetExhausted {
        /// The configured budget.
        budget: u64,
        /// Simulated time when the budget ran out, in seconds.
        at_secs: f64,
    },
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Every realized output transition, in strict time order.
    pub transitions: Vec<Transition>,
    /// Total events processed, including suppressed ones.
    pub events_processed: u64,
    /// Simulated time of the last processed event.
    pub end_time: Duration,
}

impl SimulationReport {
    /// Print one trace line per transition to stdout.
    pub fn print(&self, circuit: &Circuit) {
        for transition in &self.transitions {
            println!("{}", transition.line(circuit));
        }
    }
}

/// Pulls events off the queue in time order and triggers them until the
/// queue is empty.
///
/// The runner is the only actor that touches gate runtime state, and it does
/// so strictly one event at a time; the circuit graph itself stays read-only
/// throughout.
#[derive(Debug)]
pub struct SimulationRunner<'a> {
    circuit: &'a Circuit,
    queue: EventQueue,
    states: Vec<GateRuntime>,
    jitter: Option<ChaCha8Rng>,
    max_events: Option<u64>,
    transitions: Vec<Transition>,
    events_processed: u64,
    now: Duration,
}

impl<'a> SimulationRunner<'a> {
    /// Build runtime state for every gate and schedule the bootstrap events.
    ///
    /// NOT and CONST gates launch the simulation: each schedules its initial
    /// output change at `t = delay`, in gate declaration order. The caller is
    /// responsible for withholding this entirely when sanity checks failed.
    pub fn new(circuit: &'a Circuit, config: SimulationConfig) -> Self {
        let mut queue = EventQueue::new();
        let mut states = Vec::with_capacity(circuit.gate_count());

        for (id, gate) in circuit.gates() {
            let mut state = GateRuntime::new(gate.kind());
            if let Some(value) = state.bootstrap() {
                tracing::debug!(gate = gate.name(), ?value, "bootstrap event");
                queue.schedule(gate.delay(), Event::OutputChange { gate: id, value });
            }
            states.push(state);
        }

        Self {
            circuit,
            queue,
            states,
            jitter: config
                .jitter
                .then(|| ChaCha8Rng::seed_from_u64(config.seed)),
            max_events: config.max_events,
            transitions: Vec::new(),
            events_processed: 0,
            now: Duration::ZERO,
        }
    }

    /// Drain the event queue to completion.
    ///
    /// Terminates when the queue is empty; any stabilizing circuit reaches
    /// that quiescence because gates only keep scheduling while their output
    /// is still changing and delays are non-negative.
    pub fn run(mut self) -> Result<SimulationReport, SimulationError> {
        while let Some((key, event)) = self.queue.pop() {
            if let Some(budget) = self.max_events {
                if self.events_processed >= budget {
                    return Err(SimulationError::EventBudgetExhausted {
                        budget,
                        at_secs: key.time.as_secs_f64(),
                    });
                }
            }
            self.now = key.time;
            self.events_processed += 1;
            self.dispatch(key.time, event)?;
        }

        tracing::debug!(
            events = self.events_processed,
            transitions = self.transitions.len(),
            "quiescence reached"
        );
        Ok(SimulationReport {
            transitions: self.transitions,
            events_processed: self.events_processed,
            end_time: self.now,
        })
    }

    fn dispatch(&mut self, time: Duration, event: Event) -> Result<(), SimulationError> {
        match event {
            Event::OutputChange { gate, value } => {
                self.on_output_change(time, gate, value);
                Ok(())
            }
            Event::WireDelivery { wire, value } => {
                let wire = self.circuit.wire(wire);
                self.on_input_change(time, wire.destination(), wire.dst_pin(), value)
            }
        }
    }

    /// A gate's scheduled output change triggers: publish or suppress.
    fn on_output_change(&mut self, time: Duration, id: GateId, value: bool) {
        let circuit = self.circuit;
        let gate = circuit.gate(id);

        if !self.states[id.index()].on_output_change(value) {
            tracing::debug!(gate = gate.name(), ?value, "suppressed output change");
            return;
        }

        let pin = match gate.kind() {
            GateKind::Const => OutputPin::True,
            _ => OutputPin::Out,
        };
        tracing::debug!(gate = gate.name(), %pin, ?value, secs = time.as_secs_f64(), "publish");
        self.transitions.push(Transition {
            time,
            gate: id,
            pin,
            value,
        });

        for wire_id in circuit.outgoing(id, pin) {
            let delay = circuit.wire(wire_id).delay();
            self.queue
                .schedule(time + delay, Event::WireDelivery { wire: wire_id, value });
        }
    }

    /// A wire delivery arrives at a gate's input pin.
    fn on_input_change(
        &mut self,
        time: Duration,
        id: GateId,
        pin: InputPin,
        value: bool,
    ) -> Result<(), SimulationError> {
        let gate = self.circuit.gate(id);
        if gate.kind() == GateKind::Const {
            return Err(SimulationError::ConstInputChange {
                gate: gate.name().to_owned(),
            });
        }

        if let Some(new) = self.states[id.index()].on_input_change(pin, value) {
            let offset = self.gate_offset(gate.delay());
            self.queue
                .schedule(time + offset, Event::OutputChange { gate: id, value: new });
        }
        Ok(())
    }

    /// The scheduling offset for a gate-delay wait.
    ///
    /// With jitter enabled this is `delay * 0.95 + U[0, delay * 0.1)`; the
    /// nominal delay stored on the gate is never touched.
    fn gate_offset(&mut self, delay: Duration) -> Duration {
        match &mut self.jitter {
            Some(rng) => delay.mul_f64(0.95 + rng.gen::<f64>() * 0.1),
            None => delay,
        }
    }
}
