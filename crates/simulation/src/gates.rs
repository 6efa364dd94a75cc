//! Per-gate runtime state and update rules.
//!
//! A gate's runtime state is split into the inputs it has sampled, the
//! `pending` value it last decided on, and the `published` value it last
//! actually presented. Output lags input by the gate delay: an input change
//! only *decides* a new value and asks the runner to schedule it; the
//! published value moves when that scheduled change triggers, and a change
//! whose target equals the already-published value is suppressed there. The
//! suppression guards against redundant or superseded events accumulated
//! from rapid input toggling.

use gatesim_types::{GateKind, InputPin};

/// The truth function of a two-input gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    And,
    Or,
}

impl BinaryOp {
    fn apply(self, in1: bool, in2: bool) -> bool {
        match self {
            BinaryOp::And => in1 && in2,
            BinaryOp::Or => in1 || in2,
        }
    }
}

#[derive(Debug)]
enum Logic {
    /// AND/OR: samples both inputs, recomputes on every change.
    Binary { op: BinaryOp, in1: bool, in2: bool },
    /// NOT: the new output is always the negation of the arriving value.
    Inverter,
    /// CONST: no inputs; fires its `true` pin once at bootstrap.
    Constant,
}

/// Runtime state of one gate.
#[derive(Debug)]
pub(crate) struct GateRuntime {
    logic: Logic,
    /// Last decided output value; updated at decision time.
    pending: bool,
    /// Last published output value; updated only when a scheduled output
    /// change actually triggers.
    published: bool,
}

impl GateRuntime {
    /// Initial state for a gate of the given kind. All values start false,
    /// matching wires' initial carried value.
    pub fn new(kind: GateKind) -> Self {
        let logic = match kind {
            GateKind::And => Logic::Binary {
                op: BinaryOp::And,
                in1: false,
                in2: false,
            },
            GateKind::Or => Logic::Binary {
                op: BinaryOp::Or,
                in1: false,
                in2: false,
            },
            GateKind::Not => Logic::Inverter,
            GateKind::Const => Logic::Constant,
        };
        Self {
            logic,
            pending: false,
            published: false,
        }
    }

    /// Initialization-time event, if this kind has one.
    ///
    /// NOT gates invert their all-false initial input, so a true output
    /// becomes visible at `t = delay`; CONST gates fire their `true` pin at
    /// `t = delay`. AND/OR gates stay quiet until driven. Returns the value
    /// to schedule as an output change at the gate's delay.
    pub fn bootstrap(&mut self) -> Option<bool> {
        match self.logic {
            Logic::Inverter => {
                self.pending = true;
                Some(true)
            }
            Logic::Constant => {
                self.pending = true;
                Some(true)
            }
            Logic::Binary { .. } => None,
        }
    }

    /// Handle a value arriving at one of this gate's input pins.
    ///
    /// Returns the new output value to schedule after the gate delay, or
    /// `None` when the decided output is unchanged. Must never be called for
    /// CONST gates; the runner rejects those deliveries before dispatch.
    pub fn on_input_change(&mut self, pin: InputPin, value: bool) -> Option<bool> {
        match &mut self.logic {
            Logic::Binary { op, in1, in2 } => {
                match pin {
                    InputPin::In1 => *in1 = value,
                    InputPin::In2 => *in2 = value,
                    // the builder only binds wires to pins the kind exposes
                    InputPin::In => unreachable!("two-input gate has no pin `in`"),
                }
                let new = op.apply(*in1, *in2);
                if new != self.pending {
                    self.pending = new;
                    Some(new)
                } else {
                    None
                }
            }
            Logic::Inverter => {
                // unconditional: dedup happens at publish time
                self.pending = !value;
                Some(self.pending)
            }
            Logic::Constant => unreachable!("const gates have no input pins"),
        }
    }

    /// Handle a scheduled output change triggering with the given value.
    ///
    /// Returns true if the value actually flips and must be published (trace
    /// line plus propagation to outgoing wires); false if the change is
    /// suppressed because the target value is already published.
    pub fn on_output_change(&mut self, value: bool) -> bool {
        if value != self.published {
            self.published = value;
            true
        } else {
            false
        }
    }

    /// The gate's currently published output value.
    #[cfg(test)]
    pub fn published(&self) -> bool {
        self.published
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_decides_true_only_when_both_inputs_true() {
        let mut gate = GateRuntime::new(GateKind::And);

        // first input alone changes nothing: false AND false == false AND true
        assert_eq!(gate.on_input_change(InputPin::In1, true), None);
        // second input completes the conjunction
        assert_eq!(gate.on_input_change(InputPin::In2, true), Some(true));
        // either input dropping decides false
        assert_eq!(gate.on_input_change(InputPin::In1, false), Some(false));
    }

    #[test]
    fn test_or_decides_true_when_either_input_true() {
        let mut gate = GateRuntime::new(GateKind::Or);

        assert_eq!(gate.on_input_change(InputPin::In1, true), Some(true));
        // second input true: output already decided true
        assert_eq!(gate.on_input_change(InputPin::In2, true), None);
        // one input dropping is not enough to decide false
        assert_eq!(gate.on_input_change(InputPin::In1, false), None);
        assert_eq!(gate.on_input_change(InputPin::In2, false), Some(false));
    }

    #[test]
    fn test_idempotent_delivery_produces_no_second_decision() {
        let mut gate = GateRuntime::new(GateKind::And);
        gate.on_input_change(InputPin::In1, true);
        gate.on_input_change(InputPin::In2, true);

        // same value again on an unchanged input: no new output decision
        assert_eq!(gate.on_input_change(InputPin::In2, true), None);
        assert_eq!(gate.on_input_change(InputPin::In1, true), None);
    }

    #[test]
    fn test_not_schedules_on_every_input_change() {
        let mut gate = GateRuntime::new(GateKind::Not);
        assert_eq!(gate.bootstrap(), Some(true));

        assert_eq!(gate.on_input_change(InputPin::In, true), Some(false));
        // same input value again: NOT schedules unconditionally; the
        // duplicate is suppressed later at publish time
        assert_eq!(gate.on_input_change(InputPin::In, true), Some(false));
        assert_eq!(gate.on_input_change(InputPin::In, false), Some(true));
    }

    #[test]
    fn test_binary_gates_have_no_bootstrap() {
        assert_eq!(GateRuntime::new(GateKind::And).bootstrap(), None);
        assert_eq!(GateRuntime::new(GateKind::Or).bootstrap(), None);
    }

    #[test]
    fn test_const_bootstraps_true() {
        let mut gate = GateRuntime::new(GateKind::Const);
        assert_eq!(gate.bootstrap(), Some(true));
    }

    #[test]
    fn test_publish_suppresses_already_published_value() {
        let mut gate = GateRuntime::new(GateKind::Not);
        gate.bootstrap();

        assert!(gate.on_output_change(true));
        assert!(gate.published());
        // a superseded event carrying the same value is suppressed
        assert!(!gate.on_output_change(true));
        // and a genuine flip publishes again
        assert!(gate.on_output_change(false));
        assert!(!gate.published());
    }
}
