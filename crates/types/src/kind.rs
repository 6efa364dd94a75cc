//! The closed set of gate kinds.

use crate::{InputPin, OutputPin};
use std::fmt;
use std::str::FromStr;

/// The kind of a logic gate.
///
/// The kind set is closed: the simulator dispatches over these four variants
/// and no open extension point exists. The kind fixes the gate's pin layout:
/// AND/OR have inputs `in1`/`in2` and output `out`, NOT has input `in` and
/// output `out`, CONST has no inputs and outputs `true`/`false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Two-input conjunction.
    And,
    /// Two-input disjunction.
    Or,
    /// Single-input inverter.
    Not,
    /// Constant source: its `true` pin goes high once, after the gate delay.
    Const,
}

impl GateKind {
    /// The keyword used for this kind in netlist declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            GateKind::And => "and",
            GateKind::Or => "or",
            GateKind::Not => "not",
            GateKind::Const => "const",
        }
    }

    /// The input pins this kind requires, each bound by exactly one wire.
    pub fn input_pins(self) -> &'static [InputPin] {
        match self {
            GateKind::And | GateKind::Or => &[InputPin::In1, InputPin::In2],
            GateKind::Not => &[InputPin::In],
            GateKind::Const => &[],
        }
    }

    /// The output pins this kind exposes.
    pub fn output_pins(self) -> &'static [OutputPin] {
        match self {
            GateKind::And | GateKind::Or | GateKind::Not => &[OutputPin::Out],
            GateKind::Const => &[OutputPin::True, OutputPin::False],
        }
    }

    /// Resolve an input pin name for this kind.
    ///
    /// Returns `None` if the name does not denote an input pin of this kind.
    pub fn input_pin(self, name: &str) -> Option<InputPin> {
        let pin = InputPin::from_str(name).ok()?;
        self.input_pins().contains(&pin).then_some(pin)
    }

    /// Resolve an output pin name for this kind.
    pub fn output_pin(self, name: &str) -> Option<OutputPin> {
        let pin = OutputPin::from_str(name).ok()?;
        self.output_pins().contains(&pin).then_some(pin)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GateKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(GateKind::And),
            "or" => Ok(GateKind::Or),
            "not" => Ok(GateKind::Not),
            "const" => Ok(GateKind::Const),
            _ => Err(()),
        }
    }
}
