//! Named connection points on gates.

use std::fmt;
use std::str::FromStr;

/// An input pin name.
///
/// Input pins accept exactly one wire. Which of these names a given gate
/// actually exposes is decided by its [`GateKind`](crate::GateKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPin {
    /// First input of a two-input gate.
    In1,
    /// Second input of a two-input gate.
    In2,
    /// Sole input of a NOT gate.
    In,
}

impl InputPin {
    /// The pin name as it appears in netlist declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            InputPin::In1 => "in1",
            InputPin::In2 => "in2",
            InputPin::In => "in",
        }
    }
}

impl fmt::Display for InputPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputPin {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in1" => Ok(InputPin::In1),
            "in2" => Ok(InputPin::In2),
            "in" => Ok(InputPin::In),
            _ => Err(()),
        }
    }
}

/// An output pin name.
///
/// Output pins accept any number of wires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputPin {
    /// The single output of AND/OR/NOT gates.
    Out,
    /// The CONST pin that goes high once after the gate delay.
    True,
    /// The CONST pin that stays low forever.
    False,
}

impl OutputPin {
    /// The pin name as it appears in netlist declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputPin::Out => "out",
            OutputPin::True => "true",
            OutputPin::False => "false",
        }
    }
}

impl fmt::Display for OutputPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputPin {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "out" => Ok(OutputPin::Out),
            "true" => Ok(OutputPin::True),
            "false" => Ok(OutputPin::False),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_name_round_trip() {
        for pin in [InputPin::In1, InputPin::In2, InputPin::In] {
            assert_eq!(pin.as_str().parse::<InputPin>(), Ok(pin));
        }
        for pin in [OutputPin::Out, OutputPin::True, OutputPin::False] {
            assert_eq!(pin.as_str().parse::<OutputPin>(), Ok(pin));
        }
        assert!("in3".parse::<InputPin>().is_err());
        assert!("output".parse::<OutputPin>().is_err());
    }
}
