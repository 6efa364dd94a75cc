//! Index-based identifiers for gates and wires.

use std::fmt;

/// Gate identifier: the gate's index in the circuit's gate table.
///
/// Gates are created once at circuit-load time and never destroyed, so a
/// plain index is a stable identity for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GateId(pub u32);

impl GateId {
    /// Get the identifier as a usize for table indexing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gate({})", self.0)
    }
}

/// Wire identifier: the wire's index in the circuit's wire table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireId(pub u32);

impl WireId {
    /// Get the identifier as a usize for table indexing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wire({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_ordering_follows_index() {
        assert!(GateId(0) < GateId(1));
        assert!(WireId(3) > WireId(2));
        assert_eq!(GateId(7).index(), 7);
    }
}
