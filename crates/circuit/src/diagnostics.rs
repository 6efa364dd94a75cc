//! Construction-time diagnostics.
//!
//! Every problem found while loading a circuit is recorded in an explicit
//! [`Diagnostics`] value threaded through construction; the caller decides
//! whether the accumulated set blocks simulation.

use thiserror::Error;

/// A structural or configuration problem found while building a circuit.
///
/// None of these abort construction; they accumulate so a single pass can
/// surface every problem in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A second gate declaration reused an existing name.
    #[error("redefinition: gate {name}")]
    DuplicateGate {
        /// The reused gate name.
        name: String,
    },

    /// A gate declaration named a kind outside and/or/not/const.
    #[error("unknown gate kind: gate {name} {kind}")]
    UnknownGateKind {
        /// The gate name.
        name: String,
        /// The unrecognized kind keyword.
        kind: String,
    },

    /// A declared delay was negative.
    #[error("negative delay: {declaration}")]
    NegativeDelay {
        /// The offending declaration, reconstructed.
        declaration: String,
    },

    /// A wire named a source gate that does not exist.
    #[error("no such source gate: {declaration}")]
    NoSuchSourceGate {
        /// The offending wire declaration.
        declaration: String,
    },

    /// A wire named a destination gate that does not exist.
    #[error("no such destination gate: {declaration}")]
    NoSuchDestinationGate {
        /// The offending wire declaration.
        declaration: String,
    },

    /// A wire named a pin its source gate does not expose.
    #[error("illegal output pin: {gate} {pin}")]
    IllegalOutputPin {
        /// The source gate name.
        gate: String,
        /// The unrecognized pin name.
        pin: String,
    },

    /// A wire named a pin its destination gate does not expose.
    #[error("illegal input pin: {gate} {pin}")]
    IllegalInputPin {
        /// The destination gate name.
        gate: String,
        /// The unrecognized pin name.
        pin: String,
    },

    /// A second wire was bound to an input pin that already has one.
    #[error("multiple uses of input pin: {gate} {pin}")]
    InputPinInUse {
        /// The destination gate name.
        gate: String,
        /// The doubly-bound pin name.
        pin: String,
    },

    /// Sanity check: a required input pin was never bound.
    #[error("unused input pin: {gate} {pin}")]
    UnboundInputPin {
        /// The gate name.
        gate: String,
        /// The unbound pin name.
        pin: String,
    },

    /// A netlist line did not match any record shape.
    #[error("line {line}: {message}")]
    Malformed {
        /// 1-based line number in the netlist source.
        line: usize,
        /// What was expected.
        message: String,
    },
}

impl Diagnostic {
    /// Whether this diagnostic is the unbound-input-pin warning.
    ///
    /// All other diagnostics unconditionally withhold simulation; this one is
    /// subject to [`UnboundInputPolicy`].
    pub fn is_unbound_input(&self) -> bool {
        matches!(self, Diagnostic::UnboundInputPin { .. })
    }
}

/// Policy for gates whose required input pins were never wired.
///
/// Several revisions of this simulator's lineage disagree on whether an
/// unwired input is fatal or merely noisy, so the choice is explicit: under
/// `Permissive` the pin simply stays at its default false value and the
/// circuit still simulates; under `Strict` an unbound pin withholds
/// simulation like any other structural error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnboundInputPolicy {
    /// Report unbound pins but allow simulation (default).
    #[default]
    Permissive,
    /// Treat unbound pins as blocking errors.
    Strict,
}

/// Accumulator for construction diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "circuit diagnostic");
        self.entries.push(diagnostic);
    }

    /// All recorded diagnostics, in report order.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another collector's entries into this one.
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    /// Whether the recorded set withholds simulation under the given policy.
    pub fn blocks_simulation(&self, policy: UnboundInputPolicy) -> bool {
        match policy {
            UnboundInputPolicy::Strict => !self.entries.is_empty(),
            UnboundInputPolicy::Permissive => {
                self.entries.iter().any(|d| !d.is_unbound_input())
            }
        }
    }
}
