//! Circuit graph construction and the netlist text format.
//!
//! A circuit is described by line-oriented declarations:
//!
//! ```text
//! gate <name> <and|or|not|const> <delay>
//! wire <srcGate> <srcPin> <dstGate> <dstPin> <delay>
//! -- comment
//! ```
//!
//! [`CircuitBuilder`] accumulates gates and wires, recording every structural
//! problem in a [`Diagnostics`] collector rather than failing fast, so one
//! pass over a bad file surfaces as many errors as possible. A wire is only
//! materialized when all of its checks pass, so the finished [`Circuit`] never
//! contains a half-built connection. The simulation layer consumes the
//! finished circuit read-only.

mod diagnostics;
mod graph;
mod netlist;

pub use diagnostics::{Diagnostic, Diagnostics, UnboundInputPolicy};
pub use graph::{Circuit, CircuitBuilder, Gate, Wire};
pub use netlist::parse_netlist;
