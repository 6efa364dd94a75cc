//! Core vocabulary for the gate-level simulator.
//!
//! This crate holds the leaf types shared by the circuit graph and the
//! simulation engine: gate kinds, pin names, and the index-based identifiers
//! used to address gates and wires inside a built circuit.

mod identifiers;
mod kind;
mod pins;

pub use identifiers::{GateId, WireId};
pub use kind::GateKind;
pub use pins::{InputPin, OutputPin};
