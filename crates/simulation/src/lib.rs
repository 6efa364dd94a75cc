//! Discrete-event simulation engine for gate circuits.
//!
//! Given a built [`Circuit`](gatesim_circuit::Circuit), the runner computes
//! every logic-value change that propagates through it, for all time, by
//! draining a time-ordered event queue. Given the same circuit and
//! configuration (including the jitter seed), it produces identical results
//! every run.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  SimulationRunner                       │
//! │                                                         │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Event Queue (BTreeMap<EventKey, Event>)        │ │
//! │  │     Ordered by: time, then insertion sequence      │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │ pop earliest                │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │   OutputChange ──▶ gate publishes or suppresses    │ │
//! │  │   WireDelivery ──▶ destination gate input change   │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │ schedule new events         │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │   gate delay  ──▶ OutputChange at t + delay        │ │
//! │  │   wire delay  ──▶ WireDelivery at t + delay        │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The mutual scheduling between gates and wires is the propagation chain:
//! a published output change becomes, after each outgoing wire's delay, an
//! input change at the wire's destination gate, which may in turn schedule a
//! new output change after that gate's own delay. Dispatch is strictly
//! single-threaded and synchronous; all effects of an event at time T are
//! applied before the next event is popped.

mod config;
mod event;
mod event_queue;
mod gates;
mod runner;

pub use config::SimulationConfig;
pub use event::{Event, Transition};
pub use event_queue::{EventKey, EventQueue};
pub use runner::{SimulationError, SimulationReport, SimulationRunner};
