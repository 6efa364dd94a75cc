//! Configuration for a simulation run.

/// Configuration for a [`SimulationRunner`](crate::SimulationRunner).
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Whether to jitter gate scheduling offsets by up to ±5%.
    ///
    /// Jitter spreads out spuriously simultaneous events in larger circuits.
    /// It perturbs only the scheduling offset of input-driven output changes,
    /// never a gate's stored nominal delay, never bootstrap events, and never
    /// wire delays, so it changes tie-breaking of near-simultaneous events
    /// but not the causal partial order.
    pub jitter: bool,

    /// Seed for the jitter generator. Same seed, same run.
    pub seed: u64,

    /// Optional cap on processed events.
    ///
    /// A feedback loop with zero total round-trip delay schedules events
    /// forever; the engine has no cycle detection, so this is the only guard.
    /// `None` (the default) runs to quiescence.
    pub max_events: Option<u64>,
}

impl SimulationConfig {
    /// Default configuration: no jitter, no event cap.
    pub fn new() -> Self {
        Self {
            jitter: false,
            seed: 12345,
            max_events: None,
        }
    }

    /// Enable delay jitter.
    pub fn with_jitter(mut self) -> Self {
        self.jitter = true;
        self
    }

    /// Set the jitter seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Cap the number of processed events.
    pub fn with_max_events(mut self, max_events: u64) -> Self {
        self.max_events = Some(max_events);
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
