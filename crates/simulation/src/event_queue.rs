//! Time-ordered event queue with FIFO tie-breaking.

use crate::Event;
use std::collections::BTreeMap;
use std::time::Duration;

/// Ordering key for scheduled events.
///
/// Events are totally ordered by time, then by insertion sequence, so
/// extraction among equal times is first-scheduled-first-triggered. This
/// stability is what makes runs with identical input byte-for-byte
/// reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventKey {
    /// Simulated time at which the event fires.
    pub time: Duration,
    /// Insertion sequence number, unique per queue.
    pub seq: u64,
}

/// The pending-event set.
///
/// The only interface is insert and extract-minimum: no event can be
/// inspected, reordered, or withdrawn once scheduled. Growth is unbounded;
/// handlers typically schedule new events to sustain the simulation, and an
/// empty queue is the normal termination condition.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: BTreeMap<EventKey, Event>,
    next_seq: u64,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one pending event at the given simulated time.
    pub fn schedule(&mut self, time: Duration, event: Event) -> EventKey {
        let key = EventKey {
            time,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.events.insert(key, event);
        key
    }

    /// Extract the minimum-time pending event, or `None` at quiescence.
    pub fn pop(&mut self) -> Option<(EventKey, Event)> {
        self.events.pop_first()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatesim_types::GateId;

    fn marker(n: u32) -> Event {
        Event::OutputChange {
            gate: GateId(n),
            value: true,
        }
    }

    fn gate_of(event: &Event) -> u32 {
        match event {
            Event::OutputChange { gate, .. } => gate.0,
            Event::WireDelivery { .. } => panic!("not a marker event"),
        }
    }

    #[test]
    fn test_extraction_is_time_ordered() {
        let mut queue = EventQueue::new();
        queue.schedule(Duration::from_secs_f64(2.0), marker(2));
        queue.schedule(Duration::from_secs_f64(0.5), marker(0));
        queue.schedule(Duration::from_secs_f64(1.0), marker(1));

        let order: Vec<u32> = std::iter::from_fn(|| queue.pop())
            .map(|(_, e)| gate_of(&e))
            .collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_equal_times_extract_in_insertion_order() {
        let mut queue = EventQueue::new();
        let t = Duration::from_secs(1);
        for n in 0..10 {
            queue.schedule(t, marker(n));
        }

        let order: Vec<u32> = std::iter::from_fn(|| queue.pop())
            .map(|(_, e)| gate_of(&e))
            .collect();
        assert_eq!(order, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_interleaved_scheduling_keeps_total_order() {
        let mut queue = EventQueue::new();
        queue.schedule(Duration::from_secs(3), marker(3));
        queue.schedule(Duration::from_secs(1), marker(1));

        let (key, event) = queue.pop().unwrap();
        assert_eq!(key.time, Duration::from_secs(1));
        assert_eq!(gate_of(&event), 1);

        // an event scheduled mid-run still sorts by time
        queue.schedule(Duration::from_secs(2), marker(2));
        assert_eq!(gate_of(&queue.pop().unwrap().1), 2);
        assert_eq!(gate_of(&queue.pop().unwrap().1), 3);
        assert!(queue.is_empty());
    }
}
