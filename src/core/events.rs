//! Run event log.
//!
//! Every party entering or clearing a dungeon produces a [`DungeonEvent`].
//! Sinks are optional; the scheduler logs the same events through `tracing`
//! whether or not one is attached.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::PartyId;
use crate::util::clock::now_ms;

/// What happened to a party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Party entered a slot.
    Entered,
    /// Party cleared its dungeon and left the slot.
    Cleared,
}

/// One entry in the run log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonEvent {
    /// Event kind.
    pub kind: EventKind,
    /// Party involved.
    pub party: PartyId,
    /// Slot involved.
    pub slot: usize,
    /// Party clear time in simulated seconds.
    pub duration_secs: u64,
    /// Wall-clock timestamp, milliseconds since epoch.
    pub at_ms: u128,
}

impl DungeonEvent {
    /// Build an event stamped with the current time.
    pub fn new(kind: EventKind, party: PartyId, slot: usize, duration_secs: u64) -> Self {
        Self {
            kind,
            party,
            slot,
            duration_secs,
            at_ms: now_ms(),
        }
    }
}

/// Destination for run events.
pub trait EventSink: Send {
    /// Record an event.
    fn record(&mut self, event: DungeonEvent);
}

/// Bounded in-memory sink; the oldest events are dropped first.
pub struct InMemoryEventSink {
    events: VecDeque<DungeonEvent>,
    max_events: usize,
}

impl InMemoryEventSink {
    /// Create a sink holding at most `max_events` events.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Snapshot of stored events, oldest first.
    pub fn events(&self) -> Vec<DungeonEvent> {
        self.events.iter().cloned().collect()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&mut self, event: DungeonEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Sink writing one JSON line per event to stdout.
pub struct JsonLinesSink;

impl EventSink for JsonLinesSink {
    fn record(&mut self, event: DungeonEvent) {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!("failed to encode event: {}", e),
        }
    }
}
