//! Executes one party's dungeon run.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{Assignment, DungeonEvent, EventKind, EventSink, Party, SchedulerError, SlotTable};
use crate::util::clock::TimeScale;

/// Event sink shared between the scheduler and its runners.
pub type SharedEventSink = Arc<Mutex<Box<dyn EventSink>>>;

/// Runs an assigned party to completion and frees its slot.
#[derive(Clone)]
pub struct WorkUnitRunner {
    table: Arc<SlotTable>,
    time_scale: TimeScale,
    events: Option<SharedEventSink>,
}

impl WorkUnitRunner {
    /// Create a runner over `table`.
    pub fn new(table: Arc<SlotTable>, time_scale: TimeScale, events: Option<SharedEventSink>) -> Self {
        Self {
            table,
            time_scale,
            events,
        }
    }

    /// Real-time mapping used for clear times.
    pub const fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    /// Wait out the party's clear time, then release its slot and record the
    /// completion in one step.
    ///
    /// The wait cannot fail. An error here means the slot table was
    /// corrupted and is returned as-is for the scheduler to surface.
    pub async fn run(&self, assignment: Assignment) -> Result<Party, SchedulerError> {
        let Assignment { slot, party } = assignment;
        tracing::debug!(party = party.id, slot, "party running");

        tokio::time::sleep(self.time_scale.real(party.duration_secs)).await;

        let party = self.table.finish(slot, party.id).map_err(|e| {
            tracing::error!(party = party.id, slot, "failed to release slot: {}", e);
            e
        })?;

        tracing::info!(
            party = party.id,
            instance = slot + 1,
            duration_secs = party.duration_secs,
            "party has conquered the dungeon"
        );
        if let Some(sink) = &self.events {
            sink.lock()
                .record(DungeonEvent::new(EventKind::Cleared, party.id, slot, party.duration_secs));
        }
        Ok(party)
    }
}
