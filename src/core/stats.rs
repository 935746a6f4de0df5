//! Run statistics.
//!
//! Counters are only mutated by [`SlotTable::release`](crate::core::SlotTable::release),
//! inside the same critical section that frees the slot.

use serde::{Deserialize, Serialize};

/// Per-slot completion counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotStats {
    /// Parties this slot has served.
    pub parties_served: u64,
    /// Simulated seconds this slot has been occupied.
    pub time_served: u64,
}

/// Aggregate counters for a run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Parties that cleared their dungeon.
    pub total_parties_completed: u64,
    /// Sum of every cleared party's duration, in simulated seconds.
    pub total_time_served: u64,
    /// Breakdown indexed by slot.
    pub per_slot: Vec<SlotStats>,
}

impl RunStatistics {
    /// Zeroed counters for `slots` slots.
    pub fn new(slots: usize) -> Self {
        Self {
            total_parties_completed: 0,
            total_time_served: 0,
            per_slot: vec![SlotStats::default(); slots],
        }
    }

    pub(crate) fn record(&mut self, slot: usize, duration_secs: u64) {
        self.total_parties_completed += 1;
        self.total_time_served += duration_secs;
        let entry = &mut self.per_slot[slot];
        entry.parties_served += 1;
        entry.time_served += duration_secs;
    }
}

/// End-of-run summary handed to reporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of dungeon slots.
    pub instances: usize,
    /// Parties formed before the run started.
    pub parties_formed: u64,
    /// Parties that never entered a slot because the run was stopped.
    pub parties_not_started: u64,
    /// Highest number of slots occupied at once.
    pub peak_occupied: usize,
    /// Real time the run took, in milliseconds.
    pub wall_time_ms: u128,
    /// Completion counters.
    pub stats: RunStatistics,
}

impl RunSummary {
    /// Parties that cleared their dungeon.
    pub const fn total_parties_completed(&self) -> u64 {
        self.stats.total_parties_completed
    }

    /// Total simulated seconds served across all slots.
    pub const fn total_time_served(&self) -> u64 {
        self.stats.total_time_served
    }

    /// Render as JSON for machine consumers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_updates_totals_and_slot() {
        let mut stats = RunStatistics::new(2);
        stats.record(1, 4);
        stats.record(1, 2);
        stats.record(0, 3);
        assert_eq!(stats.total_parties_completed, 3);
        assert_eq!(stats.total_time_served, 9);
        assert_eq!(stats.per_slot[0], SlotStats { parties_served: 1, time_served: 3 });
        assert_eq!(stats.per_slot[1], SlotStats { parties_served: 2, time_served: 6 });
    }
}
