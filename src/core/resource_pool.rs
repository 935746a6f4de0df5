//! Role pools and party formation.
//!
//! A party always draws exactly one tank, one healer and three damage dealers.
//! Counts only ever decrease, one party at a time, and never go negative.

use serde::{Deserialize, Serialize};

/// Damage dealers consumed by one party.
pub const DPS_PER_PARTY: u32 = 3;

/// Counts of queued players per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourcePool {
    /// Tanks waiting in the queue.
    pub tanks: u32,
    /// Healers waiting in the queue.
    pub healers: u32,
    /// Damage dealers waiting in the queue.
    pub dps: u32,
}

/// Outcome of assembling parties from a pool.
///
/// `parties == 0` is a normal outcome: there were not enough players to form
/// a full party and the run should end before any scheduling starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    /// Number of complete parties formed.
    pub parties: u32,
    /// Players left over after forming every possible party.
    pub leftover: ResourcePool,
}

impl Formation {
    /// True when not even one party could be formed.
    pub const fn is_insufficient(&self) -> bool {
        self.parties == 0
    }
}

impl ResourcePool {
    /// Create a pool from validated role counts.
    pub const fn new(tanks: u32, healers: u32, dps: u32) -> Self {
        Self { tanks, healers, dps }
    }

    /// Number of complete parties the pool can still form.
    pub fn capacity(&self) -> u32 {
        self.tanks.min(self.healers).min(self.dps / DPS_PER_PARTY)
    }

    /// Draw one party's worth of players. Returns false, leaving the pool
    /// untouched, if a full party cannot be supplied.
    pub fn take_party(&mut self) -> bool {
        let (Some(tanks), Some(healers), Some(dps)) = (
            self.tanks.checked_sub(1),
            self.healers.checked_sub(1),
            self.dps.checked_sub(DPS_PER_PARTY),
        ) else {
            return false;
        };
        self.tanks = tanks;
        self.healers = healers;
        self.dps = dps;
        true
    }

    /// Form every possible party, draining the pool down to its leftovers.
    pub fn form_all(&mut self) -> Formation {
        let parties = self.capacity();
        self.tanks -= parties;
        self.healers -= parties;
        self.dps -= parties * DPS_PER_PARTY;
        tracing::debug!(
            parties,
            tanks = self.tanks,
            healers = self.healers,
            dps = self.dps,
            "formed parties"
        );
        Formation {
            parties,
            leftover: *self,
        }
    }
}

/// Form as many parties as possible from raw role counts.
pub fn form_units(tanks: u32, healers: u32, dps: u32) -> Formation {
    ResourcePool::new(tanks, healers, dps).form_all()
}
