//! Parties (work units) and their randomized clear times.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sequential party identifier, unique within a run and starting at 1.
pub type PartyId = u64;

/// A party assigned to a dungeon slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Party number.
    pub id: PartyId,
    /// Clear time in simulated seconds, drawn when the party enters a slot.
    pub duration_secs: u64,
}

/// Closed interval of possible clear times, in simulated seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRange {
    min: u64,
    max: u64,
}

impl DurationRange {
    /// Build a range; `None` if `max < min`.
    pub const fn new(min: u64, max: u64) -> Option<Self> {
        if max < min {
            None
        } else {
            Some(Self { min, max })
        }
    }

    /// Lower bound.
    pub const fn min(&self) -> u64 {
        self.min
    }

    /// Upper bound.
    pub const fn max(&self) -> u64 {
        self.max
    }

    /// Draw a clear time uniformly from `[min, max]`, inclusive on both ends.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if self.min == self.max {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }
}
