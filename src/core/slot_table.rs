//! Fixed-size table of dungeon slots.
//!
//! Two `parking_lot::Mutex`es guard the table: one for slot states and one for
//! run statistics. Whenever both are needed they are taken in that order
//! (slots, then stats), so releasing a slot and recording its completion is a
//! single atomic step as seen by any other reader.

use std::time::Instant;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::{Party, PartyId, RunStatistics, SchedulerError};

/// State of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// No party inside.
    Empty,
    /// A party is clearing the dungeon.
    Occupied {
        /// Party inside the slot.
        party: PartyId,
        /// Clear time drawn on entry, in simulated seconds.
        duration_secs: u64,
        /// When the party entered.
        entered_at: Instant,
    },
}

/// Coarse slot status for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// Slot is free.
    Empty,
    /// Slot holds a party.
    Active,
}

/// Point-in-time copy of a slot, safe to hand to reporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    /// Slot index, starting at 0.
    pub index: usize,
    /// Coarse status.
    pub status: SlotStatus,
    /// Party inside, if any.
    pub occupant: Option<PartyId>,
    /// Clear time drawn for the occupant, in simulated seconds.
    pub eta_secs: Option<u64>,
    /// Real milliseconds since the occupant entered.
    pub elapsed_ms: Option<u128>,
}

/// A party placed into a slot by [`SlotTable::claim_free_slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    /// Slot the party entered.
    pub slot: usize,
    /// The party, with its drawn duration.
    pub party: Party,
}

struct Slots {
    entries: Vec<Slot>,
    occupied: usize,
    peak: usize,
}

impl Slots {
    fn lowest_free(&self) -> Option<usize> {
        self.entries.iter().position(|s| matches!(s, Slot::Empty))
    }

    fn occupy(&mut self, index: usize, party: PartyId, duration_secs: u64) -> Result<(), SchedulerError> {
        let capacity = self.entries.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(SchedulerError::SlotOutOfRange { index, capacity })?;
        if let Slot::Occupied { party: occupant, .. } = *slot {
            return Err(SchedulerError::SlotOccupied { index, occupant });
        }
        *slot = Slot::Occupied {
            party,
            duration_secs,
            entered_at: Instant::now(),
        };
        self.occupied += 1;
        self.peak = self.peak.max(self.occupied);
        Ok(())
    }
}

/// Dungeon slots plus the statistics their releases feed.
pub struct SlotTable {
    slots: Mutex<Slots>,
    stats: Mutex<RunStatistics>,
}

impl SlotTable {
    /// Create a table with `capacity` empty slots. Capacity is fixed for the
    /// lifetime of the table.
    pub fn new(capacity: usize) -> Result<Self, SchedulerError> {
        if capacity == 0 {
            return Err(SchedulerError::InvalidConfig(
                "slot table needs at least one slot".into(),
            ));
        }
        Ok(Self {
            slots: Mutex::new(Slots {
                entries: vec![Slot::Empty; capacity],
                occupied: 0,
                peak: 0,
            }),
            stats: Mutex::new(RunStatistics::new(capacity)),
        })
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.lock().entries.len()
    }

    /// Lowest-index free slot at this instant. Only a hint: use
    /// [`claim_free_slot`](Self::claim_free_slot) to actually take one.
    pub fn find_free_slot(&self) -> Option<usize> {
        self.slots.lock().lowest_free()
    }

    /// Atomically find the lowest-index free slot and place `party` in it.
    ///
    /// `draw` is called under the table lock, only once a slot has been
    /// found, to pick the party's duration. `Ok(None)` means every slot is
    /// busy; an `Err` is an invariant violation and must not be retried.
    pub fn claim_free_slot<F>(&self, party: PartyId, draw: F) -> Result<Option<Assignment>, SchedulerError>
    where
        F: FnOnce() -> u64,
    {
        let mut slots = self.slots.lock();
        let Some(index) = slots.lowest_free() else {
            return Ok(None);
        };
        let duration_secs = draw();
        slots.occupy(index, party, duration_secs)?;
        Ok(Some(Assignment {
            slot: index,
            party: Party {
                id: party,
                duration_secs,
            },
        }))
    }

    /// Place `party` into a specific slot. Fails if the slot is occupied.
    pub fn occupy(&self, index: usize, party: PartyId, duration_secs: u64) -> Result<(), SchedulerError> {
        self.slots.lock().occupy(index, party, duration_secs)
    }

    /// Empty a slot and record its party's completion.
    pub fn release(&self, index: usize) -> Result<Party, SchedulerError> {
        self.release_checked(index, None)
    }

    /// Like [`release`](Self::release), but also fails if the slot is held by
    /// a party other than `party`.
    pub fn finish(&self, index: usize, party: PartyId) -> Result<Party, SchedulerError> {
        self.release_checked(index, Some(party))
    }

    fn release_checked(&self, index: usize, expected: Option<PartyId>) -> Result<Party, SchedulerError> {
        let mut slots = self.slots.lock();
        let capacity = slots.entries.len();
        let slot = slots
            .entries
            .get_mut(index)
            .ok_or(SchedulerError::SlotOutOfRange { index, capacity })?;
        let Slot::Occupied {
            party: occupant,
            duration_secs,
            ..
        } = *slot
        else {
            return Err(SchedulerError::SlotEmpty(index));
        };
        if let Some(party) = expected.filter(|p| *p != occupant) {
            return Err(SchedulerError::WrongOccupant {
                index,
                party,
                occupant,
            });
        }
        *slot = Slot::Empty;
        slots.occupied -= 1;
        self.stats.lock().record(index, duration_secs);
        drop(slots);

        Ok(Party {
            id: occupant,
            duration_secs,
        })
    }

    /// Number of occupied slots.
    pub fn count_occupied(&self) -> usize {
        self.slots.lock().occupied
    }

    /// Highest number of slots occupied at once so far.
    pub fn peak_occupied(&self) -> usize {
        self.slots.lock().peak
    }

    /// Copy of every slot, in index order.
    pub fn snapshot(&self) -> Vec<SlotView> {
        let slots = self.slots.lock();
        slots
            .entries
            .iter()
            .enumerate()
            .map(|(index, slot)| match *slot {
                Slot::Empty => SlotView {
                    index,
                    status: SlotStatus::Empty,
                    occupant: None,
                    eta_secs: None,
                    elapsed_ms: None,
                },
                Slot::Occupied {
                    party,
                    duration_secs,
                    entered_at,
                } => SlotView {
                    index,
                    status: SlotStatus::Active,
                    occupant: Some(party),
                    eta_secs: Some(duration_secs),
                    elapsed_ms: Some(entered_at.elapsed().as_millis()),
                },
            })
            .collect()
    }

    /// Consistent copy of the statistics. Taken under the slot lock too, so
    /// it never observes a release halfway through.
    pub fn statistics(&self) -> RunStatistics {
        let _slots = self.slots.lock();
        self.stats.lock().clone()
    }
}
