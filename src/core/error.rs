//! Error types for scheduler operations.

use thiserror::Error;

use crate::core::PartyId;

/// Errors produced by scheduler components.
///
/// Apart from [`SchedulerError::InvalidConfig`], every variant is an invariant
/// violation: it points at a synchronization or logic defect and must never be
/// retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Slot index is outside the table.
    #[error("slot {index} out of range (capacity {capacity})")]
    SlotOutOfRange {
        /// Requested slot index.
        index: usize,
        /// Fixed table capacity.
        capacity: usize,
    },
    /// Attempted to occupy a slot that already holds a party.
    #[error("slot {index} already occupied by party {occupant}")]
    SlotOccupied {
        /// Slot index.
        index: usize,
        /// Party currently in the slot.
        occupant: PartyId,
    },
    /// Attempted to release a slot that holds no party.
    #[error("slot {0} is already empty")]
    SlotEmpty(usize),
    /// A party tried to release a slot held by a different party.
    #[error("party {party} cannot release slot {index} held by party {occupant}")]
    WrongOccupant {
        /// Slot index.
        index: usize,
        /// Party attempting the release.
        party: PartyId,
        /// Party actually in the slot.
        occupant: PartyId,
    },
    /// A runner task panicked or was aborted.
    #[error("runner task failed: {0}")]
    RunnerFailed(String),
    /// The run drained but slots were still occupied.
    #[error("run drained with {0} slots still occupied")]
    UndrainedSlots(usize),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_messages() {
        let err = SchedulerError::SlotOccupied { index: 2, occupant: 7 };
        assert_eq!(err.to_string(), "slot 2 already occupied by party 7");
        assert_eq!(SchedulerError::SlotEmpty(0).to_string(), "slot 0 is already empty");
    }
}
