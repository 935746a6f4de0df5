//! Tests for error types

use dungeon_queue::core::SchedulerError;

#[test]
fn test_invalid_config_error() {
    let err = SchedulerError::InvalidConfig("instances must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: instances must be greater than 0"
    );
}

#[test]
fn test_slot_out_of_range_error() {
    let err = SchedulerError::SlotOutOfRange { index: 4, capacity: 2 };
    assert_eq!(format!("{}", err), "slot 4 out of range (capacity 2)");
}

#[test]
fn test_wrong_occupant_error() {
    let err = SchedulerError::WrongOccupant {
        index: 1,
        party: 3,
        occupant: 2,
    };
    assert_eq!(
        format!("{}", err),
        "party 3 cannot release slot 1 held by party 2"
    );
}

#[test]
fn test_undrained_error() {
    let err = SchedulerError::UndrainedSlots(2);
    assert_eq!(format!("{}", err), "run drained with 2 slots still occupied");
}
