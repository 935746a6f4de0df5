//! Tests for building a scheduler from configuration

use dungeon_queue::builders::{build_scheduler, Launch};
use dungeon_queue::config::DungeonConfig;
use dungeon_queue::core::{InMemoryEventSink, SchedulerError};

fn cfg() -> DungeonConfig {
    DungeonConfig {
        instances: 2,
        tanks: 4,
        healers: 5,
        dps: 13,
        min_dungeon_time: 1,
        max_dungeon_time: 2,
        time_unit_ms: 1,
        seed: Some(3),
    }
}

#[test]
fn test_build_ready() {
    match build_scheduler(&cfg(), Some(Box::new(InMemoryEventSink::new(16)))).unwrap() {
        Launch::Ready {
            formation,
            scheduler,
        } => {
            assert_eq!(formation.parties, 4);
            assert_eq!(formation.leftover.healers, 1);
            assert_eq!(formation.leftover.dps, 1);
            assert_eq!(scheduler.remaining(), 4);
            assert_eq!(scheduler.table().capacity(), 2);
        }
        Launch::Insufficient(_) => panic!("four parties should form"),
    }
}

#[test]
fn test_build_insufficient() {
    let short = DungeonConfig { dps: 2, ..cfg() };
    match build_scheduler(&short, None).unwrap() {
        Launch::Insufficient(formation) => {
            assert!(formation.is_insufficient());
            assert_eq!(formation.leftover.tanks, 4);
        }
        Launch::Ready { .. } => panic!("no party should form"),
    }
}

#[test]
fn test_build_rejects_invalid_config() {
    let invalid = DungeonConfig { instances: 0, ..cfg() };
    assert!(matches!(
        build_scheduler(&invalid, None),
        Err(SchedulerError::InvalidConfig(_))
    ));
}
