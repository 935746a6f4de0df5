//! Tests for configuration validation

use dungeon_queue::config::DungeonConfig;

fn valid() -> DungeonConfig {
    DungeonConfig {
        instances: 2,
        tanks: 3,
        healers: 3,
        dps: 9,
        min_dungeon_time: 1,
        max_dungeon_time: 5,
        time_unit_ms: 1000,
        seed: None,
    }
}

#[test]
fn test_config_validation() {
    assert!(valid().validate().is_ok());
}

#[test]
fn test_config_invalid_instances() {
    let invalid = DungeonConfig {
        instances: 0,
        ..valid()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_inverted_times() {
    let invalid = DungeonConfig {
        min_dungeon_time: 6,
        max_dungeon_time: 5,
        ..valid()
    };
    let err = invalid.validate().unwrap_err();
    assert!(err.contains("max_dungeon_time"));
}

#[test]
fn test_config_equal_times_allowed() {
    let cfg = DungeonConfig {
        min_dungeon_time: 0,
        max_dungeon_time: 0,
        ..valid()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_zero_roles_are_valid() {
    // Running short of players is decided at formation time, not here.
    let cfg = DungeonConfig {
        tanks: 0,
        healers: 0,
        dps: 0,
        ..valid()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_invalid_time_unit() {
    let invalid = DungeonConfig {
        time_unit_ms: 0,
        ..valid()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "instances": 2,
        "tanks": 3,
        "healers": 3,
        "dps": 9,
        "min_dungeon_time": 1,
        "max_dungeon_time": 1
    }"#;

    let config = DungeonConfig::from_json_str(json).unwrap();
    assert_eq!(config.instances, 2);
    assert_eq!(config.time_unit_ms, 1000);
    assert_eq!(config.seed, None);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    let json = r#"{
        "instances": 2, "tanks": 1, "healers": 1, "dps": 3,
        "min_dungeon_time": 9, "max_dungeon_time": 1
    }"#;
    assert!(DungeonConfig::from_json_str(json).is_err());
    assert!(DungeonConfig::from_json_str("{").unwrap_err().starts_with("parse error"));
}
