//! Tests for status and summary rendering

use dungeon_queue::config::DungeonConfig;
use dungeon_queue::core::{
    form_units, RunStatistics, RunSummary, SlotStats, SlotStatus, SlotView,
};
use dungeon_queue::runtime::{render_config, render_formation, render_status, render_summary};

#[test]
fn test_render_status_board() {
    let slots = vec![
        SlotView {
            index: 0,
            status: SlotStatus::Active,
            occupant: Some(3),
            eta_secs: Some(4),
            elapsed_ms: Some(10),
        },
        SlotView {
            index: 1,
            status: SlotStatus::Empty,
            occupant: None,
            eta_secs: None,
            elapsed_ms: None,
        },
    ];
    let board = render_status(&slots);
    assert!(board.contains("[Instance 1] Party 3 - Estimated completion: 4 sec"));
    assert!(board.contains("[Instance 2] [EMPTY]"));
}

#[test]
fn test_render_summary() {
    let summary = RunSummary {
        instances: 2,
        parties_formed: 3,
        parties_not_started: 0,
        peak_occupied: 2,
        wall_time_ms: 40,
        stats: RunStatistics {
            total_parties_completed: 3,
            total_time_served: 7,
            per_slot: vec![
                SlotStats {
                    parties_served: 2,
                    time_served: 5,
                },
                SlotStats {
                    parties_served: 1,
                    time_served: 2,
                },
            ],
        },
    };
    let text = render_summary(&summary);
    assert!(text.contains("[Instance 1] Parties served: 2 | Time served: 5 sec"));
    assert!(text.contains("Total parties served: 3"));
    assert!(text.contains("Total time served: 7 sec"));
    assert!(!text.contains("never deployed"));

    let json = summary.to_json().unwrap();
    let back: RunSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}

#[test]
fn test_render_config_and_formation() {
    let cfg = DungeonConfig {
        instances: 2,
        tanks: 3,
        healers: 3,
        dps: 9,
        min_dungeon_time: 1,
        max_dungeon_time: 4,
        ..DungeonConfig::default()
    };
    let banner = render_config(&cfg);
    assert!(banner.contains("Dungeon Instances Online: 2"));
    assert!(banner.contains("Clear Time: 1 seconds - 4 seconds"));

    assert!(render_formation(&form_units(3, 3, 9)).starts_with("3 adventuring parties"));
    assert!(render_formation(&form_units(0, 3, 9)).contains("not enough adventurers"));
}
