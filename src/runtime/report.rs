//! Plain-text status board.

use std::fmt::Write;

use crate::config::DungeonConfig;
use crate::core::{Formation, RunSummary, SlotView};

const RULE: &str = "-------------------------------------------";

/// Configuration banner shown before a run.
pub fn render_config(cfg: &DungeonConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "====== Dungeon Configuration ======");
    let _ = writeln!(out, "Dungeon Instances Online: {}", cfg.instances);
    let _ = writeln!(out, "Tanks in Queue: {}", cfg.tanks);
    let _ = writeln!(out, "Healers in Queue: {}", cfg.healers);
    let _ = writeln!(out, "DPS in Queue: {}", cfg.dps);
    let _ = writeln!(
        out,
        "Clear Time: {} seconds - {} seconds",
        cfg.min_dungeon_time, cfg.max_dungeon_time
    );
    let _ = writeln!(out, "===================================");
    out
}

/// One-line outcome of party formation.
pub fn render_formation(formation: &Formation) -> String {
    if formation.is_insufficient() {
        "The heroes wait... but there are not enough adventurers to form a full party.".into()
    } else {
        format!(
            "{} adventuring parties have been assembled (leftover: {} tanks, {} healers, {} DPS).",
            formation.parties,
            formation.leftover.tanks,
            formation.leftover.healers,
            formation.leftover.dps
        )
    }
}

/// Board of every slot. Instances are numbered from 1.
pub fn render_status(slots: &[SlotView]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "       ACTIVE DUNGEON INSTANCES");
    let _ = writeln!(out, "{RULE}");
    for slot in slots {
        match (slot.occupant, slot.eta_secs) {
            (Some(party), Some(eta)) => {
                let _ = writeln!(
                    out,
                    "[Instance {}] Party {} - Estimated completion: {} sec",
                    slot.index + 1,
                    party,
                    eta
                );
            }
            _ => {
                let _ = writeln!(out, "[Instance {}] [EMPTY]", slot.index + 1);
            }
        }
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// Final summary with per-instance breakdown.
pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "              FINAL SUMMARY");
    let _ = writeln!(out, "{RULE}");
    for (index, slot) in summary.stats.per_slot.iter().enumerate() {
        let _ = writeln!(
            out,
            "[Instance {}] Parties served: {} | Time served: {} sec",
            index + 1,
            slot.parties_served,
            slot.time_served
        );
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Total parties served: {}",
        summary.total_parties_completed()
    );
    let _ = writeln!(out, "Total time served: {} sec", summary.total_time_served());
    if summary.parties_not_started > 0 {
        let _ = writeln!(out, "Parties never deployed: {}", summary.parties_not_started);
    }
    out
}
