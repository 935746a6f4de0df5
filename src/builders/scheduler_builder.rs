//! Build a ready-to-run scheduler from a [`DungeonConfig`].

use crate::config::DungeonConfig;
use crate::core::{EventSink, Formation, Scheduler, SchedulerError};

/// Result of preparing a run.
pub enum Launch {
    /// At least one party was formed; the scheduler is ready to run.
    Ready {
        /// Parties formed and leftover players.
        formation: Formation,
        /// Scheduler loaded with the formed parties.
        scheduler: Scheduler,
    },
    /// Not even one full party could be formed. The run should end without
    /// scheduling anything.
    Insufficient(Formation),
}

/// Validate `cfg`, form parties from its role counts and build a scheduler.
///
/// Running short of players is reported as [`Launch::Insufficient`], not as
/// an error.
pub fn build_scheduler(
    cfg: &DungeonConfig,
    events: Option<Box<dyn EventSink>>,
) -> Result<Launch, SchedulerError> {
    cfg.validate().map_err(SchedulerError::InvalidConfig)?;
    let durations = cfg
        .durations()
        .ok_or_else(|| SchedulerError::InvalidConfig("dungeon time bounds inverted".into()))?;

    let formation = cfg.resource_pool().form_all();
    if formation.is_insufficient() {
        tracing::warn!(
            tanks = cfg.tanks,
            healers = cfg.healers,
            dps = cfg.dps,
            "not enough adventurers to form a full party"
        );
        return Ok(Launch::Insufficient(formation));
    }
    tracing::info!(parties = formation.parties, "adventuring parties assembled");

    let mut scheduler = Scheduler::new(
        cfg.instances,
        u64::from(formation.parties),
        durations,
        cfg.time_scale(),
    )?;
    if let Some(seed) = cfg.seed {
        scheduler = scheduler.with_seed(seed);
    }
    if let Some(sink) = events {
        scheduler = scheduler.with_events(sink);
    }
    Ok(Launch::Ready {
        formation,
        scheduler,
    })
}
