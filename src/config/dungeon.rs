//! Dungeon run configuration.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{DurationRange, ResourcePool};
use crate::util::clock::TimeScale;

const fn default_time_unit_ms() -> u64 {
    1000
}

/// Validated inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Dungeon instances that may run at the same time.
    pub instances: usize,
    /// Tanks waiting in the queue.
    pub tanks: u32,
    /// Healers waiting in the queue.
    pub healers: u32,
    /// Damage dealers waiting in the queue.
    pub dps: u32,
    /// Fastest possible clear time, in seconds.
    pub min_dungeon_time: u64,
    /// Slowest possible clear time, in seconds.
    pub max_dungeon_time: u64,
    /// Real milliseconds per simulated second.
    #[serde(default = "default_time_unit_ms")]
    pub time_unit_ms: u64,
    /// Optional RNG seed for reproducible clear times.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            instances: 1,
            tanks: 0,
            healers: 0,
            dps: 0,
            min_dungeon_time: 1,
            max_dungeon_time: 1,
            time_unit_ms: default_time_unit_ms(),
            seed: None,
        }
    }
}

impl DungeonConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.instances == 0 {
            return Err("instances must be greater than 0".into());
        }
        if self.max_dungeon_time < self.min_dungeon_time {
            return Err(format!(
                "max_dungeon_time ({}) must be at least min_dungeon_time ({})",
                self.max_dungeon_time, self.min_dungeon_time
            ));
        }
        if self.time_unit_ms == 0 {
            return Err("time_unit_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read configuration from `DUNGEON_*` environment variables, loading a
    /// `.env` file first if one exists. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();
        let cfg = Self {
            instances: env_or("DUNGEON_INSTANCES", defaults.instances)?,
            tanks: env_or("DUNGEON_TANKS", defaults.tanks)?,
            healers: env_or("DUNGEON_HEALERS", defaults.healers)?,
            dps: env_or("DUNGEON_DPS", defaults.dps)?,
            min_dungeon_time: env_or("DUNGEON_MIN_TIME", defaults.min_dungeon_time)?,
            max_dungeon_time: env_or("DUNGEON_MAX_TIME", defaults.max_dungeon_time)?,
            time_unit_ms: env_or("DUNGEON_TIME_UNIT_MS", defaults.time_unit_ms)?,
            seed: env_opt("DUNGEON_SEED")?,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Role counts as a pool.
    pub const fn resource_pool(&self) -> ResourcePool {
        ResourcePool::new(self.tanks, self.healers, self.dps)
    }

    /// Clear-time interval; `None` if the bounds are inverted.
    pub const fn durations(&self) -> Option<DurationRange> {
        DurationRange::new(self.min_dungeon_time, self.max_dungeon_time)
    }

    /// Real-time mapping for simulated seconds.
    pub const fn time_scale(&self) -> TimeScale {
        TimeScale::from_unit_ms(self.time_unit_ms)
    }
}

fn env_opt<T: FromStr>(key: &str) -> Result<Option<T>, String>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("{key}: invalid value `{raw}`: {e}")),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(format!("{key}: {e}")),
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    Ok(env_opt(key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DungeonConfig::default().validate().is_ok());
    }

    #[test]
    fn test_accessors() {
        let cfg = DungeonConfig {
            tanks: 2,
            healers: 3,
            dps: 9,
            min_dungeon_time: 2,
            max_dungeon_time: 5,
            time_unit_ms: 10,
            ..DungeonConfig::default()
        };
        assert_eq!(cfg.resource_pool().capacity(), 2);
        assert_eq!(cfg.durations().map(|d| (d.min(), d.max())), Some((2, 5)));
        assert_eq!(cfg.time_scale().unit_ms(), 10);
    }
}
