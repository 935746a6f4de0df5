//! Time helpers.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Maps simulated seconds onto real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeScale {
    unit_ms: u64,
}

impl TimeScale {
    /// One simulated second lasts one real second.
    pub const REAL_TIME: Self = Self { unit_ms: 1000 };

    /// One simulated second lasts `unit_ms` real milliseconds (at least 1).
    pub const fn from_unit_ms(unit_ms: u64) -> Self {
        Self {
            unit_ms: if unit_ms == 0 { 1 } else { unit_ms },
        }
    }

    /// Real milliseconds per simulated second.
    pub const fn unit_ms(&self) -> u64 {
        self.unit_ms
    }

    /// Real duration of `secs` simulated seconds.
    pub const fn real(&self, secs: u64) -> Duration {
        Duration::from_millis(secs.saturating_mul(self.unit_ms))
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::REAL_TIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_scale() {
        assert_eq!(TimeScale::REAL_TIME.real(3), Duration::from_secs(3));
        assert_eq!(TimeScale::from_unit_ms(10).real(3), Duration::from_millis(30));
        assert_eq!(TimeScale::from_unit_ms(0).unit_ms(), 1);
    }
}
