//! # Dungeon Queue
//!
//! A bounded dungeon-instance scheduler. A fixed number of instances drain a
//! queue of pre-assembled parties, each clearing its dungeon in a randomized
//! time, with live slot snapshots and end-of-run statistics.
//!
//! ## Pieces
//!
//! - **`ResourcePool`**: role counts; every party takes one tank, one healer
//!   and three DPS.
//! - **`SlotTable`**: the fixed set of instance slots plus the statistics
//!   their releases feed, behind `parking_lot` locks.
//! - **`Scheduler`**: fills free slots lowest index first, then drains,
//!   waking on runner completion rather than polling.
//! - **`WorkUnitRunner`**: one tokio task per occupied slot; waits out the
//!   clear time, then frees the slot and records the completion atomically.
//!
//! ```rust,ignore
//! use dungeon_queue::builders::{build_scheduler, Launch};
//! use dungeon_queue::config::DungeonConfig;
//!
//! let cfg = DungeonConfig {
//!     instances: 2,
//!     tanks: 3,
//!     healers: 3,
//!     dps: 9,
//!     min_dungeon_time: 1,
//!     max_dungeon_time: 1,
//!     ..DungeonConfig::default()
//! };
//! match build_scheduler(&cfg, None)? {
//!     Launch::Ready { scheduler, .. } => {
//!         let summary = scheduler.run().await?;
//!         assert_eq!(summary.total_parties_completed(), 3);
//!     }
//!     Launch::Insufficient(_) => unreachable!(),
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions and slot accounting.
pub mod core;
/// Configuration models for a run.
pub mod config;
/// Builders to construct a scheduler from configuration.
pub mod builders;
/// Status and summary rendering.
pub mod runtime;
/// Shared utilities.
pub mod util;
