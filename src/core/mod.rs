//! Core scheduling: party formation, slot table, runners and the control loop.

pub mod error;
pub mod events;
pub mod party;
pub mod resource_pool;
pub mod runner;
pub mod scheduler;
pub mod slot_table;
pub mod stats;

pub use error::{AppResult, SchedulerError};
pub use events::{DungeonEvent, EventKind, EventSink, InMemoryEventSink, JsonLinesSink};
pub use party::{DurationRange, Party, PartyId};
pub use resource_pool::{form_units, Formation, ResourcePool, DPS_PER_PARTY};
pub use runner::{SharedEventSink, WorkUnitRunner};
pub use scheduler::{Phase, Scheduler, ShutdownHandle};
pub use slot_table::{Assignment, Slot, SlotStatus, SlotTable, SlotView};
pub use stats::{RunStatistics, RunSummary, SlotStats};
