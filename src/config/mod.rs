//! Configuration models for a dungeon run.

pub mod dungeon;

pub use dungeon::DungeonConfig;
