//! Builders to construct a scheduler from configuration.

pub mod scheduler_builder;

pub use scheduler_builder::{build_scheduler, Launch};
