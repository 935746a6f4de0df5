//! Reporting surface: text renderings of configuration, slot snapshots and
//! run summaries.

pub mod report;

pub use report::{render_config, render_formation, render_status, render_summary};
