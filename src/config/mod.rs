//! Configuration loading and management for the attendance compliance engine.
//!
//! This module loads the working-time policy (standard start, overtime
//! thresholds, vendor break adjustments) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.organization().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BreakPolicy, ComplianceConfig, NightWorkPolicy, OrganizationMetadata, OvertimePolicy,
    RemarksPolicy, SchedulePolicy, WorkPolicy,
};
