//! Configuration types for attendance analysis.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every policy section has
//! a `Default` matching the timekeeping vendor's out-of-the-box behaviour, so
//! a partially filled file only overrides what it names.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Metadata about the organization the policy applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationMetadata {
    /// Short organization code.
    pub code: String,
    /// Human-readable organization name.
    pub name: String,
    /// Version or effective date of the policy.
    pub version: String,
}

impl Default for OrganizationMetadata {
    fn default() -> Self {
        Self {
            code: "default".to_string(),
            name: "Default attendance policy".to_string(),
            version: "builtin".to_string(),
        }
    }
}

/// Scheduled start fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulePolicy {
    /// Start time assumed when no schedule can be resolved from the record.
    pub standard_start: NaiveTime,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            standard_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// Daily overtime thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimePolicy {
    /// Contracted working day (7h45m).
    pub contracted_day_minutes: u32,
    /// Statutory working day (8h).
    pub statutory_day_minutes: u32,
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            contracted_day_minutes: 465,
            statutory_day_minutes: 480,
        }
    }
}

/// Vendor-specific break recording adjustments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakPolicy {
    /// Break the system auto-inserts on half-day leave; at or below this it
    /// is not a real meal break.
    pub half_day_auto_break_minutes: u32,
    /// Auto-rounded breaks above this value are capped for comparison.
    pub auto_break_cap_minutes: u32,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            half_day_auto_break_minutes: 15,
            auto_break_cap_minutes: 60,
        }
    }
}

/// Night-work break check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightWorkPolicy {
    /// Night-work minutes from which the night break check applies.
    pub min_night_work_minutes: u32,
}

impl Default for NightWorkPolicy {
    fn default() -> Self {
        Self {
            min_night_work_minutes: 30,
        }
    }
}

/// Remarks format rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemarksPolicy {
    /// Minimum number of characters for a remark to be accepted.
    pub min_length: usize,
}

impl Default for RemarksPolicy {
    fn default() -> Self {
        Self { min_length: 5 }
    }
}

/// All tunable constants used by the analysis functions.
///
/// # Example
///
/// ```
/// use attendance_engine::config::WorkPolicy;
///
/// let policy = WorkPolicy::default();
/// assert_eq!(policy.overtime.contracted_day_minutes, 465);
/// assert_eq!(policy.breaks.half_day_auto_break_minutes, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkPolicy {
    /// Scheduled start fallback.
    pub schedule: SchedulePolicy,
    /// Daily overtime thresholds.
    pub overtime: OvertimePolicy,
    /// Break recording adjustments.
    pub breaks: BreakPolicy,
    /// Night-work break check.
    pub night_work: NightWorkPolicy,
    /// Remarks format rules.
    pub remarks: RemarksPolicy,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone, Default)]
pub struct ComplianceConfig {
    /// Organization metadata.
    metadata: OrganizationMetadata,
    /// Working-time policy.
    policy: WorkPolicy,
}

impl ComplianceConfig {
    /// Creates a new ComplianceConfig from its component parts.
    pub fn new(metadata: OrganizationMetadata, policy: WorkPolicy) -> Self {
        Self { metadata, policy }
    }

    /// Returns the organization metadata.
    pub fn organization(&self) -> &OrganizationMetadata {
        &self.metadata
    }

    /// Returns the working-time policy.
    pub fn policy(&self) -> &WorkPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_values() {
        let policy = WorkPolicy::default();

        assert_eq!(
            policy.schedule.standard_start,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(policy.overtime.contracted_day_minutes, 465);
        assert_eq!(policy.overtime.statutory_day_minutes, 480);
        assert_eq!(policy.breaks.half_day_auto_break_minutes, 15);
        assert_eq!(policy.breaks.auto_break_cap_minutes, 60);
        assert_eq!(policy.night_work.min_night_work_minutes, 30);
        assert_eq!(policy.remarks.min_length, 5);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "breaks:\n  half_day_auto_break_minutes: 10\n";
        let policy: WorkPolicy = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(policy.breaks.half_day_auto_break_minutes, 10);
        assert_eq!(policy.breaks.auto_break_cap_minutes, 60);
        assert_eq!(policy.overtime, OvertimePolicy::default());
    }

    #[test]
    fn test_standard_start_parses_from_yaml() {
        let yaml = "schedule:\n  standard_start: \"08:30:00\"\n";
        let policy: WorkPolicy = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            policy.schedule.standard_start,
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
    }
}
