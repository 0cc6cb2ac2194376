//! Overtime alert models for the 36-agreement ladder.

use serde::{Deserialize, Serialize};

use super::EmployeeIdentity;

/// Ordered severity of a monthly overtime total.
///
/// Ordering follows severity, so `Normal < Warning < ... < Illegal`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::OvertimeAlertLevel;
///
/// assert!(OvertimeAlertLevel::Exceeded > OvertimeAlertLevel::Warning);
/// assert_eq!(OvertimeAlertLevel::Critical.to_string(), "critical");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeAlertLevel {
    /// Below 35 hours.
    #[default]
    Normal,
    /// 35 hours or more.
    Warning,
    /// 45 hours or more, past the standard monthly limit.
    Exceeded,
    /// 55 hours or more.
    Caution,
    /// 65 hours or more.
    Serious,
    /// 70 hours or more.
    Severe,
    /// 80 hours or more, the medical-guidance line.
    Critical,
    /// 100 hours or more, the absolute monthly cap.
    Illegal,
}

impl std::fmt::Display for OvertimeAlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OvertimeAlertLevel::Normal => "normal",
            OvertimeAlertLevel::Warning => "warning",
            OvertimeAlertLevel::Exceeded => "exceeded",
            OvertimeAlertLevel::Caution => "caution",
            OvertimeAlertLevel::Serious => "serious",
            OvertimeAlertLevel::Severe => "severe",
            OvertimeAlertLevel::Critical => "critical",
            OvertimeAlertLevel::Illegal => "illegal",
        };
        f.write_str(label)
    }
}

/// Combined overtime verdicts for one monthly total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeAssessment {
    /// Employee the assessment belongs to, when produced by aggregation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeIdentity>,
    /// Monthly overtime minutes assessed.
    pub monthly_overtime_minutes: u32,
    /// Position on the alert ladder.
    pub level: OvertimeAlertLevel,
    /// Whether the month is on pace to pass the limit, when a day was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_pace_to_exceed: Option<bool>,
    /// Whether the annual cap is exceeded, when an annual total was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_exceeded: Option<bool>,
    /// More than 80 hours in the month.
    pub needs_medical_guidance: bool,
}
