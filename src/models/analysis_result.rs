//! Daily analysis result models.
//!
//! This module contains the [`DailyAttendanceAnalysis`] produced for one
//! record, the closed [`ViolationType`] enumeration with its fixed urgency
//! mapping, and the [`AttendanceViolation`] emitted during aggregation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::EmployeeIdentity;

/// Leave classification derived from a day's application content.
///
/// # Example
///
/// ```
/// use attendance_engine::models::LeaveType;
///
/// assert!(LeaveType::HalfDayPm.is_half_day());
/// assert!(!LeaveType::FullDay.is_half_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// No leave taken.
    #[default]
    None,
    /// Whole day off.
    FullDay,
    /// Morning off, working the afternoon.
    HalfDayAm,
    /// Afternoon off, working the morning.
    HalfDayPm,
}

impl LeaveType {
    /// Returns true for either half-day variant.
    pub fn is_half_day(self) -> bool {
        matches!(self, LeaveType::HalfDayAm | LeaveType::HalfDayPm)
    }
}

/// Priority bucket used by downstream consumers to order violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationUrgency {
    /// Informational only.
    None,
    /// A missing application that HR should chase.
    Medium,
    /// A statutory breach.
    High,
}

/// Closed enumeration of violation tags.
///
/// Variants are declared in the order the daily classifier emits them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// No punches on a working weekday without any leave.
    MissingClock,
    /// Break shorter than the statutory minimum.
    BreakViolation,
    /// Late arrival without a late-arrival style application.
    LateApplicationMissing,
    /// Early departure without an early-leave style application.
    EarlyLeaveApplicationMissing,
    /// Clock-in before the scheduled start without approval.
    EarlyStartApplicationMissing,
    /// Hourly leave applied without both private-outing punches.
    TimeLeavePunchMissing,
    /// Night work with an insufficient break and no correction.
    NightBreakApplicationMissing,
    /// Remarks required by the application type but empty.
    RemarksMissing,
    /// Remarks present but too short to be meaningful.
    RemarksFormatWarning,
}

/// Fixed urgency of every violation type.
pub const VIOLATION_URGENCY: [(ViolationType, ViolationUrgency); 9] = [
    (ViolationType::MissingClock, ViolationUrgency::None),
    (ViolationType::BreakViolation, ViolationUrgency::High),
    (ViolationType::LateApplicationMissing, ViolationUrgency::Medium),
    (ViolationType::EarlyLeaveApplicationMissing, ViolationUrgency::Medium),
    (ViolationType::EarlyStartApplicationMissing, ViolationUrgency::Medium),
    (ViolationType::TimeLeavePunchMissing, ViolationUrgency::Medium),
    (ViolationType::NightBreakApplicationMissing, ViolationUrgency::High),
    (ViolationType::RemarksMissing, ViolationUrgency::None),
    (ViolationType::RemarksFormatWarning, ViolationUrgency::None),
];

impl ViolationType {
    /// Looks up the urgency of this violation type in [`VIOLATION_URGENCY`].
    ///
    /// ```
    /// use attendance_engine::models::{ViolationType, ViolationUrgency};
    ///
    /// assert_eq!(ViolationType::BreakViolation.urgency(), ViolationUrgency::High);
    /// assert_eq!(ViolationType::MissingClock.urgency(), ViolationUrgency::None);
    /// ```
    pub fn urgency(self) -> ViolationUrgency {
        VIOLATION_URGENCY
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, urgency)| *urgency)
            .unwrap_or(ViolationUrgency::None)
    }

    /// Snake-case tag, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationType::MissingClock => "missing_clock",
            ViolationType::BreakViolation => "break_violation",
            ViolationType::LateApplicationMissing => "late_application_missing",
            ViolationType::EarlyLeaveApplicationMissing => "early_leave_application_missing",
            ViolationType::EarlyStartApplicationMissing => "early_start_application_missing",
            ViolationType::TimeLeavePunchMissing => "time_leave_punch_missing",
            ViolationType::NightBreakApplicationMissing => "night_break_application_missing",
            ViolationType::RemarksMissing => "remarks_missing",
            ViolationType::RemarksFormatWarning => "remarks_format_warning",
        }
    }
}

impl std::fmt::Display for ViolationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully classified result for one attendance record.
///
/// Recomputed from the record on every call; never cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendanceAnalysis {
    /// Date of the analyzed record.
    pub date: NaiveDate,
    /// Leave classification of the day.
    pub leave_type: LeaveType,
    /// Work on a holiday that is not substitute work.
    pub is_holiday_work: bool,
    /// Left on time on a working weekday.
    pub is_timely_departure: bool,
    /// Start time the early-start check compared against.
    pub expected_start: NaiveTime,
    /// Actual worked minutes parsed from the record.
    pub actual_work_minutes: u32,
    /// Minutes beyond the contracted day (or all minutes on holiday work).
    pub overtime_minutes: u32,
    /// Minutes beyond the statutory day (or all minutes on holiday work).
    pub legal_overtime_minutes: u32,
    /// Late minutes after legacy adjustments.
    pub late_minutes: u32,
    /// Early-leave minutes.
    pub early_leave_minutes: u32,
    /// Break minutes used for the compliance comparison.
    pub actual_break_minutes: u32,
    /// Statutory minimum break for the worked time.
    pub required_break_minutes: u32,
    /// Break shorter than required.
    pub has_break_violation: bool,
    /// Punches missing on a working weekday.
    pub is_missing_clock: bool,
    /// Unapproved early start.
    pub has_early_start_violation: bool,
    /// Triggered violation tags, in classifier order.
    pub violations: Vec<ViolationType>,
}

impl DailyAttendanceAnalysis {
    /// Returns true if the given violation was triggered.
    pub fn has_violation(&self, kind: ViolationType) -> bool {
        self.violations.contains(&kind)
    }
}

/// One flagged issue on one day for one employee.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceViolation, EmployeeIdentity, ViolationType};
/// use chrono::NaiveDate;
///
/// let violation = AttendanceViolation {
///     employee: EmployeeIdentity::new("E001", "Sato"),
///     date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     violation_type: ViolationType::LateApplicationMissing,
///     details: "20 minutes late with no late-arrival application".to_string(),
/// };
/// assert_eq!(violation.violation_type.to_string(), "late_application_missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceViolation {
    /// The employee concerned.
    pub employee: EmployeeIdentity,
    /// The day the violation occurred.
    pub date: NaiveDate,
    /// The violation tag.
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    /// Human-readable explanation.
    pub details: String,
}
