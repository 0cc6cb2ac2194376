//! Aggregated summary models.
//!
//! This module contains the per-employee, per-department and per-dataset
//! summaries built by folding daily analyses.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceViolation, EmployeeIdentity, OvertimeAssessment, ViolationType, ViolationUrgency};

/// Department name used when an employee has none.
pub const UNASSIGNED_DEPARTMENT: &str = "(unassigned)";

/// One employee's totals for an analysis period.
///
/// Built once from that employee's full record set and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonthlySummary {
    /// The employee summarized.
    pub employee: EmployeeIdentity,
    /// Days with any punch or worked time.
    pub total_work_days: u32,
    /// Days of holiday work (substitute work excluded).
    pub holiday_work_days: u32,
    /// Days with late minutes.
    pub late_days: u32,
    /// Days with early-leave minutes.
    pub early_leave_days: u32,
    /// Days left on time.
    pub timely_departure_days: u32,
    /// Full-day leave days.
    pub full_day_leave_days: u32,
    /// Half-day leave days.
    pub half_day_leave_days: u32,
    /// Days with a break violation.
    pub break_violation_days: u32,
    /// Days with missing punches.
    pub missing_clock_days: u32,
    /// Days with an unapproved early start.
    pub early_start_violation_days: u32,
    /// Sum of contracted-hours overtime minutes.
    pub total_overtime_minutes: u32,
    /// Sum of statutory overtime minutes.
    pub total_legal_overtime_minutes: u32,
    /// Every violation of the period, sorted by date.
    pub violations: Vec<AttendanceViolation>,
}

impl EmployeeMonthlySummary {
    /// Department name, falling back to [`UNASSIGNED_DEPARTMENT`].
    pub fn department_name(&self) -> &str {
        self.employee
            .department
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNASSIGNED_DEPARTMENT)
    }
}

/// Totals for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// Department name.
    pub department: String,
    /// Number of employees summarized.
    pub employee_count: u32,
    /// Sum of contracted-hours overtime minutes.
    pub total_overtime_minutes: u32,
    /// Mean contracted-hours overtime minutes per employee, one decimal place.
    pub average_overtime_minutes: Decimal,
    /// Sum of statutory overtime minutes.
    pub total_legal_overtime_minutes: u32,
    /// Holiday-work days across the department.
    pub holiday_work_days: u32,
    /// Total number of violations.
    pub total_violations: u32,
    /// Violation counts by type.
    pub violation_counts: BTreeMap<ViolationType, u32>,
}

/// Dataset-level totals for one extended analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Records received.
    pub total_records: u32,
    /// Records analyzed (future-dated records excluded).
    pub analyzed_records: u32,
    /// Distinct employees.
    pub employee_count: u32,
    /// Distinct departments.
    pub department_count: u32,
    /// Earliest analyzed date.
    pub period_start: Option<NaiveDate>,
    /// Latest analyzed date.
    pub period_end: Option<NaiveDate>,
    /// Total number of violations.
    pub total_violations: u32,
    /// Violation counts by type.
    pub violations_by_type: BTreeMap<ViolationType, u32>,
    /// Violation counts by urgency.
    pub violations_by_urgency: BTreeMap<ViolationUrgency, u32>,
}

/// Output of a full-dataset analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedAnalysis {
    /// Dataset-level totals.
    pub summary: AnalysisSummary,
    /// One summary per employee, sorted by employee id.
    pub employee_summaries: Vec<EmployeeMonthlySummary>,
    /// One summary per department, sorted by name.
    pub department_summaries: Vec<DepartmentSummary>,
    /// Every violation, sorted by date then employee id.
    pub violations: Vec<AttendanceViolation>,
    /// Employees whose statutory overtime is above the normal level.
    pub overtime_alerts: Vec<OvertimeAssessment>,
}
