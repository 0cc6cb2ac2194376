//! Core data models for the attendance compliance engine.
//!
//! This module contains all the value objects passed into and returned from
//! the analysis functions.

mod alert;
mod analysis_result;
mod record;
mod summary;

pub use alert::{OvertimeAlertLevel, OvertimeAssessment};
pub use analysis_result::{
    AttendanceViolation, DailyAttendanceAnalysis, LeaveType, VIOLATION_URGENCY, ViolationType,
    ViolationUrgency,
};
pub use record::{AttendanceRecord, CalendarType, EmployeeIdentity, weekday_label};
pub use summary::{
    AnalysisSummary, DepartmentSummary, EmployeeMonthlySummary, ExtendedAnalysis,
    UNASSIGNED_DEPARTMENT,
};
