//! Compliance analysis for attendance records.
//!
//! This module contains every rule the engine applies: schedule-time
//! resolution, leave classification, break compliance, overtime
//! computation, the daily violation classifier, monthly and department
//! aggregation, and the 36-agreement alert ladder. All functions are pure
//! and synchronous.

mod aggregate;
mod alerts;
mod break_time;
mod daily;
mod duration;
pub mod keywords;
mod leave;
mod legacy;
mod overtime;
mod remarks;
mod schedule;

pub use aggregate::{analyze_extended, create_department_summaries, create_employee_monthly_summary};
pub use alerts::{
    ANNUAL_OVERTIME_CAP_MINUTES, AssessmentOptions, MEDICAL_GUIDANCE_MINUTES,
    MONTHLY_OVERTIME_LIMIT_MINUTES, assess_overtime, get_overtime_alert_level,
    is_annual_overtime_exceeded, is_overtime_on_pace_to_exceed, needs_medical_guidance,
};
pub use break_time::{
    BreakCompliance, LONG_BREAK_MINUTES, LONG_BREAK_THRESHOLD_MINUTES, SHORT_BREAK_MINUTES,
    SHORT_BREAK_THRESHOLD_MINUTES, check_break_compliance, effective_break_minutes,
    has_break_violation, required_break_minutes,
};
pub use daily::analyze_daily_record;
pub use duration::{format_duration, parse_duration_minutes};
pub use leave::classify_leave;
pub use legacy::{LEGACY_PHANTOM_LATE_MINUTES, adjusted_late_minutes, is_eight_oclock_sheet_phantom_late};
pub use overtime::{
    OvertimeDetails, calculate_overtime_minutes, is_holiday_work, is_substitute_work,
    overtime_details,
};
pub use remarks::{check_remarks, requires_remarks};
pub use schedule::{ScheduleHints, expected_start_or_default, resolve_expected_start, sheet_label_start};
