//! Daily violation classification.
//!
//! [`analyze_daily_record`] is the central rule: it turns one attendance
//! record into a [`DailyAttendanceAnalysis`] with every derived figure and
//! the ordered list of triggered violation tags.
//!
//! | tag | raised when | suppressed by |
//! |---|---|---|
//! | `missing_clock` | calendar weekday, a punch absent, no leave, no worked time | any leave |
//! | `break_violation` | break shorter than the statutory minimum | nothing |
//! | `late_application_missing` | late minutes | late, train-delay, flex-time or half-day application |
//! | `early_leave_application_missing` | early-leave minutes | early-leave or half-day application |
//! | `early_start_application_missing` | calendar weekday, no leave, clock-in before the expected start | approved early-start flag or early-start application |
//! | `time_leave_punch_missing` | hourly-leave application | both private-outing punches present |
//! | `night_break_application_missing` | 30+ night-work minutes and a break violation | night-break adjustment entry or break-correction application |

use chrono::Timelike;

use crate::config::WorkPolicy;
use crate::models::{AttendanceRecord, CalendarType, DailyAttendanceAnalysis, LeaveType, ViolationType};

use super::break_time::check_break_compliance;
use super::duration::parse_duration_minutes;
use super::keywords::{
    BREAK_CORRECTION, EARLY_LEAVE, EARLY_START, FLEX_TIME, HALF_DAY_LEAVE, HOURLY_LEAVE,
    LATE_ARRIVAL, TRAIN_DELAY, phrase_present,
};
use super::leave::classify_leave;
use super::legacy::adjusted_late_minutes;
use super::overtime::{is_holiday_work, is_substitute_work, overtime_details};
use super::schedule::expected_start_or_default;

/// Analyzes one attendance record.
///
/// Pure and deterministic: the same record and policy always give the same
/// analysis.
///
/// # Example
///
/// ```
/// use attendance_engine::analysis::analyze_daily_record;
/// use attendance_engine::config::WorkPolicy;
/// use attendance_engine::models::{AttendanceRecord, EmployeeIdentity, ViolationType};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// let mut record = AttendanceRecord::new(EmployeeIdentity::new("E001", "Sato"), date);
/// record.clock_in = date.and_hms_opt(9, 20, 0);
/// record.clock_out = date.and_hms_opt(18, 0, 0);
/// record.actual_work_hours = "7:40".to_string();
/// record.break_minutes = 60;
/// record.late_time = "0:20".to_string();
/// record.application_content = "電車の遅延はありません".to_string();
///
/// let analysis = analyze_daily_record(&record, &WorkPolicy::default());
/// assert_eq!(analysis.late_minutes, 20);
/// assert_eq!(analysis.violations, vec![ViolationType::LateApplicationMissing]);
/// ```
pub fn analyze_daily_record(record: &AttendanceRecord, policy: &WorkPolicy) -> DailyAttendanceAnalysis {
    let application = record.application_content.as_str();
    let is_calendar_weekday = record.calendar_type == CalendarType::Weekday;

    let leave_type = classify_leave(application);
    let actual_work_minutes = parse_duration_minutes(&record.actual_work_hours);
    // The legacy carve-out runs before any late check sees the value.
    let late_minutes = adjusted_late_minutes(record, parse_duration_minutes(&record.late_time));
    let early_leave_minutes = parse_duration_minutes(&record.early_leave_time);
    let night_work_minutes = parse_duration_minutes(&record.night_work_hours);

    let is_holiday_work = is_holiday_work(record);
    let is_working_weekday = is_calendar_weekday || is_substitute_work(record);
    let overtime = overtime_details(record, &policy.overtime);
    let breaks = check_break_compliance(
        actual_work_minutes,
        record.break_minutes,
        leave_type,
        &policy.breaks,
    );
    let expected_start =
        expected_start_or_default(application, &record.sheet_label, &policy.schedule);

    let is_missing_clock = is_calendar_weekday
        && (record.clock_in.is_none() || record.clock_out.is_none())
        && leave_type == LeaveType::None
        && actual_work_minutes == 0;

    let is_timely_departure = is_working_weekday
        && matches!(leave_type, LeaveType::None | LeaveType::HalfDayAm)
        && record.clock_out.is_some()
        && overtime.overtime_minutes == 0
        && early_leave_minutes == 0;

    let late_without_application = late_minutes > 0
        && !phrase_present(
            application,
            &[&LATE_ARRIVAL, &TRAIN_DELAY, &FLEX_TIME, &HALF_DAY_LEAVE],
        );

    let early_leave_without_application = early_leave_minutes > 0
        && !phrase_present(application, &[&EARLY_LEAVE, &HALF_DAY_LEAVE]);

    let clocked_in_early = record.clock_in.is_some_and(|clock_in| {
        clock_in.time().num_seconds_from_midnight() / 60
            < expected_start.num_seconds_from_midnight() / 60
    });
    let has_early_start_violation = is_calendar_weekday
        && leave_type == LeaveType::None
        && clocked_in_early
        && !record.early_start
        && !EARLY_START.matches(application);

    let time_leave_punch_missing = HOURLY_LEAVE.matches(application)
        && !(record.private_outing_out.is_some() && record.private_outing_return.is_some());

    let night_break_without_adjustment = night_work_minutes >= policy.night_work.min_night_work_minutes
        && breaks.has_violation
        && record.night_break_adjustment.trim().is_empty()
        && !BREAK_CORRECTION.matches(application);

    let violations = [
        (is_missing_clock, ViolationType::MissingClock),
        (breaks.has_violation, ViolationType::BreakViolation),
        (late_without_application, ViolationType::LateApplicationMissing),
        (early_leave_without_application, ViolationType::EarlyLeaveApplicationMissing),
        (has_early_start_violation, ViolationType::EarlyStartApplicationMissing),
        (time_leave_punch_missing, ViolationType::TimeLeavePunchMissing),
        (night_break_without_adjustment, ViolationType::NightBreakApplicationMissing),
    ]
    .into_iter()
    .filter_map(|(triggered, kind)| triggered.then_some(kind))
    .collect();

    DailyAttendanceAnalysis {
        date: record.date,
        leave_type,
        is_holiday_work,
        is_timely_departure,
        expected_start,
        actual_work_minutes,
        overtime_minutes: overtime.overtime_minutes,
        legal_overtime_minutes: overtime.legal_overtime_minutes,
        late_minutes,
        early_leave_minutes,
        actual_break_minutes: breaks.actual_break_minutes,
        required_break_minutes: breaks.required_break_minutes,
        has_break_violation: breaks.has_violation,
        is_missing_clock,
        has_early_start_violation,
        violations,
    }
}
