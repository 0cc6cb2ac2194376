//! Monthly, department and dataset aggregation.
//!
//! Every summary here is produced by folding daily analyses into a tally
//! that is consumed once to build the immutable summary value.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::WorkPolicy;
use crate::models::{
    AnalysisSummary, AttendanceRecord, AttendanceViolation, DailyAttendanceAnalysis,
    DepartmentSummary, EmployeeIdentity, EmployeeMonthlySummary, ExtendedAnalysis, LeaveType,
    OvertimeAlertLevel, ViolationType, ViolationUrgency,
};

use super::alerts::{AssessmentOptions, assess_overtime};
use super::daily::analyze_daily_record;
use super::duration::format_duration;

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Running totals for one employee, consumed by [`MonthlyTally::finish`].
#[derive(Debug, Default)]
struct MonthlyTally {
    total_work_days: u32,
    holiday_work_days: u32,
    late_days: u32,
    early_leave_days: u32,
    timely_departure_days: u32,
    full_day_leave_days: u32,
    half_day_leave_days: u32,
    break_violation_days: u32,
    missing_clock_days: u32,
    early_start_violation_days: u32,
    total_overtime_minutes: u32,
    total_legal_overtime_minutes: u32,
    violations: Vec<AttendanceViolation>,
}

impl MonthlyTally {
    fn add(mut self, record: &AttendanceRecord, analysis: &DailyAttendanceAnalysis) -> Self {
        let flag = |condition: bool| u32::from(condition);

        self.total_work_days += flag(record.has_punch() || analysis.actual_work_minutes > 0);
        self.holiday_work_days += flag(analysis.is_holiday_work);
        self.late_days += flag(analysis.late_minutes > 0);
        self.early_leave_days += flag(analysis.early_leave_minutes > 0);
        self.timely_departure_days += flag(analysis.is_timely_departure);
        self.full_day_leave_days += flag(analysis.leave_type == LeaveType::FullDay);
        self.half_day_leave_days += flag(analysis.leave_type.is_half_day());
        self.break_violation_days += flag(analysis.has_break_violation);
        self.missing_clock_days += flag(analysis.is_missing_clock);
        self.early_start_violation_days += flag(analysis.has_early_start_violation);
        self.total_overtime_minutes = self
            .total_overtime_minutes
            .saturating_add(analysis.overtime_minutes);
        self.total_legal_overtime_minutes = self
            .total_legal_overtime_minutes
            .saturating_add(analysis.legal_overtime_minutes);

        self.violations
            .extend(analysis.violations.iter().map(|&kind| AttendanceViolation {
                employee: record.employee.clone(),
                date: record.date,
                violation_type: kind,
                details: violation_details(kind, record, analysis),
            }));
        self
    }

    fn finish(mut self, employee: EmployeeIdentity) -> EmployeeMonthlySummary {
        // Stable, so a day's violations keep classifier order.
        self.violations.sort_by_key(|violation| violation.date);

        EmployeeMonthlySummary {
            employee,
            total_work_days: self.total_work_days,
            holiday_work_days: self.holiday_work_days,
            late_days: self.late_days,
            early_leave_days: self.early_leave_days,
            timely_departure_days: self.timely_departure_days,
            full_day_leave_days: self.full_day_leave_days,
            half_day_leave_days: self.half_day_leave_days,
            break_violation_days: self.break_violation_days,
            missing_clock_days: self.missing_clock_days,
            early_start_violation_days: self.early_start_violation_days,
            total_overtime_minutes: self.total_overtime_minutes,
            total_legal_overtime_minutes: self.total_legal_overtime_minutes,
            violations: self.violations,
        }
    }
}

/// Human-readable explanation of one triggered violation.
fn violation_details(
    kind: ViolationType,
    record: &AttendanceRecord,
    analysis: &DailyAttendanceAnalysis,
) -> String {
    match kind {
        ViolationType::MissingClock => "Clock-in or clock-out punch missing".to_string(),
        ViolationType::BreakViolation => format!(
            "Break {} is below the required {} for {} worked",
            format_duration(analysis.actual_break_minutes),
            format_duration(analysis.required_break_minutes),
            format_duration(analysis.actual_work_minutes),
        ),
        ViolationType::LateApplicationMissing => format!(
            "Late {} with no late-arrival application",
            format_duration(analysis.late_minutes)
        ),
        ViolationType::EarlyLeaveApplicationMissing => format!(
            "Left {} early with no early-leave application",
            format_duration(analysis.early_leave_minutes)
        ),
        ViolationType::EarlyStartApplicationMissing => match record.clock_in {
            Some(clock_in) => format!(
                "Clocked in at {} before the scheduled {} with no early-start application",
                clock_in.format("%H:%M"),
                analysis.expected_start.format("%H:%M"),
            ),
            None => "Early start with no early-start application".to_string(),
        },
        ViolationType::TimeLeavePunchMissing => {
            "Hourly leave without both private-outing punches".to_string()
        }
        ViolationType::NightBreakApplicationMissing => format!(
            "Night work with break {} below the required {} and no break correction",
            format_duration(analysis.actual_break_minutes),
            format_duration(analysis.required_break_minutes),
        ),
        ViolationType::RemarksMissing => "Remarks required but empty".to_string(),
        ViolationType::RemarksFormatWarning => "Remarks too short".to_string(),
    }
}

/// Folds one employee's records, skipping those dated after `as_of`.
fn summarize_employee<'a>(
    employee: EmployeeIdentity,
    records: impl IntoIterator<Item = &'a AttendanceRecord>,
    as_of: NaiveDate,
    policy: &WorkPolicy,
) -> EmployeeMonthlySummary {
    let (tally, analyzed) = records
        .into_iter()
        .filter(|record| record.date <= as_of)
        .fold((MonthlyTally::default(), 0usize), |(tally, analyzed), record| {
            let analysis = analyze_daily_record(record, policy);
            (tally.add(record, &analysis), analyzed + 1)
        });

    let summary = tally.finish(employee);
    debug!(
        employee_id = %summary.employee.id,
        analyzed_records = analyzed,
        violations = summary.violations.len(),
        "Employee summary built"
    );
    summary
}

/// Builds one employee's summary from every record carrying their id.
///
/// Records dated after `as_of` are skipped. The employee identity is taken
/// from the first matching record; `None` means no record matched.
///
/// # Example
///
/// ```
/// use attendance_engine::analysis::create_employee_monthly_summary;
/// use attendance_engine::config::WorkPolicy;
/// use attendance_engine::models::{AttendanceRecord, EmployeeIdentity};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// let mut record = AttendanceRecord::new(EmployeeIdentity::new("E001", "Sato"), date);
/// record.clock_in = date.and_hms_opt(9, 0, 0);
/// record.clock_out = date.and_hms_opt(19, 0, 0);
/// record.actual_work_hours = "9:00".to_string();
/// record.break_minutes = 60;
///
/// let summary =
///     create_employee_monthly_summary("E001", &[record], date, &WorkPolicy::default()).unwrap();
/// assert_eq!(summary.total_work_days, 1);
/// assert_eq!(summary.total_overtime_minutes, 75);
/// assert_eq!(summary.total_legal_overtime_minutes, 60);
/// ```
pub fn create_employee_monthly_summary(
    employee_id: &str,
    records: &[AttendanceRecord],
    as_of: NaiveDate,
    policy: &WorkPolicy,
) -> Option<EmployeeMonthlySummary> {
    let mut matching = records
        .iter()
        .filter(|record| record.employee.id == employee_id)
        .peekable();
    let employee = matching.peek()?.employee.clone();

    Some(summarize_employee(employee, matching, as_of, policy))
}

/// Groups employee summaries by department, sorted by department name.
///
/// Employees without a department are grouped under
/// [`UNASSIGNED_DEPARTMENT`](crate::models::UNASSIGNED_DEPARTMENT).
pub fn create_department_summaries(summaries: &[EmployeeMonthlySummary]) -> Vec<DepartmentSummary> {
    let mut groups: BTreeMap<&str, Vec<&EmployeeMonthlySummary>> = BTreeMap::new();
    for summary in summaries {
        groups.entry(summary.department_name()).or_default().push(summary);
    }

    groups
        .into_iter()
        .map(|(department, members)| department_summary(department, &members))
        .collect()
}

fn department_summary(department: &str, members: &[&EmployeeMonthlySummary]) -> DepartmentSummary {
    let employee_count = count_u32(members.len());
    let total_overtime_minutes = members
        .iter()
        .fold(0u32, |total, m| total.saturating_add(m.total_overtime_minutes));
    let total_legal_overtime_minutes = members
        .iter()
        .fold(0u32, |total, m| total.saturating_add(m.total_legal_overtime_minutes));
    let holiday_work_days = members.iter().map(|m| m.holiday_work_days).sum();

    let mut violation_counts: BTreeMap<ViolationType, u32> = BTreeMap::new();
    for violation in members.iter().flat_map(|m| &m.violations) {
        *violation_counts.entry(violation.violation_type).or_default() += 1;
    }
    let total_violations = violation_counts.values().sum();

    let average_overtime_minutes = if employee_count == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(total_overtime_minutes) / Decimal::from(employee_count)).round_dp(1)
    };

    DepartmentSummary {
        department: department.to_string(),
        employee_count,
        total_overtime_minutes,
        average_overtime_minutes,
        total_legal_overtime_minutes,
        holiday_work_days,
        total_violations,
        violation_counts,
    }
}

/// Analyzes a full dataset: every employee, department and violation.
///
/// Records dated after `as_of` are skipped, and an employee with no record on
/// or before `as_of` gets no summary and no department headcount. Overtime
/// alerts are raised for employees whose statutory overtime is above the
/// normal level.
pub fn analyze_extended(
    records: &[AttendanceRecord],
    as_of: NaiveDate,
    policy: &WorkPolicy,
) -> ExtendedAnalysis {
    let mut by_employee: BTreeMap<&str, Vec<&AttendanceRecord>> = BTreeMap::new();
    for record in records.iter().filter(|record| record.date <= as_of) {
        by_employee
            .entry(record.employee.id.as_str())
            .or_default()
            .push(record);
    }

    let employee_summaries: Vec<EmployeeMonthlySummary> = by_employee
        .values()
        .map(|employee_records| {
            let employee = employee_records[0].employee.clone();
            summarize_employee(employee, employee_records.iter().copied(), as_of, policy)
        })
        .collect();

    let department_summaries = create_department_summaries(&employee_summaries);

    let mut violations: Vec<AttendanceViolation> = employee_summaries
        .iter()
        .flat_map(|summary| summary.violations.iter().cloned())
        .collect();
    violations.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.employee.id.cmp(&b.employee.id)));

    let overtime_alerts = employee_summaries
        .iter()
        .map(|summary| {
            assess_overtime(
                Some(summary.employee.clone()),
                summary.total_legal_overtime_minutes,
                AssessmentOptions::default(),
            )
        })
        .filter(|assessment| assessment.level > OvertimeAlertLevel::Normal)
        .collect::<Vec<_>>();

    let summary = dataset_summary(
        records,
        as_of,
        &employee_summaries,
        &department_summaries,
        &violations,
    );

    info!(
        total_records = summary.total_records,
        analyzed_records = summary.analyzed_records,
        employees = summary.employee_count,
        violations = summary.total_violations,
        overtime_alerts = overtime_alerts.len(),
        "Extended analysis complete"
    );

    ExtendedAnalysis {
        summary,
        employee_summaries,
        department_summaries,
        violations,
        overtime_alerts,
    }
}

fn dataset_summary(
    records: &[AttendanceRecord],
    as_of: NaiveDate,
    employee_summaries: &[EmployeeMonthlySummary],
    department_summaries: &[DepartmentSummary],
    violations: &[AttendanceViolation],
) -> AnalysisSummary {
    let analyzed_dates: BTreeSet<NaiveDate> = records
        .iter()
        .map(|record| record.date)
        .filter(|date| *date <= as_of)
        .collect();
    let analyzed_records = records.iter().filter(|record| record.date <= as_of).count();

    let mut violations_by_type: BTreeMap<ViolationType, u32> = BTreeMap::new();
    let mut violations_by_urgency: BTreeMap<ViolationUrgency, u32> = BTreeMap::new();
    for violation in violations {
        *violations_by_type.entry(violation.violation_type).or_default() += 1;
        *violations_by_urgency
            .entry(violation.violation_type.urgency())
            .or_default() += 1;
    }

    AnalysisSummary {
        total_records: count_u32(records.len()),
        analyzed_records: count_u32(analyzed_records),
        employee_count: count_u32(employee_summaries.len()),
        department_count: count_u32(department_summaries.len()),
        period_start: analyzed_dates.first().copied(),
        period_end: analyzed_dates.last().copied(),
        total_violations: count_u32(violations.len()),
        violations_by_type,
        violations_by_urgency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::check_remarks;
    use crate::models::{CalendarType, UNASSIGNED_DEPARTMENT};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    fn employee(id: &str, department: Option<&str>) -> EmployeeIdentity {
        let identity = EmployeeIdentity::new(id, format!("Employee {}", id));
        match department {
            Some(name) => identity.with_department(name),
            None => identity,
        }
    }

    fn worked_day(employee: &EmployeeIdentity, d: u32, actual: &str) -> AttendanceRecord {
        let mut record = AttendanceRecord::new(employee.clone(), day(d));
        record.clock_in = day(d).and_hms_opt(9, 0, 0);
        record.clock_out = day(d).and_hms_opt(19, 0, 0);
        record.actual_work_hours = actual.to_string();
        record.break_minutes = 60;
        record
    }

    fn policy() -> WorkPolicy {
        WorkPolicy::default()
    }

    // ==========================================================================
    // Employee summaries
    // ==========================================================================

    #[test]
    fn test_summary_counts_days_and_overtime() {
        let sato = employee("E001", Some("Sales"));
        let mut late = worked_day(&sato, 2, "7:45");
        late.late_time = "0:15".to_string();
        let mut leave = AttendanceRecord::new(sato.clone(), day(3));
        leave.application_content = "有給休暇".to_string();
        let mut holiday = worked_day(&sato, 4, "4:00");
        holiday.calendar_type = CalendarType::StatutoryHoliday;

        let records = vec![worked_day(&sato, 1, "9:00"), late, leave, holiday];
        let summary = create_employee_monthly_summary("E001", &records, day(31), &policy()).unwrap();

        assert_eq!(summary.total_work_days, 3);
        assert_eq!(summary.holiday_work_days, 1);
        assert_eq!(summary.late_days, 1);
        assert_eq!(summary.full_day_leave_days, 1);
        assert_eq!(summary.timely_departure_days, 1);
        assert_eq!(summary.total_overtime_minutes, 75 + 240);
        assert_eq!(summary.total_legal_overtime_minutes, 60 + 240);
        assert_eq!(summary.violations.len(), 1);
        assert_eq!(
            summary.violations[0].violation_type,
            ViolationType::LateApplicationMissing
        );
        assert_eq!(summary.violations[0].details, "Late 0:15 with no late-arrival application");
    }

    #[test]
    fn test_one_violation_per_tag() {
        let sato = employee("E001", None);
        let mut record = worked_day(&sato, 5, "9:00");
        record.break_minutes = 30;
        record.late_time = "0:10".to_string();

        let summary = create_employee_monthly_summary("E001", &[record], day(31), &policy()).unwrap();

        let kinds: Vec<ViolationType> = summary.violations.iter().map(|v| v.violation_type).collect();
        assert_eq!(
            kinds,
            vec![ViolationType::BreakViolation, ViolationType::LateApplicationMissing]
        );
        assert_eq!(summary.break_violation_days, 1);
    }

    #[test]
    fn test_future_records_are_skipped() {
        let sato = employee("E001", None);
        let records = vec![worked_day(&sato, 10, "9:00"), worked_day(&sato, 20, "9:00")];

        let summary = create_employee_monthly_summary("E001", &records, day(15), &policy()).unwrap();
        assert_eq!(summary.total_work_days, 1);
        assert_eq!(summary.total_overtime_minutes, 75);
    }

    #[test]
    fn test_other_employees_are_ignored() {
        let sato = employee("E001", None);
        let suzuki = employee("E002", None);
        let records = vec![worked_day(&sato, 1, "9:00"), worked_day(&suzuki, 1, "12:00")];

        let summary = create_employee_monthly_summary("E001", &records, day(31), &policy()).unwrap();
        assert_eq!(summary.employee, sato);
        assert_eq!(summary.total_overtime_minutes, 75);
    }

    #[test]
    fn test_unknown_employee_has_no_summary() {
        let records = vec![worked_day(&employee("E001", None), 1, "9:00")];
        assert!(create_employee_monthly_summary("E999", &records, day(31), &policy()).is_none());
    }

    #[test]
    fn test_violations_sorted_by_date_regardless_of_input_order() {
        let sato = employee("E001", None);
        let mut later = worked_day(&sato, 9, "7:45");
        later.late_time = "0:05".to_string();
        let mut earlier = worked_day(&sato, 3, "7:45");
        earlier.late_time = "0:05".to_string();

        let summary =
            create_employee_monthly_summary("E001", &[later, earlier], day(31), &policy()).unwrap();
        let dates: Vec<NaiveDate> = summary.violations.iter().map(|v| v.date).collect();
        assert_eq!(dates, vec![day(3), day(9)]);
    }

    #[test]
    fn test_summary_is_independent_of_record_order() {
        let sato = employee("E001", None);
        let mut records = vec![
            worked_day(&sato, 1, "9:00"),
            worked_day(&sato, 2, "10:00"),
            worked_day(&sato, 3, "6:00"),
        ];
        let forward = create_employee_monthly_summary("E001", &records, day(31), &policy());
        records.reverse();
        let backward = create_employee_monthly_summary("E001", &records, day(31), &policy());

        assert_eq!(forward, backward);
    }

    // ==========================================================================
    // Department summaries
    // ==========================================================================

    #[test]
    fn test_departments_grouped_and_sorted() {
        let records = vec![
            worked_day(&employee("E001", Some("Sales")), 1, "9:00"),
            worked_day(&employee("E002", Some("Sales")), 1, "8:00"),
            worked_day(&employee("E003", Some("Accounting")), 1, "7:45"),
            worked_day(&employee("E004", None), 1, "7:45"),
            worked_day(&employee("E005", Some("  ")), 1, "7:45"),
        ];
        let summaries: Vec<EmployeeMonthlySummary> = ["E001", "E002", "E003", "E004", "E005"]
            .iter()
            .filter_map(|id| create_employee_monthly_summary(id, &records, day(31), &policy()))
            .collect();

        let departments = create_department_summaries(&summaries);
        let names: Vec<&str> = departments.iter().map(|d| d.department.as_str()).collect();
        assert_eq!(names, vec![UNASSIGNED_DEPARTMENT, "Accounting", "Sales"]);

        let unassigned = &departments[0];
        assert_eq!(unassigned.employee_count, 2);

        let sales = &departments[2];
        assert_eq!(sales.employee_count, 2);
        assert_eq!(sales.total_overtime_minutes, 75 + 15);
        assert_eq!(sales.average_overtime_minutes, Decimal::new(450, 1));
        assert_eq!(sales.total_legal_overtime_minutes, 60);
    }

    #[test]
    fn test_department_average_rounds_to_one_place() {
        let records = vec![
            worked_day(&employee("E001", Some("Ops")), 1, "7:46"),
            worked_day(&employee("E002", Some("Ops")), 1, "7:45"),
            worked_day(&employee("E003", Some("Ops")), 1, "7:45"),
        ];
        let summaries: Vec<EmployeeMonthlySummary> = ["E001", "E002", "E003"]
            .iter()
            .filter_map(|id| create_employee_monthly_summary(id, &records, day(31), &policy()))
            .collect();

        let departments = create_department_summaries(&summaries);
        assert_eq!(departments[0].average_overtime_minutes, Decimal::new(3, 1));
    }

    #[test]
    fn test_department_violation_counts() {
        let mut first = worked_day(&employee("E001", Some("Ops")), 1, "9:00");
        first.break_minutes = 30;
        let mut second = worked_day(&employee("E002", Some("Ops")), 1, "9:00");
        second.break_minutes = 30;
        second.late_time = "0:20".to_string();

        let records = vec![first, second];
        let summaries: Vec<EmployeeMonthlySummary> = ["E001", "E002"]
            .iter()
            .filter_map(|id| create_employee_monthly_summary(id, &records, day(31), &policy()))
            .collect();

        let departments = create_department_summaries(&summaries);
        assert_eq!(departments[0].total_violations, 3);
        assert_eq!(departments[0].violation_counts[&ViolationType::BreakViolation], 2);
        assert_eq!(departments[0].violation_counts[&ViolationType::LateApplicationMissing], 1);
    }

    #[test]
    fn test_no_summaries_no_departments() {
        assert!(create_department_summaries(&[]).is_empty());
    }

    // ==========================================================================
    // Extended analysis
    // ==========================================================================

    #[test]
    fn test_extended_analysis_totals() {
        let sato = employee("E002", Some("Sales"));
        let suzuki = employee("E001", Some("Support"));
        let mut late = worked_day(&suzuki, 2, "7:45");
        late.late_time = "0:30".to_string();
        let mut short_break = worked_day(&sato, 2, "6:30");
        short_break.break_minutes = 30;

        let records = vec![
            worked_day(&sato, 1, "9:00"),
            short_break,
            late,
            worked_day(&suzuki, 25, "9:00"),
        ];
        let analysis = analyze_extended(&records, day(20), &policy());

        assert_eq!(analysis.summary.total_records, 4);
        assert_eq!(analysis.summary.analyzed_records, 3);
        assert_eq!(analysis.summary.employee_count, 2);
        assert_eq!(analysis.summary.department_count, 2);
        assert_eq!(analysis.summary.period_start, Some(day(1)));
        assert_eq!(analysis.summary.period_end, Some(day(2)));
        assert_eq!(analysis.summary.total_violations, 2);
        assert_eq!(analysis.summary.violations_by_urgency[&ViolationUrgency::High], 1);
        assert_eq!(analysis.summary.violations_by_urgency[&ViolationUrgency::Medium], 1);

        let ids: Vec<&str> = analysis
            .employee_summaries
            .iter()
            .map(|s| s.employee.id.as_str())
            .collect();
        assert_eq!(ids, vec!["E001", "E002"]);

        // Same date: ordered by employee id.
        let flattened: Vec<(&str, ViolationType)> = analysis
            .violations
            .iter()
            .map(|v| (v.employee.id.as_str(), v.violation_type))
            .collect();
        assert_eq!(
            flattened,
            vec![
                ("E001", ViolationType::LateApplicationMissing),
                ("E002", ViolationType::BreakViolation),
            ]
        );
        assert!(analysis.overtime_alerts.is_empty());
    }

    #[test]
    fn test_extended_analysis_raises_overtime_alerts() {
        let sato = employee("E001", Some("Sales"));
        // Twenty 10-hour weekdays: 20 * 120 statutory minutes = 40h.
        let records: Vec<AttendanceRecord> =
            (1..=20).map(|d| worked_day(&sato, d, "10:00")).collect();

        let analysis = analyze_extended(&records, day(31), &policy());

        assert_eq!(analysis.overtime_alerts.len(), 1);
        let alert = &analysis.overtime_alerts[0];
        assert_eq!(alert.employee.as_ref().map(|e| e.id.as_str()), Some("E001"));
        assert_eq!(alert.monthly_overtime_minutes, 2400);
        assert_eq!(alert.level, OvertimeAlertLevel::Warning);
    }

    #[test]
    fn test_employee_with_only_future_records_is_left_out() {
        let sato = employee("E001", Some("Sales"));
        let suzuki = employee("E002", Some("Sales"));
        let records = vec![
            worked_day(&sato, 1, "10:00"),
            worked_day(&suzuki, 25, "12:00"),
        ];

        let analysis = analyze_extended(&records, day(20), &policy());

        assert_eq!(analysis.summary.total_records, 2);
        assert_eq!(analysis.summary.analyzed_records, 1);
        assert_eq!(analysis.summary.employee_count, 1);
        assert_eq!(analysis.employee_summaries.len(), 1);
        assert_eq!(analysis.employee_summaries[0].employee, sato);

        let sales = &analysis.department_summaries[0];
        assert_eq!(sales.employee_count, 1);
        assert_eq!(sales.total_overtime_minutes, 135);
        assert_eq!(sales.average_overtime_minutes, Decimal::from(135));
    }

    #[test]
    fn test_remarks_checks_stay_out_of_classification() {
        let sato = employee("E001", Some("Sales"));
        let mut direct = worked_day(&sato, 1, "7:45");
        direct.application_content = "直行".to_string();
        direct.remarks = String::new();
        let records = vec![direct];

        assert_eq!(
            check_remarks(&records[0], &policy().remarks),
            Some(ViolationType::RemarksMissing)
        );

        let is_remarks = |kind: ViolationType| {
            matches!(
                kind,
                ViolationType::RemarksMissing | ViolationType::RemarksFormatWarning
            )
        };

        let daily = analyze_daily_record(&records[0], &policy());
        assert!(!daily.violations.iter().any(|&kind| is_remarks(kind)));

        let summary = create_employee_monthly_summary("E001", &records, day(31), &policy()).unwrap();
        assert!(!summary.violations.iter().any(|v| is_remarks(v.violation_type)));

        let analysis = analyze_extended(&records, day(31), &policy());
        assert!(!analysis.violations.iter().any(|v| is_remarks(v.violation_type)));
        assert!(!analysis.summary.violations_by_type.keys().any(|&kind| is_remarks(kind)));
    }

    #[test]
    fn test_extended_analysis_of_nothing() {
        let analysis = analyze_extended(&[], day(1), &policy());

        assert_eq!(analysis.summary.total_records, 0);
        assert_eq!(analysis.summary.period_start, None);
        assert!(analysis.employee_summaries.is_empty());
        assert!(analysis.department_summaries.is_empty());
    }
}
