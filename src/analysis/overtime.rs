//! Daily overtime computation.
//!
//! Two figures are produced per day:
//!
//! - contracted-hours overtime, beyond the 7h45m company day;
//! - statutory overtime, beyond the 8h legal day.
//!
//! Holiday work counts in full towards both, except substitute work, which is
//! an ordinary working day moved onto a holiday and uses weekday thresholds.

use serde::{Deserialize, Serialize};

use crate::config::OvertimePolicy;
use crate::models::AttendanceRecord;

use super::duration::parse_duration_minutes;
use super::keywords::SUBSTITUTE_WORK;

/// Overtime minutes for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OvertimeDetails {
    /// Minutes beyond the contracted day.
    pub overtime_minutes: u32,
    /// Minutes beyond the statutory day.
    pub legal_overtime_minutes: u32,
}

/// A holiday worked under a substitute-work application.
pub fn is_substitute_work(record: &AttendanceRecord) -> bool {
    record.calendar_type.is_holiday() && SUBSTITUTE_WORK.matches(&record.application_content)
}

/// Punched work on a holiday that is not substitute work.
pub fn is_holiday_work(record: &AttendanceRecord) -> bool {
    record.calendar_type.is_holiday() && record.has_punch() && !is_substitute_work(record)
}

/// Computes both overtime figures for a record.
///
/// # Examples
///
/// ```
/// use attendance_engine::analysis::overtime_details;
/// use attendance_engine::config::OvertimePolicy;
/// use attendance_engine::models::{AttendanceRecord, EmployeeIdentity};
/// use chrono::NaiveDate;
///
/// let mut record = AttendanceRecord::new(
///     EmployeeIdentity::new("E001", "Sato"),
///     NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
/// );
/// record.actual_work_hours = "9:00".to_string();
///
/// let details = overtime_details(&record, &OvertimePolicy::default());
/// assert_eq!(details.overtime_minutes, 75);
/// assert_eq!(details.legal_overtime_minutes, 60);
/// ```
pub fn overtime_details(record: &AttendanceRecord, policy: &OvertimePolicy) -> OvertimeDetails {
    let actual = parse_duration_minutes(&record.actual_work_hours);

    if is_holiday_work(record) {
        return OvertimeDetails {
            overtime_minutes: actual,
            legal_overtime_minutes: actual,
        };
    }

    OvertimeDetails {
        overtime_minutes: actual.saturating_sub(policy.contracted_day_minutes),
        legal_overtime_minutes: actual.saturating_sub(policy.statutory_day_minutes),
    }
}

/// Contracted-hours overtime only, for callers that predate the split.
pub fn calculate_overtime_minutes(record: &AttendanceRecord, policy: &OvertimePolicy) -> u32 {
    overtime_details(record, policy).overtime_minutes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarType, EmployeeIdentity};
    use chrono::NaiveDate;

    fn make_record(calendar_type: CalendarType, actual: &str) -> AttendanceRecord {
        let date = NaiveDate::from_ymd_opt(2025, 10, 13).unwrap();
        let mut record = AttendanceRecord::new(EmployeeIdentity::new("E001", "Sato"), date);
        record.calendar_type = calendar_type;
        record.actual_work_hours = actual.to_string();
        record.clock_in = date.and_hms_opt(9, 0, 0);
        record.clock_out = date.and_hms_opt(18, 0, 0);
        record
    }

    fn policy() -> OvertimePolicy {
        OvertimePolicy::default()
    }

    #[test]
    fn test_weekday_nine_hours() {
        let details = overtime_details(&make_record(CalendarType::Weekday, "9:00"), &policy());

        assert_eq!(details.overtime_minutes, 75);
        assert_eq!(details.legal_overtime_minutes, 60);
    }

    #[test]
    fn test_weekday_between_contracted_and_statutory() {
        let details = overtime_details(&make_record(CalendarType::Weekday, "7:55"), &policy());

        assert_eq!(details.overtime_minutes, 10);
        assert_eq!(details.legal_overtime_minutes, 0);
    }

    #[test]
    fn test_weekday_short_day_has_no_overtime() {
        let details = overtime_details(&make_record(CalendarType::Weekday, "6:00"), &policy());

        assert_eq!(details, OvertimeDetails::default());
    }

    #[test]
    fn test_statutory_holiday_counts_everything() {
        let details =
            overtime_details(&make_record(CalendarType::StatutoryHoliday, "5:30"), &policy());

        assert_eq!(details.overtime_minutes, 330);
        assert_eq!(details.legal_overtime_minutes, 330);
    }

    #[test]
    fn test_non_statutory_holiday_counts_everything() {
        let details =
            overtime_details(&make_record(CalendarType::NonStatutoryHoliday, "8:00"), &policy());

        assert_eq!(details.overtime_minutes, 480);
        assert_eq!(details.legal_overtime_minutes, 480);
    }

    #[test]
    fn test_substitute_work_uses_weekday_thresholds() {
        let mut record = make_record(CalendarType::NonStatutoryHoliday, "8:00");
        record.application_content = "振替出勤(承認済)".to_string();

        assert!(is_substitute_work(&record));
        assert!(!is_holiday_work(&record));

        let details = overtime_details(&record, &policy());
        assert_eq!(details.overtime_minutes, 15);
        assert_eq!(details.legal_overtime_minutes, 0);
    }

    #[test]
    fn test_substitute_phrase_on_weekday_is_not_substitute_work() {
        let mut record = make_record(CalendarType::Weekday, "8:00");
        record.application_content = "振替出勤".to_string();

        assert!(!is_substitute_work(&record));
    }

    #[test]
    fn test_holiday_without_punches_is_not_holiday_work() {
        let mut record = make_record(CalendarType::StatutoryHoliday, "");
        record.clock_in = None;
        record.clock_out = None;

        assert!(!is_holiday_work(&record));
        assert_eq!(overtime_details(&record, &policy()), OvertimeDetails::default());
    }

    #[test]
    fn test_legacy_accessor_returns_contracted_overtime() {
        let record = make_record(CalendarType::Weekday, "10:00");
        assert_eq!(calculate_overtime_minutes(&record, &policy()), 135);
    }

    #[test]
    fn test_malformed_actual_hours_degrade_to_zero() {
        let record = make_record(CalendarType::Weekday, "about nine hours");
        assert_eq!(overtime_details(&record, &policy()), OvertimeDetails::default());
    }
}
