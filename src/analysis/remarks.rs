//! Remarks requirements.
//!
//! Some application types (direct-to-site, direct-from-site, delay, punch
//! correction, alternate overtime) must be explained in the remarks column.
//! These checks are not run by the daily classifier or the aggregator;
//! remarks are currently reviewed outside this engine.

use crate::config::RemarksPolicy;
use crate::models::{AttendanceRecord, ViolationType};

use super::keywords::REMARKS_REQUIRED;

/// True if the record's application type requires remarks.
pub fn requires_remarks(record: &AttendanceRecord) -> bool {
    record.has_alternate_overtime() || REMARKS_REQUIRED.matches(&record.application_content)
}

/// Returns the remarks violation for a record, if any.
///
/// # Example
///
/// ```
/// use attendance_engine::analysis::check_remarks;
/// use attendance_engine::config::RemarksPolicy;
/// use attendance_engine::models::{AttendanceRecord, EmployeeIdentity, ViolationType};
/// use chrono::NaiveDate;
///
/// let mut record = AttendanceRecord::new(
///     EmployeeIdentity::new("E001", "Sato"),
///     NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
/// );
/// record.application_content = "直行".to_string();
///
/// let policy = RemarksPolicy::default();
/// assert_eq!(check_remarks(&record, &policy), Some(ViolationType::RemarksMissing));
///
/// record.remarks = "客先".to_string();
/// assert_eq!(check_remarks(&record, &policy), Some(ViolationType::RemarksFormatWarning));
///
/// record.remarks = "客先A社で打合せ".to_string();
/// assert_eq!(check_remarks(&record, &policy), None);
/// ```
pub fn check_remarks(record: &AttendanceRecord, policy: &RemarksPolicy) -> Option<ViolationType> {
    if !requires_remarks(record) {
        return None;
    }

    let remarks = record.remarks.trim();
    if remarks.is_empty() {
        Some(ViolationType::RemarksMissing)
    } else if remarks.chars().count() < policy.min_length {
        Some(ViolationType::RemarksFormatWarning)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeIdentity;
    use chrono::NaiveDate;

    fn make_record(application: &str, remarks: &str) -> AttendanceRecord {
        let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let mut record = AttendanceRecord::new(EmployeeIdentity::new("E001", "Sato"), date);
        record.application_content = application.to_string();
        record.remarks = remarks.to_string();
        record
    }

    #[test]
    fn test_ordinary_application_needs_no_remarks() {
        let record = make_record("遅刻申請", "");
        assert!(!requires_remarks(&record));
        assert_eq!(check_remarks(&record, &RemarksPolicy::default()), None);
    }

    #[test]
    fn test_alternate_overtime_requires_remarks() {
        let mut record = make_record("", "");
        record.alternate_overtime_out = record.date.and_hms_opt(21, 0, 0);

        assert!(requires_remarks(&record));
        assert_eq!(
            check_remarks(&record, &RemarksPolicy::default()),
            Some(ViolationType::RemarksMissing)
        );
    }

    #[test]
    fn test_whitespace_remarks_count_as_missing() {
        let record = make_record("打刻修正", "  \u{3000} ");
        assert_eq!(
            check_remarks(&record, &RemarksPolicy::default()),
            Some(ViolationType::RemarksMissing)
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Five Japanese characters are fifteen bytes but meet the minimum.
        let record = make_record("直帰", "客先訪問後");
        assert_eq!(check_remarks(&record, &RemarksPolicy::default()), None);
    }

    #[test]
    fn test_sentence_mentioning_delay_does_not_require_remarks() {
        let record = make_record("電車の遅延はありません", "");
        assert!(!requires_remarks(&record));
    }
}
