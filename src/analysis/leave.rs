//! Leave classification from application content.

use crate::models::LeaveType;

use super::keywords::{
    AFTERNOON_MARKERS, FULL_DAY_LEAVE, HALF_DAY_LEAVE, MORNING_MARKERS, contains_marker,
};

/// Classifies the day's application content into a leave type.
///
/// Half-day phrases are checked first since they are the more specific. A
/// half day is afternoon only when an afternoon marker is present and no
/// morning marker is; otherwise it is morning.
///
/// # Examples
///
/// ```
/// use attendance_engine::analysis::classify_leave;
/// use attendance_engine::models::LeaveType;
///
/// assert_eq!(classify_leave("有給休暇(承認済)"), LeaveType::FullDay);
/// assert_eq!(classify_leave("半休(午後)"), LeaveType::HalfDayPm);
/// assert_eq!(classify_leave("半休"), LeaveType::HalfDayAm);
/// assert_eq!(classify_leave("遅刻申請"), LeaveType::None);
/// ```
pub fn classify_leave(application: &str) -> LeaveType {
    if HALF_DAY_LEAVE.matches(application) {
        let afternoon = contains_marker(application, AFTERNOON_MARKERS);
        let morning = contains_marker(application, MORNING_MARKERS);
        return if afternoon && !morning {
            LeaveType::HalfDayPm
        } else {
            LeaveType::HalfDayAm
        };
    }

    if FULL_DAY_LEAVE.matches(application) {
        return LeaveType::FullDay;
    }

    LeaveType::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_day_leave_kinds() {
        for text in [
            "有給休暇",
            "欠勤",
            "特別休暇",
            "生理休暇",
            "介護休暇",
            "子の看護休暇",
            "明け休",
            "代休【承認済】",
        ] {
            assert_eq!(classify_leave(text), LeaveType::FullDay, "input {}", text);
        }
    }

    #[test]
    fn test_half_day_morning_variants() {
        assert_eq!(classify_leave("午前半休"), LeaveType::HalfDayAm);
        assert_eq!(classify_leave("AM半休"), LeaveType::HalfDayAm);
        assert_eq!(classify_leave("半休(午前)"), LeaveType::HalfDayAm);
    }

    #[test]
    fn test_half_day_afternoon_variants() {
        assert_eq!(classify_leave("午後半休"), LeaveType::HalfDayPm);
        assert_eq!(classify_leave("PM半休"), LeaveType::HalfDayPm);
        assert_eq!(classify_leave("半日有給(午後)"), LeaveType::HalfDayPm);
    }

    #[test]
    fn test_ambiguous_half_day_defaults_to_morning() {
        assert_eq!(classify_leave("半休"), LeaveType::HalfDayAm);
        assert_eq!(classify_leave("半休(午前・午後)"), LeaveType::HalfDayAm);
    }

    #[test]
    fn test_half_day_wins_over_full_day() {
        assert_eq!(classify_leave("有給休暇,午後半休"), LeaveType::HalfDayPm);
    }

    #[test]
    fn test_sentences_mentioning_leave_are_not_leave() {
        assert_eq!(classify_leave("有給休暇は来週取得予定"), LeaveType::None);
        assert_eq!(classify_leave("半休なし"), LeaveType::None);
    }

    #[test]
    fn test_empty_application_is_none() {
        assert_eq!(classify_leave(""), LeaveType::None);
    }
}
