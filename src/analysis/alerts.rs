//! 36-agreement overtime alert ladder.
//!
//! Monthly overtime is placed on an eight-step ladder with inclusive lower
//! bounds. The annual cap and the medical-guidance line are separate
//! verdicts.

use crate::models::{EmployeeIdentity, OvertimeAlertLevel, OvertimeAssessment};

const MINUTES_PER_HOUR: u32 = 60;

/// Standard monthly overtime limit under a 36-agreement (45 hours).
pub const MONTHLY_OVERTIME_LIMIT_MINUTES: u32 = 45 * MINUTES_PER_HOUR;

/// Annual overtime cap under a 36-agreement (360 hours).
pub const ANNUAL_OVERTIME_CAP_MINUTES: u32 = 360 * MINUTES_PER_HOUR;

/// Monthly overtime above which a physician interview is required (80 hours).
pub const MEDICAL_GUIDANCE_MINUTES: u32 = 80 * MINUTES_PER_HOUR;

/// Month length assumed by the pace check.
const PACE_MONTH_DAYS: u32 = 30;

/// Ladder thresholds, most severe first.
const ALERT_THRESHOLDS: [(u32, OvertimeAlertLevel); 7] = [
    (100 * MINUTES_PER_HOUR, OvertimeAlertLevel::Illegal),
    (80 * MINUTES_PER_HOUR, OvertimeAlertLevel::Critical),
    (70 * MINUTES_PER_HOUR, OvertimeAlertLevel::Severe),
    (65 * MINUTES_PER_HOUR, OvertimeAlertLevel::Serious),
    (55 * MINUTES_PER_HOUR, OvertimeAlertLevel::Caution),
    (45 * MINUTES_PER_HOUR, OvertimeAlertLevel::Exceeded),
    (35 * MINUTES_PER_HOUR, OvertimeAlertLevel::Warning),
];

/// Places a monthly overtime total on the alert ladder.
///
/// # Examples
///
/// ```
/// use attendance_engine::analysis::get_overtime_alert_level;
/// use attendance_engine::models::OvertimeAlertLevel;
///
/// assert_eq!(get_overtime_alert_level(2699), OvertimeAlertLevel::Warning);
/// assert_eq!(get_overtime_alert_level(2700), OvertimeAlertLevel::Exceeded);
/// assert_eq!(get_overtime_alert_level(6000), OvertimeAlertLevel::Illegal);
/// ```
pub fn get_overtime_alert_level(monthly_overtime_minutes: u32) -> OvertimeAlertLevel {
    ALERT_THRESHOLDS
        .iter()
        .find(|(threshold, _)| monthly_overtime_minutes >= *threshold)
        .map(|(_, level)| *level)
        .unwrap_or(OvertimeAlertLevel::Normal)
}

/// True if the month so far is ahead of a linear pace towards `limit_minutes`.
///
/// Pro-rates the limit over a 30-day month: the check is
/// `current > limit * day / 30`, evaluated without division.
pub fn is_overtime_on_pace_to_exceed(current_minutes: u32, day_of_month: u32, limit_minutes: u32) -> bool {
    u64::from(current_minutes) * u64::from(PACE_MONTH_DAYS)
        > u64::from(limit_minutes) * u64::from(day_of_month)
}

/// True if an annual total is past the 360-hour cap.
pub fn is_annual_overtime_exceeded(annual_overtime_minutes: u32) -> bool {
    annual_overtime_minutes > ANNUAL_OVERTIME_CAP_MINUTES
}

/// True if a monthly total is strictly past the 80-hour line.
pub fn needs_medical_guidance(monthly_overtime_minutes: u32) -> bool {
    monthly_overtime_minutes > MEDICAL_GUIDANCE_MINUTES
}

/// Optional inputs of an [`assess_overtime`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssessmentOptions {
    /// Day of the month reached so far, for the pace check.
    pub day_of_month: Option<u32>,
    /// Limit the pace check measures against; defaults to the 45-hour limit.
    pub limit_minutes: Option<u32>,
    /// Year-to-date overtime, for the annual check.
    pub annual_overtime_minutes: Option<u32>,
}

/// Bundles every ladder verdict for one monthly total.
///
/// # Example
///
/// ```
/// use attendance_engine::analysis::{AssessmentOptions, assess_overtime};
/// use attendance_engine::models::OvertimeAlertLevel;
///
/// let options = AssessmentOptions {
///     day_of_month: Some(15),
///     ..AssessmentOptions::default()
/// };
/// let assessment = assess_overtime(None, 1500, options);
///
/// assert_eq!(assessment.level, OvertimeAlertLevel::Normal);
/// assert_eq!(assessment.on_pace_to_exceed, Some(true));
/// assert_eq!(assessment.annual_exceeded, None);
/// ```
pub fn assess_overtime(
    employee: Option<EmployeeIdentity>,
    monthly_overtime_minutes: u32,
    options: AssessmentOptions,
) -> OvertimeAssessment {
    let limit = options.limit_minutes.unwrap_or(MONTHLY_OVERTIME_LIMIT_MINUTES);

    OvertimeAssessment {
        employee,
        monthly_overtime_minutes,
        level: get_overtime_alert_level(monthly_overtime_minutes),
        on_pace_to_exceed: options
            .day_of_month
            .map(|day| is_overtime_on_pace_to_exceed(monthly_overtime_minutes, day, limit)),
        annual_exceeded: options.annual_overtime_minutes.map(is_annual_overtime_exceeded),
        needs_medical_guidance: needs_medical_guidance(monthly_overtime_minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_lower_bounds_are_inclusive() {
        let cases = [
            (0, OvertimeAlertLevel::Normal),
            (2099, OvertimeAlertLevel::Normal),
            (2100, OvertimeAlertLevel::Warning),
            (2699, OvertimeAlertLevel::Warning),
            (2700, OvertimeAlertLevel::Exceeded),
            (3300, OvertimeAlertLevel::Caution),
            (3900, OvertimeAlertLevel::Serious),
            (4200, OvertimeAlertLevel::Severe),
            (4799, OvertimeAlertLevel::Severe),
            (4800, OvertimeAlertLevel::Critical),
            (5999, OvertimeAlertLevel::Critical),
            (6000, OvertimeAlertLevel::Illegal),
            (u32::MAX, OvertimeAlertLevel::Illegal),
        ];

        for (minutes, expected) in cases {
            assert_eq!(get_overtime_alert_level(minutes), expected, "minutes {}", minutes);
        }
    }

    #[test]
    fn test_thresholds_strictly_increase_in_severity() {
        for pair in ALERT_THRESHOLDS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
            assert!(pair[0].1 > pair[1].1);
        }
    }

    #[test]
    fn test_pace_is_pro_rated_over_thirty_days() {
        // Half the month: 22h30m is exactly on pace for 45h.
        assert!(!is_overtime_on_pace_to_exceed(1350, 15, 2700));
        assert!(is_overtime_on_pace_to_exceed(1351, 15, 2700));
    }

    #[test]
    fn test_pace_after_day_thirty() {
        assert!(!is_overtime_on_pace_to_exceed(2700, 31, 2700));
    }

    #[test]
    fn test_pace_does_not_overflow() {
        assert!(!is_overtime_on_pace_to_exceed(u32::MAX, u32::MAX, u32::MAX));
    }

    #[test]
    fn test_annual_cap_is_strict() {
        assert!(!is_annual_overtime_exceeded(21_600));
        assert!(is_annual_overtime_exceeded(21_601));
    }

    #[test]
    fn test_medical_guidance_is_strict() {
        assert!(!needs_medical_guidance(4800));
        assert!(needs_medical_guidance(4801));
    }

    #[test]
    fn test_assessment_with_all_options() {
        let options = AssessmentOptions {
            day_of_month: Some(20),
            limit_minutes: Some(3600),
            annual_overtime_minutes: Some(22_000),
        };
        let employee = EmployeeIdentity::new("E001", "Sato");
        let assessment = assess_overtime(Some(employee.clone()), 4900, options);

        assert_eq!(assessment.employee, Some(employee));
        assert_eq!(assessment.level, OvertimeAlertLevel::Critical);
        assert_eq!(assessment.on_pace_to_exceed, Some(true));
        assert_eq!(assessment.annual_exceeded, Some(true));
        assert!(assessment.needs_medical_guidance);
    }

    #[test]
    fn test_assessment_without_options_skips_optional_verdicts() {
        let assessment = assess_overtime(None, 0, AssessmentOptions::default());

        assert_eq!(assessment.level, OvertimeAlertLevel::Normal);
        assert_eq!(assessment.on_pace_to_exceed, None);
        assert_eq!(assessment.annual_exceeded, None);
        assert!(!assessment.needs_medical_guidance);
    }
}
