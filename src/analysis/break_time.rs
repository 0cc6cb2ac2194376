//! Break-time compliance.
//!
//! Labour Standards Act art. 34: more than 6 hours of work requires a
//! 45-minute break, more than 8 hours a 60-minute break.

use crate::config::BreakPolicy;
use crate::models::LeaveType;

/// Worked minutes above which a 45-minute break is required.
pub const SHORT_BREAK_THRESHOLD_MINUTES: u32 = 6 * 60;

/// Worked minutes above which a 60-minute break is required.
pub const LONG_BREAK_THRESHOLD_MINUTES: u32 = 8 * 60;

/// Break required once past the short threshold.
pub const SHORT_BREAK_MINUTES: u32 = 45;

/// Break required once past the long threshold.
pub const LONG_BREAK_MINUTES: u32 = 60;

/// The outcome of a break check for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakCompliance {
    /// Break minutes used for the comparison, after vendor adjustments.
    pub actual_break_minutes: u32,
    /// Statutory minimum for the worked time.
    pub required_break_minutes: u32,
    /// The actual break is shorter than required.
    pub has_violation: bool,
}

/// Statutory minimum break for the given worked minutes.
///
/// # Examples
///
/// ```
/// use attendance_engine::analysis::required_break_minutes;
///
/// assert_eq!(required_break_minutes(360), 0);
/// assert_eq!(required_break_minutes(361), 45);
/// assert_eq!(required_break_minutes(480), 45);
/// assert_eq!(required_break_minutes(481), 60);
/// ```
pub fn required_break_minutes(actual_work_minutes: u32) -> u32 {
    if actual_work_minutes > LONG_BREAK_THRESHOLD_MINUTES {
        LONG_BREAK_MINUTES
    } else if actual_work_minutes > SHORT_BREAK_THRESHOLD_MINUTES {
        SHORT_BREAK_MINUTES
    } else {
        0
    }
}

/// Break minutes that count towards the statutory minimum.
///
/// On half-day leave the system inserts a short automatic break that is not
/// a meal break, so it counts as zero. On other days an auto-rounded break
/// above the cap is clamped to the cap.
pub fn effective_break_minutes(break_minutes: u32, leave_type: LeaveType, policy: &BreakPolicy) -> u32 {
    if leave_type.is_half_day() && break_minutes <= policy.half_day_auto_break_minutes {
        0
    } else {
        break_minutes.min(policy.auto_break_cap_minutes)
    }
}

/// Checks the recorded break against the statutory minimum.
///
/// # Example
///
/// ```
/// use attendance_engine::analysis::check_break_compliance;
/// use attendance_engine::config::BreakPolicy;
/// use attendance_engine::models::LeaveType;
///
/// let result = check_break_compliance(390, 30, LeaveType::None, &BreakPolicy::default());
/// assert_eq!(result.required_break_minutes, 45);
/// assert!(result.has_violation);
/// ```
pub fn check_break_compliance(
    actual_work_minutes: u32,
    break_minutes: u32,
    leave_type: LeaveType,
    policy: &BreakPolicy,
) -> BreakCompliance {
    let required = required_break_minutes(actual_work_minutes);
    let actual = effective_break_minutes(break_minutes, leave_type, policy);

    BreakCompliance {
        actual_break_minutes: actual,
        required_break_minutes: required,
        has_violation: actual_work_minutes > SHORT_BREAK_THRESHOLD_MINUTES && actual < required,
    }
}

/// Shorthand for [`check_break_compliance`]'s violation flag.
pub fn has_break_violation(
    actual_work_minutes: u32,
    break_minutes: u32,
    leave_type: LeaveType,
    policy: &BreakPolicy,
) -> bool {
    check_break_compliance(actual_work_minutes, break_minutes, leave_type, policy).has_violation
}
