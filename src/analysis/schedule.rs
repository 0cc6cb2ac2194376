//! Schedule-time resolution.
//!
//! The expected start of a working day is never a structured field; it is
//! inferred from free text. In order of precedence:
//!
//! 1. a time range in the day's application content, e.g.
//!    `"残業終了,900-1730/承認済"` or `"9:00-17:30"`;
//! 2. a time range in the source sheet label, e.g.
//!    `"KDDI_日勤_800-1630～930-1800_2025年10月"` (the first of a dual
//!    schedule wins);
//! 3. nothing, in which case callers use the policy's standard start.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::config::SchedulePolicy;

/// `HMM-HMM` or `H:MM-H:MM`, not preceded by a digit. The trailing boundary
/// is checked in [`first_range_start`] so the delimiter after a range stays
/// available to the next match.
static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])([0-9]{1,2}):?([0-9]{2})[-－]([0-9]{1,2}):?([0-9]{2})")
        .expect("time range pattern is valid")
});

/// Separators between the two schedules of a dual-schedule sheet.
const DUAL_SCHEDULE_SEPARATORS: &[char] = &['～', '〜', '~'];

/// The text fields a schedule can be inferred from.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleHints<'a> {
    /// The day's application content.
    pub application: &'a str,
    /// The source sheet label.
    pub sheet_label: &'a str,
}

type ScheduleSource = fn(&ScheduleHints<'_>) -> Option<NaiveTime>;

/// Resolution sources in precedence order; the first hit wins.
const SCHEDULE_SOURCES: [ScheduleSource; 2] = [from_application, from_sheet_label];

/// Resolves the expected start from application text, then the sheet label.
///
/// Returns `None` when neither names a valid time range.
///
/// # Examples
///
/// ```
/// use attendance_engine::analysis::resolve_expected_start;
/// use chrono::NaiveTime;
///
/// let start = resolve_expected_start("残業終了,900-1730/承認済", "日勤_800-1630");
/// assert_eq!(start, NaiveTime::from_hms_opt(9, 0, 0));
///
/// let start = resolve_expected_start("", "KDDI_日勤_800-1630～930-1800_2025年10月");
/// assert_eq!(start, NaiveTime::from_hms_opt(8, 0, 0));
///
/// assert_eq!(resolve_expected_start("遅刻申請", "本社"), None);
/// ```
pub fn resolve_expected_start(application: &str, sheet_label: &str) -> Option<NaiveTime> {
    let hints = ScheduleHints {
        application,
        sheet_label,
    };
    SCHEDULE_SOURCES.iter().find_map(|source| source(&hints))
}

/// Resolves the expected start, falling back to the policy's standard start.
pub fn expected_start_or_default(
    application: &str,
    sheet_label: &str,
    policy: &SchedulePolicy,
) -> NaiveTime {
    resolve_expected_start(application, sheet_label).unwrap_or(policy.standard_start)
}

fn from_application(hints: &ScheduleHints<'_>) -> Option<NaiveTime> {
    first_range_start(hints.application)
}

fn from_sheet_label(hints: &ScheduleHints<'_>) -> Option<NaiveTime> {
    sheet_label_start(hints.sheet_label)
}

/// Start of the first schedule named in a sheet label.
///
/// Labels are hyphen- or underscore-delimited; a dual schedule is written
/// with `～` between its two ranges.
pub fn sheet_label_start(sheet_label: &str) -> Option<NaiveTime> {
    sheet_label
        .split(DUAL_SCHEDULE_SEPARATORS)
        .find_map(first_range_start)
}

/// Start of the first valid time range in `text`.
fn first_range_start(text: &str) -> Option<NaiveTime> {
    TIME_RANGE.captures_iter(text).find_map(|caps| {
        let end = caps.get(0)?.end();
        if text[end..].starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let hour = caps.get(1)?.as_str().parse().ok()?;
        let minute = caps.get(2)?.as_str().parse().ok()?;
        let end_hour: u32 = caps.get(3)?.as_str().parse().ok()?;
        let end_minute: u32 = caps.get(4)?.as_str().parse().ok()?;
        // End may run past midnight on night shifts; only its minutes are checked.
        if end_hour > 47 || end_minute > 59 {
            return None;
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
    })
}
