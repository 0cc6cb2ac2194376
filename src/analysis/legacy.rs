//! Carve-outs for artifacts of the legacy roster system.
//!
//! Each quirk is a single named predicate so it can be audited and removed
//! on its own once the upstream data is fixed.

use chrono::{NaiveTime, Timelike};

use crate::models::AttendanceRecord;

use super::schedule::sheet_label_start;

/// Late minutes the legacy roster reports for a 9:00 arrival on an 8:00 sheet.
pub const LEGACY_PHANTOM_LATE_MINUTES: u32 = 60;

/// The legacy roster assigns an 8:00 calendar to sheets whose staff actually
/// start at 9:00 on days without an explicit schedule, producing exactly
/// 60 late minutes for an on-time arrival.
///
/// True when all of these hold:
/// - the late value is exactly 60 minutes;
/// - the sheet label names an 8:00 start;
/// - the original clock-in column is filled (no explicit schedule that day);
/// - the calculated clock-in hour is 9.
pub fn is_eight_oclock_sheet_phantom_late(record: &AttendanceRecord, late_minutes: u32) -> bool {
    late_minutes == LEGACY_PHANTOM_LATE_MINUTES
        && sheet_label_start(&record.sheet_label) == NaiveTime::from_hms_opt(8, 0, 0)
        && record.original_clock_in.is_some()
        && record.clock_in.is_some_and(|clock_in| clock_in.hour() == 9)
}

/// Late minutes after removing legacy artifacts.
pub fn adjusted_late_minutes(record: &AttendanceRecord, late_minutes: u32) -> u32 {
    if is_eight_oclock_sheet_phantom_late(record, late_minutes) {
        0
    } else {
        late_minutes
    }
}
