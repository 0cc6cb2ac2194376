//! Attendance record model.
//!
//! This module defines [`AttendanceRecord`], one employee's normalized
//! time-clock row for a single calendar day, together with the
//! [`EmployeeIdentity`] and [`CalendarType`] types it is built from.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Identifies the employee a record, violation or summary belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeIdentity {
    /// Employee number.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Department the employee is assigned to, if known.
    #[serde(default)]
    pub department: Option<String>,
    /// Position or job title, if known.
    #[serde(default)]
    pub position: Option<String>,
}

impl EmployeeIdentity {
    /// Creates an identity with only an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: None,
            position: None,
        }
    }

    /// Sets the department, returning the updated identity.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}

/// Calendar classification of a day, resolved by the ingestion layer.
///
/// # Example
///
/// ```
/// use attendance_engine::models::CalendarType;
///
/// assert!(CalendarType::StatutoryHoliday.is_holiday());
/// assert!(!CalendarType::Weekday.is_holiday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarType {
    /// Ordinary working day.
    #[default]
    Weekday,
    /// Statutory rest day (法定休日).
    StatutoryHoliday,
    /// Company rest day that is not the statutory one (所定休日).
    NonStatutoryHoliday,
}

impl CalendarType {
    /// Returns true for either kind of holiday.
    pub fn is_holiday(self) -> bool {
        !matches!(self, CalendarType::Weekday)
    }
}

impl std::fmt::Display for CalendarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarType::Weekday => write!(f, "weekday"),
            CalendarType::StatutoryHoliday => write!(f, "statutory holiday"),
            CalendarType::NonStatutoryHoliday => write!(f, "non-statutory holiday"),
        }
    }
}

/// One employee's attendance for one calendar day.
///
/// Duration fields (`night_work_hours`, `actual_work_hours`, `overtime_hours`,
/// `late_time`, `early_leave_time`) hold `"H:MM"` text exactly as exported by
/// the timekeeping system; the engine parses them and treats empty or
/// malformed text as zero.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, CalendarType, EmployeeIdentity};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord::new(
///     EmployeeIdentity::new("E001", "Sato"),
///     NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
/// );
/// assert_eq!(record.calendar_type, CalendarType::Weekday);
/// assert_eq!(record.day_of_week, "水");
/// assert!(!record.has_punch());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee: EmployeeIdentity,
    /// Calendar date of the record.
    pub date: NaiveDate,
    /// Day-of-week label as shown on the sheet.
    #[serde(default)]
    pub day_of_week: String,
    /// Resolved calendar classification.
    #[serde(default)]
    pub calendar_type: CalendarType,
    /// Raw calendar label text.
    #[serde(default)]
    pub calendar_label: String,
    /// Free-text application content for the day.
    #[serde(default)]
    pub application_content: String,
    /// Calculated clock-in.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// Calculated clock-out.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Raw clock-in punch before schedule calculation.
    #[serde(default)]
    pub original_clock_in: Option<NaiveDateTime>,
    /// Raw clock-out punch before schedule calculation.
    #[serde(default)]
    pub original_clock_out: Option<NaiveDateTime>,
    /// Set when an early start was approved in the timekeeping system.
    #[serde(default)]
    pub early_start: bool,
    /// Alternate overtime clock-in.
    #[serde(default)]
    pub alternate_overtime_in: Option<NaiveDateTime>,
    /// Alternate overtime clock-out.
    #[serde(default)]
    pub alternate_overtime_out: Option<NaiveDateTime>,
    /// Private outing departure (hourly leave).
    #[serde(default)]
    pub private_outing_out: Option<NaiveDateTime>,
    /// Private outing return (hourly leave).
    #[serde(default)]
    pub private_outing_return: Option<NaiveDateTime>,
    /// Recorded break, in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Night-work break adjustment entry.
    #[serde(default)]
    pub night_break_adjustment: String,
    /// Night-work time, `"H:MM"`.
    #[serde(default)]
    pub night_work_hours: String,
    /// Actual worked time, `"H:MM"`.
    #[serde(default)]
    pub actual_work_hours: String,
    /// Overtime as computed by the legacy system, `"H:MM"`.
    #[serde(default)]
    pub overtime_hours: String,
    /// Late-arrival time, `"H:MM"`.
    #[serde(default)]
    pub late_time: String,
    /// Early-leave time, `"H:MM"`.
    #[serde(default)]
    pub early_leave_time: String,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: String,
    /// Source sheet label, used as a secondary schedule hint.
    #[serde(default)]
    pub sheet_label: String,
}

impl AttendanceRecord {
    /// Creates an empty weekday record for the given employee and date.
    ///
    /// Every optional field starts empty; the day-of-week label is derived
    /// from the date.
    pub fn new(employee: EmployeeIdentity, date: NaiveDate) -> Self {
        Self {
            employee,
            date,
            day_of_week: weekday_label(date.weekday()).to_string(),
            calendar_type: CalendarType::Weekday,
            calendar_label: String::new(),
            application_content: String::new(),
            clock_in: None,
            clock_out: None,
            original_clock_in: None,
            original_clock_out: None,
            early_start: false,
            alternate_overtime_in: None,
            alternate_overtime_out: None,
            private_outing_out: None,
            private_outing_return: None,
            break_minutes: 0,
            night_break_adjustment: String::new(),
            night_work_hours: String::new(),
            actual_work_hours: String::new(),
            overtime_hours: String::new(),
            late_time: String::new(),
            early_leave_time: String::new(),
            remarks: String::new(),
            sheet_label: String::new(),
        }
    }

    /// Returns true if either the clock-in or the clock-out is present.
    pub fn has_punch(&self) -> bool {
        self.clock_in.is_some() || self.clock_out.is_some()
    }

    /// Returns true if any alternate-overtime timestamp is present.
    pub fn has_alternate_overtime(&self) -> bool {
        self.alternate_overtime_in.is_some() || self.alternate_overtime_out.is_some()
    }
}

/// Japanese single-character weekday label used on timekeeping sheets.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}
