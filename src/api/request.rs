//! Request types for the attendance compliance API.
//!
//! `/analyze/daily` takes a bare [`AttendanceRecord`]; the other endpoints
//! take the structures defined here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::AssessmentOptions;
use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;

/// Request body for the `/analyze` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Every record of the dataset, in any order.
    pub records: Vec<AttendanceRecord>,
    /// Records dated after this day are skipped; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl AnalyzeRequest {
    /// Rejects records that cannot be attributed to an employee.
    pub fn validate(&self) -> EngineResult<()> {
        self.records.iter().try_for_each(validate_record)
    }
}

/// Request body for the `/alerts/overtime` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeAlertRequest {
    /// Overtime minutes accumulated this month.
    pub monthly_overtime_minutes: u32,
    /// Day of the month reached, for the pace check.
    #[serde(default)]
    pub day_of_month: Option<u32>,
    /// Limit the pace check measures against.
    #[serde(default)]
    pub limit_minutes: Option<u32>,
    /// Year-to-date overtime minutes, for the annual check.
    #[serde(default)]
    pub annual_overtime_minutes: Option<u32>,
}

impl OvertimeAlertRequest {
    /// Validates the optional inputs and converts them to assessment options.
    pub fn options(&self) -> EngineResult<AssessmentOptions> {
        if let Some(day) = self.day_of_month {
            if !(1..=31).contains(&day) {
                return Err(EngineError::InvalidInput {
                    field: "day_of_month".to_string(),
                    message: format!("must be between 1 and 31, got {}", day),
                });
            }
        }
        if self.limit_minutes == Some(0) {
            return Err(EngineError::InvalidInput {
                field: "limit_minutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(AssessmentOptions {
            day_of_month: self.day_of_month,
            limit_minutes: self.limit_minutes,
            annual_overtime_minutes: self.annual_overtime_minutes,
        })
    }
}

/// Rejects a record without an employee id.
pub fn validate_record(record: &AttendanceRecord) -> EngineResult<()> {
    if record.employee.id.trim().is_empty() {
        return Err(EngineError::InvalidInput {
            field: "employee.id".to_string(),
            message: format!("record for {} has an empty employee id", record.date),
        });
    }
    Ok(())
}
