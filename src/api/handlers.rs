//! HTTP request handlers for the attendance compliance API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{analyze_daily_record, analyze_extended, assess_overtime};
use crate::models::AttendanceRecord;

use super::request::{AnalyzeRequest, OvertimeAlertRequest, validate_record};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze/daily", post(analyze_daily_handler))
        .route("/analyze", post(analyze_handler))
        .route("/alerts/overtime", post(overtime_alert_handler))
        .with_state(state)
}

/// Handler for POST /analyze/daily.
///
/// Classifies a single attendance record.
async fn analyze_daily_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily analysis request");

    let record = match payload {
        Ok(Json(record)) => record,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    if let Err(err) = validate_record(&record) {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid record");
        return ApiErrorResponse::from(err).into_response();
    }

    let analysis = analyze_daily_record(&record, state.policy());
    info!(
        correlation_id = %correlation_id,
        employee_id = %record.employee.id,
        date = %record.date,
        violations = analysis.violations.len(),
        "Daily analysis completed"
    );
    json_ok(analysis)
}

/// Handler for POST /analyze.
///
/// Runs the full-dataset analysis. When `as_of` is omitted, records dated
/// after today's local date are skipped.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing extended analysis request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    if let Err(err) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid analysis request");
        return ApiErrorResponse::from(err).into_response();
    }

    let as_of = request.as_of.unwrap_or_else(|| Local::now().date_naive());
    let start_time = Instant::now();
    let analysis = analyze_extended(&request.records, as_of, state.policy());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        as_of = %as_of,
        employees = analysis.summary.employee_count,
        violations = analysis.summary.total_violations,
        duration_us = duration.as_micros(),
        "Extended analysis completed"
    );
    json_ok(analysis)
}

/// Handler for POST /alerts/overtime.
///
/// Places a monthly overtime total on the 36-agreement alert ladder.
async fn overtime_alert_handler(
    payload: Result<Json<OvertimeAlertRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime alert request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let options = match request.options() {
        Ok(options) => options,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid alert request");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let assessment = assess_overtime(None, request.monthly_overtime_minutes, options);
    info!(
        correlation_id = %correlation_id,
        monthly_overtime_minutes = request.monthly_overtime_minutes,
        level = %assessment.level,
        "Overtime alert assessed"
    );
    json_ok(assessment)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a `400` error body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::missing_content_type()
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}
