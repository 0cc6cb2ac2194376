//! HTTP API module for the attendance compliance engine.
//!
//! This module provides the REST API endpoints for daily classification,
//! full-dataset analysis and overtime alerts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnalyzeRequest, OvertimeAlertRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
