//! Attendance compliance analysis engine.
//!
//! This crate analyzes daily time-clock records against Japanese labour rules
//! and company policy: break compliance, overtime against the contracted and
//! statutory day, missing or unapproved applications, and the 36-agreement
//! overtime alert ladder. Results are aggregated per employee, per
//! department and per dataset.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
