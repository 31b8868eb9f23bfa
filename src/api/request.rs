//! Request types for the Compliance Validation Engine API.
//!
//! This module defines the JSON request structures for the `/validate`
//! endpoint.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::short_time;
use crate::models::{Shift, ShiftType};

/// Request body for the `/validate` endpoint.
///
/// Carries the full shift set of a draft schedule. When `employee_id` is
/// present only that employee is validated; otherwise every employee
/// referenced by the shifts is validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// The shifts of the draft schedule, in any order.
    pub shifts: Vec<ShiftRequest>,
    /// Optional single-employee scope.
    #[serde(default)]
    pub employee_id: Option<String>,
}

/// Shift information in a validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The assigned employee, if any.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// The start time of the shift ("HH:MM").
    #[serde(with = "short_time")]
    pub start_time: NaiveTime,
    /// The end time of the shift ("HH:MM").
    #[serde(with = "short_time")]
    pub end_time: NaiveTime,
    /// Unpaid break minutes.
    #[serde(default)]
    pub break_duration_minutes: i64,
    /// Optional scheduling tag.
    #[serde(default)]
    pub shift_type: Option<ShiftType>,
}

impl From<ShiftRequest> for Shift {
    fn from(req: ShiftRequest) -> Self {
        Shift {
            id: req.id,
            employee_id: req.employee_id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            break_duration_minutes: req.break_duration_minutes,
            shift_type: req.shift_type,
        }
    }
}
