//! Violation model and related types.
//!
//! This module defines the structured findings produced by the validation
//! engine. Violations are derived data: created fresh on every validation
//! call, never persisted, never mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed taxonomy of working-time rule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// A single shift exceeds the daily hours limit.
    MaxDailyHours,
    /// A night shift exceeds the night hours limit.
    MaxNightHours,
    /// The rest between two consecutive shifts is below the minimum.
    MinDailyRest,
    /// An employee's summed hours in one week bucket exceed the limit.
    MaxWeeklyHours,
    /// A 7-day window contains no full rest day.
    MinWeeklyRest,
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViolationType::MaxDailyHours => "max_daily_hours",
            ViolationType::MaxNightHours => "max_night_hours",
            ViolationType::MinDailyRest => "min_daily_rest",
            ViolationType::MaxWeeklyHours => "max_weekly_hours",
            ViolationType::MinWeeklyRest => "min_weekly_rest",
        };
        f.write_str(s)
    }
}

/// Classification of a violation as blocking or advisory.
///
/// Modelled as a closed enum rather than a boolean so future severities
/// can be added without breaking callers that match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks publication of the schedule.
    Error,
    /// Advisory only; does not block publication.
    Warning,
}

impl Severity {
    /// Returns whether this severity blocks schedule publication.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

/// A structured finding that a shift or group of shifts breaches a
/// working-time rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Which rule was breached.
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    /// Whether the violation blocks publication.
    pub severity: Severity,
    /// Human-readable description including the values that triggered it.
    pub message: String,
    /// The affected employee.
    pub employee_id: String,
    /// The proximate shift, when a single shift or shift pair is the
    /// cause. Absent for whole-week aggregate violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_id: Option<String>,
    /// Reference to the statutory article defining the rule.
    pub article_ref: String,
}
