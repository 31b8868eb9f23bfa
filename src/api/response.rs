//! Response types for the Compliance Validation Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ValidationReport, Violation, ViolationTotals};

/// Response body for a successful `/validate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Unique identifier for this validation run.
    pub validation_id: Uuid,
    /// The version of the engine that performed the validation.
    pub engine_version: String,
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Violation counts by severity.
    pub totals: ViolationTotals,
    /// Whether the schedule may be published.
    pub can_publish: bool,
}

impl ValidationResponse {
    /// Wraps a validation report with run metadata.
    pub fn from_report(report: ValidationReport) -> Self {
        Self {
            validation_id: Uuid::new_v4(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            violations: report.violations,
            totals: report.totals,
            can_publish: report.can_publish,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}
