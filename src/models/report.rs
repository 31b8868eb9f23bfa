//! Validation report aggregate.
//!
//! Wraps a set of violations with the derived counts and the publish gate
//! consumed by the schedule workflow.

use serde::{Deserialize, Serialize};

use super::violation::Violation;

/// Counts of violations by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationTotals {
    /// Number of blocking violations.
    pub errors: usize,
    /// Number of advisory violations.
    pub warnings: usize,
}

/// The aggregate result of validating a shift set.
///
/// `can_publish` is the go/no-go gate: true iff no violation has blocking
/// severity. Warnings are advisory and never block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// All violations found, in checker order per employee.
    pub violations: Vec<Violation>,
    /// Violation counts by severity.
    pub totals: ViolationTotals,
    /// Whether the schedule may transition to the published state.
    pub can_publish: bool,
}

impl ValidationReport {
    /// Builds a report from a violation list, deriving totals and the
    /// publish gate.
    pub fn new(violations: Vec<Violation>) -> Self {
        let errors = violations
            .iter()
            .filter(|v| v.severity.is_blocking())
            .count();
        let warnings = violations.len() - errors;

        ValidationReport {
            can_publish: errors == 0,
            totals: ViolationTotals { errors, warnings },
            violations,
        }
    }
}
