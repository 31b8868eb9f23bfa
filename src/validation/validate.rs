//! Orchestration of the working-time checkers.

use crate::config::ComplianceRules;
use crate::models::{Shift, Violation};

use super::daily_limits::check_daily_limits;
use super::grouping::shifts_for_employee;
use super::rest_periods::check_rest_periods;
use super::weekly_hours::check_weekly_hours;
use super::weekly_rest::check_weekly_rest;

/// Validates one employee's shifts against the full rule set.
///
/// Selects and sorts the employee's shifts, then runs the daily limits,
/// rest periods, weekly hours and weekly rest checkers in sequence,
/// concatenating their findings. An employee with no shifts yields an
/// empty list.
///
/// The function is pure: identical input always yields identical output,
/// and the shift list is never mutated.
///
/// # Example
///
/// ```
/// use compliance_engine::config::ComplianceRules;
/// use compliance_engine::validation::validate_employee;
///
/// let violations = validate_employee(&[], "emp_001", &ComplianceRules::default());
/// assert!(violations.is_empty());
/// ```
pub fn validate_employee(
    shifts: &[Shift],
    employee_id: &str,
    rules: &ComplianceRules,
) -> Vec<Violation> {
    let employee_shifts = shifts_for_employee(shifts, employee_id);
    if employee_shifts.is_empty() {
        return Vec::new();
    }

    let mut violations = Vec::new();
    for shift in &employee_shifts {
        violations.extend(check_daily_limits(shift, employee_id, rules));
    }
    violations.extend(check_rest_periods(&employee_shifts, employee_id, rules));
    violations.extend(check_weekly_hours(&employee_shifts, employee_id, rules));
    violations.extend(check_weekly_rest(&employee_shifts, employee_id, rules));

    violations
}

/// Validates every employee referenced in the shift set.
///
/// Iterates the distinct employee ids appearing on at least one shift and
/// concatenates the per-employee findings. Unassigned shifts never
/// participate in any check. No ordering is guaranteed across employees
/// or rule types; callers needing a display order must sort explicitly.
pub fn validate_all(shifts: &[Shift], rules: &ComplianceRules) -> Vec<Violation> {
    let mut employee_ids: Vec<&str> = Vec::new();
    for shift in shifts {
        if let Some(id) = shift.employee_id.as_deref() {
            if !employee_ids.contains(&id) {
                employee_ids.push(id);
            }
        }
    }

    employee_ids
        .iter()
        .flat_map(|id| validate_employee(shifts, id, rules))
        .collect()
}
