//! Per-employee shift selection and ordering.

use crate::models::Shift;

/// Returns the shifts belonging to one employee, sorted chronologically.
///
/// Ordering is ascending by `(date, start_time)`, which the sequential
/// rest check depends on. Unassigned shifts never match.
///
/// # Example
///
/// ```
/// use compliance_engine::models::Shift;
/// use compliance_engine::validation::shifts_for_employee;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     employee_id: Some("emp_001".to_string()),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     break_duration_minutes: 0,
///     shift_type: None,
/// };
/// let shifts = vec![shift];
/// assert_eq!(shifts_for_employee(&shifts, "emp_001").len(), 1);
/// assert!(shifts_for_employee(&shifts, "emp_002").is_empty());
/// ```
pub fn shifts_for_employee<'a>(shifts: &'a [Shift], employee_id: &str) -> Vec<&'a Shift> {
    let mut selected: Vec<&Shift> = shifts
        .iter()
        .filter(|s| s.employee_id.as_deref() == Some(employee_id))
        .collect();

    selected.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });

    selected
}
