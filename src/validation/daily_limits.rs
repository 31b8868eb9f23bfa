//! Single-shift daily limit checks.
//!
//! This module evaluates the two per-shift rules: the daily hours limit
//! and the stricter night-shift hours limit. Both checks are independent,
//! so one long night shift can produce two violations.

use crate::config::ComplianceRules;
use crate::models::{Severity, Shift, ShiftType, Violation, ViolationType};

/// Checks a single shift against the daily and night hour limits.
///
/// Emits `max_daily_hours` when the worked duration exceeds the daily
/// limit, and additionally `max_night_hours` when the shift is tagged
/// `night` and exceeds the night-work limit. Comparisons are strict:
/// a shift exactly at a limit is compliant.
///
/// # Example
///
/// ```
/// use compliance_engine::config::ComplianceRules;
/// use compliance_engine::models::{Shift, ShiftType, ViolationType};
/// use compliance_engine::validation::check_daily_limits;
/// use chrono::{NaiveDate, NaiveTime};
///
/// // 14 hours on a night shift breaks both the 12h and the 8h limit.
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     employee_id: Some("emp_001".to_string()),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     start_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
///     break_duration_minutes: 0,
///     shift_type: Some(ShiftType::Night),
/// };
///
/// let violations = check_daily_limits(&shift, "emp_001", &ComplianceRules::default());
/// assert_eq!(violations.len(), 2);
/// assert_eq!(violations[0].violation_type, ViolationType::MaxDailyHours);
/// assert_eq!(violations[1].violation_type, ViolationType::MaxNightHours);
/// ```
pub fn check_daily_limits(
    shift: &Shift,
    employee_id: &str,
    rules: &ComplianceRules,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let duration_hours = shift.worked_hours();
    let limits = rules.limits();

    if duration_hours > limits.max_daily_hours.hours {
        violations.push(Violation {
            violation_type: ViolationType::MaxDailyHours,
            severity: Severity::Error,
            message: format!(
                "Shift exceeds the {}h daily limit ({:.1}h worked). {}.",
                limits.max_daily_hours.hours, duration_hours, limits.max_daily_hours.article
            ),
            employee_id: employee_id.to_string(),
            shift_id: Some(shift.id.clone()),
            article_ref: limits.max_daily_hours.article.clone(),
        });
    }

    if shift.shift_type == Some(ShiftType::Night) && duration_hours > limits.max_night_hours.hours {
        violations.push(Violation {
            violation_type: ViolationType::MaxNightHours,
            severity: Severity::Error,
            message: format!(
                "Night shift exceeds the {}h night-work limit ({:.1}h worked). {}.",
                limits.max_night_hours.hours, duration_hours, limits.max_night_hours.article
            ),
            employee_id: employee_id.to_string(),
            shift_id: Some(shift.id.clone()),
            article_ref: limits.max_night_hours.article.clone(),
        });
    }

    violations
}
