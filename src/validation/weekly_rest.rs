//! Rest-day scan over 7-day windows.

use chrono::Days;

use crate::config::ComplianceRules;
use crate::models::{Severity, Shift, Violation, ViolationType};

/// Scans 7-calendar-day windows over an employee's distinct work dates
/// and reports windows with no full rest day.
///
/// For every distinct date that can start a full window, the shifts whose
/// date falls in `[start, start + 7 days)` are counted; a count of exactly
/// 7 means each day of the window is worked with no spare day. This is a
/// dense-window approximation of the statutory uninterrupted weekly rest,
/// so it reports a warning, not an error.
pub fn check_weekly_rest(
    shifts: &[&Shift],
    employee_id: &str,
    rules: &ComplianceRules,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let limit = &rules.limits().min_weekly_rest;

    let mut dates: Vec<_> = shifts.iter().map(|s| s.date).collect();
    dates.sort();
    dates.dedup();

    if dates.len() < 7 {
        return violations;
    }

    for window_start in &dates[..=dates.len() - 7] {
        let window_end = *window_start + Days::new(7);
        let worked = shifts
            .iter()
            .filter(|s| s.date >= *window_start && s.date < window_end)
            .count();

        if worked == 7 {
            violations.push(Violation {
                violation_type: ViolationType::MinWeeklyRest,
                severity: Severity::Warning,
                message: format!(
                    "No rest day in the 7-day window starting {}. At least {}h of weekly rest is required. {}.",
                    window_start, limit.hours, limit.article
                ),
                employee_id: employee_id.to_string(),
                shift_id: None,
                article_ref: limit.article.clone(),
            });
        }
    }

    violations
}
