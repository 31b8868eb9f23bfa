//! Weekly hour aggregation.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::ComplianceRules;
use crate::models::{Severity, Shift, Violation, ViolationType};

/// Returns the week bucket key for a date.
///
/// Week 1 is ordinal days 1-7 of the year, week 2 is days 8-14, and so
/// on. This is the scheduling app's historical bucketing, not ISO-8601
/// week numbering: buckets do not start on Monday, and a week spanning a
/// year boundary splits into two buckets.
///
/// # Example
///
/// ```
/// use compliance_engine::validation::week_key;
/// use chrono::NaiveDate;
///
/// assert_eq!(week_key(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()), "2026-W1");
/// assert_eq!(week_key(NaiveDate::from_ymd_opt(2026, 1, 8).unwrap()), "2026-W2");
/// ```
pub fn week_key(date: NaiveDate) -> String {
    let day_of_year = i64::from(date.ordinal());
    format!("{}-W{}", date.year(), (day_of_year + 6) / 7)
}

/// Sums an employee's worked hours per week bucket and reports buckets
/// over the weekly limit.
///
/// Aggregate violations carry no shift id: the whole bucket is the cause.
pub fn check_weekly_hours(
    shifts: &[&Shift],
    employee_id: &str,
    rules: &ComplianceRules,
) -> Vec<Violation> {
    let limit = &rules.limits().max_weekly_hours;

    let mut weekly_hours: BTreeMap<String, Decimal> = BTreeMap::new();
    for shift in shifts {
        *weekly_hours.entry(week_key(shift.date)).or_default() += shift.worked_hours();
    }

    weekly_hours
        .iter()
        .filter(|(_, hours)| **hours > limit.hours)
        .map(|(week, hours)| Violation {
            violation_type: ViolationType::MaxWeeklyHours,
            severity: Severity::Error,
            message: format!(
                "Week {}: {:.1}h exceeds the {}h weekly limit. {}.",
                week, hours, limit.hours, limit.article
            ),
            employee_id: employee_id.to_string(),
            shift_id: None,
            article_ref: limit.article.clone(),
        })
        .collect()
}
