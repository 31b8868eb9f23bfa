//! Minimum rest between consecutive shifts.

use rust_decimal::Decimal;

use crate::config::ComplianceRules;
use crate::models::{Severity, Shift, Violation, ViolationType};

/// Checks each adjacent pair of an employee's chronologically sorted
/// shifts for the minimum uninterrupted rest.
///
/// The rest interval runs from the midnight-aware end instant of one
/// shift to the start instant of the next. A violation is attributed to
/// the later shift of the pair (the one that started too soon).
///
/// A negative interval means the pair overlaps or is out of order; such
/// pairs are skipped rather than reported, so overlapping input produces
/// no rest finding.
pub fn check_rest_periods(
    shifts: &[&Shift],
    employee_id: &str,
    rules: &ComplianceRules,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let limit = &rules.limits().min_daily_rest;

    for pair in shifts.windows(2) {
        let rest_minutes = (pair[1].start_datetime() - pair[0].end_datetime()).num_minutes();
        let rest_hours = Decimal::new(rest_minutes, 0) / Decimal::new(60, 0);

        if rest_hours >= Decimal::ZERO && rest_hours < limit.hours {
            violations.push(Violation {
                violation_type: ViolationType::MinDailyRest,
                severity: Severity::Error,
                message: format!(
                    "Rest between shifts is {:.1}h (minimum {}h). {}.",
                    rest_hours, limit.hours, limit.article
                ),
                employee_id: employee_id.to_string(),
                shift_id: Some(pair[1].id.clone()),
                article_ref: limit.article.clone(),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_shift(id: &str, date: &str, start: &str, end: &str) -> Shift {
        Shift {
            id: id.to_string(),
            employee_id: Some("emp_001".to_string()),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            break_duration_minutes: 0,
            shift_type: None,
        }
    }

    fn check(shifts: &[Shift]) -> Vec<Violation> {
        let refs: Vec<&Shift> = shifts.iter().collect();
        check_rest_periods(&refs, "emp_001", &ComplianceRules::default())
    }

    // ==========================================================================
    // MDR-001: 9 hours rest - violation attributed to the later shift
    // ==========================================================================
    #[test]
    fn test_mdr_001_9_hours_rest_is_a_violation() {
        let shifts = vec![
            make_shift("shift_a", "2026-01-15", "14:00", "22:00"),
            make_shift("shift_b", "2026-01-16", "07:00", "15:00"),
        ];

        let violations = check(&shifts);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, ViolationType::MinDailyRest);
        assert_eq!(violations[0].severity, Severity::Error);
        assert_eq!(violations[0].shift_id, Some("shift_b".to_string()));
        assert_eq!(violations[0].article_ref, "Art. 132 KP");
        assert!(violations[0].message.contains("9.0h"));
    }

    // ==========================================================================
    // MDR-002: exactly 11 hours rest - compliant
    // ==========================================================================
    #[test]
    fn test_mdr_002_exactly_11_hours_rest_is_compliant() {
        let shifts = vec![
            make_shift("shift_a", "2026-01-15", "14:00", "22:00"),
            make_shift("shift_b", "2026-01-16", "09:00", "17:00"),
        ];

        assert!(check(&shifts).is_empty());
    }

    // ==========================================================================
    // MDR-003: rest measured from the midnight-aware end of an overnight shift
    // ==========================================================================
    #[test]
    fn test_mdr_003_overnight_shift_end_is_midnight_aware() {
        // Ends 06:00 on the 16th; next start 14:00 on the 16th is 8h later.
        let shifts = vec![
            make_shift("shift_a", "2026-01-15", "22:00", "06:00"),
            make_shift("shift_b", "2026-01-16", "14:00", "22:00"),
        ];

        let violations = check(&shifts);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].shift_id, Some("shift_b".to_string()));
        assert!(violations[0].message.contains("8.0h"));
    }

    // ==========================================================================
    // MDR-004: overlapping pair (negative rest) is skipped
    // ==========================================================================
    #[test]
    fn test_mdr_004_overlapping_shifts_are_skipped() {
        let shifts = vec![
            make_shift("shift_a", "2026-01-15", "09:00", "18:00"),
            make_shift("shift_b", "2026-01-15", "16:00", "23:00"),
        ];

        assert!(check(&shifts).is_empty());
    }

    // ==========================================================================
    // MDR-005: zero rest (back-to-back shifts) is a violation
    // ==========================================================================
    #[test]
    fn test_mdr_005_back_to_back_shifts_violate() {
        let shifts = vec![
            make_shift("shift_a", "2026-01-15", "06:00", "14:00"),
            make_shift("shift_b", "2026-01-15", "14:00", "22:00"),
        ];

        let violations = check(&shifts);

        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("0.0h"));
    }

    // ==========================================================================
    // MDR-006: three shifts, two short gaps - two violations
    // ==========================================================================
    #[test]
    fn test_mdr_006_each_adjacent_pair_is_checked() {
        let shifts = vec![
            make_shift("shift_a", "2026-01-15", "06:00", "14:00"),
            make_shift("shift_b", "2026-01-15", "20:00", "23:00"),
            make_shift("shift_c", "2026-01-16", "06:00", "14:00"),
        ];

        let violations = check(&shifts);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].shift_id, Some("shift_b".to_string()));
        assert_eq!(violations[1].shift_id, Some("shift_c".to_string()));
    }

    #[test]
    fn test_single_shift_has_no_pairs() {
        let shifts = vec![make_shift("shift_a", "2026-01-15", "09:00", "17:00")];
        assert!(check(&shifts).is_empty());
    }
}
