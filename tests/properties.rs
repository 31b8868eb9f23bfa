//! Property tests for the Compliance Validation Engine.
//!
//! These properties pin down the engine's contract over arbitrary shift
//! sets: repeated calls agree, unassigned shifts never contribute, the
//! whole-schedule validation is the concatenation of the per-employee
//! validations, and only error severity blocks publication.

use chrono::{Days, NaiveDate, NaiveTime};
use proptest::prelude::*;

use compliance_engine::config::ComplianceRules;
use compliance_engine::models::{Shift, ShiftType, ValidationReport, Violation};
use compliance_engine::validation::{validate_all, validate_employee};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
}

prop_compose! {
    fn arb_shift()(
        employee in prop::option::of(0..4u8),
        day_offset in 0..21u64,
        start_quarter in 0..96u32,
        end_quarter in 0..96u32,
        break_minutes in 0..90i64,
        night in any::<bool>(),
    ) -> Shift {
        let to_time = |quarter: u32| {
            let minute = quarter * 15;
            NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap()
        };
        Shift {
            id: String::new(), // assigned after collection
            employee_id: employee.map(|e| format!("emp_{:03}", e)),
            date: base_date() + Days::new(day_offset),
            start_time: to_time(start_quarter),
            end_time: to_time(end_quarter),
            break_duration_minutes: break_minutes,
            shift_type: if night { Some(ShiftType::Night) } else { None },
        }
    }
}

fn arb_shift_set() -> impl Strategy<Value = Vec<Shift>> {
    prop::collection::vec(arb_shift(), 0..40).prop_map(|mut shifts| {
        for (i, shift) in shifts.iter_mut().enumerate() {
            shift.id = format!("shift_{:03}", i);
        }
        shifts
    })
}

/// Sort key making violation lists comparable as multisets.
fn sorted(mut violations: Vec<Violation>) -> Vec<Violation> {
    violations.sort_by_key(|v| {
        (
            v.employee_id.clone(),
            v.violation_type.to_string(),
            v.shift_id.clone(),
            v.message.clone(),
        )
    });
    violations
}

proptest! {
    #[test]
    fn validation_is_pure(shifts in arb_shift_set()) {
        let rules = ComplianceRules::default();
        let first = validate_all(&shifts, &rules);
        let second = validate_all(&shifts, &rules);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unassigned_shifts_never_contribute(shifts in arb_shift_set()) {
        let rules = ComplianceRules::default();

        let with_unassigned = validate_all(&shifts, &rules);
        let assigned_only: Vec<Shift> = shifts
            .iter()
            .filter(|s| s.employee_id.is_some())
            .cloned()
            .collect();
        let without_unassigned = validate_all(&assigned_only, &rules);

        prop_assert_eq!(sorted(with_unassigned), sorted(without_unassigned));
    }

    #[test]
    fn validate_all_partitions_by_employee(shifts in arb_shift_set()) {
        let rules = ComplianceRules::default();

        let mut employee_ids: Vec<String> = shifts
            .iter()
            .filter_map(|s| s.employee_id.clone())
            .collect();
        employee_ids.sort();
        employee_ids.dedup();

        let per_employee: Vec<Violation> = employee_ids
            .iter()
            .flat_map(|id| validate_employee(&shifts, id, &rules))
            .collect();

        prop_assert_eq!(sorted(validate_all(&shifts, &rules)), sorted(per_employee));
    }

    #[test]
    fn only_errors_block_publish(shifts in arb_shift_set()) {
        let rules = ComplianceRules::default();
        let violations = validate_all(&shifts, &rules);
        let report = ValidationReport::new(violations.clone());

        let has_error = violations.iter().any(|v| v.severity.is_blocking());
        prop_assert_eq!(report.can_publish, !has_error);
        prop_assert_eq!(report.totals.errors + report.totals.warnings, violations.len());
    }

    #[test]
    fn every_violation_names_a_known_employee(shifts in arb_shift_set()) {
        let rules = ComplianceRules::default();
        let violations = validate_all(&shifts, &rules);

        for violation in &violations {
            prop_assert!(shifts.iter().any(
                |s| s.employee_id.as_deref() == Some(violation.employee_id.as_str())
            ));
            if let Some(shift_id) = &violation.shift_id {
                prop_assert!(shifts.iter().any(|s| &s.id == shift_id));
            }
        }
    }
}
