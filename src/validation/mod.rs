//! Validation logic for the Compliance Validation Engine.
//!
//! This module contains the working-time rule checkers: per-shift daily
//! limits, rest between consecutive shifts, weekly hour aggregation, the
//! rest-day scan over 7-day windows, and the orchestrator that drives them
//! for one employee or across a whole shift set.
//!
//! All functions here are pure: they perform no I/O, hold no state, and
//! derive every instant from the shifts themselves rather than the clock.

mod daily_limits;
mod grouping;
mod rest_periods;
mod validate;
mod weekly_hours;
mod weekly_rest;

pub use daily_limits::check_daily_limits;
pub use grouping::shifts_for_employee;
pub use rest_periods::check_rest_periods;
pub use validate::{validate_all, validate_employee};
pub use weekly_hours::{check_weekly_hours, week_key};
pub use weekly_rest::check_weekly_rest;
