//! Core data models for the Compliance Validation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod report;
mod shift;
mod violation;

pub use report::{ValidationReport, ViolationTotals};
pub use shift::{Shift, ShiftType};
pub(crate) use shift::short_time;
pub use violation::{Severity, Violation, ViolationType};
