//! Labor-Law Compliance Validation Engine
//!
//! This crate validates scheduled work shifts against working-time rules
//! derived from the Polish Labour Code (Kodeks pracy) and produces
//! structured violations used to gate whether a draft schedule may be
//! published.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
