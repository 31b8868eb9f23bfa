//! Rule configuration for the Compliance Validation Engine.
//!
//! This module provides functionality to load working-time rule thresholds
//! from YAML files, so jurisdictions or contract terms can vary limits
//! without code changes. The shipped `config/kodeks_pracy` directory
//! carries the Polish Labour Code values, which are also available as
//! [`ComplianceRules::default`].
//!
//! # Example
//!
//! ```no_run
//! use compliance_engine::config::RulesLoader;
//!
//! let loader = RulesLoader::load("./config/kodeks_pracy").unwrap();
//! println!("Loaded statute: {}", loader.statute().name);
//! ```

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{ComplianceLimits, ComplianceRules, RuleLimit, StatuteMetadata};
