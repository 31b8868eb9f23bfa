//! Configuration loading functionality.
//!
//! This module provides the [`RulesLoader`] type for loading working-time
//! rule configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ComplianceRules, LimitsConfig, StatuteMetadata};

/// Loads and provides access to the working-time rule configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/kodeks_pracy/
/// ├── statute.yaml   # Statute metadata
/// └── limits.yaml    # Rule thresholds and article references
/// ```
///
/// # Example
///
/// ```no_run
/// use compliance_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./config/kodeks_pracy").unwrap();
/// let rules = loader.rules();
/// println!("Weekly limit: {}h", rules.limits().max_weekly_hours.hours);
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: ComplianceRules,
}

impl RulesLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/kodeks_pracy")
    ///
    /// # Returns
    ///
    /// Returns a `RulesLoader` instance on success, or an error if a
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statute_path = path.join("statute.yaml");
        let statute = Self::load_yaml::<StatuteMetadata>(&statute_path)?;

        let limits_path = path.join("limits.yaml");
        let limits_config = Self::load_yaml::<LimitsConfig>(&limits_path)?;

        Ok(Self {
            rules: ComplianceRules::new(statute, limits_config.limits),
        })
    }

    /// Creates a loader from an already-constructed rule set.
    ///
    /// Useful for embedding the statutory defaults without touching the
    /// filesystem.
    pub fn from_rules(rules: ComplianceRules) -> Self {
        Self { rules }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rule set.
    pub fn rules(&self) -> &ComplianceRules {
        &self.rules
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        self.rules.statute()
    }
}
