//! Configuration types for working-time rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the statute the rule thresholds are derived from.
#[derive(Debug, Clone, Deserialize)]
pub struct StatuteMetadata {
    /// Short code for the statute (e.g., "KP").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or consolidation date of the statute text.
    pub version: String,
    /// URL to the official statute documentation.
    pub source_url: String,
}

/// A single rule threshold together with its statutory reference.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleLimit {
    /// The threshold in hours.
    pub hours: Decimal,
    /// Reference to the article defining the rule.
    pub article: String,
}

/// All working-time rule thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceLimits {
    /// Maximum worked hours in a single shift.
    pub max_daily_hours: RuleLimit,
    /// Maximum worked hours in a single night shift.
    pub max_night_hours: RuleLimit,
    /// Minimum uninterrupted rest between consecutive shifts.
    pub min_daily_rest: RuleLimit,
    /// Maximum summed worked hours per week bucket.
    pub max_weekly_hours: RuleLimit,
    /// Target uninterrupted weekly rest, referenced by the rest-day scan.
    pub min_weekly_rest: RuleLimit,
}

/// Structure of the `limits.yaml` configuration file.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct LimitsConfig {
    /// The rule thresholds.
    pub limits: ComplianceLimits,
}

/// The complete rule configuration the validation engine runs against.
///
/// Passed into the orchestrator by value reference; the engine itself has
/// no hardwired thresholds.
#[derive(Debug, Clone)]
pub struct ComplianceRules {
    statute: StatuteMetadata,
    limits: ComplianceLimits,
}

impl ComplianceRules {
    /// Creates a rule set from its parts.
    pub fn new(statute: StatuteMetadata, limits: ComplianceLimits) -> Self {
        Self { statute, limits }
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.statute
    }

    /// Returns the rule thresholds.
    pub fn limits(&self) -> &ComplianceLimits {
        &self.limits
    }
}

impl Default for ComplianceRules {
    /// The Polish Labour Code (Kodeks pracy) thresholds.
    fn default() -> Self {
        fn limit(hours: i64, article: &str) -> RuleLimit {
            RuleLimit {
                hours: Decimal::new(hours, 0),
                article: article.to_string(),
            }
        }

        ComplianceRules {
            statute: StatuteMetadata {
                code: "KP".to_string(),
                name: "Kodeks pracy (Polish Labour Code)".to_string(),
                version: "2023-01".to_string(),
                source_url: "https://isap.sejm.gov.pl/isap.nsf/DocDetails.xsp?id=WDU19740240141"
                    .to_string(),
            },
            limits: ComplianceLimits {
                max_daily_hours: limit(12, "Art. 129 KP"),
                max_night_hours: limit(8, "Art. 151(7) KP"),
                min_daily_rest: limit(11, "Art. 132 KP"),
                max_weekly_hours: limit(48, "Art. 131 KP"),
                min_weekly_rest: limit(35, "Art. 133 KP"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_carry_statutory_values() {
        let rules = ComplianceRules::default();
        assert_eq!(rules.limits().max_daily_hours.hours, Decimal::new(12, 0));
        assert_eq!(rules.limits().max_night_hours.hours, Decimal::new(8, 0));
        assert_eq!(rules.limits().min_daily_rest.hours, Decimal::new(11, 0));
        assert_eq!(rules.limits().max_weekly_hours.hours, Decimal::new(48, 0));
        assert_eq!(rules.limits().min_weekly_rest.hours, Decimal::new(35, 0));
        assert_eq!(rules.statute().code, "KP");
    }

    #[test]
    fn test_default_rules_carry_article_refs() {
        let rules = ComplianceRules::default();
        assert_eq!(rules.limits().max_daily_hours.article, "Art. 129 KP");
        assert_eq!(rules.limits().min_weekly_rest.article, "Art. 133 KP");
    }

    #[test]
    fn test_limits_deserialize_from_yaml() {
        let yaml = r#"
limits:
  max_daily_hours: { hours: "12", article: "Art. 129 KP" }
  max_night_hours: { hours: "8", article: "Art. 151(7) KP" }
  min_daily_rest: { hours: "11", article: "Art. 132 KP" }
  max_weekly_hours: { hours: "48", article: "Art. 131 KP" }
  min_weekly_rest: { hours: "35", article: "Art. 133 KP" }
"#;
        let config: LimitsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.limits.max_weekly_hours.hours, Decimal::new(48, 0));
    }
}
