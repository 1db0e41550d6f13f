//! Rules described as data.
//!
//! A [`RuleConfig`] is the serializable form of one rule, so rule lists can
//! live in JSON (or any serde format) next to the values they guard:
//!
//! ```json
//! [
//!   { "rule": "directory" },
//!   { "rule": "one_of", "values": ["debug", "info"], "case_sensitive": false }
//! ]
//! ```
//!
//! Building a rule from its config never fails and performs no I/O.

use serde::{Deserialize, Serialize};

use crate::foundation::BoxedRule;
use crate::validators::{directory_rule, file_rule, ip_range_rule, one_of_rule, regexp_rule};

/// Errors raised while reading rule configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not describe rules.
    #[error("invalid rule configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable description of a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleConfig {
    /// See [`DirectoryRule`](crate::validators::DirectoryRule).
    Directory,
    /// See [`FileRule`](crate::validators::FileRule).
    File,
    /// See [`OneOfRule`](crate::validators::OneOfRule).
    OneOf {
        /// Allowed values, in order.
        values: Vec<String>,
        /// Exact comparison when `true`; defaults to `false`.
        #[serde(default)]
        case_sensitive: bool,
    },
    /// See [`IpRangeRule`](crate::validators::IpRangeRule).
    IpRange,
    /// See [`RegexpRule`](crate::validators::RegexpRule).
    Regexp,
}

impl RuleConfig {
    /// The `rule` tag of this config.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
            Self::OneOf { .. } => "one_of",
            Self::IpRange => "ip_range",
            Self::Regexp => "regexp",
        }
    }

    /// Builds the rule this config describes.
    #[must_use]
    pub fn build(&self) -> BoxedRule {
        tracing::debug!(rule = self.name(), "building rule");
        match self {
            Self::Directory => Box::new(directory_rule()),
            Self::File => Box::new(file_rule()),
            Self::OneOf {
                values,
                case_sensitive,
            } => Box::new(one_of_rule(values.iter().cloned(), *case_sensitive)),
            Self::IpRange => Box::new(ip_range_rule()),
            Self::Regexp => Box::new(regexp_rule()),
        }
    }

    /// Parses a single rule config from JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses a JSON array of rule configs.
    pub fn list_from_json(text: &str) -> Result<Vec<Self>, ConfigError> {
        let configs: Vec<Self> = serde_json::from_str(text)?;
        tracing::debug!(count = configs.len(), "loaded rule configuration");
        Ok(configs)
    }
}

/// Builds every rule in `configs`, preserving order.
#[must_use]
pub fn build_rules(configs: &[RuleConfig]) -> Vec<BoxedRule> {
    configs.iter().map(RuleConfig::build).collect()
}
