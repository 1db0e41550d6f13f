//! Prelude module for convenient imports.
//!
//! `use valid_rules::prelude::*;` brings in the trait, the error types,
//! every rule with its factory, and the configuration types.

pub use crate::foundation::{
    AsValidatable, BoxedRule, RuleErrorKind, Validate, ValidationError, ValidationErrors,
    validate_with_all, validate_with_any,
};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::config::{ConfigError, RuleConfig, build_rules};
