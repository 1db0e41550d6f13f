//! Regular expression syntax validator.

use regex::Regex;

use crate::foundation::{RuleErrorKind, Validate, ValidationError};

/// Validates that a string compiles as a regular expression.
///
/// The dialect is the one of the [`regex`] crate. On failure the compiler's
/// diagnostic becomes the error message unchanged.
///
/// # Examples
///
/// ```
/// use valid_rules::foundation::Validate;
/// use valid_rules::validators::regexp_rule;
///
/// let rule = regexp_rule();
/// assert!(rule.validate(r"[a-z0-9]+\.test").is_ok());
/// assert!(rule.validate(r"[a-z0-9+\.test").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RegexpRule;

impl RegexpRule {
    /// Compiles `input`, returning the regex on success and the same error
    /// [`validate`](Validate::validate) would return on failure.
    pub fn compile(&self, input: &str) -> Result<Regex, ValidationError> {
        Regex::new(input).map_err(|e| {
            ValidationError::of_kind(RuleErrorKind::InvalidPattern, e.to_string())
                .with_param("pattern", input.to_owned())
        })
    }
}

impl Validate for RegexpRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.compile(input).map(|_| ())
    }
}

/// Creates a new [`RegexpRule`].
#[must_use]
pub const fn regexp_rule() -> RegexpRule {
    RegexpRule
}
