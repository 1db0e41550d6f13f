//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`RuleErrorKind`]
//!
//! Rules are plain values: construct once, call [`Validate::validate`] as
//! often as needed, from as many threads as needed.
//!
//! ```
//! use valid_rules::prelude::*;
//!
//! let rule = one_of_rule(["tcp", "udp"], false);
//! assert!(rule.validate("TCP").is_ok());
//!
//! let err = rule.validate("icmp").unwrap_err();
//! assert_eq!(err.kind(), Some(RuleErrorKind::NotAllowed));
//! ```

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::{RuleErrorKind, ValidationError, ValidationErrors};
pub use traits::{BoxedRule, Validate};
pub use validatable::AsValidatable;

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs every rule against `value` and collects all failures.
///
/// # Examples
///
/// ```
/// use valid_rules::foundation::{Validate, validate_with_all};
/// use valid_rules::validators::{ip_range_rule, one_of_rule};
///
/// let allowed = one_of_rule(["10.0.0.0/8"], true);
/// let syntax = ip_range_rule();
/// let rules: [&dyn Validate<Input = str>; 2] = [&allowed, &syntax];
///
/// assert!(validate_with_all("10.0.0.0/8", &rules).is_ok());
/// assert_eq!(validate_with_all("nope", &rules).unwrap_err().len(), 2);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    errors.into_result()
}

/// Succeeds as soon as one rule accepts `value`; otherwise returns every
/// failure.
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn with_all_success() {
        assert!(validate_with_all("test", &[&AlwaysValid, &AlwaysValid]).is_ok());
    }

    #[test]
    fn with_all_collects_every_failure() {
        let fails = AlwaysFails;
        let valid = AlwaysValid;
        let validators: &[&dyn Validate<Input = str>] = &[&fails, &valid, &fails];
        let errors = validate_with_all("test", validators).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn with_any_short_circuits() {
        let valid = AlwaysValid;
        let fails = AlwaysFails;
        let validators: &[&dyn Validate<Input = str>] = &[&fails, &valid];
        assert!(validate_with_any("test", validators).is_ok());
    }

    #[test]
    fn with_any_all_fail() {
        let errors = validate_with_any("test", &[&AlwaysFails, &AlwaysFails]).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn with_any_empty_list_fails() {
        let validators: &[&dyn Validate<Input = str>] = &[];
        assert!(validate_with_any("test", validators).unwrap_err().is_empty());
    }
}
