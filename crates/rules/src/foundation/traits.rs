//! Core traits for the validation system
//!
//! This module defines the trait every rule implements.

use crate::foundation::ValidationError;
use crate::foundation::validatable::AsValidatable;
use std::borrow::Borrow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every rule implements.
///
/// Rules are generic over their input type so that a mismatched call site
/// fails to compile. All rules return `Result<(), ValidationError>`.
///
/// # Examples
///
/// ```
/// use valid_rules::foundation::{Validate, ValidationError};
///
/// struct NonBlank;
///
/// impl Validate for NonBlank {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("blank", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonBlank.validate("x").is_ok());
/// assert!(NonBlank.validate("  ").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` when the input satisfies the rule, otherwise a
    /// [`ValidationError`] describing why not.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// A single rule accepts `&str`, `String`, `Cow<str>` or a
    /// `serde_json::Value`. Conversion failures surface as `type_mismatch`.
    ///
    /// ```
    /// use valid_rules::prelude::*;
    /// use serde_json::json;
    ///
    /// let rule = one_of_rule(["debug", "info"], false);
    /// assert!(rule.validate_any(&String::from("INFO")).is_ok());
    /// assert!(rule.validate_any(&json!("debug")).is_ok());
    /// assert!(rule.validate_any(&json!(3)).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// A type-erased string rule, as produced by configuration.
pub type BoxedRule = Box<dyn Validate<Input = str> + Send + Sync>;
