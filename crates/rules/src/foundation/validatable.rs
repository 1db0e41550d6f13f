//! AsValidatable trait with GAT for input conversion
//!
//! Lets a `str` rule accept owned strings, `Cow`s and dynamic JSON values.
//! Dynamic values that are not strings fail with a `type_mismatch` error
//! instead of being coerced.

use crate::foundation::ValidationError;
use std::borrow::{Borrow, Cow};

/// Trait for types that can be converted for validation.
///
/// Uses GAT to allow returning either borrowed reference or owned value,
/// unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for &String {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for Box<str> {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for Cow<'_, str> {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_ref())
    }
}

/// Returns a human-readable type name for a JSON value.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl AsValidatable<str> for serde_json::Value {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        match self {
            serde_json::Value::String(s) => Ok(s.as_str()),
            other => Err(ValidationError::type_mismatch(
                "string",
                json_type_name(other),
            )),
        }
    }
}
