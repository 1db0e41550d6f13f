//! Error types for validation failures
//!
//! A failed rule returns a [`ValidationError`]: a stable machine-readable
//! code, an English message, and ordered key/value parameters for callers
//! that render their own reports.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;
use std::io;

// ============================================================================
// ERROR KINDS
// ============================================================================

/// Classification of a rule failure.
///
/// Every kind has a stable [`code`](RuleErrorKind::code) that is stored on
/// the error, so callers can branch on kinds without matching strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleErrorKind {
    /// Path does not exist.
    NotFound,
    /// Path metadata could not be read for a reason other than absence.
    Inaccessible,
    /// Path exists but is the wrong kind of filesystem entry.
    WrongKind,
    /// Value is not in the permitted set.
    NotAllowed,
    /// Text is not a valid IP range expression.
    InvalidRange,
    /// Text is not a valid regular expression.
    InvalidPattern,
    /// Dynamic input was not a string.
    TypeMismatch,
}

impl RuleErrorKind {
    const ALL: [Self; 7] = [
        Self::NotFound,
        Self::Inaccessible,
        Self::WrongKind,
        Self::NotAllowed,
        Self::InvalidRange,
        Self::InvalidPattern,
        Self::TypeMismatch,
    ];

    /// The stable code stored in [`ValidationError::code`].
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Inaccessible => "path_inaccessible",
            Self::WrongKind => "wrong_kind",
            Self::NotAllowed => "not_allowed",
            Self::InvalidRange => "invalid_range",
            Self::InvalidPattern => "invalid_pattern",
            Self::TypeMismatch => "type_mismatch",
        }
    }

    /// Looks a kind up by its code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for RuleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```
/// use valid_rules::foundation::{RuleErrorKind, ValidationError};
///
/// let error = ValidationError::new("not_allowed", "invalid value")
///     .with_param("allowed", "a,b");
///
/// assert_eq!(error.kind(), Some(RuleErrorKind::NotAllowed));
/// assert_eq!(error.param("allowed"), Some("a,b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Rules in this crate use the codes of [`RuleErrorKind`].
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters, e.g. `[("path", "/tmp/x")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Optional hint on how to fix the input.
    pub help: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
            help: None,
        }
    }

    /// Creates an error of a known kind.
    pub fn of_kind(kind: RuleErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(kind.code(), message)
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds help text or a suggestion.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// The kind matching this error's code, if it is one of ours.
    #[must_use]
    pub fn kind(&self) -> Option<RuleErrorKind> {
        RuleErrorKind::from_code(&self.code)
    }

    /// Whether this error has the given kind.
    #[must_use]
    pub fn is(&self, kind: RuleErrorKind) -> bool {
        self.code == kind.code()
    }

    /// Converts the error to a JSON structure for reporting.
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "params": params,
            "help": self.help,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if let Some(help) = &self.help {
            write!(f, "\n  Help: {help}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Metadata lookup for `path` failed.
    ///
    /// Absence maps to [`RuleErrorKind::NotFound`], anything else to
    /// [`RuleErrorKind::Inaccessible`]. The I/O error text is kept in the
    /// message.
    pub fn from_io(path: &str, error: &io::Error) -> Self {
        let kind = if error.kind() == io::ErrorKind::NotFound {
            RuleErrorKind::NotFound
        } else {
            RuleErrorKind::Inaccessible
        };

        Self::of_kind(kind, format!("stat {path}: {error}")).with_param("path", path.to_owned())
    }

    /// `path` exists but is not a `expected`.
    pub fn wrong_kind(path: &str, expected: &'static str, message: &'static str) -> Self {
        Self::of_kind(RuleErrorKind::WrongKind, message)
            .with_param("path", path.to_owned())
            .with_param("expected", expected)
    }

    /// `actual` is not among `allowed`.
    pub fn not_allowed(allowed: &[String], actual: &str) -> Self {
        let joined = allowed.join(",");
        Self::of_kind(
            RuleErrorKind::NotAllowed,
            format!("invalid value, expected one of {joined}"),
        )
        .with_param("allowed", joined)
        .with_param("actual", actual.to_owned())
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::of_kind(
            RuleErrorKind::TypeMismatch,
            format!("Expected {expected}, got {actual}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a Result.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
