//! Filesystem path validators.
//!
//! Both rules perform one read-only metadata lookup that follows symlinks.
//! A missing path fails with `not_found`; any other lookup failure
//! (permissions, a file used as a directory component) fails with
//! `path_inaccessible`.

use std::fs;

use crate::foundation::{Validate, ValidationError};

fn metadata(path: &str) -> Result<fs::Metadata, ValidationError> {
    fs::metadata(path).map_err(|e| ValidationError::from_io(path, &e))
}

// ============================================================================
// DIRECTORY
// ============================================================================

/// Validates that a path names an existing directory.
///
/// # Examples
///
/// ```
/// use valid_rules::foundation::{RuleErrorKind, Validate};
/// use valid_rules::validators::directory_rule;
///
/// let rule = directory_rule();
/// assert!(rule.validate(env!("CARGO_MANIFEST_DIR")).is_ok());
///
/// let err = rule.validate("./definitely/not/here").unwrap_err();
/// assert_eq!(err.kind(), Some(RuleErrorKind::NotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectoryRule;

impl Validate for DirectoryRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if metadata(input)?.is_dir() {
            Ok(())
        } else {
            Err(ValidationError::wrong_kind(
                input,
                "directory",
                "must be a directory, not a file",
            ))
        }
    }
}

/// Creates a new [`DirectoryRule`].
#[must_use]
pub const fn directory_rule() -> DirectoryRule {
    DirectoryRule
}

// ============================================================================
// FILE
// ============================================================================

/// Validates that a path names an existing entry that is not a directory.
///
/// Sockets, FIFOs and device nodes count as files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileRule;

impl Validate for FileRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if metadata(input)?.is_dir() {
            Err(ValidationError::wrong_kind(
                input,
                "file",
                "must be a file, not a directory",
            ))
        } else {
            Ok(())
        }
    }
}

/// Creates a new [`FileRule`].
#[must_use]
pub const fn file_rule() -> FileRule {
    FileRule
}
