//! # valid-rules
//!
//! Reusable validation rules for string values: paths, allowed values,
//! IP range expressions and regular expressions.
//!
//! ## Quick Start
//!
//! ```
//! use valid_rules::prelude::*;
//!
//! assert!(directory_rule().validate(env!("CARGO_MANIFEST_DIR")).is_ok());
//! assert!(one_of_rule(["json", "yaml"], false).validate("JSON").is_ok());
//! assert!(ip_range_rule().validate("10.0.0.0/8").is_ok());
//! assert!(regexp_rule().validate(r"^\w+$").is_ok());
//!
//! let err = regexp_rule().validate("(").unwrap_err();
//! assert_eq!(err.kind(), Some(RuleErrorKind::InvalidPattern));
//! ```
//!
//! ## Built-in Rules
//!
//! - [`DirectoryRule`](validators::DirectoryRule) / [`FileRule`](validators::FileRule):
//!   the path exists and has the right kind
//! - [`OneOfRule`](validators::OneOfRule): the value is in a fixed set
//! - [`IpRangeRule`](validators::IpRangeRule): the value parses as an IP range
//! - [`RegexpRule`](validators::RegexpRule): the value compiles as a regex
//!
//! Rules can also be described as data with [`RuleConfig`](config::RuleConfig).

// ValidationError is the fundamental error type for all rules; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
