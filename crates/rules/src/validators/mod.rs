//! Built-in rules
//!
//! - **Filesystem**: [`DirectoryRule`], [`FileRule`]
//! - **Membership**: [`OneOfRule`]
//! - **Syntax**: [`IpRangeRule`], [`RegexpRule`]
//!
//! Every rule validates `str` input and is `Send + Sync`.

pub mod filesystem;
pub mod ip_range;
pub mod one_of;
pub mod regexp;

pub use filesystem::{DirectoryRule, FileRule, directory_rule, file_rule};
pub use ip_range::{IpRangeRule, ip_range_rule};
pub use one_of::{OneOfRule, one_of_rule};
pub use regexp::{RegexpRule, regexp_rule};
