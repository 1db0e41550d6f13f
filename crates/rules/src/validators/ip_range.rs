//! IP range syntax validator.

use valid_iprange::IpRange;

use crate::foundation::{RuleErrorKind, Validate, ValidationError};

const ACCEPTED_FORMS: &str = "use a single address (192.168.1.1), CIDR (192.168.1.0/24), \
     begin_end (192.168.1.10_192.168.2.20) or octet ranges (192.168.1,3-5.1-10)";

/// Validates that a string is an IPv4 or IPv6 range expression.
///
/// Accepted forms:
/// - Single address: `192.168.1.1`, `2001:db8:a0b:12f0::1`
/// - CIDR: `192.168.1.0/24`, `2001:db8:a0b:12f0::1/64`
/// - Begin_End: `192.168.1.10_192.168.2.20`, `2001:db8::1_2001:db8::10`
/// - Segment ranges: `192.168.1,3-5.1-10`, `2001:db8:a0b:12f0::1,1-10`
///
/// # Examples
///
/// ```
/// use valid_rules::foundation::Validate;
/// use valid_rules::validators::ip_range_rule;
///
/// let rule = ip_range_rule();
/// assert!(rule.validate("192.168.1.1/24").is_ok());
/// assert!(rule.validate("192.168.1.1-255").is_ok());
/// assert!(rule.validate("256.1.1.1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IpRangeRule;

impl IpRangeRule {
    /// Parses `input`, returning the range on success and the same error
    /// [`validate`](Validate::validate) would return on failure.
    pub fn parse(&self, input: &str) -> Result<IpRange, ValidationError> {
        valid_iprange::parse(input).map_err(|e| {
            ValidationError::of_kind(
                RuleErrorKind::InvalidRange,
                format!("invalid range {input:?}"),
            )
            .with_param("input", input.to_owned())
            .with_param("reason", e.to_string())
            .with_help(ACCEPTED_FORMS)
        })
    }
}

impl Validate for IpRangeRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.parse(input).map(|_| ())
    }
}

/// Creates a new [`IpRangeRule`].
#[must_use]
pub const fn ip_range_rule() -> IpRangeRule {
    IpRangeRule
}
