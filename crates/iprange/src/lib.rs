//! # valid-iprange
//!
//! Parser for IPv4 and IPv6 range expressions.
//!
//! Accepted forms:
//!
//! - Single address: `192.168.1.1`, `2001:db8:a0b:12f0::1`
//! - CIDR: `192.168.1.0/24`, `2001:db8:a0b:12f0::1/64` (host bits may be set)
//! - Begin/end: `192.168.1.10_192.168.2.20`, `2001:db8::1_2001:db8::10`
//! - Segment ranges: `192.168.1,3-5.1-10`, `2001:db8:a0b:12f0::1,1-10`
//!
//! ```
//! use valid_iprange::{IpRange, parse};
//!
//! let range = parse("10.0.0.1-20").unwrap();
//! assert!(range.contains("10.0.0.7".parse().unwrap()));
//! assert!(!range.contains("10.0.0.21".parse().unwrap()));
//!
//! assert!(matches!(parse("10.0.0.0/8"), Ok(IpRange::Cidr(_))));
//! assert!(parse("256.1.1.1").is_err());
//! ```

mod error;
mod segments;

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use ipnetwork::IpNetwork;

pub use error::ParseError;
pub use segments::{Family, SegmentRanges};

/// A parsed IP range expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpRange {
    /// Exactly one address.
    Single(IpAddr),
    /// Network in CIDR notation.
    Cidr(IpNetwork),
    /// Inclusive `begin_end` span of one address family.
    Span {
        /// First address.
        begin: IpAddr,
        /// Last address.
        end: IpAddr,
    },
    /// Per-segment value lists.
    Segments(SegmentRanges),
}

impl IpRange {
    /// Address family of the range.
    #[must_use]
    pub fn family(&self) -> Family {
        let addr = match self {
            Self::Single(addr) | Self::Span { begin: addr, .. } => *addr,
            Self::Cidr(net) => net.ip(),
            Self::Segments(ranges) => return ranges.family(),
        };
        if addr.is_ipv4() {
            Family::V4
        } else {
            Family::V6
        }
    }

    /// Whether `addr` falls inside the range. Addresses of the other family
    /// are never contained.
    #[must_use]
    pub fn contains(&self, addr: IpAddr) -> bool {
        match self {
            Self::Single(single) => *single == addr,
            Self::Cidr(net) => net.contains(addr),
            Self::Span { begin, end } => {
                begin.is_ipv4() == addr.is_ipv4() && *begin <= addr && addr <= *end
            }
            Self::Segments(ranges) => ranges.contains(addr),
        }
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(addr) => write!(f, "{addr}"),
            Self::Cidr(net) => write!(f, "{net}"),
            Self::Span { begin, end } => write!(f, "{begin}_{end}"),
            Self::Segments(ranges) => write!(f, "{ranges}"),
        }
    }
}

impl FromStr for IpRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses an IP range expression.
///
/// Forms are tried in order: CIDR (contains `/`), begin/end (contains `_`),
/// a single address, then segment range lists.
pub fn parse(input: &str) -> Result<IpRange, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some((addr, prefix)) = input.split_once('/') {
        return parse_cidr(addr, prefix);
    }

    if let Some((begin, end)) = input.split_once('_') {
        return parse_span(begin, end);
    }

    if let Ok(addr) = input.parse::<IpAddr>() {
        return Ok(IpRange::Single(addr));
    }

    if input.contains(':') {
        SegmentRanges::parse_v6(input).map(IpRange::Segments)
    } else if input.contains('.') {
        SegmentRanges::parse_v4(input).map(IpRange::Segments)
    } else {
        Err(ParseError::Syntax)
    }
}

// Only `address/prefix` with a full address and a decimal prefix length.
fn parse_cidr(addr: &str, prefix: &str) -> Result<IpRange, ParseError> {
    let addr: IpAddr = addr.parse().map_err(|_| ParseError::Cidr {
        reason: format!("invalid address '{addr}'"),
    })?;
    let invalid_prefix = || ParseError::Cidr {
        reason: format!("invalid prefix length '{prefix}'"),
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_prefix());
    }
    let prefix: u8 = prefix.parse().map_err(|_| invalid_prefix())?;

    IpNetwork::new(addr, prefix)
        .map(IpRange::Cidr)
        .map_err(|e| ParseError::Cidr {
            reason: e.to_string(),
        })
}

fn parse_span(begin: &str, end: &str) -> Result<IpRange, ParseError> {
    let begin: IpAddr = begin
        .parse()
        .map_err(|_| ParseError::Address(begin.to_owned()))?;
    let end: IpAddr = end
        .parse()
        .map_err(|_| ParseError::Address(end.to_owned()))?;

    if begin.is_ipv4() != end.is_ipv4() {
        return Err(ParseError::MixedFamilies { begin, end });
    }
    if begin > end {
        return Err(ParseError::Reversed { begin, end });
    }

    Ok(IpRange::Span { begin, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("192.168.1.1")]
    #[case("2001:db8:a0b:12f0::1")]
    #[case("192.168.1.0/24")]
    #[case("192.168.1.1/24")]
    #[case("2001:db8:a0b:12f0::1/64")]
    #[case("192.168.1.10_192.168.2.20")]
    #[case("2001:db8:a0b:12f0::1_2001:db8:a0b:12f0::10")]
    #[case("192.168.1,3-5.1-10")]
    #[case("192.168.1.1-255")]
    #[case("2001:db8:a0b:12f0::1,1-10")]
    fn accepts(#[case] input: &str) {
        assert!(parse(input).is_ok(), "{input} should parse");
    }

    #[rstest]
    #[case("")]
    #[case("256.1.1.1")]
    #[case("localhost")]
    #[case("192.168.1.0/33")]
    #[case("192.168.1.2_192.168.1.1")]
    #[case("10.0.0.1_::1")]
    #[case("10.0.0.1_")]
    #[case("1.2.3")]
    #[case("1.2.3.4.5")]
    #[case("2001:db8::g")]
    #[case("10/8")]
    #[case("1.2/16")]
    #[case("10.0.0/24")]
    #[case("+10.0.0.0/8")]
    #[case("10.0.0.0/255.0.0.0")]
    #[case("10.0.0.0/+8")]
    #[case("10.0.0.0/")]
    #[case("10.0.0.0/8/8")]
    #[case("::1/129")]
    fn rejects(#[case] input: &str) {
        assert!(parse(input).is_err(), "{input} should be rejected");
    }

    #[test]
    fn single_address() {
        assert_eq!(parse("10.1.2.3").unwrap(), IpRange::Single(ip("10.1.2.3")));
    }

    #[test]
    fn cidr_keeps_host_bits() {
        let range = parse("192.168.1.1/24").unwrap();
        assert_eq!(range.to_string(), "192.168.1.1/24");
        assert!(range.contains(ip("192.168.1.200")));
        assert!(!range.contains(ip("192.168.2.1")));
    }

    #[test]
    fn span_bounds_are_inclusive() {
        let range = parse("10.0.0.250_10.0.1.5").unwrap();
        assert!(range.contains(ip("10.0.0.250")));
        assert!(range.contains(ip("10.0.0.255")));
        assert!(range.contains(ip("10.0.1.5")));
        assert!(!range.contains(ip("10.0.1.6")));
        assert!(!range.contains(ip("::1")));
    }

    #[test]
    fn span_errors_name_the_problem() {
        assert_eq!(
            parse("10.0.0.1_nope").unwrap_err(),
            ParseError::Address("nope".to_owned())
        );
        assert_eq!(
            parse("10.0.0.1_::1").unwrap_err(),
            ParseError::MixedFamilies {
                begin: ip("10.0.0.1"),
                end: ip("::1"),
            }
        );
    }

    #[test]
    fn cidr_error_carries_reason() {
        assert!(matches!(
            parse("10.0.0.0/40").unwrap_err(),
            ParseError::Cidr { .. }
        ));
    }

    #[test]
    fn cidr_requires_full_address_and_decimal_prefix() {
        assert_eq!(
            parse("10.0.0/24").unwrap_err(),
            ParseError::Cidr {
                reason: "invalid address '10.0.0'".to_owned(),
            }
        );
        assert_eq!(
            parse("10.0.0.0/255.0.0.0").unwrap_err(),
            ParseError::Cidr {
                reason: "invalid prefix length '255.0.0.0'".to_owned(),
            }
        );
        assert_eq!(
            parse("10.0.0.0/08").unwrap(),
            IpRange::Cidr("10.0.0.0/8".parse().unwrap())
        );
    }

    #[test]
    fn family_of_each_form() {
        assert_eq!(parse("10.0.0.1").unwrap().family(), Family::V4);
        assert_eq!(parse("::1/128").unwrap().family(), Family::V6);
        assert_eq!(parse("::1_::2").unwrap().family(), Family::V6);
        assert_eq!(parse("10.0.0.1-3").unwrap().family(), Family::V4);
    }

    #[test]
    fn from_str_matches_parse() {
        let range: IpRange = "10.0.0.1_10.0.0.9".parse().unwrap();
        assert_eq!(range, parse("10.0.0.1_10.0.0.9").unwrap());
    }
}
