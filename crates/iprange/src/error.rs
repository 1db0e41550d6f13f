//! Parse errors for IP range expressions.

use std::net::IpAddr;

/// Reasons an IP range expression is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input was empty.
    #[error("empty range expression")]
    Empty,

    /// CIDR notation was recognised but rejected by the network parser.
    #[error("invalid CIDR notation: {reason}")]
    Cidr {
        /// Diagnostic from the CIDR parser.
        reason: String,
    },

    /// One side of a `begin_end` range is not an address.
    #[error("invalid address '{0}' in begin_end range")]
    Address(String),

    /// `begin` and `end` belong to different address families.
    #[error("begin {begin} and end {end} belong to different address families")]
    MixedFamilies {
        /// First address of the range.
        begin: IpAddr,
        /// Last address of the range.
        end: IpAddr,
    },

    /// `begin` sorts after `end`.
    #[error("begin {begin} is greater than end {end}")]
    Reversed {
        /// First address of the range.
        begin: IpAddr,
        /// Last address of the range.
        end: IpAddr,
    },

    /// Wrong number of octets or groups.
    #[error("expected {expected} segments, found {found}")]
    SegmentCount {
        /// Number of segments for the address family.
        expected: usize,
        /// Number of segments in the input.
        found: usize,
    },

    /// A segment item is empty or contains foreign characters.
    #[error("invalid segment item '{0}'")]
    Segment(String),

    /// A segment value does not fit the address family.
    #[error("segment value '{value}' exceeds {max}")]
    SegmentOverflow {
        /// Offending value as written.
        value: String,
        /// Largest value allowed for the family.
        max: u16,
    },

    /// `N-M` item with `N > M`.
    #[error("segment range {start}-{end} is reversed")]
    ReversedSegment {
        /// Lower bound as parsed.
        start: u16,
        /// Upper bound as parsed.
        end: u16,
    },

    /// More than one `::` in an IPv6 expression.
    #[error("'::' may appear only once")]
    RepeatedElision,

    /// Nothing recognisable.
    #[error("unrecognized range syntax")]
    Syntax,
}
