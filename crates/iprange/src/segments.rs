//! Per-segment range lists: `192.168.1,3-5.1-10`, `2001:db8::1,1-10`.
//!
//! Every octet (IPv4) or 16-bit group (IPv6) is a comma-separated list of
//! single values or inclusive `N-M` ranges. IPv6 accepts one `::` that
//! expands to as many zero groups as needed.

use std::fmt;
use std::net::IpAddr;
use std::ops::RangeInclusive;

use crate::ParseError;

/// Address family of a range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Four decimal octets.
    V4,
    /// Eight hexadecimal groups.
    V6,
}

impl Family {
    /// Number of segments in an address of this family.
    #[must_use]
    pub const fn segment_count(self) -> usize {
        match self {
            Self::V4 => 4,
            Self::V6 => 8,
        }
    }

    /// Largest value a single segment may hold.
    #[must_use]
    pub const fn segment_max(self) -> u16 {
        match self {
            Self::V4 => 0xff,
            Self::V6 => 0xffff,
        }
    }

    const fn radix(self) -> u32 {
        match self {
            Self::V4 => 10,
            Self::V6 => 16,
        }
    }

    const fn separator(self) -> char {
        match self {
            Self::V4 => '.',
            Self::V6 => ':',
        }
    }

    fn is_digit(self, c: char) -> bool {
        match self {
            Self::V4 => c.is_ascii_digit(),
            Self::V6 => c.is_ascii_hexdigit(),
        }
    }
}

/// Allowed values for each segment of an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRanges {
    family: Family,
    segments: Vec<Vec<RangeInclusive<u16>>>,
}

impl SegmentRanges {
    pub(crate) fn parse_v4(input: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = input.split('.').collect();
        Self::from_parts(Family::V4, &parts)
    }

    pub(crate) fn parse_v6(input: &str) -> Result<Self, ParseError> {
        let Some((head, tail)) = input.split_once("::") else {
            let parts: Vec<&str> = input.split(':').collect();
            return Self::from_parts(Family::V6, &parts);
        };

        if tail.contains("::") {
            return Err(ParseError::RepeatedElision);
        }

        let head = split_groups(head);
        let tail = split_groups(tail);
        let present = head.len() + tail.len();
        let total = Family::V6.segment_count();
        if present >= total {
            return Err(ParseError::SegmentCount {
                expected: total,
                found: present + 1,
            });
        }

        let mut parts = head;
        parts.extend(std::iter::repeat_n("0", total - present));
        parts.extend(tail);
        Self::from_parts(Family::V6, &parts)
    }

    fn from_parts(family: Family, parts: &[&str]) -> Result<Self, ParseError> {
        if parts.len() != family.segment_count() {
            return Err(ParseError::SegmentCount {
                expected: family.segment_count(),
                found: parts.len(),
            });
        }

        let segments = parts
            .iter()
            .map(|part| parse_segment(family, part))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { family, segments })
    }

    /// Address family these ranges apply to.
    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Inclusive ranges allowed for each segment, in address order.
    #[must_use]
    pub fn segments(&self) -> &[Vec<RangeInclusive<u16>>] {
        &self.segments
    }

    /// Whether every segment of `addr` falls inside one of its ranges.
    #[must_use]
    pub fn contains(&self, addr: IpAddr) -> bool {
        let values: Vec<u16> = match (self.family, addr) {
            (Family::V4, IpAddr::V4(v4)) => v4.octets().iter().map(|o| u16::from(*o)).collect(),
            (Family::V6, IpAddr::V6(v6)) => v6.segments().to_vec(),
            _ => return false,
        };

        self.segments
            .iter()
            .zip(values)
            .all(|(ranges, value)| ranges.iter().any(|r| r.contains(&value)))
    }
}

impl fmt::Display for SegmentRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ranges) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.family.separator())?;
            }
            for (j, range) in ranges.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                let (start, end) = (*range.start(), *range.end());
                match self.family {
                    Family::V4 if start == end => write!(f, "{start}")?,
                    Family::V4 => write!(f, "{start}-{end}")?,
                    Family::V6 if start == end => write!(f, "{start:x}")?,
                    Family::V6 => write!(f, "{start:x}-{end:x}")?,
                }
            }
        }
        Ok(())
    }
}

fn split_groups(s: &str) -> Vec<&str> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split(':').collect()
    }
}

fn parse_segment(family: Family, part: &str) -> Result<Vec<RangeInclusive<u16>>, ParseError> {
    part.split(',')
        .map(|item| match item.split_once('-') {
            Some((start, end)) => {
                let start = parse_value(family, item, start)?;
                let end = parse_value(family, item, end)?;
                if start > end {
                    return Err(ParseError::ReversedSegment { start, end });
                }
                Ok(start..=end)
            }
            None => {
                let value = parse_value(family, item, item)?;
                Ok(value..=value)
            }
        })
        .collect()
}

fn parse_value(family: Family, item: &str, digits: &str) -> Result<u16, ParseError> {
    if digits.is_empty() || !digits.chars().all(|c| family.is_digit(c)) {
        return Err(ParseError::Segment(item.to_owned()));
    }

    u32::from_str_radix(digits, family.radix())
        .ok()
        .and_then(|v| u16::try_from(v).ok())
        .filter(|v| *v <= family.segment_max())
        .ok_or_else(|| ParseError::SegmentOverflow {
            value: digits.to_owned(),
            max: family.segment_max(),
        })
}
