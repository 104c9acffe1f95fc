//! # TCP Port Range Model
//!
//! An inclusive, validated range of TCP ports.
//!
//! A range can only be built through [`PortRange::new`] or parsed from text
//! (`"1-1024"` or a single port such as `"80"`), so every value in circulation
//! satisfies `1 <= start <= end <= 65535`.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ScanError;

pub const FIRST_PORT: u16 = 1;
pub const LAST_PORT: u16 = u16::MAX;
pub const DEFAULT_LAST_PORT: u16 = 1024;

/// An inclusive range of TCP ports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// Every TCP port, `1-65535`.
    pub const FULL: PortRange = PortRange {
        start: FIRST_PORT,
        end: LAST_PORT,
    };

    /// The well-known ports, `1-1024`. Used when no range is requested.
    pub const DEFAULT: PortRange = PortRange {
        start: FIRST_PORT,
        end: DEFAULT_LAST_PORT,
    };

    pub fn new(start: u16, end: u16) -> Result<Self, ScanError> {
        if start < FIRST_PORT || start > end {
            return Err(ScanError::InvalidRange {
                start: start.into(),
                end: end.into(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn single(port: u16) -> Result<Self, ScanError> {
        Self::new(port, port)
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Number of ports in the range. Never zero.
    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, port: u16) -> bool {
        (self.start..=self.end).contains(&port)
    }

    pub fn iter(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl IntoIterator for PortRange {
    type Item = u16;
    type IntoIter = RangeInclusive<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for PortRange {
    type Err = ScanError;

    /// Parses `"start-end"` or a single port `"p"` (same as `"p-p"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (start, end) = match s.split_once('-') {
            Some((start, end)) => (parse_port(start, s)?, parse_port(end, s)?),
            None => {
                let port = parse_port(s, s)?;
                (port, port)
            }
        };

        if start < u32::from(FIRST_PORT) || start > end {
            return Err(ScanError::InvalidRange { start, end });
        }

        let start = to_port(start)?;
        let end = to_port(end)?;
        Self::new(start, end)
    }
}

fn parse_port(part: &str, whole: &str) -> Result<u32, ScanError> {
    part.trim()
        .parse::<u32>()
        .map_err(|_| ScanError::MalformedRange(whole.to_string()))
}

fn to_port(value: u32) -> Result<u16, ScanError> {
    u16::try_from(value).map_err(|_| ScanError::PortOutOfBounds(value.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_range_new() {
        let range = PortRange::new(20, 25).unwrap();
        assert_eq!(range.start(), 20);
        assert_eq!(range.end(), 25);
        assert_eq!(range.len(), 6);
    }

    #[test]
    fn test_port_range_rejects_inverted() {
        let result = PortRange::new(100, 99);
        assert_eq!(result, Err(ScanError::InvalidRange { start: 100, end: 99 }));
    }

    #[test]
    fn test_port_range_rejects_zero_start() {
        assert!(PortRange::new(0, 10).is_err());
        assert!(PortRange::single(0).is_err());
    }

    #[test]
    fn test_port_range_iter_single() {
        let range = PortRange::single(8080).unwrap();
        assert_eq!(range.iter().collect::<Vec<u16>>(), vec![8080]);
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn test_port_range_full_len() {
        assert_eq!(PortRange::FULL.len(), 65535);
        assert_eq!(PortRange::FULL.iter().last(), Some(65535));
    }

    #[test]
    fn test_port_range_default_is_well_known() {
        let range = PortRange::default();
        assert_eq!(range.start(), 1);
        assert_eq!(range.end(), 1024);
    }

    #[test]
    fn test_parse_range() {
        let range: PortRange = "1-1024".parse().unwrap();
        assert_eq!(range, PortRange::DEFAULT);
    }

    #[test]
    fn test_parse_single_port_equals_degenerate_range() {
        let single: PortRange = "80".parse().unwrap();
        let range: PortRange = "80-80".parse().unwrap();
        assert_eq!(single, range);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let range: PortRange = " 22 - 25 ".parse().unwrap();
        assert_eq!(range, PortRange::new(22, 25).unwrap());
    }

    #[test]
    fn test_parse_rejects_end_above_max() {
        let result = "1-70000".parse::<PortRange>();
        assert_eq!(result, Err(ScanError::PortOutOfBounds("70000".to_string())));
    }

    #[test]
    fn test_parse_rejects_inverted() {
        let result = "10011-5000".parse::<PortRange>();
        assert_eq!(
            result,
            Err(ScanError::InvalidRange {
                start: 10011,
                end: 5000
            })
        );
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert!("0-10".parse::<PortRange>().is_err());
        assert!("0".parse::<PortRange>().is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "http".parse::<PortRange>(),
            Err(ScanError::MalformedRange(_))
        ));
        assert!(matches!(
            "1-".parse::<PortRange>(),
            Err(ScanError::MalformedRange(_))
        ));
        assert!(matches!(
            "-5".parse::<PortRange>(),
            Err(ScanError::MalformedRange(_))
        ));
    }

    #[test]
    fn test_display_as_start_end() {
        let range = PortRange::new(5000, 5010).unwrap();
        assert_eq!(range.to_string(), "5000-5010");
    }

    #[test]
    fn test_contains() {
        let range = PortRange::new(5000, 5010).unwrap();
        assert!(range.contains(5000));
        assert!(range.contains(5010));
        assert!(!range.contains(4999));
        assert!(!range.contains(5011));
    }
}
