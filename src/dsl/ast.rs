//! AST types for selection lists.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A closed range of indices, `start-end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Interval { start, end }
    }

    /// Whether `n` lies in `[start, end]`. An interval with `start > end`
    /// contains nothing.
    #[inline]
    pub fn contains(&self, n: i64) -> bool {
        self.start <= n && n <= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for Interval {
    type Err = Error;

    /// Parse exactly one `n-n` token.
    fn from_str(s: &str) -> Result<Self> {
        match super::parse_selector(s)? {
            Some(Selector::Range(interval)) => Ok(interval),
            _ => Err(Error::MalformedRange {
                token: s.trim().to_string(),
            }),
        }
    }
}

/// One parsed token of a selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// `-`: everything
    All,
    /// `-n`: every index up to and including `n`
    UpTo(i64),
    /// `n-`: every index from `n` on
    From(i64),
    /// `n-m`
    Range(Interval),
    /// `n`
    Index(i64),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "-"),
            Selector::UpTo(n) => write!(f, "-{}", n),
            Selector::From(n) => write!(f, "{}-", n),
            Selector::Range(interval) => write!(f, "{}", interval),
            Selector::Index(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains_bounds() {
        let interval = Interval::new(2, 5);
        assert!(!interval.contains(1));
        assert!(interval.contains(2));
        assert!(interval.contains(5));
        assert!(!interval.contains(6));
    }

    #[test]
    fn test_reversed_interval_is_empty() {
        let interval = Interval::new(5, 2);
        assert!((-10..10).all(|n| !interval.contains(n)));
    }

    #[test]
    fn test_interval_from_str() {
        assert_eq!(" 3-9 ".parse::<Interval>(), Ok(Interval::new(3, 9)));
        assert_eq!(
            "7".parse::<Interval>(),
            Err(Error::MalformedRange { token: "7".into() })
        );
        assert_eq!(
            "7-".parse::<Interval>(),
            Err(Error::MalformedRange { token: "7-".into() })
        );
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::All.to_string(), "-");
        assert_eq!(Selector::UpTo(3).to_string(), "-3");
        assert_eq!(Selector::From(7).to_string(), "7-");
        assert_eq!(Selector::Range(Interval::new(2, 4)).to_string(), "2-4");
        assert_eq!(Selector::Index(5).to_string(), "5");
    }
}
