//! Membership tests against a built filter.

use super::Filter;

/// Which part of a filter matched an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// `-` was given
    AllMatch,
    /// At or below the `-n` limit
    Below,
    /// At or above the `n-` limit
    Above,
    /// Inside an `n-m` interval
    InRange,
    /// Equal to a single index
    IsIndex,
    /// Nothing matched
    NoMatch,
}

impl Reason {
    pub fn is_match(self) -> bool {
        self != Reason::NoMatch
    }
}

impl Filter {
    /// Test `n`, reporting the first rule that matched.
    pub fn evaluate(&self, n: i64) -> (bool, Reason) {
        let reason = if self.match_all {
            Reason::AllMatch
        } else if self.up_to.is_some_and(|limit| n <= limit) {
            Reason::Below
        } else if self.from.is_some_and(|limit| n >= limit) {
            Reason::Above
        } else if self.in_intervals(n) {
            Reason::InRange
        } else if self.singles.contains(&n) {
            Reason::IsIndex
        } else {
            Reason::NoMatch
        };
        (reason.is_match(), reason)
    }

    pub fn allows(&self, n: i64) -> bool {
        self.evaluate(n).0
    }

    /// Whether `n` lies in one of the stored intervals.
    pub fn in_intervals(&self, n: i64) -> bool {
        self.intervals.iter().any(|interval| interval.contains(n))
    }
}
