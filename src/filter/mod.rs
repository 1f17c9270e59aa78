//! Accumulated selection state.
//!
//! A [`Filter`] is built by feeding it selection lists with
//! [`Filter::update`]. Each call is a union with what the filter already
//! selects. Tokens that would add nothing (because the filter already
//! matches every index they name) are accepted and dropped.
//!
//! Redundant state is never pruned: a single stored before a wider limit
//! arrives stays stored, and overlapping intervals are kept as given.

mod eval;
pub mod hooks;

use std::fmt;
use std::str::FromStr;

use crate::dsl::{Interval, Selector, parse_selector, tokens};
use crate::error::{Error, Result};

pub use eval::Reason;
pub use hooks::Formatter;
use hooks::Hooks;

#[derive(Debug, Clone)]
pub struct Filter {
    /// `-`
    match_all: bool,
    /// `-n`
    up_to: Option<i64>,
    /// `n-`
    from: Option<i64>,
    /// `n-m`
    intervals: Vec<Interval>,
    /// `n`
    singles: Vec<i64>,

    hooks: Hooks,
}

impl Default for Filter {
    fn default() -> Self {
        Filter::new(None, None)
    }
}

impl Filter {
    /// Create an empty filter. `None` for either sink means no-op.
    pub fn new(verbose: Option<Formatter>, debug: Option<Formatter>) -> Self {
        Filter {
            match_all: false,
            up_to: None,
            from: None,
            intervals: Vec::new(),
            singles: Vec::new(),
            hooks: Hooks::new(verbose, debug),
        }
    }

    pub fn is_match_all(&self) -> bool {
        self.match_all
    }

    pub fn up_to_limit(&self) -> Option<i64> {
        self.up_to
    }

    pub fn from_limit(&self) -> Option<i64> {
        self.from
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn singles(&self) -> &[i64] {
        &self.singles
    }

    /// Union the comma-separated list `list` into the filter.
    ///
    /// Blank entries are skipped, but the list must hold at least one
    /// non-blank token. The update is not atomic: when a token fails,
    /// the tokens before it have already been applied.
    pub fn update(&mut self, list: &str) -> Result<()> {
        let list = list.trim();
        self.verbose(format_args!("Processing range(s): {}", list));

        let mut found = false;
        for token in tokens(list) {
            self.update_one(token)?;
            found = true;
        }

        if !found {
            return Err(Error::EmptySpecification);
        }
        Ok(())
    }

    /// Union a single token into the filter. A blank token is a no-op.
    pub fn update_one(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            self.debug(format_args!("Got whitespace."));
            return Ok(());
        }

        self.debug(format_args!("Processing range: {}", token));
        if let Some(selector) = parse_selector(token)? {
            self.merge(selector);
        }
        self.debug(format_args!("filter: {}", self));
        Ok(())
    }

    /// Apply one parsed selector. Returns `false` when the selector was
    /// already covered and nothing changed.
    pub fn merge(&mut self, selector: Selector) -> bool {
        match selector {
            Selector::All => {
                self.match_all = true;
                self.verbose(format_args!("Entire input selected"));
            }

            Selector::UpTo(n) => {
                if self.match_all || self.up_to.is_some_and(|limit| limit >= n) {
                    return self.skip(selector);
                }
                self.up_to = Some(n);
                self.verbose(format_args!("Initial range now {}", selector));
            }

            Selector::From(n) => {
                if self.match_all || self.from.is_some_and(|limit| limit <= n) {
                    return self.skip(selector);
                }
                self.from = Some(n);
                self.verbose(format_args!("Final range now {}", selector));
            }

            Selector::Range(interval) => {
                if self.match_all
                    || self.up_to.is_some_and(|limit| limit >= interval.end)
                    || self.from.is_some_and(|limit| limit <= interval.start)
                {
                    return self.skip(selector);
                }
                self.intervals.push(interval);
                self.verbose(format_args!("Added range {}", interval));
            }

            Selector::Index(n) => {
                if self.allows(n) {
                    return self.skip(selector);
                }
                self.singles.push(n);
                self.verbose(format_args!("Added index {}", n));
            }
        }
        true
    }

    fn skip(&self, selector: Selector) -> bool {
        self.debug(format_args!("{} already selected, skipping", selector));
        false
    }

    fn verbose(&self, args: fmt::Arguments<'_>) {
        (self.hooks.verbose)(args)
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        (self.hooks.debug)(args)
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        self.match_all == other.match_all
            && self.up_to == other.up_to
            && self.from == other.from
            && self.intervals == other.intervals
            && self.singles == other.singles
    }
}

impl Eq for Filter {}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut filter = Filter::default();
        filter.update(s)?;
        Ok(filter)
    }
}

fn show_flag(set: bool) -> char {
    if set { 'T' } else { 'F' }
}

fn show_limit(value: Option<i64>) -> String {
    value.map_or_else(|| "none".to_string(), |n| n.to_string())
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[-: {}][-n: {}][n-: {}][n-n:",
            show_flag(self.match_all),
            show_limit(self.up_to),
            show_limit(self.from)
        )?;
        for interval in &self.intervals {
            write!(f, " {}", interval)?;
        }
        f.write_str("][n:")?;
        for n in &self.singles {
            write!(f, " {}", n)?;
        }
        f.write_str("]")
    }
}
