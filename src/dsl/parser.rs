//! Parser for selection lists.
//!
//! Grammar (in rough EBNF):
//!
//! list     = token ("," token)*
//! token    = "" | "-" | "-"+ int | int "-"+ | int "-" int | int
//! int      = ["+" | "-"] digit+
//!
//! Empty tokens are ignored; a list must still hold at least one non-empty
//! token.

use super::ast::{Interval, Selector};
use super::lexer::{Shape, classify};
use crate::error::{Error, Result};

/// Split a list into its trimmed, non-empty tokens.
pub fn tokens(list: &str) -> impl Iterator<Item = &str> {
    list.trim()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Parse a single token. Returns `Ok(None)` for a blank token.
pub fn parse_selector(token: &str) -> Result<Option<Selector>> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(None);
    }

    let selector = match classify(token) {
        Shape::All => Selector::All,
        Shape::UpTo(n) => Selector::UpTo(parse_int(token, n)?),
        Shape::From(n) => Selector::From(parse_int(token, n)?),
        Shape::Range(start, end) => {
            if start.is_empty() || end.is_empty() {
                return Err(Error::MalformedRange {
                    token: token.to_string(),
                });
            }
            let start = parse_int(token, start)?;
            let end = parse_int(token, end)?;
            if start > end {
                return Err(Error::InvertedRange {
                    token: token.to_string(),
                    start,
                    end,
                });
            }
            Selector::Range(Interval::new(start, end))
        }
        Shape::Index(n) => Selector::Index(parse_int(token, n)?),
    };

    Ok(Some(selector))
}

/// Parse a whole list without touching any filter.
///
/// Unlike `Filter::update`, this either accepts every token or none.
pub fn parse_list(list: &str) -> Result<Vec<Selector>> {
    let mut selectors = Vec::new();
    for token in tokens(list) {
        if let Some(selector) = parse_selector(token)? {
            selectors.push(selector);
        }
    }

    if selectors.is_empty() {
        return Err(Error::EmptySpecification);
    }
    Ok(selectors)
}

fn parse_int(token: &str, value: &str) -> Result<i64> {
    value.parse().map_err(|source| Error::MalformedToken {
        token: token.to_string(),
        value: value.to_string(),
        source,
    })
}
