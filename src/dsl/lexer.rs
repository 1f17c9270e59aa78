//! Shape classification for a single list token.
//!
//! A token is matched against the shapes `-`, `-n`, `n-`, `n-m` and `n`, in
//! that order. Numbers are not validated here; the shape only borrows the
//! text the parser has to turn into integers.

use winnow::combinator::{alt, eof, preceded, separated_pair};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{rest, take_till, take_while};

/// The syntactic form of a trimmed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    /// `-`
    All,
    /// `-n`, with every leading `-` stripped
    UpTo(&'a str),
    /// `n-`, with every trailing `-` stripped
    From(&'a str),
    /// `n-m`, split on the first `-`
    Range(&'a str, &'a str),
    /// `n`
    Index(&'a str),
}

// Manually define PResult for resilience against winnow version changes
type PResult<T> = Result<T, ErrMode<ContextError>>;

fn lex_all<'a>(input: &mut &'a str) -> PResult<Shape<'a>> {
    ('-', eof).value(Shape::All).parse_next(input)
}

fn lex_up_to<'a>(input: &mut &'a str) -> PResult<Shape<'a>> {
    preceded(take_while(1.., '-'), rest)
        .map(Shape::UpTo)
        .parse_next(input)
}

fn lex_from<'a>(input: &mut &'a str) -> PResult<Shape<'a>> {
    rest.verify_map(|body: &'a str| {
        body.ends_with('-')
            .then(|| Shape::From(body.trim_end_matches('-')))
    })
    .parse_next(input)
}

fn lex_range<'a>(input: &mut &'a str) -> PResult<Shape<'a>> {
    separated_pair(take_till(1.., '-'), '-', rest)
        .map(|(start, end)| Shape::Range(start, end))
        .parse_next(input)
}

fn lex_index<'a>(input: &mut &'a str) -> PResult<Shape<'a>> {
    rest.map(Shape::Index).parse_next(input)
}

fn lex_shape<'a>(input: &mut &'a str) -> PResult<Shape<'a>> {
    alt((lex_all, lex_up_to, lex_from, lex_range, lex_index)).parse_next(input)
}

/// Classify an already trimmed, non-empty token.
pub fn classify(token: &str) -> Shape<'_> {
    let mut remaining = token;
    lex_shape(&mut remaining).unwrap_or(Shape::Index(token))
}
