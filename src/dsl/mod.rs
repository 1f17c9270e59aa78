//! Selection list syntax, as used by cut(1).
//!
//! Syntax:
//! ```text
//!   -                       - every index
//!   -n                      - every index up to and including n
//!   n-                      - every index from n on
//!   n-m                     - every index from n through m
//!   n                       - the index n
//!   a,b,c                   - union of the above; blank entries are ignored
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Shape, classify};
pub use parser::{parse_list, parse_selector, tokens};
