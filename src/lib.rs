//! Parse and evaluate cut(1)-style selection lists.
//!
//! A list such as `-3,5,7-9,12-` names a set of integer indices. Feed lists
//! to a [`Filter`] and ask it whether an index is selected:
//!
//! ```
//! use ranges::{Filter, Reason};
//!
//! let mut filter = Filter::default();
//! filter.update("-3,7-").unwrap();
//! filter.update("5").unwrap();
//!
//! assert!(filter.allows(2));
//! assert_eq!(filter.evaluate(5), (true, Reason::IsIndex));
//! assert!(!filter.allows(6));
//! ```

pub mod dsl;
pub mod error;
pub mod filter;

pub use dsl::{Interval, Selector, parse_list};
pub use error::{Error, Result};
pub use filter::{Filter, Formatter, Reason};
