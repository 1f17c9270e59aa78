//! Error types for parsing selection lists.

use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no ranges or indices found")]
    EmptySpecification,

    #[error("error processing {token}: invalid number {value:?}")]
    MalformedToken {
        token: String,
        value: String,
        source: ParseIntError,
    },

    #[error("error processing {token}: not enough numbers in range")]
    MalformedRange { token: String },

    #[error("error processing {token}: range start {start} is after its end {end}")]
    InvertedRange { token: String, start: i64, end: i64 },
}

impl Error {
    /// The token that failed, if the error is tied to one.
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::EmptySpecification => None,
            Error::MalformedToken { token, .. }
            | Error::MalformedRange { token }
            | Error::InvertedRange { token, .. } => Some(token),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_cause_is_chained_not_repeated() {
        let source = "x".parse::<i64>().unwrap_err();
        let cause = source.to_string();
        let err = Error::MalformedToken {
            token: "1-x".into(),
            value: "x".into(),
            source,
        };
        assert_eq!(err.to_string(), "error processing 1-x: invalid number \"x\"");
        assert_eq!(err.source().map(|s| s.to_string()), Some(cause.clone()));

        let chained = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chained.matches(cause.as_str()).count(), 1, "{chained}");
    }
}
