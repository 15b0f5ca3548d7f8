//! Search error taxonomy.
//!
//! There is exactly one error kind: the caller handed the search something it
//! cannot work on. Everything else is ordinary control flow.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
        }
    }
}

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputViolation {
    #[error("sequence must not be empty")]
    Empty,
    /// Only reported when the caller asked for the single-peak precondition
    /// to be verified.
    #[error("sequence is not single-peaked: it rises again at index {rises_again_at}")]
    NotSinglePeak { rises_again_at: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputViolation),
}

impl SearchError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    #[must_use]
    pub const fn violation(&self) -> InputViolation {
        match self {
            Self::InvalidInput(violation) => *violation,
        }
    }
}
