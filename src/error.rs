use crate::cursor::Location;
use thiserror::Error;

/// The canonical fail signal: "this combinator could not match here".
///
/// It carries no payload. Where the failure happened is recoverable only by
/// looking at the cursor, which is why [`crate::run`] reports a [`Location`]
/// taken from the cursor rather than from the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("no match at current position")]
pub struct ParseFailure;

/// Result of a single combinator invocation
pub type ParseResult<T> = Result<T, ParseFailure>;

/// Misuse of the cursor API. These are programming errors, not parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cannot advance {requested} bytes, only {available} remaining")]
    Overrun { requested: usize, available: usize },
    #[error("advancing {requested} bytes does not land on a char boundary")]
    NotCharBoundary { requested: usize },
    #[error("restored text is not a suffix of the cursor's source")]
    NotASuffix,
}

/// A lexing pattern that the regex engine rejected
#[derive(Debug, Error)]
#[error("invalid lex pattern {pattern:?}: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Outcome of running a complete grammar over an input with [`crate::run`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("no match at {location}")]
    NoMatch { location: Location },
    #[error("unconsumed input at {location}")]
    TrailingInput { location: Location },
}

impl RunError {
    /// Where the parse stopped
    pub fn location(&self) -> Location {
        match self {
            RunError::NoMatch { location } => *location,
            RunError::TrailingInput { location } => *location,
        }
    }
}
