use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::error::{ParseFailure, ParseResult, PatternError};
use regex::{Regex, RegexBuilder};
use std::fmt;
use tracing::trace;

/// Combinator that matches a regular expression at the cursor's position.
///
/// The match is anchored at the start of the remaining text and may stop
/// anywhere before its end: `lex("abc")` accepts `"abcdef"` and leaves
/// `"def"`, but rejects `"xabc"`. On success it returns the matched text
/// verbatim. On failure the cursor does not move.
///
/// The pattern is compiled once, when the combinator is built.
#[derive(Clone)]
pub struct Lex {
    pattern: String,
    regex: Regex,
}

impl Lex {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        LexBuilder::new(pattern).build()
    }

    /// Configure regex options before compiling
    pub fn builder(pattern: &str) -> LexBuilder {
        LexBuilder::new(pattern)
    }

    /// The pattern as given by the caller, without the anchoring wrapper
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Debug for Lex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Lex").field(&self.pattern).finish()
    }
}

impl<'code> Combinator<'code> for Lex {
    type Output = &'code str;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<&'code str> {
        let Some(found) = self.regex.find(cursor.remaining()) else {
            trace!(pattern = %self.pattern, offset = cursor.offset(), "no match");
            return Err(ParseFailure);
        };

        let token = cursor.advance(found.end());
        trace!(pattern = %self.pattern, token, "matched");
        Ok(token)
    }
}

/// Options for compiling a [`Lex`] pattern
#[derive(Debug, Clone)]
pub struct LexBuilder {
    pattern: String,
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    unicode: bool,
    size_limit: Option<usize>,
}

impl LexBuilder {
    pub fn new(pattern: &str) -> Self {
        LexBuilder {
            pattern: pattern.to_string(),
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            unicode: true,
            size_limit: None,
        }
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Let `^` and `$` match at line boundaries. The match itself is still
    /// anchored at the cursor.
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    /// Upper bound, in bytes, on the compiled program
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    pub fn build(&self) -> Result<Lex, PatternError> {
        // A pattern like "a)|(b" is only rejected on its own; wrapped in the
        // anchoring group it would compile into an unanchored alternative.
        self.compile(&self.pattern)?;
        let regex = self.compile(&format!(r"\A(?:{})", self.pattern))?;

        Ok(Lex {
            pattern: self.pattern.clone(),
            regex,
        })
    }

    fn compile(&self, pattern: &str) -> Result<Regex, PatternError> {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .unicode(self.unicode);
        if let Some(bytes) = self.size_limit {
            builder.size_limit(bytes);
        }

        builder.build().map_err(|source| PatternError {
            pattern: self.pattern.clone(),
            source,
        })
    }
}

/// Create a combinator matching a single token.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression. Use [`try_lex`]
/// for patterns that are not known when the grammar is written.
pub fn lex(pattern: &str) -> Lex {
    match Lex::new(pattern) {
        Ok(lex) => lex,
        Err(err) => panic!("{err}"),
    }
}

/// Create a combinator matching a single token, reporting invalid patterns
pub fn try_lex(pattern: &str) -> Result<Lex, PatternError> {
    Lex::new(pattern)
}
