use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::then::Then;

/// Combinator that runs two combinators in sequence and keeps only the first result
///
/// Used for trailing delimiters and whitespace: `value.skip(lex(";"))`.
pub struct Skip<C, S> {
    combinator: C,
    skipped: S,
}

impl<C, S> Skip<C, S> {
    pub fn new(combinator: C, skipped: S) -> Self {
        Skip {
            combinator,
            skipped,
        }
    }
}

impl<'code, C, S> Combinator<'code> for Skip<C, S>
where
    C: Combinator<'code>,
    S: Combinator<'code>,
{
    type Output = C::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let value = self.combinator.parse(cursor)?;
        self.skipped.parse(cursor)?;
        Ok(value)
    }
}

/// Extension trait to add .skip() method support for combinators
pub trait SkipExt<'code>: Combinator<'code> + Sized {
    fn skip<S>(self, other: S) -> Skip<Self, S>
    where
        S: Combinator<'code>,
    {
        Skip::new(self, other)
    }
}

/// Implement SkipExt for all combinators
impl<'code, C> SkipExt<'code> for C where C: Combinator<'code> {}

/// Leading-skip builder returned by [`skip`].
///
/// A `Skipper` is not a combinator by itself. It becomes one once it is told
/// what to parse after the skipped input:
///
/// ```
/// use lexicomb::{Combinator, Cursor, lex, skip};
///
/// let mut cursor = Cursor::new("(x");
/// let parser = skip(lex("\\(")).then(lex("[a-z]"));
/// assert_eq!(parser.parse(&mut cursor), Ok("x"));
/// ```
pub struct Skipper<S> {
    skipped: S,
}

impl<S> Skipper<S> {
    pub fn new(skipped: S) -> Self {
        Skipper { skipped }
    }

    /// Skip one more combinator after the ones already queued
    pub fn skip<S2>(self, other: S2) -> Skipper<Then<S, S2>> {
        Skipper::new(Then::new(self.skipped, other))
    }

    /// Finish the builder: run the skipped input, then return `content`'s result
    pub fn then<C>(self, content: C) -> SkipThen<S, C> {
        SkipThen {
            skipped: self.skipped,
            content,
        }
    }
}

/// Combinator produced by [`Skipper::then`]
pub struct SkipThen<S, C> {
    skipped: S,
    content: C,
}

impl<'code, S, C> Combinator<'code> for SkipThen<S, C>
where
    S: Combinator<'code>,
    C: Combinator<'code>,
{
    type Output = C::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        self.skipped.parse(cursor)?;
        self.content.parse(cursor)
    }
}

/// Start a combinator that discards leading input
pub fn skip<S>(skipped: S) -> Skipper<S> {
    Skipper::new(skipped)
}
