use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::error::ParseResult;

/// Ordered choice: tries the first combinator and, if it fails, rewinds and
/// tries the second from the same position.
///
/// The first alternative always wins when it matches. Nothing is memoized, so
/// an alternative that is tried repeatedly rescans its input every time.
pub struct Or<C1, C2> {
    first: C1,
    second: C2,
}

impl<C1, C2> Or<C1, C2> {
    pub fn new(first: C1, second: C2) -> Self {
        Or { first, second }
    }
}

impl<'code, C1, C2, O> Combinator<'code> for Or<C1, C2>
where
    C1: Combinator<'code, Output = O>,
    C2: Combinator<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<O> {
        match self.first.could(cursor) {
            Some(value) => Ok(value),
            None => self.second.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for combinators
pub trait OrExt<'code>: Combinator<'code> + Sized {
    fn or<C>(self, other: C) -> Or<Self, C>
    where
        C: Combinator<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all combinators
impl<'code, C> OrExt<'code> for C where C: Combinator<'code> {}

/// Convenience function to create an Or combinator
pub fn or<'code, C1, C2, O>(first: C1, second: C2) -> Or<C1, C2>
where
    C1: Combinator<'code, Output = O>,
    C2: Combinator<'code, Output = O>,
{
    Or::new(first, second)
}
