use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::pair::Pair;

/// Combinator that sequences two combinators and returns both results as a [`Pair`]
///
/// Chaining `.then()` produces left-nested pairs like
/// `Pair<Pair<A, B>, C>` rather than a flat sequence. Use [`crate::apply`] to
/// destructure them, or [`crate::some`] when the items share a type.
///
/// `Then` performs no restoration of its own. If the second combinator fails
/// the cursor stays wherever the first one left it; wrap the sequence in an
/// [`crate::or()`] or call [`Combinator::could`] to make it atomic.
///
/// Example:
/// ```
/// use lexicomb::{Combinator, Cursor, lex};
/// use lexicomb::then::ThenExt;
///
/// let mut cursor = Cursor::new("12.5");
/// let pair = lex("[0-9]+")
///     .then(lex("\\."))
///     .then(lex("[0-9]+"))
///     .parse(&mut cursor)
///     .unwrap();
/// assert_eq!(pair.first.first, "12");
/// assert_eq!(pair.second, "5");
/// ```
pub struct Then<C1, C2> {
    first: C1,
    second: C2,
}

impl<C1, C2> Then<C1, C2> {
    pub fn new(first: C1, second: C2) -> Self {
        Then { first, second }
    }
}

impl<'code, C1, C2> Combinator<'code> for Then<C1, C2>
where
    C1: Combinator<'code>,
    C2: Combinator<'code>,
{
    type Output = Pair<C1::Output, C2::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let first = self.first.parse(cursor)?;
        let second = self.second.parse(cursor)?;
        Ok(Pair::new(first, second))
    }
}

/// Convenience function to create a Then combinator
pub fn then<'code, C1, C2>(first: C1, second: C2) -> Then<C1, C2>
where
    C1: Combinator<'code>,
    C2: Combinator<'code>,
{
    Then::new(first, second)
}

/// Extension trait to add .then() method support for combinators
pub trait ThenExt<'code>: Combinator<'code> + Sized {
    fn then<C>(self, other: C) -> Then<Self, C>
    where
        C: Combinator<'code>,
    {
        Then::new(self, other)
    }
}

/// Implement ThenExt for all combinators
impl<'code, C> ThenExt<'code> for C where C: Combinator<'code> {}
