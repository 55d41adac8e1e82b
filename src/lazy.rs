use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::error::ParseResult;

/// A lazy combinator that defers the construction of the actual combinator
/// until parse time.
///
/// Recursive rules cannot contain themselves by value, so a rule that refers
/// to itself (directly or through other rules) goes through `lazy`. The rule
/// function usually returns a [`crate::BoxedCombinator`] to keep its type
/// finite.
///
/// ```
/// use lexicomb::{BoxedCombinator, Combinator, Cursor, lazy, lex, skip};
/// use lexicomb::prelude::*;
///
/// // nested := "(" nested ")" | "x"
/// fn nested<'code>() -> BoxedCombinator<'code, 'code, usize> {
///     skip(lex("\\("))
///         .then(lazy(nested))
///         .skip(lex("\\)"))
///         .to(|depth| depth + 1)
///         .or(lex("x").to(|_| 0))
///         .boxed()
/// }
///
/// let mut cursor = Cursor::new("((x))");
/// assert_eq!(nested().parse(&mut cursor), Ok(2));
/// ```
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy combinator with the given factory function
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<'code, F, C> Combinator<'code> for Lazy<F>
where
    F: Fn() -> C,
    C: Combinator<'code>,
{
    type Output = C::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let combinator = (self.factory)();
        combinator.parse(cursor)
    }
}

/// Create a lazy combinator from a factory function
pub fn lazy<'code, F, C>(factory: F) -> Lazy<F>
where
    F: Fn() -> C,
    C: Combinator<'code>,
{
    Lazy::new(factory)
}
