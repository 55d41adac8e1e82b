use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::error::{ParseFailure, ParseResult};

/// Ordered choice over any number of alternatives of the same type.
///
/// Alternatives are tried left to right, each from the starting position, and
/// the first match wins. With no alternatives it always fails. To mix rules of
/// different types, box them ([`crate::BoxedCombinator`]) or use [`crate::any!`].
pub struct Any<C> {
    alternatives: Vec<C>,
}

impl<C> Any<C> {
    pub fn new(alternatives: Vec<C>) -> Self {
        Any { alternatives }
    }
}

impl<'code, C> Combinator<'code> for Any<C>
where
    C: Combinator<'code>,
{
    type Output = C::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let Some((last, rest)) = self.alternatives.split_last() else {
            return Err(ParseFailure);
        };

        for alternative in rest {
            if let Some(value) = alternative.could(cursor) {
                return Ok(value);
            }
        }
        // Same as folding `or`: the last alternative is not probed
        last.parse(cursor)
    }
}

/// Convenience function to create an Any combinator
pub fn any<'code, I, C>(alternatives: I) -> Any<C>
where
    I: IntoIterator<Item = C>,
    C: Combinator<'code>,
{
    Any::new(alternatives.into_iter().collect())
}

/// Ordered choice over alternatives of possibly different types sharing one
/// output type. Expands to a left fold of [`crate::or::OrExt::or`].
///
/// ```
/// use lexicomb::{Combinator, Cursor, any, lex};
/// use lexicomb::to::ToExt;
///
/// let mut cursor = Cursor::new("true");
/// let boolean = any!(
///     lex("true").to(|_| true),
///     lex("false").to(|_| false),
/// );
/// assert_eq!(boolean.parse(&mut cursor), Ok(true));
/// ```
#[macro_export]
macro_rules! any {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let combinator = $first;
        $(
            let combinator = $crate::or::OrExt::or(combinator, $rest);
        )*
        combinator
    }};
}
