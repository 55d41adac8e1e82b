/// Sequence any number of combinators, left to right.
///
/// Expands to a left fold of [`crate::then::ThenExt::then`], so the result is
/// left-nested: `all!(a, b, c)` yields `Pair<Pair<A, B>, C>`. When the items
/// share a type and their number is not fixed, [`crate::some`] or
/// [`crate::several`] return a flat `Vec` instead.
///
/// ```
/// use lexicomb::{Combinator, Cursor, Pair, all, lex};
///
/// let mut cursor = Cursor::new("a1b");
/// let Pair { first: Pair { first: a, second: one }, second: b } =
///     all!(lex("a"), lex("1"), lex("b")).parse(&mut cursor).unwrap();
/// assert_eq!((a, one, b), ("a", "1", "b"));
/// ```
#[macro_export]
macro_rules! all {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let combinator = $first;
        $(
            let combinator = $crate::then::ThenExt::then(combinator, $rest);
        )*
        combinator
    }};
}
