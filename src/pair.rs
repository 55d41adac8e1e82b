/// Ordered result of sequencing two combinators with [`crate::then::ThenExt::then`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    /// Result of the left-hand combinator
    pub first: A,
    /// Result of the right-hand combinator
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

/// Turn a two-argument function into one taking a [`Pair`], for use with
/// [`crate::to::ToExt::to`] after a `then`.
///
/// ```
/// use lexicomb::{Combinator, Cursor, apply, lex};
/// use lexicomb::prelude::*;
///
/// let mut cursor = Cursor::new("ab");
/// let parser = lex("a").then(lex("b")).to(apply(|a: &str, b: &str| format!("{b}{a}")));
/// assert_eq!(parser.parse(&mut cursor), Ok("ba".to_string()));
/// ```
pub fn apply<A, B, C, F>(f: F) -> impl Fn(Pair<A, B>) -> C
where
    F: Fn(A, B) -> C,
{
    move |pair| f(pair.first, pair.second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_fields() {
        let pair = Pair::new(1, "one");

        assert_eq!(pair.first, 1);
        assert_eq!(pair.second, "one");
    }

    #[test]
    fn test_pair_into_tuple() {
        let pair = Pair::new('a', 2.5);
        let (letter, number): (char, f64) = pair.into();

        assert_eq!(letter, 'a');
        assert_eq!(number, 2.5);
    }

    #[test]
    fn test_apply_destructures() {
        let add = apply(|a: i32, b: i32| a + b);

        assert_eq!(add(Pair::new(2, 3)), 5);
    }

    #[test]
    fn test_apply_order_matters() {
        let minus = apply(|a: i32, b: i32| a - b);

        assert_eq!(minus(Pair::new(10, 4)), 6);
        assert_eq!(minus(Pair::new(4, 10)), -6);
    }
}
