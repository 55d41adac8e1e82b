use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::error::{ParseFailure, ParseResult};
use std::fmt;
use tracing::debug;

/// Combinator that transforms the output of a combinator using a mapping function
pub struct To<C, F> {
    combinator: C,
    mapper: F,
}

impl<C, F> To<C, F> {
    pub fn new(combinator: C, mapper: F) -> Self {
        To { combinator, mapper }
    }
}

impl<'code, C, F, B> Combinator<'code> for To<C, F>
where
    C: Combinator<'code>,
    F: Fn(C::Output) -> B,
{
    type Output = B;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<B> {
        let value = self.combinator.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Combinator that transforms the output with a fallible function.
///
/// A rejected value counts as a parse failure, so an enclosing
/// [`crate::or()`] or [`Combinator::could`] backtracks over it like over any
/// other mismatch.
pub struct TryTo<C, F> {
    combinator: C,
    mapper: F,
}

impl<C, F> TryTo<C, F> {
    pub fn new(combinator: C, mapper: F) -> Self {
        TryTo { combinator, mapper }
    }
}

impl<'code, C, F, B, E> Combinator<'code> for TryTo<C, F>
where
    C: Combinator<'code>,
    F: Fn(C::Output) -> Result<B, E>,
    E: fmt::Display,
{
    type Output = B;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<B> {
        let value = self.combinator.parse(cursor)?;
        (self.mapper)(value).map_err(|err| {
            debug!(offset = cursor.offset(), %err, "value rejected by mapper");
            ParseFailure
        })
    }
}

/// Extension trait to add .to() and .try_to() method support for combinators
pub trait ToExt<'code>: Combinator<'code> + Sized {
    fn to<F, B>(self, mapper: F) -> To<Self, F>
    where
        F: Fn(Self::Output) -> B,
    {
        To::new(self, mapper)
    }

    fn try_to<F, B, E>(self, mapper: F) -> TryTo<Self, F>
    where
        F: Fn(Self::Output) -> Result<B, E>,
        E: fmt::Display,
    {
        TryTo::new(self, mapper)
    }
}

/// Implement ToExt for all combinators
impl<'code, C> ToExt<'code> for C where C: Combinator<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::lex;
    use crate::or::OrExt;
    use crate::pair::apply;
    use crate::skip::SkipExt;
    use crate::then::ThenExt;

    #[derive(Debug, PartialEq)]
    enum Token {
        Word(String),
        Number(i64),
    }

    #[test]
    fn test_to_integer() {
        let data = "42x";
        let mut cursor = Cursor::new(data);
        let parser = lex("[0-9]+").to(|digits: &str| digits.len());

        assert_eq!(parser.parse(&mut cursor), Ok(2));
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn test_try_to_parses_number() {
        let data = "42x";
        let mut cursor = Cursor::new(data);
        let parser = lex("[0-9]+").try_to(|digits: &str| digits.parse::<i64>());

        assert_eq!(parser.parse(&mut cursor), Ok(42));
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn test_try_to_rejection_is_failure() {
        let data = "99999999999999999999999";
        let mut cursor = Cursor::new(data);
        let parser = lex("[0-9]+").try_to(|digits: &str| digits.parse::<i64>());

        assert_eq!(parser.parse(&mut cursor), Err(ParseFailure));
    }

    #[test]
    fn test_try_to_rejection_backtracks_in_or() {
        let data = "99999999999999999999999";
        let mut cursor = Cursor::new(data);
        let number = lex("[0-9]+").try_to(|digits: &str| digits.parse::<i64>().map(Token::Number));
        let word = lex("[0-9a-z]+").to(|text: &str| Token::Word(text.to_string()));
        let parser = number.or(word);

        assert_eq!(
            parser.parse(&mut cursor),
            Ok(Token::Word("99999999999999999999999".to_string()))
        );
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_to_with_apply() {
        let data = "3+4";
        let mut cursor = Cursor::new(data);
        let digit = || lex("[0-9]").try_to(|d: &str| d.parse::<i64>());
        let parser = digit()
            .skip(lex("\\+"))
            .then(digit())
            .to(apply(|a: i64, b: i64| a + b));

        assert_eq!(parser.parse(&mut cursor), Ok(7));
    }

    #[test]
    fn test_to_preserves_failure() {
        let data = "xyz";
        let mut cursor = Cursor::new(data);
        let parser = lex("A").to(|s: &str| s.to_lowercase());

        assert!(parser.parse(&mut cursor).is_err());
    }
}
