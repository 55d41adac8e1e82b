use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::lex::{Lex, lex};
use once_cell::sync::Lazy;

/// Spaces and tabs, never newlines
static HORIZONTAL_SPACE: Lazy<Lex> = Lazy::new(|| lex("[ \t]*"));

/// Combinator that matches content wrapped in the same delimiter on both sides
/// and returns just the content.
///
/// Behaves like `skip(quote).then(content).skip(quote)`, with the one `quote`
/// combinator run at both ends.
///
/// # Examples
/// - `"\"hi\""` with quote `"` → `"hi"`
/// - `"|x|"` with quote `|` → `"x"`
pub struct Quoted<C, Q> {
    content: C,
    quote: Q,
}

impl<C, Q> Quoted<C, Q> {
    pub fn new(content: C, quote: Q) -> Self {
        Quoted { content, quote }
    }
}

impl<'code, C, Q> Combinator<'code> for Quoted<C, Q>
where
    C: Combinator<'code>,
    Q: Combinator<'code>,
{
    type Output = C::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        self.quote.parse(cursor)?;
        let value = self.content.parse(cursor)?;
        self.quote.parse(cursor)?;
        Ok(value)
    }
}

/// Creates a combinator that matches `content` between two `quote`s
pub fn quoted<'code, C, Q>(content: C, quote: Q) -> Quoted<C, Q>
where
    C: Combinator<'code>,
    Q: Combinator<'code>,
{
    Quoted::new(content, quote)
}

/// Pads `content` with optional spaces and tabs on both sides
pub fn white<'code, C>(content: C) -> Quoted<C, Lex>
where
    C: Combinator<'code>,
{
    Quoted::new(content, (*HORIZONTAL_SPACE).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseFailure;
    use crate::repeat::some_sep;

    #[test]
    fn test_quoted_string() {
        let data = "\"hi\"";
        let mut cursor = Cursor::new(data);
        let parser = quoted(lex("[^\"]*"), lex("\""));

        assert_eq!(parser.parse(&mut cursor), Ok("hi"));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_quoted_empty_content() {
        let data = "''rest";
        let mut cursor = Cursor::new(data);
        let parser = quoted(lex("[^']*"), lex("'"));

        assert_eq!(parser.parse(&mut cursor), Ok(""));
        assert_eq!(cursor.remaining(), "rest");
    }

    #[test]
    fn test_quoted_missing_close() {
        let data = "\"hi";
        let mut cursor = Cursor::new(data);
        let parser = quoted(lex("[^\"]*"), lex("\""));

        assert_eq!(parser.parse(&mut cursor), Err(ParseFailure));
    }

    #[test]
    fn test_quoted_missing_open() {
        let data = "hi\"";
        let mut cursor = Cursor::new(data);
        let parser = quoted(lex("[^\"]*"), lex("\""));

        assert_eq!(parser.parse(&mut cursor), Err(ParseFailure));
    }

    #[test]
    fn test_white_consumes_both_sides() {
        let data = "  abc  ";
        let mut cursor = Cursor::new(data);
        let parser = white(lex("abc"));

        assert_eq!(parser.parse(&mut cursor), Ok("abc"));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_white_padding_is_optional() {
        let data = "abc";
        let mut cursor = Cursor::new(data);
        let parser = white(lex("abc"));

        assert_eq!(parser.parse(&mut cursor), Ok("abc"));
    }

    #[test]
    fn test_white_tabs_but_not_newlines() {
        let data = "\tabc\t\nnext";
        let mut cursor = Cursor::new(data);
        let parser = white(lex("abc"));

        assert_eq!(parser.parse(&mut cursor), Ok("abc"));
        assert_eq!(cursor.remaining(), "\nnext");
    }

    #[test]
    fn test_white_does_not_skip_leading_newline() {
        let data = "\nabc";
        let mut cursor = Cursor::new(data);
        let parser = white(lex("abc"));

        assert_eq!(parser.parse(&mut cursor), Err(ParseFailure));
    }

    #[test]
    fn test_white_separated_list() {
        let data = "1 , 2,3 ;";
        let mut cursor = Cursor::new(data);
        let parser = some_sep(white(lex("[0-9]+")), lex(","));

        assert_eq!(parser.parse(&mut cursor), Ok(vec!["1", "2", "3"]));
        assert_eq!(cursor.remaining(), ";");
    }
}
