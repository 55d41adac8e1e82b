use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::empty::{Empty, empty};
use crate::error::{ParseFailure, ParseResult};
use tracing::debug;

/// Combinator that collects repeated matches of an item, optionally separated.
///
/// Each item and each separator is probed with [`Combinator::could`], so a
/// failing probe never moves the cursor. A separator that matched is kept even
/// if no item follows it: `some_sep(lex("[0-9]+"), lex(","))` on `"1,2,"`
/// returns `["1", "2"]` and consumes the trailing comma.
///
/// An iteration that consumes nothing ends the loop after recording its item,
/// so zero-width items cannot spin forever.
pub struct Repeat<C, S> {
    item: C,
    separator: S,
    at_least_one: bool,
}

impl<C, S> Repeat<C, S> {
    pub fn new(item: C, separator: S, at_least_one: bool) -> Self {
        Repeat {
            item,
            separator,
            at_least_one,
        }
    }
}

impl<'code, C, S> Combinator<'code> for Repeat<C, S>
where
    C: Combinator<'code>,
    S: Combinator<'code>,
{
    type Output = Vec<C::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let mut items = Vec::new();

        loop {
            let start = cursor.offset();

            match self.item.could(cursor) {
                Some(value) => items.push(value),
                None => break,
            }
            if self.separator.could(cursor).is_none() {
                break;
            }
            if cursor.offset() == start {
                debug!(offset = start, "repetition made no progress, stopping");
                break;
            }
        }

        if self.at_least_one && items.is_empty() {
            return Err(ParseFailure);
        }
        Ok(items)
    }
}

/// Zero or more items. Never fails.
pub fn some<'code, C>(item: C) -> Repeat<C, Empty>
where
    C: Combinator<'code>,
{
    Repeat::new(item, empty(), false)
}

/// Zero or more items with `separator` between consecutive items. Never fails.
pub fn some_sep<'code, C, S>(item: C, separator: S) -> Repeat<C, S>
where
    C: Combinator<'code>,
    S: Combinator<'code>,
{
    Repeat::new(item, separator, false)
}

/// One or more items
pub fn several<'code, C>(item: C) -> Repeat<C, Empty>
where
    C: Combinator<'code>,
{
    Repeat::new(item, empty(), true)
}

/// One or more items with `separator` between consecutive items
pub fn several_sep<'code, C, S>(item: C, separator: S) -> Repeat<C, S>
where
    C: Combinator<'code>,
    S: Combinator<'code>,
{
    Repeat::new(item, separator, true)
}
