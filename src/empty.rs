use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::error::ParseResult;

/// Combinator that always succeeds without consuming input.
///
/// This is the separator used by [`crate::some`] and [`crate::several`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl<'code> Combinator<'code> for Empty {
    type Output = ();

    fn parse(&self, _cursor: &mut Cursor<'code>) -> ParseResult<()> {
        Ok(())
    }
}

pub fn empty() -> Empty {
    Empty
}
