use crate::combinator::Combinator;
use crate::cursor::Cursor;
use crate::error::RunError;

/// Parse the whole of `input` with a top-level combinator.
///
/// Fails with [`RunError::TrailingInput`] when the combinator matched but left
/// part of the input unconsumed.
pub fn run<'code, C>(combinator: &C, input: &'code str) -> Result<C::Output, RunError>
where
    C: Combinator<'code> + ?Sized,
{
    let (value, cursor) = parse_from_start(combinator, input)?;
    if !cursor.is_at_end() {
        return Err(RunError::TrailingInput {
            location: cursor.location(),
        });
    }
    Ok(value)
}

/// Parse a prefix of `input`, returning the result and the unconsumed rest
pub fn run_prefix<'code, C>(
    combinator: &C,
    input: &'code str,
) -> Result<(C::Output, &'code str), RunError>
where
    C: Combinator<'code> + ?Sized,
{
    let (value, cursor) = parse_from_start(combinator, input)?;
    Ok((value, cursor.remaining()))
}

fn parse_from_start<'code, C>(
    combinator: &C,
    input: &'code str,
) -> Result<(C::Output, Cursor<'code>), RunError>
where
    C: Combinator<'code> + ?Sized,
{
    let mut cursor = Cursor::new(input);

    match combinator.parse(&mut cursor) {
        Ok(value) => Ok((value, cursor)),
        // The cursor is wherever the failing chain left it, which for a
        // sequence is just past its last successful part
        Err(_) => Err(RunError::NoMatch {
            location: cursor.location(),
        }),
    }
}
