use crate::cursor::Cursor;
use crate::error::ParseResult;
use std::marker::PhantomData;
use tracing::trace;

/// Core trait for parser combinators.
///
/// A combinator is an immutable description of a grammar rule. It can be run
/// any number of times against independent cursors.
pub trait Combinator<'code> {
    type Output;

    /// Attempt to parse at the cursor's current position.
    ///
    /// On success the cursor is left past the consumed input. On failure the
    /// cursor may have moved; use [`Combinator::could`] when the position must
    /// survive a failed attempt.
    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output>;

    /// Attempt to parse, restoring the cursor exactly if the attempt fails.
    ///
    /// This is the only place a failure turns into a recoverable outcome.
    fn could(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let here = *cursor;

        match self.parse(cursor) {
            Ok(value) => Some(value),
            Err(_) => {
                trace!(
                    from = cursor.offset(),
                    to = here.offset(),
                    "backtracking"
                );
                *cursor = here;
                None
            }
        }
    }
}

impl<'code, C> Combinator<'code> for &C
where
    C: Combinator<'code> + ?Sized,
{
    type Output = C::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, C> Combinator<'code> for Box<C>
where
    C: Combinator<'code> + ?Sized,
{
    type Output = C::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased combinator, used for recursive rules and for mixing rule types
/// in one [`crate::any()`]
pub type BoxedCombinator<'a, 'code, A> = Box<dyn Combinator<'code, Output = A> + Send + Sync + 'a>;

/// Extension trait to add .boxed() method support for combinators
pub trait BoxedExt<'code>: Combinator<'code> + Sized {
    fn boxed<'a>(self) -> BoxedCombinator<'a, 'code, Self::Output>
    where
        Self: Send + Sync + 'a,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all combinators
impl<'code, C> BoxedExt<'code> for C where C: Combinator<'code> {}

/// Combinator backed by a plain function or closure
pub struct FromFn<F, A> {
    f: F,
    _output: PhantomData<fn() -> A>,
}

impl<'code, F, A> Combinator<'code> for FromFn<F, A>
where
    F: Fn(&mut Cursor<'code>) -> ParseResult<A>,
{
    type Output = A;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<A> {
        (self.f)(cursor)
    }
}

/// Wrap a hand-written rule so it composes with the other combinators
pub fn from_fn<'code, F, A>(f: F) -> FromFn<F, A>
where
    F: Fn(&mut Cursor<'code>) -> ParseResult<A>,
{
    FromFn {
        f,
        _output: PhantomData,
    }
}
