//! # Lexicomb - Regex-Lexed Parser Combinators
//!
//! A small parser combinator core for writing recursive-descent parsers over
//! string input. Grammars are built from regex-anchored token matchers and a
//! handful of operators, then run against a [`Cursor`].
//!
//! - **Ordered choice**: [`or`](or::OrExt::or) and [`any()`] take the first
//!   alternative that matches, backtracking between attempts
//! - **Cheap failure**: a failed match is the zero-sized [`ParseFailure`], not
//!   an allocated error
//! - **Greedy repetition**: [`some`] and [`several`] collect as many items as
//!   match
//! - **No magic**: no memoization and no left-recursion support. A rule that
//!   calls itself before consuming input does not terminate
//!
//! ```
//! use lexicomb::prelude::*;
//! use lexicomb::{Cursor, lex, some_sep, white};
//!
//! let number = white(lex("[0-9]+")).try_to(|digits: &str| digits.parse::<u32>());
//! let list = some_sep(number, lex(","));
//!
//! let mut cursor = Cursor::new("1, 2 ,3");
//! assert_eq!(list.parse(&mut cursor), Ok(vec![1, 2, 3]));
//! ```

pub mod all;
pub mod any;
pub mod combinator;
pub mod cursor;
pub mod empty;
pub mod error;
pub mod lazy;
pub mod lex;
pub mod or;
pub mod pair;
pub mod quoted;
pub mod repeat;
pub mod run;
pub mod skip;
pub mod then;
pub mod to;

pub use any::{Any, any};
pub use combinator::{BoxedCombinator, Combinator, FromFn, from_fn};
pub use cursor::{Cursor, Location};
pub use empty::{Empty, empty};
pub use error::{CursorError, ParseFailure, ParseResult, PatternError, RunError};
pub use lazy::{Lazy, lazy};
pub use lex::{Lex, LexBuilder, lex, try_lex};
pub use or::or;
pub use pair::{Pair, apply};
pub use quoted::{Quoted, quoted, white};
pub use repeat::{Repeat, several, several_sep, some, some_sep};
pub use run::{run, run_prefix};
pub use skip::{Skipper, skip};
pub use then::then;

/// The combinator trait and every operator extension trait
pub mod prelude {
    pub use crate::combinator::{BoxedExt, Combinator};
    pub use crate::or::OrExt;
    pub use crate::skip::SkipExt;
    pub use crate::then::ThenExt;
    pub use crate::to::ToExt;
}
