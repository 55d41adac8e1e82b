use crate::error::CursorError;
use std::fmt;

/// Mutable position over an immutable input string.
///
/// The unconsumed text is always a suffix of the source. It shrinks when a
/// combinator consumes input and is restored to an exact earlier value when a
/// combinator backtracks. Nothing else moves it.
///
/// A cursor belongs to exactly one in-flight parse. It is `Copy`, so saving a
/// position is a plain copy and backtracking writes the copy back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    /// Byte offset of the first unconsumed character
    offset: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code str) -> Self {
        Cursor { source, offset: 0 }
    }

    /// The unconsumed suffix of the input
    pub fn remaining(&self) -> &'code str {
        &self.source[self.offset..]
    }

    /// The input consumed so far
    pub fn consumed(&self) -> &'code str {
        &self.source[..self.offset]
    }

    /// The full input this cursor walks over
    pub fn source(&self) -> &'code str {
        self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset == self.source.len()
    }

    /// Consume the first `n` bytes of the remaining text and return them.
    ///
    /// # Panics
    ///
    /// Panics if `n` is larger than the remaining text or does not end on a
    /// char boundary. Combinators only ever advance by the length of a match,
    /// so this indicates a bug in the caller rather than a parse failure.
    pub fn advance(&mut self, n: usize) -> &'code str {
        match self.try_advance(n) {
            Ok(consumed) => consumed,
            Err(err) => panic!("cursor misuse: {err}"),
        }
    }

    /// Like [`Cursor::advance`], reporting misuse as an error
    pub fn try_advance(&mut self, n: usize) -> Result<&'code str, CursorError> {
        let remaining = self.remaining();
        if n > remaining.len() {
            return Err(CursorError::Overrun {
                requested: n,
                available: remaining.len(),
            });
        }
        if !remaining.is_char_boundary(n) {
            return Err(CursorError::NotCharBoundary { requested: n });
        }

        self.offset += n;
        Ok(&remaining[..n])
    }

    /// Re-assign a value previously returned by [`Cursor::remaining`].
    ///
    /// Any suffix of the source is accepted, so the cursor may move forwards as
    /// well as back, but it can never point at text that is not a suffix.
    pub fn restore(&mut self, saved: &str) -> Result<(), CursorError> {
        let offset = self
            .source
            .len()
            .checked_sub(saved.len())
            .ok_or(CursorError::NotASuffix)?;

        match self.source.get(offset..) {
            Some(tail) if tail == saved => {
                self.offset = offset;
                Ok(())
            }
            _ => Err(CursorError::NotASuffix),
        }
    }

    /// Line and in-line byte offset of the current position
    pub fn location(&self) -> Location {
        let consumed = self.consumed();
        let line = 1 + consumed.bytes().filter(|&b| b == b'\n').count();
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);

        Location {
            line,
            byte_offset: self.offset - line_start,
        }
    }
}

/// Human readable position in the input.
///
/// We report a byte offset within the line instead of a column. Columns depend
/// on the encoding and on how tabs render, byte offsets do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// 0-based byte offset from the start of the line
    pub byte_offset: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, byte offset {}", self.line, self.byte_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_sees_everything() {
        let data = "hello";
        let cursor = Cursor::new(data);

        assert_eq!(cursor.remaining(), "hello");
        assert_eq!(cursor.consumed(), "");
        assert_eq!(cursor.offset(), 0);
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_advance_returns_consumed_text() {
        let data = "abcdef";
        let mut cursor = Cursor::new(data);

        assert_eq!(cursor.advance(3), "abc");
        assert_eq!(cursor.remaining(), "def");
        assert_eq!(cursor.consumed(), "abc");
    }

    #[test]
    fn test_advance_to_end() {
        let data = "ab";
        let mut cursor = Cursor::new(data);

        cursor.advance(2);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_empty_input() {
        let data = "";
        let mut cursor = Cursor::new(data);

        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance(0), "");
    }

    #[test]
    fn test_try_advance_overrun() {
        let data = "ab";
        let mut cursor = Cursor::new(data);

        let result = cursor.try_advance(3);
        assert_eq!(
            result,
            Err(CursorError::Overrun {
                requested: 3,
                available: 2
            })
        );
        // A rejected advance leaves the cursor alone
        assert_eq!(cursor.remaining(), "ab");
    }

    #[test]
    fn test_try_advance_inside_char() {
        let data = "ñx";
        let mut cursor = Cursor::new(data);

        let result = cursor.try_advance(1);
        assert_eq!(result, Err(CursorError::NotCharBoundary { requested: 1 }));
        assert_eq!(cursor.try_advance(2), Ok("ñ"));
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    #[should_panic(expected = "cursor misuse")]
    fn test_advance_overrun_panics() {
        let data = "a";
        let mut cursor = Cursor::new(data);
        cursor.advance(2);
    }

    #[test]
    fn test_restore_saved_remaining() {
        let data = "abcdef";
        let mut cursor = Cursor::new(data);

        let here = cursor.remaining();
        cursor.advance(4);
        assert_eq!(cursor.remaining(), "ef");

        cursor.restore(here).unwrap();
        assert_eq!(cursor.remaining(), "abcdef");
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_restore_rejects_non_suffix() {
        let data = "abcdef";
        let mut cursor = Cursor::new(data);
        cursor.advance(2);

        assert_eq!(cursor.restore("xyz"), Err(CursorError::NotASuffix));
        assert_eq!(cursor.restore("abcdefg"), Err(CursorError::NotASuffix));
        assert_eq!(cursor.remaining(), "cdef");
    }

    #[test]
    fn test_copy_independence() {
        let data = "abcd";
        let mut cursor = Cursor::new(data);

        let saved = cursor;
        cursor.advance(2);

        assert_eq!(saved.remaining(), "abcd");
        assert_eq!(cursor.remaining(), "cd");

        cursor = saved;
        assert_eq!(cursor.remaining(), "abcd");
    }

    #[test]
    fn test_location_first_line() {
        let data = "hello world";
        let mut cursor = Cursor::new(data);
        cursor.advance(6);

        let location = cursor.location();
        assert_eq!(location.line, 1);
        assert_eq!(location.byte_offset, 6);
    }

    #[test]
    fn test_location_after_newlines() {
        let data = "line1\nline2\nline3";
        let mut cursor = Cursor::new(data);
        cursor.advance(14);

        let location = cursor.location();
        assert_eq!(location.line, 3);
        assert_eq!(location.byte_offset, 2);
        assert_eq!(location.to_string(), "line 3, byte offset 2");
    }

    #[test]
    fn test_location_right_after_newline() {
        let data = "hello\n";
        let mut cursor = Cursor::new(data);
        cursor.advance(6);

        let location = cursor.location();
        assert_eq!(location.line, 2);
        assert_eq!(location.byte_offset, 0);
    }
}
