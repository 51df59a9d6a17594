//! Character sources for the grouper.

use std::str::Chars;

use ropey::Rope;

/// A pull-based source of characters that can be rewound to its start.
///
/// `next()` is the "has more / current / advance" step; `rewind()` is what
/// [`Grouper::reset`](crate::Grouper::reset) calls to re-tokenize.
pub trait CharCursor: Iterator<Item = char> {
    /// Move back to the first character.
    fn rewind(&mut self);
}

/// Cursor over a borrowed string slice.
#[derive(Debug, Clone)]
pub struct StrCursor<'a> {
    text: &'a str,
    chars: Chars<'a>,
}

impl<'a> StrCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.chars(),
        }
    }
}

impl Iterator for StrCursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.chars.next()
    }
}

impl CharCursor for StrCursor<'_> {
    fn rewind(&mut self) {
        self.chars = self.text.chars();
    }
}

/// Cursor over a [`Rope`], for large or incrementally loaded text.
pub struct RopeCursor<'a> {
    rope: &'a Rope,
    chars: ropey::iter::Chars<'a>,
}

impl<'a> RopeCursor<'a> {
    pub fn new(rope: &'a Rope) -> Self {
        Self {
            rope,
            chars: rope.chars(),
        }
    }
}

impl Iterator for RopeCursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.chars.next()
    }
}

impl CharCursor for RopeCursor<'_> {
    fn rewind(&mut self) {
        self.chars = self.rope.chars();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_cursor_rewinds() {
        let mut cursor = StrCursor::new("ab");
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.next(), None);
        cursor.rewind();
        assert_eq!(cursor.collect::<String>(), "ab");
    }

    #[test]
    fn rope_cursor_rewinds() {
        let rope = Rope::from_str("x\ny");
        let mut cursor = RopeCursor::new(&rope);
        assert_eq!(cursor.next(), Some('x'));
        cursor.rewind();
        assert_eq!(cursor.collect::<String>(), "x\ny");
    }
}
