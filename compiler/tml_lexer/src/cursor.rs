//! Character cursor over the source text.
//!
//! The cursor walks `char` boundaries of a `&str` and reports byte offsets,
//! so spans always land on valid UTF-8 boundaries.

/// Cursor over a borrowed source string.
///
/// The cursor is [`Copy`], so a scanner can snapshot its position cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Character under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one.
    ///
    /// On the last character this returns the current character again rather
    /// than `None`, so one-character inputs never look past the end.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        let current = chars.next();
        chars.next().or(current)
    }

    /// Move past the current character.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance while `pred` holds for the current character.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Source text from `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.pos).unwrap_or("")
    }

    #[inline]
    fn rest(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or("")
    }
}
