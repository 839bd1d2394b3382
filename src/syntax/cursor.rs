//! Byte cursor over source text
//!
//! Scanners advance through the source byte by byte with one or two bytes
//! of lookahead. `0` is returned for any position past the end, which works
//! as an implicit terminator: no scanning predicate claims the NUL byte, so
//! every loop stops at end of input without separate bounds checks at each
//! call site.
//!
//! Token boundaries are always taken at UTF-8 character boundaries:
//! recognizers either consume ASCII bytes or step over whole characters
//! via [`Cursor::advance_char`], so slices handed out by [`Cursor::slice`]
//! are valid `&str` views of the source.

/// Read-only cursor over a source string
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Returns true once every byte of the source has been consumed
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset into the source
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte at the current position, or 0 at end of input
    #[inline]
    pub fn peek(&self) -> u8 {
        self.src.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Byte one position ahead, or 0 past end of input
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.src.as_bytes().get(self.pos + 1).copied().unwrap_or(0)
    }

    /// Byte `n` positions ahead, or 0 past end of input
    #[inline]
    pub fn peek_at(&self, n: usize) -> u8 {
        self.src.as_bytes().get(self.pos + n).copied().unwrap_or(0)
    }

    /// Does the remaining input start with `prefix`?
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.src[self.pos..].starts_with(prefix)
    }

    /// Advance by `n` bytes (clamped to end of input)
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Advance past one full UTF-8 character
    ///
    /// The fallback path for bytes no recognizer claims: consuming the whole
    /// character keeps token boundaries on character boundaries.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = match self.peek() {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        self.advance(width);
    }

    /// Advance while `pred` holds for the current byte
    ///
    /// `pred(0)` must be false (true for every classification predicate in
    /// this crate), so the loop terminates at end of input.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.peek()) && !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance to the next newline (not consuming it) or end of input
    pub fn eat_to_eol(&mut self) {
        self.eat_while(|b| b != b'\n');
    }

    /// Source substring from `start` to the current position
    #[inline]
    pub fn slice(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_past_end() {
        let mut cur = Cursor::new("a");
        assert_eq!(cur.peek(), b'a');
        assert_eq!(cur.peek2(), 0);
        cur.advance(1);
        assert!(cur.is_eof());
        assert_eq!(cur.peek(), 0);
    }

    #[test]
    fn test_eat_while_stops_at_eof() {
        let mut cur = Cursor::new("aaa");
        cur.eat_while(|b| b == b'a');
        assert!(cur.is_eof());
        assert_eq!(cur.slice(0), "aaa");
    }

    #[test]
    fn test_advance_char_multibyte() {
        let mut cur = Cursor::new("é!");
        cur.advance_char();
        assert_eq!(cur.peek(), b'!');
        assert_eq!(cur.slice(0), "é");
    }

    #[test]
    fn test_eat_to_eol() {
        let mut cur = Cursor::new("abc\ndef");
        cur.eat_to_eol();
        assert_eq!(cur.slice(0), "abc");
        assert_eq!(cur.peek(), b'\n');
    }

    #[test]
    fn test_starts_with() {
        let mut cur = Cursor::new("/* c */");
        assert!(cur.starts_with("/*"));
        cur.advance(2);
        assert!(!cur.starts_with("/*"));
    }
}
