//! Character cursor for traversing Prolog source text.
//!
//! The cursor owns the scan position for one tokenization pass. It tracks
//! byte offset plus line/column so errors can point at the exact place a
//! literal opened or an escape went wrong.

/// A cursor over source text, advanced one character at a time.
///
/// Handles UTF-8 correctly; positions are byte offsets into the source.
///
/// # Example
///
/// ```
/// use prolog_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("foo :- bar.");
/// assert_eq!(cursor.current_char(), 'f');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'o');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character starting `offset` BYTES ahead, or `'\0'` past
    /// the end.
    ///
    /// The offset is a byte count, not a character count; it is exact for
    /// the ASCII lookahead the token rules use. An offset landing inside a
    /// multi-byte character yields `'\0'`, the same as any position no rule
    /// can match.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }
        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Advances past the current character, updating line/column tracking.
    /// Does nothing at end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Advances by `count` characters, stopping at end of input.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor has consumed the whole source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the source slice from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use prolog_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("foo(X)");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "foo");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Captures the cursor state so a failed rule can restore it.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores a previously captured state.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A saved cursor state.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("foo :- bar.");
        assert_eq!(cursor.current_char(), 'f');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_and_peek() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(3), '\0');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance_n(2);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_peek_inside_multibyte_char() {
        // 'α' is two bytes; a byte offset into its middle matches nothing.
        let cursor = Cursor::new("αb");
        assert_eq!(cursor.peek_char(0), 'α');
        assert_eq!(cursor.peek_char(1), '\0');
        assert_eq!(cursor.peek_char(2), 'b');
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("a :- b,\n    c.\n");
        cursor.advance_n(7); // "a :- b,"
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 8);
        cursor.advance(); // '\n'
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("likes(mary, wine)");
        let start = cursor.position();
        cursor.advance_n(5);
        assert_eq!(cursor.slice_from(start), "likes");
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cursor = Cursor::new("% note");
        let snapshot = cursor.snapshot();
        cursor.advance_n(6);
        cursor.restore(snapshot);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current_char(), '%');
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }
}
