//! Comment rules.
//!
//! Unlike most tokenizers, comments are emitted as tokens here: the
//! downstream formatter needs them in the stream.

use crate::classify;
use crate::error::LexError;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Line comment rule: `%` through end of line, newline excluded from
    /// the content and consumed.
    ///
    /// Returns `None` with the cursor restored when the comment reaches end
    /// of input without a newline; the rule then falls through.
    pub(crate) fn lex_line_comment(&mut self) -> Option<Token> {
        let snapshot = self.cursor.snapshot();
        self.cursor.advance(); // '%'

        let start = self.cursor.position();
        while !self.cursor.is_at_end() && !classify::is_end_of_line(self.cursor.current_char()) {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.cursor.restore(snapshot);
            return None;
        }

        let text = self.cursor.slice_from(start).to_string();
        self.cursor.advance(); // the terminating end-of-line character
        Some(Token::LineComment(text))
    }

    /// Block comment rule: `/* ... */`, non-greedy body. Nesting is not
    /// recognized; the first `*/` closes the comment.
    pub(crate) fn lex_block_comment(&mut self) -> Result<Token, LexError> {
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'

        let start = self.cursor.position();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.err_unterminated("block comment"));
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                let text = self.cursor.slice_from(start).to_string();
                self.cursor.advance();
                self.cursor.advance();
                return Ok(Token::BlockComment(text));
            }
            self.cursor.advance();
        }
    }
}
